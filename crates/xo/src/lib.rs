//! Terminal front end for the `xo_game` engine.
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: text commands in, rendered notifications out

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod session;

pub use config::{ConfigError, XoConfig};
pub use session::{Command, Session, Summary, demo, run};
