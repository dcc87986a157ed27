//! Terminal game session: turns text commands into moves and engine
//! notifications into text.

use crate::config::XoConfig;
use derive_getters::Getters;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use xo_game::{
    GameEvent, GameModel, Mode, MoveNotice, MoveStatus, Player, Position, PositionParseError,
};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Move(Position),
    /// Start a new game on the same session.
    Reset,
    /// Print the board.
    Board,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl FromStr for Command {
    type Err = PositionParseError;

    /// Keywords first; anything else must name a position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" | "new" => Ok(Command::Reset),
            "board" => Ok(Command::Board),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => s.parse().map(Command::Move),
        }
    }
}

/// Results across every game played in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Summary {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Summary {
    fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X won {}, O won {}, {} drawn",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

const HELP: &str = "Enter a cell as A1..C3 (column, row) or 1..9. \
Other commands: board, reset, help, quit.";

/// One player-facing game, rendered as text.
///
/// Engine notifications arrive through a channel and are turned into
/// lines after each command.
pub struct Session {
    game: GameModel,
    events: mpsc::UnboundedReceiver<GameEvent>,
    to_move: Player,
    show_board: bool,
    summary: Summary,
}

impl Session {
    /// Creates a session from configuration.
    #[instrument(skip(config), fields(mode = %config.mode(), seed = ?config.seed()))]
    pub fn new(config: &XoConfig) -> Self {
        let mut game = match config.seed() {
            Some(seed) => GameModel::seeded(*config.mode(), *seed),
            None => GameModel::new(*config.mode()),
        };
        let (tx, events) = mpsc::unbounded_channel();
        game.forward_events(tx);
        info!("Session created");

        Self {
            to_move: game.current_player(),
            game,
            events,
            show_board: *config.show_board(),
            summary: Summary::default(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameModel {
        &self.game
    }

    /// Results so far.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Opening lines.
    pub fn greeting(&self) -> Vec<String> {
        let opponent = match self.game.mode() {
            Mode::Single => "You are X; the computer plays O.",
            Mode::Multi => "Two players: X and O take turns.",
        };
        let mut lines = vec![opponent.to_string(), HELP.to_string()];
        lines.push(self.game.board().render());
        lines.push(format!("{} to move.", self.to_move));
        lines
    }

    /// Applies one command and returns the text to show.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Move(pos) => self.play(pos),
            Command::Reset => {
                self.game.reset();
                self.to_move = self.game.current_player();
                let mut lines = vec![format!("New game. {} to move.", self.to_move)];
                lines.push(self.game.board().render());
                lines
            }
            Command::Board => vec![self.game.board().render()],
            Command::Help => vec![HELP.to_string()],
            Command::Quit => Vec::new(),
        }
    }

    fn play(&mut self, pos: Position) -> Vec<String> {
        let status = self.game.apply_move(pos);
        let mut lines = self.drain_events();

        match status {
            MoveStatus::Rejected if self.game.is_terminal() => {
                debug!(position = %pos, "Move after game over");
                lines.push("The game is over. Type `reset` to play again.".to_string());
            }
            MoveStatus::Rejected => {}
            MoveStatus::Accepted | MoveStatus::Terminal => {
                if self.show_board {
                    lines.push(self.game.board().render());
                }
            }
        }
        lines
    }

    fn drain_events(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            lines.push(self.describe(event));
        }
        lines
    }

    fn describe(&mut self, event: GameEvent) -> String {
        match event {
            GameEvent::Move(MoveNotice::Placed(pos)) => format!("{} plays {}.", self.to_move, pos),
            GameEvent::Move(MoveNotice::Invalid) => "That cell is taken, try another.".to_string(),
            GameEvent::TurnChanged(player) => {
                self.to_move = player;
                format!("{} to move.", player)
            }
            GameEvent::GameComplete(winner) => {
                self.summary.record(winner);
                match winner {
                    Some(player) => format!("{} wins!", player),
                    None => "It's a draw.".to_string(),
                }
            }
        }
    }
}

async fn write_lines<O>(output: &mut O, lines: &[String]) -> std::io::Result<()>
where
    O: AsyncWrite + Unpin,
{
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            output.write_all(b"\n").await?;
        }
    }
    output.flush().await
}

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run<I, O>(mut session: Session, input: I, mut output: O) -> anyhow::Result<Summary>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    write_lines(&mut output, &session.greeting()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let replies = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => session.handle(command),
            Err(err) => {
                warn!(%err, "Unrecognised input");
                vec![format!("Unrecognised input {:?}. {}", line, HELP)]
            }
        };
        write_lines(&mut output, &replies).await?;
    }

    let summary = *session.summary();
    info!(%summary, "Session finished");
    write_lines(&mut output, &[format!("Bye. {}", summary)]).await?;
    Ok(summary)
}

/// Plays one single-player game with random X moves and returns the transcript.
#[instrument(skip(config))]
pub fn demo(config: &XoConfig) -> Vec<String> {
    let config = XoConfig::new(Mode::Single, *config.seed(), *config.show_board());
    let mut human = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut session = Session::new(&config);
    let mut transcript = session.greeting();

    while !session.game().is_terminal() {
        let vacant = session.game().board().vacant();
        let Some(&pos) = vacant.choose(&mut human) else {
            break;
        };
        transcript.push(format!("> {}", pos));
        transcript.extend(session.handle(Command::Move(pos)));
    }

    transcript.push(session.summary().to_string());
    transcript
}
