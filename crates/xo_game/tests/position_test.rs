//! Tests for board positions.

use xo_game::{Board, Mode, Position};

#[test]
fn test_parse_labels() {
    assert_eq!("A1".parse::<Position>().ok(), Some(Position::A1));
    assert_eq!("b2".parse::<Position>().ok(), Some(Position::B2));
    assert_eq!(" C3 ".parse::<Position>().ok(), Some(Position::C3));
}

#[test]
fn test_parse_cell_numbers() {
    assert_eq!("1".parse::<Position>().ok(), Some(Position::A1));
    assert_eq!("5".parse::<Position>().ok(), Some(Position::B2));
    assert_eq!("9".parse::<Position>().ok(), Some(Position::C3));
}

#[test]
fn test_parse_rejects_garbage() {
    for input in ["", "0", "10", "D1", "A4", "A12", "centre"] {
        let err = input.parse::<Position>().unwrap_err();
        assert_eq!(err.input, input);
        assert!(err.to_string().contains("Invalid position"));
    }
}

#[test]
fn test_display_matches_label() {
    for pos in Position::ALL {
        assert_eq!(pos.to_string(), pos.label());
        assert_eq!(pos.label().parse::<Position>().ok(), Some(pos));
    }
}

#[test]
fn test_index_follows_rows() {
    assert_eq!(Position::A1.index(), 0);
    assert_eq!(Position::C1.index(), 2);
    assert_eq!(Position::A2.index(), 3);
    assert_eq!(Position::C3.index(), 8);
}

#[test]
fn test_vacant_on_empty_board() {
    assert_eq!(Board::new().vacant(), Position::ALL.to_vec());
}

#[test]
fn test_mode_parse() {
    assert_eq!("single".parse::<Mode>().ok(), Some(Mode::Single));
    assert_eq!("MULTI".parse::<Mode>().ok(), Some(Mode::Multi));
    assert!("solo".parse::<Mode>().is_err());
    assert_eq!(Mode::Multi.to_string(), "multi");
}
