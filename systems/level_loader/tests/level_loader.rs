use std::io::Write;

use lightbot_core::{Cell, FormatError, Heading, LevelError};
use lightbot_system_level_loader::LevelLoader;

fn format_error(text: &str) -> FormatError {
    match LevelLoader.load_str(text) {
        Err(LevelError::Format(error)) => error,
        other => panic!("expected a format error, got {other:?}"),
    }
}

#[test]
fn loads_cells_in_reading_order() {
    let board = LevelLoader
        .load_str("3 2 0 0 0\n0 -1 2\n1 0 -3\n")
        .expect("level parses");

    assert_eq!(board.width(), 3);
    assert_eq!(board.height(), 2);
    assert_eq!(board.cell_count(), 6);
    assert_eq!(
        board.rows(),
        &[
            vec![Cell::new(0, false), Cell::new(1, true), Cell::new(2, false)],
            vec![Cell::new(1, false), Cell::new(0, false), Cell::new(3, true)],
        ]
    );
    assert!(board.cells().all(|(_, _, cell)| !cell.lit()));
}

#[test]
fn every_cell_matches_its_encoded_value() {
    let values = [[-4, 0, 7, -1], [2, -2, 0, 5], [0, 0, -9, 3]];
    let body: Vec<String> = values
        .iter()
        .map(|row| {
            row.iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect();
    let text = format!("4 3 3 2 1\n{}\n", body.join("\n"));

    let board = LevelLoader.load_str(&text).expect("level parses");

    for (row, encoded_row) in values.iter().enumerate() {
        for (column, &value) in encoded_row.iter().enumerate() {
            let cell = board
                .cell(column as u32, row as u32)
                .expect("cell inside board");
            assert_eq!(cell.elevation(), value.unsigned_abs());
            assert_eq!(cell.active(), value < 0);
        }
    }
}

#[test]
fn header_populates_start_pose() {
    let board = LevelLoader
        .load_str("2 2 1 0 180\n0 0\n0 0\n")
        .expect("level parses");
    let start = board.start();

    assert_eq!(start.column(), 1);
    assert_eq!(start.row(), 0);
    assert_eq!(start.heading(), Heading::South);
    assert_eq!(start.raw_angle(), 180);
}

#[test]
fn trailing_blank_lines_are_ignored() {
    let board = LevelLoader
        .load_str("2 1 0 0 0\n-1 1\n\n   \n")
        .expect("level parses");

    assert_eq!(board.height(), 1);
}

#[test]
fn header_with_wrong_token_count_is_rejected() {
    assert_eq!(
        format_error("2 2 0 0\n0 0\n0 0\n"),
        FormatError::HeaderTokenCount { found: 4 }
    );
    assert_eq!(
        format_error("2 2 0 0 0 0\n0 0\n0 0\n"),
        FormatError::HeaderTokenCount { found: 6 }
    );
}

#[test]
fn empty_source_is_rejected() {
    assert_eq!(format_error(""), FormatError::MissingHeader);
}

#[test]
fn row_with_wrong_token_count_is_rejected() {
    assert_eq!(
        format_error("3 2 0 0 0\n0 0 0\n0 0\n"),
        FormatError::RowTokenCount {
            row: 1,
            line: 3,
            expected: 3,
            found: 2,
        }
    );
    assert!(matches!(
        format_error("2 1 0 0 0\n0 0 0\n"),
        FormatError::RowTokenCount { found: 3, .. }
    ));
}

#[test]
fn row_count_must_match_height() {
    assert_eq!(
        format_error("2 3 0 0 0\n0 0\n0 0\n"),
        FormatError::RowCount {
            expected: 3,
            found: 2,
        }
    );
    assert_eq!(
        format_error("2 1 0 0 0\n0 0\n0 0\n"),
        FormatError::RowCount {
            expected: 1,
            found: 2,
        }
    );
}

#[test]
fn start_outside_board_is_rejected() {
    assert_eq!(
        format_error("2 2 2 0 0\n0 0\n0 0\n"),
        FormatError::StartOutOfBounds {
            column: 2,
            row: 0,
            width: 2,
            height: 2,
        }
    );
    assert!(matches!(
        format_error("2 2 0 5 0\n0 0\n0 0\n"),
        FormatError::StartOutOfBounds { row: 5, .. }
    ));
}

#[test]
fn unknown_heading_is_rejected() {
    assert_eq!(
        format_error("2 2 0 0 45\n0 0\n0 0\n"),
        FormatError::InvalidHeading { value: 45 }
    );
}

#[test]
fn non_integer_cell_is_rejected() {
    assert_eq!(
        format_error("2 1 0 0 0\n0 x\n"),
        FormatError::InvalidInteger {
            line: 2,
            token: "x".to_owned(),
        }
    );
}

#[test]
fn load_path_reads_level_files() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "2 2 0 0 0\n0 0\n0 0\n").expect("write level");

    let board = LevelLoader.load_path(file.path()).expect("level parses");

    assert_eq!(board.width(), 2);
    assert_eq!(board.height(), 2);
    assert!(board
        .cells()
        .all(|(_, _, cell)| cell.elevation() == 0 && !cell.active()));
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = LevelLoader
        .load_path(dir.path().join("missing.txt"))
        .expect_err("file does not exist");

    assert!(matches!(error, LevelError::Io(_)));
}
