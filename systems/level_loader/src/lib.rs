#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that parses textual level descriptions into boards.
//!
//! A level file starts with a header of five integers
//! (`width height start_x start_y start_angle`) followed by `height` rows of
//! `width` signed integers. Each integer encodes a single cell: the magnitude
//! is the elevation and a negative sign marks the cell as active. Any
//! deviation from that layout is fatal; the loader never returns a partially
//! populated board.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use lightbot_core::{Board, Cell, FormatError, LevelError, StartPose};

/// Parses level descriptions into [`Board`] values.
#[derive(Debug, Default)]
pub struct LevelLoader;

impl LevelLoader {
    /// Reads a complete level from the provided text stream.
    pub fn load<R>(&self, source: R) -> Result<Board, LevelError>
    where
        R: BufRead,
    {
        let mut lines = source.lines();
        let header = lines.next().ok_or(FormatError::MissingHeader)??;
        let header = Header::parse(&header)?;

        let mut body = lines.collect::<Result<Vec<_>, _>>()?;
        while body.last().is_some_and(|line| line.trim().is_empty()) {
            let _ = body.pop();
        }

        let rows = body
            .iter()
            .enumerate()
            .map(|(row, line)| parse_row(line, row, header.width))
            .collect::<Result<Vec<_>, _>>()?;
        if rows.len() != header.height as usize {
            return Err(FormatError::RowCount {
                expected: header.height,
                found: rows.len(),
            }
            .into());
        }

        let start = header.start_pose()?;
        let board = Board::from_rows(header.width, header.height, start, rows)?;
        log::debug!(
            "loaded {}x{} board, start at ({}, {}) facing {:?}",
            board.width(),
            board.height(),
            start.column(),
            start.row(),
            start.heading()
        );
        Ok(board)
    }

    /// Parses a level held in memory.
    pub fn load_str(&self, text: &str) -> Result<Board, LevelError> {
        self.load(text.as_bytes())
    }

    /// Opens and parses the level file at `path`.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Board, LevelError> {
        let path = path.as_ref();
        log::debug!("reading level from {}", path.display());
        let file = File::open(path)?;
        self.load(BufReader::new(file))
    }
}

#[derive(Debug)]
struct Header {
    width: u32,
    height: u32,
    start_x: i64,
    start_y: i64,
    start_angle: i32,
}

impl Header {
    fn parse(line: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[width, height, start_x, start_y, start_angle] = tokens.as_slice() else {
            return Err(FormatError::HeaderTokenCount {
                found: tokens.len(),
            });
        };

        let width = parse_integer::<i64>(width, 1)?;
        let height = parse_integer::<i64>(height, 1)?;
        let invalid_dimension = || FormatError::InvalidDimension { width, height };
        let columns = u32::try_from(width).map_err(|_| invalid_dimension())?;
        let rows = u32::try_from(height).map_err(|_| invalid_dimension())?;

        Ok(Self {
            width: columns,
            height: rows,
            start_x: parse_integer(start_x, 1)?,
            start_y: parse_integer(start_y, 1)?,
            start_angle: parse_integer(start_angle, 1)?,
        })
    }

    fn start_pose(&self) -> Result<StartPose, FormatError> {
        let out_of_bounds = || FormatError::StartOutOfBounds {
            column: self.start_x,
            row: self.start_y,
            width: self.width,
            height: self.height,
        };
        let column = u32::try_from(self.start_x).map_err(|_| out_of_bounds())?;
        let row = u32::try_from(self.start_y).map_err(|_| out_of_bounds())?;
        if column >= self.width || row >= self.height {
            return Err(out_of_bounds());
        }
        StartPose::new(column, row, self.start_angle)
    }
}

fn parse_row(line: &str, row: usize, width: u32) -> Result<Vec<Cell>, FormatError> {
    // Header occupies line 1.
    let line_number = row + 2;
    let cells = line
        .split_whitespace()
        .map(|token| parse_integer::<i32>(token, line_number).map(Cell::from_encoded))
        .collect::<Result<Vec<_>, _>>()?;
    if cells.len() != width as usize {
        return Err(FormatError::RowTokenCount {
            row,
            line: line_number,
            expected: width,
            found: cells.len(),
        });
    }
    Ok(cells)
}

fn parse_integer<T>(token: &str, line: usize) -> Result<T, FormatError>
where
    T: std::str::FromStr,
{
    token.parse().map_err(|_| FormatError::InvalidInteger {
        line,
        token: token.to_owned(),
    })
}
