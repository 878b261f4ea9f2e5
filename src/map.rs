use std::path::Path;

use crate::math::*;

/// Count of wall textures, valid solid cell codes are 1..=WALL_TEXTURE_COUNT
pub const WALL_TEXTURE_COUNT: u8 = 4;

/// Map representation structure.
/// Cell (0, 0) is the top left one, row index is y.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<u8>,
} // struct Map

/// Map loading error representation structure
#[derive(Debug)]
pub enum MapLoadingError {
    Io(std::io::Error),
    Empty,
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidCell {
        row: usize,
        column: usize,
        token: String,
    },
} // enum MapLoadingError

impl std::fmt::Display for MapLoadingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "map io error: {err}"),
            Self::Empty => f.write_str("map contains no rows"),
            Self::NonRectangular { row, expected, found } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidCell { row, column, token } => write!(f, "invalid cell '{token}' at row {row}, column {column}"),
        }
    }
}

impl std::error::Error for MapLoadingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapLoadingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl Map {
    /// Map from grid rows creation function
    pub fn from_rows(rows: &[&[u8]]) -> Result<Map, MapLoadingError> {
        let width = rows.first().map(|row| row.len()).ok_or(MapLoadingError::Empty)?;
        if width == 0 {
            return Err(MapLoadingError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapLoadingError::NonRectangular { row: row_index, expected: width, found: row.len() });
            }
            for (column, &code) in row.iter().enumerate() {
                if code > WALL_TEXTURE_COUNT {
                    return Err(MapLoadingError::InvalidCell { row: row_index, column, token: code.to_string() });
                }
                cells.push(code);
            }
        }

        Ok(Map { width, height: rows.len(), cells })
    } // fn from_rows

    /// Map from text loading function.
    /// Each non-empty line is a row. Rows either hold one digit per cell ("10001")
    /// or whitespace/comma separated codes ("1 0 0 0 1"). Lines starting with '#' are skipped.
    /// * `source` - file text
    /// * Returns valid Map or MapLoadingError
    pub fn load_from_txt(source: &str) -> Result<Map, MapLoadingError> {
        let rows = source
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .enumerate()
            .map(|(row, line)| {
                let tokens: Vec<&str> = if line.contains(|c: char| c.is_whitespace() || c == ',') {
                    line.split(|c: char| c.is_whitespace() || c == ',')
                        .filter(|token| !token.is_empty())
                        .collect()
                } else {
                    line.char_indices().map(|(index, ch)| &line[index..index + ch.len_utf8()]).collect()
                };

                tokens
                    .iter()
                    .enumerate()
                    .map(|(column, token)| {
                        token.parse::<u8>().ok()
                            .filter(|code| *code <= WALL_TEXTURE_COUNT)
                            .ok_or_else(|| MapLoadingError::InvalidCell { row, column, token: token.to_string() })
                    })
                    .collect::<Result<Vec<u8>, MapLoadingError>>()
            })
            .collect::<Result<Vec<Vec<u8>>, MapLoadingError>>()?;

        let rows: Vec<&[u8]> = rows.iter().map(|row| row.as_slice()).collect();
        Self::from_rows(&rows)
    } // fn load_from_txt

    /// Map from file loading function
    pub fn load(path: &Path) -> Result<Map, MapLoadingError> {
        let source = std::fs::read_to_string(path)?;
        let map = Self::load_from_txt(&source)?;

        log::info!("loaded map {} ({}x{})", path.display(), map.width, map.height);
        Ok(map)
    } // fn load

    pub fn get_extent(&self) -> Ext2su {
        Ext2 { width: self.width, height: self.height }
    }

    /// Cell code getting function
    /// * Returns None if location is outside of map
    pub fn get(&self, x: isize, y: isize) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }

        Some(self.cells[y as usize * self.width + x as usize])
    } // fn get

    /// Solid cell checking function. Everything outside of map is solid.
    pub fn is_solid(&self, x: isize, y: isize) -> bool {
        self.get(x, y).map_or(true, |code| code != 0)
    } // fn is_solid

    /// Solidity of cell containing the point checking function
    pub fn is_solid_at(&self, location: Vec2f) -> bool {
        self.is_solid(location.x.floor() as isize, location.y.floor() as isize)
    } // fn is_solid_at

    /// First passable cell center finding function
    pub fn find_empty_cell(&self) -> Option<Vec2f> {
        self.cells
            .iter()
            .position(|&code| code == 0)
            .map(|index| Vec2f {
                x: (index % self.width) as f32 + 0.5,
                y: (index / self.width) as f32 + 0.5,
            })
    } // fn find_empty_cell

    /// Iterator through rows getting function
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    } // fn rows
} // impl Map


// file map.rs
