//! Level layouts
//!
//! A layout is a row-major grid of small integers, nine columns wide:
//! `0` = empty, `1` = standard (destructible) brick, `2` = concrete brick.
//! A [`LayoutBook`] is the ordered rotation of named layouts a session
//! cycles through.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::GRID_COLUMNS;
use crate::error::{Error, Result};
use crate::sim::state::BrickKind;

/// One row of a layout
pub type LayoutRow = [u8; GRID_COLUMNS];

/// A named, validated brick grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub rows: Vec<LayoutRow>,
}

impl LevelLayout {
    /// Validate a grid: at least one row, nine columns per row, cells 0..=2
    pub fn new(name: impl Into<String>, rows: Vec<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: String| Error::InvalidLayout {
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("layout name is empty".into()));
        }
        if rows.is_empty() {
            return Err(invalid("layout has no rows".into()));
        }

        let mut grid = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let cells: LayoutRow = row.as_slice().try_into().map_err(|_| {
                invalid(format!(
                    "row {y} has {} columns, expected {GRID_COLUMNS}",
                    row.len()
                ))
            })?;
            if let Some((x, v)) = cells.iter().enumerate().find(|(_, v)| **v > 2) {
                return Err(invalid(format!("cell ({x}, {y}) has unknown brick value {v}")));
            }
            grid.push(cells);
        }

        Ok(Self { name, rows: grid })
    }

    fn from_static(name: &str, rows: &[LayoutRow]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.to_vec(),
        }
    }

    /// Occupied cells as `(column, row, kind)`, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, BrickKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, v)| BrickKind::from_cell(*v).map(|kind| (x, y, kind)))
        })
    }

    /// Number of standard bricks, i.e. the score needed to clear the level
    pub fn destructible_count(&self) -> usize {
        self.cells().filter(|(_, _, k)| k.is_destructible()).count()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

const GRID: [LayoutRow; 3] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 0, 1, 0, 1, 0, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1],
];

const CHECKER: [LayoutRow; 6] = [
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [0, 1, 0, 1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [0, 1, 0, 1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [0, 1, 0, 1, 0, 1, 0, 1, 0],
];

const PYRAMID: [LayoutRow; 5] = [
    [0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1],
];

const FORTRESS: [LayoutRow; 6] = [
    [2, 1, 1, 1, 1, 1, 1, 1, 2],
    [2, 1, 0, 0, 0, 0, 0, 1, 2],
    [2, 1, 0, 1, 1, 1, 0, 1, 2],
    [2, 1, 0, 1, 1, 1, 0, 1, 2],
    [2, 1, 0, 0, 0, 0, 0, 1, 2],
    [2, 2, 2, 0, 0, 0, 2, 2, 2],
];

const COLUMNS: [LayoutRow; 7] = [
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 2, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 2, 0, 1, 0, 2, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1],
];

/// Ordered rotation of layouts. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelLayout>", into = "Vec<LevelLayout>")]
pub struct LayoutBook {
    layouts: Vec<LevelLayout>,
}

impl Default for LayoutBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<LevelLayout>> for LayoutBook {
    type Error = Error;

    fn try_from(layouts: Vec<LevelLayout>) -> Result<Self> {
        Self::new(layouts)
    }
}

impl From<LayoutBook> for Vec<LevelLayout> {
    fn from(book: LayoutBook) -> Self {
        book.layouts
    }
}

impl LayoutBook {
    /// The five layouts shipped with the game
    pub fn builtin() -> Self {
        Self {
            layouts: vec![
                LevelLayout::from_static("grid", &GRID),
                LevelLayout::from_static("checker", &CHECKER),
                LevelLayout::from_static("pyramid", &PYRAMID),
                LevelLayout::from_static("fortress", &FORTRESS),
                LevelLayout::from_static("columns", &COLUMNS),
            ],
        }
    }

    /// Build a book from already validated layouts. Names must be unique.
    pub fn new(layouts: Vec<LevelLayout>) -> Result<Self> {
        if layouts.is_empty() {
            return Err(Error::InvalidLayout {
                name: String::new(),
                reason: "layout book is empty".into(),
            });
        }
        for (i, layout) in layouts.iter().enumerate() {
            if layouts[..i].iter().any(|l| l.name == layout.name) {
                return Err(Error::InvalidLayout {
                    name: layout.name.clone(),
                    reason: "duplicate layout name".into(),
                });
            }
        }
        Ok(Self { layouts })
    }

    /// Parse a JSON object mapping level name to grid. File order is the
    /// rotation order.
    ///
    /// ```json
    /// { "gridLayout": [[1,1,1,1,1,1,1,1,1], [0,1,0,1,0,1,0,1,0]] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let layouts = map
            .into_iter()
            .map(|(name, grid)| {
                let rows: Vec<Vec<u8>> = serde_json::from_value(grid)?;
                LevelLayout::new(name, rows)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(layouts)
    }

    /// Read a layout book from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let book = Self::from_json(&std::fs::read_to_string(path)?)?;
        log::info!("Loaded {} layouts from {}", book.len(), path.display());
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Layout at `index`, wrapping around the rotation
    pub fn get(&self, index: usize) -> &LevelLayout {
        &self.layouts[index % self.layouts.len()]
    }

    pub fn find(&self, name: &str) -> Option<&LevelLayout> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.iter().map(|l| l.name.as_str())
    }

    /// Index of the level after `index` in the rotation
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.layouts.len()
    }
}
