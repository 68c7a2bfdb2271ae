use serde::{Deserialize, Serialize};

use crate::models::shape::Shape;

/// A single table cell. Its shape carries the cell's own geometry and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub shape: Shape,
}

/// One row of a table, cells ordered left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells of the row. A row without cells is valid and simply empty.
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// A table container, rows ordered top to bottom.
///
/// Cells hold plain shapes only; a table never nests another table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Iterates over every cell with its 1-based row and column numbers.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &TableCell)> {
        self.rows.iter().enumerate().flat_map(|(row_index, row)| {
            row.cells
                .iter()
                .enumerate()
                .map(move |(column_index, cell)| (row_index + 1, column_index + 1, cell))
        })
    }

    /// The cell at a 1-based row and column.
    pub(crate) fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        let row = self.rows.get_mut(row.checked_sub(1)?)?;
        row.cells.get_mut(column.checked_sub(1)?)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut TableCell> {
        self.rows.iter_mut().flat_map(|row| row.cells.iter_mut())
    }
}
