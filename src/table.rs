use thiserror::Error;

use crate::pager::{Pager, TABLE_MAX_ROWS};
use crate::row::Row;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("Error: Table full.")]
    TableFull,
}

/// Append-only row store. Rows occupy slots `0..num_rows` in insertion
/// order; the count never exceeds `TABLE_MAX_ROWS` and never shrinks.
pub struct Table {
    num_rows: usize,
    pager: Pager,
}

impl Table {
    pub fn new() -> Self {
        Self {
            num_rows: 0,
            pager: Pager::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn insert(&mut self, row: &Row) -> Result<(), ExecuteError> {
        if self.num_rows >= TABLE_MAX_ROWS {
            return Err(ExecuteError::TableFull);
        }
        row.serialize_into(self.pager.row_slot_mut(self.num_rows));
        self.num_rows += 1;
        Ok(())
    }

    /// Iterates all rows in insertion order. Restartable: every call
    /// begins again at slot 0.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            next: 0,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Rows<'a> {
    table: &'a Table,
    next: usize,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.table.num_rows {
            return None;
        }
        let slot = self.table.pager.row_slot(self.next)?;
        self.next += 1;
        Some(Row::deserialize(slot))
    }
}
