//! In-memory contribution source for testing

use std::collections::VecDeque;

use crate::traits::*;
use crate::types::*;

/// In-memory source implementation for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: VecDeque<ContributionRow>,
}

impl MemorySource {
    /// Create an empty memory source
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a row at the end of the input
    pub fn push(&mut self, row: ContributionRow) {
        self.rows.push_back(row);
    }

    /// Rows not yet consumed
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl FromIterator<ContributionRow> for MemorySource {
    fn from_iter<I: IntoIterator<Item = ContributionRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl ContributionSource for MemorySource {
    fn next_row(&mut self) -> AirdropResult<Option<ContributionRow>> {
        Ok(self.rows.pop_front())
    }

    fn describe(&self) -> String {
        format!("memory source ({} rows)", self.rows.len())
    }
}
