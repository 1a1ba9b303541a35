//! Traits for input abstraction

use crate::types::*;

/// Source of presale contribution rows
///
/// Lets the aggregator run over a CSV export, an in-memory fixture or any
/// other tabular input by implementing a single pull method. Rows are
/// yielded in file order; that order decides the batch order downstream.
pub trait ContributionSource {
    /// Read the next data row, or `None` once the input is exhausted
    fn next_row(&mut self) -> AirdropResult<Option<ContributionRow>>;

    /// Short description of where the rows come from, used in log output
    fn describe(&self) -> String {
        "contribution source".to_string()
    }
}

impl<S: ContributionSource + ?Sized> ContributionSource for &mut S {
    fn next_row(&mut self) -> AirdropResult<Option<ContributionRow>> {
        (**self).next_row()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
