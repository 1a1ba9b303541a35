//! Folding contribution rows into the allocation ledger

use log::{debug, info, warn};

use crate::amount::FixedPointAmount;
use crate::ledger::AllocationLedger;
use crate::traits::*;
use crate::types::*;
use crate::utils::validate_address;

/// Result of one pass over a contribution source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationOutcome {
    /// Deduplicated allocations
    pub ledger: AllocationLedger,
    /// One entry per repeated address occurrence, in input order
    pub warnings: Vec<DuplicateWarning>,
    /// Data rows read from the source
    pub rows_read: usize,
    /// Rows dropped because the address was malformed
    pub skipped_rows: usize,
}

/// Builds an [`AllocationLedger`] from contribution rows
///
/// Rows with a malformed address are skipped and counted. A repeated address
/// is summed into its existing entry and reported as a [`DuplicateWarning`].
/// An amount that cannot be parsed aborts the pass.
#[derive(Debug, Default)]
pub struct Aggregator {
    outcome: AggregationOutcome,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single row; `row` is its 1-based position among the data rows.
    ///
    /// Returns the warning raised when the row repeats an address.
    pub fn add_row(
        &mut self,
        row: usize,
        contribution: &ContributionRow,
    ) -> AirdropResult<Option<&DuplicateWarning>> {
        self.outcome.rows_read += 1;

        let Some(address) = validate_address(&contribution.address) else {
            debug!("Skipping row {}: malformed address {:?}", row, contribution.address);
            self.outcome.skipped_rows += 1;
            return Ok(None);
        };

        let amount = parse_in_row(&contribution.tokens_bought, row)?
            + parse_in_row(&contribution.bonus_tokens, row)?;

        if !self.outcome.ledger.credit(address.clone(), amount) {
            return Ok(None);
        }

        warn!("Duplicate address {} in row {}", address, row);
        self.outcome.warnings.push(DuplicateWarning { row, address });
        Ok(self.outcome.warnings.last())
    }

    /// Drain a source, numbering rows from 1
    pub fn consume<S: ContributionSource>(&mut self, source: &mut S) -> AirdropResult<()> {
        self.consume_with(source, |_| Ok(()))
    }

    /// Drain a source, handing each duplicate warning to `on_duplicate` as soon as it is found
    pub fn consume_with<S, F>(&mut self, source: &mut S, mut on_duplicate: F) -> AirdropResult<()>
    where
        S: ContributionSource,
        F: FnMut(&DuplicateWarning) -> AirdropResult<()>,
    {
        info!("Reading contributions from {}", source.describe());
        let mut row = self.outcome.rows_read;
        while let Some(contribution) = source.next_row()? {
            row += 1;
            if let Some(warning) = self.add_row(row, &contribution)? {
                on_duplicate(warning)?;
            }
        }
        Ok(())
    }

    /// Finish aggregation
    pub fn finish(self) -> AggregationOutcome {
        let outcome = self.outcome;
        info!(
            "Aggregated {} rows into {} addresses ({} duplicates, {} skipped)",
            outcome.rows_read,
            outcome.ledger.len(),
            outcome.warnings.len(),
            outcome.skipped_rows
        );
        outcome
    }

    /// Aggregate an entire source in one call
    pub fn aggregate<S: ContributionSource>(source: &mut S) -> AirdropResult<AggregationOutcome> {
        let mut aggregator = Self::new();
        aggregator.consume(source)?;
        Ok(aggregator.finish())
    }
}

fn parse_in_row(value: &str, row: usize) -> AirdropResult<FixedPointAmount> {
    FixedPointAmount::parse(value).map_err(|err| match err {
        AirdropError::InvalidAmount { value, .. } => AirdropError::InvalidAmount {
            value,
            row: Some(row),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemorySource;

    fn addr(c: &str) -> String {
        format!("0x{}", c.repeat(40))
    }

    #[test]
    fn test_mixed_case_duplicates_are_summed() {
        let mut source: MemorySource = vec![
            ContributionRow::new(addr("A"), "1,5", "0,5"),
            ContributionRow::new(addr("a"), "2", "0"),
        ]
        .into_iter()
        .collect();

        let outcome = Aggregator::aggregate(&mut source).unwrap();

        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(
            outcome.ledger.get(&addr("a")),
            Some(&FixedPointAmount::from_whole_tokens(4))
        );
        assert_eq!(
            outcome.warnings,
            vec![DuplicateWarning {
                row: 2,
                address: addr("a"),
            }]
        );
    }

    #[test]
    fn test_one_warning_per_extra_occurrence() {
        let mut source: MemorySource = (0..4)
            .map(|_| ContributionRow::new(addr("b"), "1", "0"))
            .collect();

        let outcome = Aggregator::aggregate(&mut source).unwrap();

        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(outcome.warnings.len(), 3);
        let rows: Vec<usize> = outcome.warnings.iter().map(|w| w.row).collect();
        assert_eq!(rows, vec![2, 3, 4]);
        assert_eq!(outcome.ledger.total(), FixedPointAmount::from_whole_tokens(4));
    }

    #[test]
    fn test_invalid_addresses_are_skipped_but_counted_in_row_numbers() {
        let mut source: MemorySource = vec![
            ContributionRow::new("not an address", "1000", "0"),
            ContributionRow::new(addr("c"), "1", "0"),
            ContributionRow::new(format!("0x{}", "z".repeat(40)), "1000", "0"),
            ContributionRow::new(addr("c"), "1", "0"),
        ]
        .into_iter()
        .collect();

        let outcome = Aggregator::aggregate(&mut source).unwrap();

        assert_eq!(outcome.rows_read, 4);
        assert_eq!(outcome.skipped_rows, 2);
        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(outcome.ledger.total(), FixedPointAmount::from_whole_tokens(2));
        assert_eq!(outcome.warnings[0].row, 4);
    }

    #[test]
    fn test_invalid_address_with_bad_amount_is_still_skipped() {
        let mut source: MemorySource = vec![ContributionRow::new("0x12", "garbage", "x")]
            .into_iter()
            .collect();

        let outcome = Aggregator::aggregate(&mut source).unwrap();
        assert!(outcome.ledger.is_empty());
        assert_eq!(outcome.skipped_rows, 1);
    }

    #[test]
    fn test_bad_amount_is_fatal_and_names_row() {
        let mut source: MemorySource = vec![
            ContributionRow::new(addr("d"), "1", "0"),
            ContributionRow::new(addr("e"), "1.5", "0"),
        ]
        .into_iter()
        .collect();

        let err = Aggregator::aggregate(&mut source).unwrap_err();
        match err {
            AirdropError::InvalidAmount { value, row } => {
                assert_eq!(value, "1.5");
                assert_eq!(row, Some(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_warnings_are_handed_out_before_a_later_failure() {
        let mut source: MemorySource = vec![
            ContributionRow::new(addr("a"), "1", "0"),
            ContributionRow::new(addr("a"), "2", "0"),
            ContributionRow::new(addr("a"), "x", "0"),
        ]
        .into_iter()
        .collect();

        let mut seen = Vec::new();
        let mut aggregator = Aggregator::new();
        let err = aggregator
            .consume_with(&mut source, |warning| {
                seen.push(warning.clone());
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, AirdropError::InvalidAmount { row: Some(3), .. }));
        assert_eq!(
            seen,
            vec![DuplicateWarning {
                row: 2,
                address: addr("a"),
            }]
        );
    }

    #[test]
    fn test_add_row_reports_repeat() {
        let mut aggregator = Aggregator::new();
        let row = ContributionRow::new(addr("9"), "1", "0");

        assert_eq!(aggregator.add_row(1, &row).unwrap(), None);
        let warning = aggregator.add_row(2, &row).unwrap().cloned();
        assert_eq!(
            warning,
            Some(DuplicateWarning {
                row: 2,
                address: addr("9"),
            })
        );
    }

    #[test]
    fn test_incremental_consume_continues_row_numbers() {
        let mut aggregator = Aggregator::new();
        let mut first: MemorySource = vec![ContributionRow::new(addr("f"), "1", "0")]
            .into_iter()
            .collect();
        let mut second: MemorySource = vec![ContributionRow::new(addr("f"), "1", "0")]
            .into_iter()
            .collect();

        aggregator.consume(&mut first).unwrap();
        aggregator.consume(&mut second).unwrap();
        let outcome = aggregator.finish();

        assert_eq!(outcome.warnings[0].row, 2);
    }
}
