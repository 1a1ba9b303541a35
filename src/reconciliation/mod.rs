//! Reconciliation of the aggregated allocations against the token cap

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::FixedPointAmount;
use crate::batch::RULE_WIDTH;
use crate::ledger::AllocationLedger;

/// Width of the right-aligned amount column
pub const AMOUNT_COLUMN_WIDTH: usize = 28;

/// Cap, total and remainder for one ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Number of distinct addresses in the ledger
    pub distinct_addresses: usize,
    pub cap: FixedPointAmount,
    /// Sum of all allocations
    pub total: FixedPointAmount,
    /// `cap - total`; negative when the allocations exceed the cap
    pub remainder: FixedPointAmount,
}

impl ReconciliationReport {
    pub fn exceeds_cap(&self) -> bool {
        self.remainder.is_negative()
    }
}

impl fmt::Display for ReconciliationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = AMOUNT_COLUMN_WIDTH;
        writeln!(f, "{}", "_".repeat(RULE_WIDTH))?;
        writeln!(f, "Number of distinct addresses: {}", self.distinct_addresses)?;
        writeln!(f)?;
        writeln!(f, "    Cap   {:>w$}", self.cap)?;
        writeln!(f, "  - Total {:>w$}", self.total)?;
        writeln!(f, "  {}", "-".repeat(36))?;
        writeln!(f, "  = Rem.  {:>w$}", self.remainder)
    }
}

/// Compares ledger totals with a fixed cap
#[derive(Debug, Clone)]
pub struct ReconciliationEngine {
    cap: FixedPointAmount,
}

impl ReconciliationEngine {
    pub fn new(cap: FixedPointAmount) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> &FixedPointAmount {
        &self.cap
    }

    /// Total the ledger and compute the remainder against the cap
    pub fn reconcile(&self, ledger: &AllocationLedger) -> ReconciliationReport {
        let total = ledger.total();
        let remainder = &self.cap - &total;

        let report = ReconciliationReport {
            distinct_addresses: ledger.len(),
            cap: self.cap.clone(),
            total,
            remainder,
        };

        if report.exceeds_cap() {
            warn!(
                "Allocations exceed the cap by {} tokens",
                (&report.total - &report.cap).to_tokens()
            );
        } else {
            info!(
                "{} tokens allocated, {} tokens left under the cap",
                report.total.to_tokens(),
                report.remainder.to_tokens()
            );
        }

        report
    }
}
