//! End-to-end airdrop report pipeline

use std::io::Write;

use crate::batch::BatchFormatter;
use crate::config::AirdropConfig;
use crate::ledger::{AggregationOutcome, Aggregator};
use crate::reconciliation::{ReconciliationEngine, ReconciliationReport};
use crate::traits::*;
use crate::types::*;
use crate::utils::CsvSource;

/// Aggregates a contribution source and writes the airdrop report
///
/// The report is: one line per duplicate warning, written as soon as the repeat
/// is read, one section per batch, then the reconciliation block.
pub struct AirdropPipeline {
    config: AirdropConfig,
    formatter: BatchFormatter,
    engine: ReconciliationEngine,
}

impl AirdropPipeline {
    /// Validate the configuration and set up the stages
    pub fn new(config: AirdropConfig) -> AirdropResult<Self> {
        config.validate()?;
        let formatter = BatchFormatter::from_config(&config)?;
        let engine = ReconciliationEngine::new(config.cap_amount()?);
        Ok(Self {
            config,
            formatter,
            engine,
        })
    }

    pub fn config(&self) -> &AirdropConfig {
        &self.config
    }

    /// Run over an arbitrary source
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> AirdropResult<ReconciliationReport>
    where
        S: ContributionSource,
        W: Write,
    {
        let mut aggregator = Aggregator::new();
        aggregator.consume_with(source, |warning| {
            writeln!(out, "{warning}")?;
            Ok(())
        })?;
        let outcome = aggregator.finish();
        self.write_batches(&outcome, out)
    }

    /// Run over the CSV file named in the configuration
    pub fn run_file<W: Write>(&self, out: &mut W) -> AirdropResult<ReconciliationReport> {
        let mut source = CsvSource::open(&self.config.input_path)?;
        self.run(&mut source, out)
    }

    /// Write warnings, batches and the reconciliation block for an aggregated ledger
    pub fn write_report<W: Write>(
        &self,
        outcome: &AggregationOutcome,
        out: &mut W,
    ) -> AirdropResult<ReconciliationReport> {
        for warning in &outcome.warnings {
            writeln!(out, "{warning}")?;
        }
        self.write_batches(outcome, out)
    }

    /// Write the batch sections and the reconciliation block
    pub fn write_batches<W: Write>(
        &self,
        outcome: &AggregationOutcome,
        out: &mut W,
    ) -> AirdropResult<ReconciliationReport> {
        for batch in self.formatter.batches(&outcome.ledger) {
            out.write_all(self.formatter.render(&batch).as_bytes())?;
        }

        let report = self.engine.reconcile(&outcome.ledger);
        write!(out, "{report}")?;
        out.flush()?;

        Ok(report)
    }
}
