//! Presale airdrop report example

use presale_airdrop::utils::MemorySource;
use presale_airdrop::{AirdropConfig, AirdropPipeline, Aggregator, ContributionRow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Presale Airdrop - Report Example\n");

    let contributors = [
        ("0x5AEDA56215b167893e80B4fE645BA6d5Bab767DE", "12500", "1250"),
        ("0x6330A553Fc93768F612722BB8c2eC78aC90B3bbc", "3000,75", "0"),
        ("not-an-address", "1000000", "0"),
        ("0x5aeda56215b167893e80b4fe645ba6d5bab767de", "500", "50,5"),
    ];

    let rows: Vec<ContributionRow> = contributors
        .iter()
        .map(|(address, bought, bonus)| ContributionRow::new(*address, *bought, *bonus))
        .collect();

    // Inspect the aggregation on its own first
    let mut source: MemorySource = rows.iter().cloned().collect();
    let outcome = Aggregator::aggregate(&mut source)?;
    println!(
        "Read {} rows: {} addresses, {} duplicates, {} skipped\n",
        outcome.rows_read,
        outcome.ledger.len(),
        outcome.warnings.len(),
        outcome.skipped_rows
    );
    for allocation in &outcome.ledger {
        println!("  {} -> {} tokens", allocation.address, allocation.amount.to_tokens());
    }
    println!();

    // Then print the full report in batches of two
    let config = AirdropConfig::default().with_chunk_size(2);
    let pipeline = AirdropPipeline::new(config)?;
    let mut source: MemorySource = rows.into_iter().collect();
    let report = pipeline.run(&mut source, &mut std::io::stdout())?;

    if report.exceeds_cap() {
        println!("\nAllocations exceed the cap!");
    }

    Ok(())
}
