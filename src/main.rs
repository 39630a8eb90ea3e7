use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Import from our modularized library
use eth_address_extractor_rs::prelude::*;

#[derive(Parser)]
#[command(name = "eth_address_extractor_rs")]
#[command(about = "Ethereum address extractor and deduplicator written in Rust", long_about = None)]
struct Cli {
    /// Input text file with one candidate address per line
    #[arg(default_value = "addr.txt")]
    input: PathBuf,

    /// Output filename for the deduplicated address list
    #[arg(short, long, default_value = "unique_addresses.txt")]
    output: PathBuf,

    /// Amount appended to every output line
    #[arg(short, long, default_value = DEFAULT_AMOUNT)]
    amount: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        println!(
            "Error: {} not found in the current directory.",
            cli.input.display()
        );
        return Ok(());
    }

    println!("Processing {}...", cli.input.display());

    let addresses = extract_addresses(&cli.input);

    if addresses.is_empty() {
        println!("No valid Ethereum addresses found in the file.");
        return Ok(());
    }

    println!("Found {} unique Ethereum addresses.", addresses.len());

    if save_addresses(&cli.output, &addresses, &cli.amount) {
        println!(
            "Successfully saved {} addresses with amount {} to {}",
            addresses.len(),
            cli.amount,
            cli.output.display()
        );
    }

    println!("\nFirst 5 addresses with amounts:");
    for address in addresses.iter().take(5) {
        println!("- {} {}", address, cli.amount);
    }

    if addresses.len() > 5 {
        println!("... and {} more", addresses.len() - 5);
    }

    Ok(())
}
