//! TOS Watchlist CLI
//!
//! Exports today's SPY 0DTE call and put watchlists with default settings.

use tos_watchlist::prelude::*;

fn main() {
    println!("TOS 0DTE Watchlist Exporter");
    println!("===========================\n");

    let config = ExportConfig::default();

    println!("Symbol: {}", config.symbol);
    println!("Strikes above/below ATM: {}", config.n_strikes);
    println!("Output directory: {}\n", config.output_dir.display());

    let client = YahooClient::new();

    match export_watchlists(&client, &FileSink, &config) {
        Ok(summary) => {
            println!("ATM strike set to: {}", summary.atm_reference);
            println!(
                "Exported {} calls -> {}",
                summary.n_calls,
                summary.calls_file.display()
            );
            println!(
                "Exported {} puts -> {}",
                summary.n_puts,
                summary.puts_file.display()
            );
        }
        Err(e) => {
            eprintln!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
