use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::error;
use tracing_subscriber::EnvFilter;
use xraytm_lib::constants::{
    DATA_FIELD_HEADER_BITS, MAX_PAYLOAD_BITS, PACKET_HEADER_BITS, SECONDS_PER_DAY,
};
use xraytm_lib::{Product, RateEstimate, daily_rate};

/// Downlink budget report for the instrument telemetry products.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

/// Quicklook products with the example parameters and cadences from the
/// TM/TC ICD budget tables.
fn budget_entries() -> Vec<(Product, f64)> {
    vec![
        (Product::LightCurve { energies: 5 }, 4.0),
        (Product::Background { energies: 5 }, 8.0),
        (Product::Spectra, 32.0),
        (Product::Variance, 4.0),
        (Product::FlareFlagLocation, 8.0),
        (Product::FlareListTmMgmt, 288.0),
        (Product::CalibrationSpectra { energies: 64 }, 56.25),
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(args.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut rows: Vec<(Product, f64, RateEstimate)> = Vec::new();
    for (product, integration_s) in budget_entries() {
        match daily_rate(&product, integration_s) {
            Ok(estimate) => rows.push((product, integration_s, estimate)),
            // One broken product must not silence the rest of the report
            Err(e) => error!("{product}: {e}"),
        }
    }

    if args.json {
        print_json(&rows)?;
    } else {
        print_table(&rows);
    }

    Ok(())
}

fn print_table(rows: &[(Product, f64, RateEstimate)]) {
    println!(
        "Packet envelope: {} bit header + {} bit data-field header, {} bit payload",
        PACKET_HEADER_BITS, DATA_FIELD_HEADER_BITS, MAX_PAYLOAD_BITS
    );
    println!("{}", "=".repeat(102));
    println!(
        "{:<20} {:>4} {:>8} {:>7} {:>7} {:>7} {:>8} {:>6} {:>9} {:>9}",
        "Product", "SSID", "Cadence", "Fixed", "Space", "Record", "Rec/pkt", "Free", "Pkts/day", "Avg bps"
    );
    println!(
        "{:<20} {:>4} {:>8} {:>7} {:>7} {:>7} {:>8} {:>6} {:>9} {:>9}",
        "", "", "(s)", "(bits)", "(bits)", "(bits)", "", "(bits)", "", ""
    );
    println!("{}", "=".repeat(102));

    for (product, integration_s, estimate) in rows {
        println!(
            "{:<20} {:>4} {:>8} {:>7} {:>7} {:>7} {:>8} {:>6} {:>9.3} {:>9.2}",
            product.to_string(),
            u8::from(product.ssid()),
            integration_s,
            estimate.fixed_bits,
            estimate.record_space_bits,
            estimate.record_bits,
            estimate.records_per_packet,
            estimate.leftover_bits,
            estimate.packets_per_day,
            estimate.bits_per_second(),
        );
    }

    println!("{}", "=".repeat(102));
    let total_bits_per_day: f64 = rows.iter().map(|(_, _, e)| e.bits_per_day).sum();
    let total_bps = total_bits_per_day / SECONDS_PER_DAY as f64;
    println!(
        "Total: {:.0} bits/day, average downlink rate {:.1} bits/s ({:.3} kbit/s)",
        total_bits_per_day,
        total_bps,
        total_bps / 1000.0
    );
}

fn print_json(rows: &[(Product, f64, RateEstimate)]) -> Result<()> {
    let products: Vec<_> = rows
        .iter()
        .map(|(product, integration_s, estimate)| {
            serde_json::json!({
                "product": product.to_string(),
                "ssid": u8::from(product.ssid()),
                "integration_s": integration_s,
                "estimate": estimate,
                "bits_per_second": estimate.bits_per_second(),
            })
        })
        .collect();

    let total_bits_per_day: f64 = rows.iter().map(|(_, _, e)| e.bits_per_day).sum();
    let report = serde_json::json!({
        "products": products,
        "total_bits_per_day": total_bits_per_day,
        "total_bits_per_second": total_bits_per_day / SECONDS_PER_DAY as f64,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
