use clap::Args;
use haven_core::{Config, ReportSubmission};

use super::{api_client, runtime};

#[derive(Args)]
pub struct ReportArgs {
    /// Where it happened
    #[arg(long)]
    pub place: String,
    /// What happened
    #[arg(long)]
    pub description: String,
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report =
        ReportSubmission::new(args.place, args.description).with_coordinates(args.lat, args.lng);
    report.validate()?;

    let client = api_client(&Config::load()?)?;
    println!("Submitting...");
    runtime()?.block_on(client.submit_report(&report))?;
    println!("Report submitted, thank you.");
    Ok(())
}
