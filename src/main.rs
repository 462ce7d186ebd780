use chrono::{DateTime, Utc};
use clap::Parser;
use lockerfee::application::engine::FeeEngine;
use lockerfee::domain::customer::Customer;
use lockerfee::domain::location::Location;
use lockerfee::domain::ports::{PackageRepository, PackageRepositoryBox};
use lockerfee::infrastructure::in_memory::InMemoryPackageRepository;
use lockerfee::interfaces::csv::customer_reader::CustomerReader;
use lockerfee::interfaces::csv::package_reader::PackageReader;
use lockerfee::interfaces::csv::quote_writer::{Quote, QuoteWriter};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input packages CSV file
    input: PathBuf,

    /// Location configuration JSON (pricing schema + grace period)
    #[arg(long)]
    location: PathBuf,

    /// Optional customers CSV for membership waivers (matched by phone)
    #[arg(long)]
    customers: Option<PathBuf>,

    /// Evaluation instant (RFC 3339). Defaults to the current time.
    #[arg(long)]
    at: Option<DateTime<Utc>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    lockerfee::logging::init();
    let cli = Cli::parse();

    let location: Location =
        serde_json::from_reader(File::open(&cli.location).into_diagnostic()?).into_diagnostic()?;

    let customers: Vec<Customer> = match &cli.customers {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let mut customers = Vec::new();
            for result in CustomerReader::new(file).customers() {
                match result {
                    Ok(customer) => customers.push(customer),
                    Err(e) => eprintln!("Error reading customer: {}", e),
                }
            }
            customers
        }
        None => Vec::new(),
    };

    // Load every package into the repository first so QUANTITY ranking sees
    // the complete same-day sibling set.
    let repository = InMemoryPackageRepository::new();
    let file = File::open(&cli.input).into_diagnostic()?;
    let mut packages = Vec::new();
    for result in PackageReader::new(file).packages() {
        match result {
            Ok(package) => {
                repository.store(package.clone()).await.into_diagnostic()?;
                packages.push(package);
            }
            Err(e) => {
                eprintln!("Error reading package: {}", e);
            }
        }
    }

    let engine = FeeEngine::new(Box::new(repository) as PackageRepositoryBox);
    let now = cli.at.unwrap_or_else(Utc::now);

    let mut quotes = Vec::with_capacity(packages.len());
    for package in &packages {
        let customer = customers
            .iter()
            .find(|c| c.phone_number == package.recipient_phone);
        let fee = engine
            .quote_at(package, &location, customer, now)
            .await
            .into_diagnostic()?;
        quotes.push(Quote {
            package_id: package.id.clone(),
            tracking_number: package.tracking_number.clone(),
            unit_number: package.unit_number.clone(),
            fee,
        });
    }

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());
    writer.write_quotes(quotes).into_diagnostic()?;

    Ok(())
}
