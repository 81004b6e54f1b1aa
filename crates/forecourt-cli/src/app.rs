//! CLI application logic
//!
//! Parses arguments, layers flag overrides onto the optional JSON
//! input and writes the summary slide. Categorical flags parse through
//! the same `FromStr` impls as file input, so an invalid value is
//! rejected before the pipeline starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use forecourt_listing::{FuelType, Gearbox, ListingOverrides, UlezStatus, VehicleListing};
use forecourt_pptx::PptxWriter;

#[derive(Debug, Parser)]
#[command(name = "forecourt")]
#[command(author, version, about = "Generate an editable vehicle summary PPTX", long_about = None)]
pub struct Cli {
    /// Path to vehicle JSON data
    #[arg(long)]
    input: Option<PathBuf>,

    /// PPTX output file
    #[arg(long, default_value = "vehicle.pptx")]
    output: PathBuf,

    /// Vehicle display title
    #[arg(long)]
    title: Option<String>,

    /// Price string, e.g. '£12,000'
    #[arg(long)]
    price: Option<String>,

    /// Registration number
    #[arg(long)]
    registration: Option<String>,

    /// Year display value
    #[arg(long)]
    year: Option<String>,

    /// Gearbox option (Automatic or Manual)
    #[arg(long)]
    gearbox: Option<Gearbox>,

    /// Engine size label
    #[arg(long)]
    engine_size: Option<String>,

    /// Fuel type option (Petrol, Diesel, Hybrid or Electric)
    #[arg(long)]
    fuel_type: Option<FuelType>,

    /// Mileage display value
    #[arg(long)]
    mileage: Option<String>,

    /// ULEZ status (Yes, No or Unknown)
    #[arg(long)]
    ulez: Option<UlezStatus>,

    /// MOT expiry display value
    #[arg(long)]
    mot_expiry: Option<String>,

    /// Number of owners or description
    #[arg(long)]
    owners: Option<String>,

    /// Spec bullet points; pass the flag with no values to clear file specs
    #[arg(long, num_args = 0..)]
    specs: Option<Vec<String>>,

    /// Dealership name
    #[arg(long)]
    dealer_name: Option<String>,

    /// Dealership phone number
    #[arg(long)]
    dealer_phone: Option<String>,

    /// Dealership email address
    #[arg(long)]
    dealer_email: Option<String>,

    /// Dealership website
    #[arg(long)]
    dealer_website: Option<String>,
}

impl Cli {
    /// Collect the flag values into a sparse override set
    fn overrides(&self) -> ListingOverrides {
        ListingOverrides {
            title: self.title.clone(),
            price: self.price.clone(),
            registration: self.registration.clone(),
            year: self.year.clone(),
            gearbox: self.gearbox,
            engine_size: self.engine_size.clone(),
            fuel_type: self.fuel_type,
            mileage: self.mileage.clone(),
            ulez: self.ulez,
            mot_expiry: self.mot_expiry.clone(),
            owners: self.owners.clone(),
            specs: self.specs.clone(),
            dealer_name: self.dealer_name.clone(),
            dealer_phone: self.dealer_phone.clone(),
            dealer_email: self.dealer_email.clone(),
            dealer_website: self.dealer_website.clone(),
        }
    }
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    generate_command(&cli)
}

/// Execute the full pipeline: load, merge, render, save
pub fn generate_command(cli: &Cli) -> Result<()> {
    let listing = load_listing(cli.input.as_deref())?;
    let listing = listing.apply_overrides(&cli.overrides());

    PptxWriter::new(listing)
        .save_to(&cli.output)
        .with_context(|| format!("Failed to write PPTX file: {}", cli.output.display()))?;

    println!("Saved editable PPTX to {}", cli.output.display());
    Ok(())
}

/// Load the base listing, from JSON when an input path is given
pub fn load_listing(input: Option<&Path>) -> Result<VehicleListing> {
    let Some(path) = input else {
        return Ok(VehicleListing::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let listing = VehicleListing::from_json_str(&raw)
        .with_context(|| format!("Invalid vehicle data in {}", path.display()))?;

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_flags_parse_any_case() {
        let cli = Cli::try_parse_from([
            "forecourt",
            "--gearbox",
            "manual",
            "--fuel-type",
            "Diesel",
            "--ulez",
            "NO",
        ])
        .unwrap();
        assert_eq!(cli.gearbox, Some(Gearbox::Manual));
        assert_eq!(cli.fuel_type, Some(FuelType::Diesel));
        assert_eq!(cli.ulez, Some(UlezStatus::No));
    }

    #[test]
    fn test_invalid_categorical_flag_rejected() {
        let err = Cli::try_parse_from(["forecourt", "--gearbox", "Tiptronic"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Gearbox"));
        assert!(msg.contains("Automatic, Manual"));
    }

    #[test]
    fn test_specs_flag_with_no_values_clears() {
        let cli = Cli::try_parse_from(["forecourt", "--specs"]).unwrap();
        assert_eq!(cli.specs, Some(Vec::new()));

        let cli = Cli::try_parse_from(["forecourt"]).unwrap();
        assert_eq!(cli.specs, None);
    }

    #[test]
    fn test_output_defaults_to_vehicle_pptx() {
        let cli = Cli::try_parse_from(["forecourt"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("vehicle.pptx"));
    }

    #[test]
    fn test_flag_overrides_take_precedence() {
        let cli = Cli::try_parse_from(["forecourt", "--gearbox", "Manual"]).unwrap();
        let listing = VehicleListing::default().apply_overrides(&cli.overrides());
        assert_eq!(listing.gearbox, Gearbox::Manual);
    }

    #[test]
    fn test_load_listing_without_input_uses_defaults() {
        let listing = load_listing(None).unwrap();
        assert_eq!(listing, VehicleListing::default());
    }

    #[test]
    fn test_load_listing_missing_file_fails() {
        let err = load_listing(Some(Path::new("/nonexistent/vehicle.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
