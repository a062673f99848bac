//! CLI definition using clap

use clap::{Parser, Subcommand};
use ongkir_types::{City, OutputFormat, PackageCategory};

#[derive(Parser)]
#[command(name = "ongkir")]
#[command(version)]
#[command(about = "Shipping cost estimation for parcels between Indonesian cities")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the cost of shipping one package
    Estimate {
        /// Declared weight in kg
        #[arg(long, short = 'w', allow_hyphen_values = true)]
        weight: String,

        /// Length in cm
        #[arg(long, short = 'l', allow_hyphen_values = true)]
        length: String,

        /// Width in cm
        #[arg(long, allow_hyphen_values = true)]
        width: String,

        /// Height in cm
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Origin city. Uses config value if not specified.
        #[arg(long, ignore_case = true)]
        from: Option<City>,

        /// Destination city. Uses config value if not specified.
        #[arg(long, ignore_case = true)]
        to: Option<City>,

        /// Package category. Uses config value if not specified.
        #[arg(long, short = 'c', ignore_case = true)]
        category: Option<PackageCategory>,

        /// Add insurance (2% of subtotal)
        #[arg(long, conflicts_with = "no_insurance")]
        insured: bool,

        /// Skip insurance even if enabled in config
        #[arg(long)]
        no_insurance: bool,
    },

    /// Show distance and tier for a city pair
    Route {
        #[arg(ignore_case = true)]
        from: City,

        #[arg(ignore_case = true)]
        to: City,
    },

    /// List supported cities
    Cities,

    /// List package categories and their surcharges
    Categories,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default origin city
        #[arg(long, ignore_case = true)]
        set_origin: Option<City>,

        /// Set default destination city
        #[arg(long, ignore_case = true)]
        set_destination: Option<City>,

        /// Set default package category
        #[arg(long, ignore_case = true)]
        set_category: Option<PackageCategory>,

        /// Enable/disable insurance by default
        #[arg(long)]
        set_insured: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
