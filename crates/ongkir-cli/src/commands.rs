//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_categories, output_cities, output_estimate, output_route};
use ongkir_app::app::{estimate_package, route_info};
use ongkir_app::config::Config;
use ongkir_app::validation::PackageForm;
use ongkir_types::{City, OutputFormat, PackageCategory, Result};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    tracing::debug!(format = %output_format, "Configuration loaded");

    match cli.command {
        Commands::Estimate {
            weight,
            length,
            width,
            height,
            from,
            to,
            category,
            insured,
            no_insurance,
        } => {
            let mut form = PackageForm::from_config(&config);
            form.weight = weight;
            form.length = length;
            form.width = width;
            form.height = height;
            if let Some(origin) = from {
                form.origin = origin;
            }
            if let Some(destination) = to {
                form.destination = destination;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if insured {
                form.insured = true;
            } else if no_insurance {
                form.insured = false;
            }
            cmd_estimate(&form, output_format)
        }

        Commands::Route { from, to } => output_route(output_format, &route_info(from, to)),

        Commands::Cities => output_cities(output_format),

        Commands::Categories => output_categories(output_format),

        Commands::Config {
            show,
            set_origin,
            set_destination,
            set_category,
            set_insured,
            set_output,
            reset,
        } => cmd_config(
            config,
            output_format,
            show,
            set_origin,
            set_destination,
            set_category,
            set_insured,
            set_output,
            reset,
        ),
    }
}

fn cmd_estimate(form: &PackageForm, output_format: OutputFormat) -> Result<()> {
    let report = estimate_package(form)?;
    output_estimate(output_format, &report)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    output_format: OutputFormat,
    show: bool,
    set_origin: Option<City>,
    set_destination: Option<City>,
    set_category: Option<PackageCategory>,
    set_insured: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config.reset();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(origin) = set_origin {
        config.default_origin = origin;
        modified = true;
    }

    if let Some(destination) = set_destination {
        config.default_destination = destination;
        modified = true;
    }

    if let Some(category) = set_category {
        config.default_category = category;
        modified = true;
    }

    if let Some(insured) = set_insured {
        config.default_insured = insured;
        modified = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        if output_format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!("{}", config);
        }
    }

    Ok(())
}
