//! Output formatting module

use ongkir_app::app::{EstimateReport, RouteInfo};
use ongkir_domain::constants::surcharge_for;
use ongkir_types::{City, OutputFormat, PackageCategory, Result};
use serde_json::json;

/// Whole rupiah with `.` thousands grouping, e.g. `Rp 28.860`
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}

pub fn output_estimate(output_format: OutputFormat, report: &EstimateReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let breakdown = &report.breakdown;
    println!("\nCost Estimate");
    println!("=============");
    println!(
        "Route:           {} -> {} ({} km)",
        report.route.origin, report.route.destination, report.route.distance_km
    );
    println!("Category:        {}", report.category);
    println!("Shipping weight: {:.2} kg", breakdown.shipping_weight_kg);
    println!();

    let lines = breakdown.line_items();
    if let Some((total, items)) = lines.split_last() {
        for line in items {
            println!("{:<20}{:>16}", format!("{}:", line.label), format_rupiah(line.amount));
        }
        println!("{}", "-".repeat(36));
        println!("{:<20}{:>16}", format!("{}:", total.label), format_rupiah(total.amount));
    }

    Ok(())
}

pub fn output_route(output_format: OutputFormat, route: &RouteInfo) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(route)?);
        return Ok(());
    }

    println!("Route:     {} -> {}", route.origin, route.destination);
    println!(
        "Distance:  {} km{}",
        route.distance_km,
        if route.curated { "" } else { " (default)" }
    );
    println!("Tier:      {}", route.tier.label());
    println!("Base cost: {}", format_rupiah(route.base_cost));
    Ok(())
}

pub fn output_cities(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let names: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    for city in City::ALL {
        println!("{}", city);
    }
    Ok(())
}

pub fn output_categories(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let entries: Vec<_> = PackageCategory::ALL
            .iter()
            .map(|c| {
                json!({
                    "name": c.name(),
                    "label": c.label(),
                    "surcharge": surcharge_for(*c),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for category in PackageCategory::ALL {
        println!(
            "{} {:<16}{:>12}",
            category.icon(),
            category.label(),
            format_rupiah(surcharge_for(category))
        );
    }
    Ok(())
}
