//! Itemised estimate returned by the pricing engine

use serde::{Deserialize, Serialize};

/// Cost breakdown for one package, in whole rupiah
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// max(declared, volumetric), two decimals
    pub shipping_weight_kg: f64,
    pub base_cost: u64,
    pub weight_cost: u64,
    pub category_surcharge: u64,
    /// base_cost + weight_cost + category_surcharge
    pub subtotal: u64,
    pub tax: u64,
    /// Zero unless the package is insured
    pub insurance_cost: u64,
    /// subtotal + tax + insurance_cost
    pub total: u64,
}

/// A single currency line of a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: u64,
}

impl CostBreakdown {
    /// Currency lines in display order. Zero surcharge and insurance lines are left out.
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut lines = vec![
            LineItem {
                label: "Base cost",
                amount: self.base_cost,
            },
            LineItem {
                label: "Weight cost",
                amount: self.weight_cost,
            },
        ];
        if self.category_surcharge > 0 {
            lines.push(LineItem {
                label: "Category surcharge",
                amount: self.category_surcharge,
            });
        }
        lines.push(LineItem {
            label: "Subtotal",
            amount: self.subtotal,
        });
        lines.push(LineItem {
            label: "Tax (11%)",
            amount: self.tax,
        });
        if self.insurance_cost > 0 {
            lines.push(LineItem {
                label: "Insurance",
                amount: self.insurance_cost,
            });
        }
        lines.push(LineItem {
            label: "Total",
            amount: self.total,
        });
        lines
    }
}
