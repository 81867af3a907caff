//! Aggregated part models returned by the parts API.
//!
//! One [`AggregatedPart`] is produced per queried part number, combining every
//! matching line item from both supplier feeds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Supplier feeds a part can be sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceSupplier {
    Arrow,
    #[serde(rename = "TTI")]
    Tti,
}

impl SourceSupplier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arrow => "Arrow",
            Self::Tti => "TTI",
        }
    }
}

impl fmt::Display for SourceSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantity threshold at which the unit price changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreak {
    pub break_quantity: u64,
    pub unit_price: f64,
    /// `break_quantity * unit_price`, fixed to two decimals.
    pub total_price: String,
}

impl PriceBreak {
    /// Returns `None` when the total does not fit in a finite amount.
    pub fn new(break_quantity: u64, unit_price: f64) -> Option<Self> {
        let total = break_quantity as f64 * unit_price;
        if !total.is_finite() {
            return None;
        }
        Some(Self {
            break_quantity,
            unit_price,
            total_price: format_cents(total),
        })
    }
}

/// Round to the nearest cent and render with exactly two decimals.
pub fn format_cents(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

/// One purchasable packaging option from a single supplier line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Packaging {
    #[serde(rename = "type")]
    pub packaging_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<u64>,
    pub quantity_available: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    pub supplier: SourceSupplier,
    pub price_breaks: Vec<PriceBreak>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_lead_time: Option<u32>,
}

/// Packaging type used when a supplier does not state one.
pub const UNSPECIFIED_PACKAGING: &str = "unspecified";

/// Merged view of a part across all supplier feeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPart {
    pub name: String,
    pub description: String,
    pub total_stock: u64,
    /// Days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_lead_time: Option<u32>,
    pub manufacturer_name: String,
    pub packaging: Vec<Packaging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_doc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image_url: Option<String>,
    pub specifications: Map<String, Value>,
    pub source_parts: Vec<SourceSupplier>,
}

impl AggregatedPart {
    /// Record returned when no supplier carries the part.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// What a single supplier feed contributes for one query.
///
/// Built locally by each normalizer call and folded into an
/// [`AggregatedPart`] by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierContribution {
    pub supplier: SourceSupplier,
    pub matched: usize,
    pub name: Option<String>,
    pub manufacturer_name: Option<String>,
    /// Distinct descriptions in first-seen order.
    pub descriptions: Vec<String>,
    pub total_stock: u64,
    pub manufacturer_lead_time: Option<u32>,
    pub packaging: Vec<Packaging>,
    pub product_doc: Option<String>,
    pub product_url: Option<String>,
    pub product_image_url: Option<String>,
    pub specifications: Map<String, Value>,
}

impl SupplierContribution {
    pub fn none(supplier: SourceSupplier) -> Self {
        Self {
            supplier,
            matched: 0,
            name: None,
            manufacturer_name: None,
            descriptions: Vec::new(),
            total_stock: 0,
            manufacturer_lead_time: None,
            packaging: Vec::new(),
            product_doc: None,
            product_url: None,
            product_image_url: None,
            specifications: Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Add a description unless it is blank or already present.
    pub fn add_description(&mut self, description: Option<&str>) {
        push_distinct(&mut self.descriptions, description);
    }
}

/// Append `value` to `values` if it is non-blank and not yet present.
pub fn push_distinct(values: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        if !values.iter().any(|existing| existing == value) {
            values.push(value.to_string());
        }
    }
}

/// Smaller of two optional lead times, ignoring absent values.
pub fn min_lead_time(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
