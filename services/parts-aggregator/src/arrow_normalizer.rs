//! Arrow-style feed normalizer.
//!
//! Filters the pricing response down to the queried part and maps each
//! matching line item into the common packaging shape.

use breadboard_models::{
    min_lead_time, ArrowDocument, ArrowPricingEntry, Packaging, PriceBreak, SourceSupplier,
    SupplierContribution, UNSPECIFIED_PACKAGING,
};
use breadboard_utils::{normalize_part_number, part_numbers_match};
use serde_json::Value;
use tracing::debug;

use crate::lead_time::lead_time_days;

pub fn normalize_arrow(document: &ArrowDocument, part_number: &str) -> SupplierContribution {
    let mut contribution = SupplierContribution::none(SourceSupplier::Arrow);

    if !document.is_success() {
        debug!(status = ?document.status, "Arrow document not successful, skipping");
        return contribution;
    }

    let key = normalize_part_number(part_number);
    let matches = document
        .pricing_response
        .iter()
        .filter(|entry| part_numbers_match(&key, entry.part_number.as_deref()));

    for entry in matches {
        let lead_time = lead_time_days(
            entry
                .lead_time
                .as_ref()
                .and_then(|l| l.supplier_lead_time.as_deref()),
        );

        contribution.matched += 1;
        contribution.total_stock = contribution
            .total_stock
            .saturating_add(entry.foh_quantity.unwrap_or(0));
        contribution.manufacturer_lead_time =
            min_lead_time(contribution.manufacturer_lead_time, lead_time);
        contribution.add_description(entry.description.as_deref());

        if contribution.name.is_none() {
            contribution.name = entry.part_number.clone();
        }
        if contribution.manufacturer_name.is_none() {
            contribution.manufacturer_name = entry.manufacturer.clone();
        }
        if contribution.product_doc.is_none() {
            contribution.product_doc = entry.datasheet_url().map(str::to_string);
        }
        if contribution.product_url.is_none() {
            contribution.product_url = entry.part_details_url().map(str::to_string);
        }
        if contribution.product_image_url.is_none() {
            contribution.product_image_url = entry.image_url().map(str::to_string);
        }
        if let Some(url) = entry.part_details_url() {
            contribution
                .specifications
                .entry(key.clone())
                .or_insert_with(|| Value::String(url.to_string()));
        }

        contribution.packaging.push(arrow_packaging(entry, lead_time));
    }

    debug!(part_number, matched = contribution.matched, "Normalized Arrow feed");
    contribution
}

fn arrow_packaging(entry: &ArrowPricingEntry, lead_time: Option<u32>) -> Packaging {
    let price_breaks: Vec<PriceBreak> = entry
        .pricing_tier
        .iter()
        .filter_map(|tier| PriceBreak::new(tier.min_quantity?, tier.resale_price?))
        .collect();

    // The unit price is the price at the smallest orderable tier.
    let unit_price = price_breaks
        .iter()
        .min_by_key(|pb| pb.break_quantity)
        .map(|pb| pb.unit_price);

    Packaging {
        packaging_type: entry
            .pkg
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| UNSPECIFIED_PACKAGING.to_string()),
        minimum_order_quantity: entry.pricing_tier.iter().filter_map(|t| t.min_quantity).min(),
        quantity_available: entry.spq.unwrap_or(0),
        unit_price,
        supplier: SourceSupplier::Arrow,
        price_breaks,
        manufacturer_lead_time: lead_time,
    }
}
