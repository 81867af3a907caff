//! TTI-style feed normalizer.

use breadboard_models::{
    min_lead_time, Packaging, PriceBreak, SourceSupplier, SupplierContribution, TtiDocument,
    TtiPart, UNSPECIFIED_PACKAGING,
};
use breadboard_utils::{normalize_part_number, part_numbers_match};
use serde_json::{Map, Value};
use tracing::debug;

use crate::lead_time::lead_time_days;

pub fn normalize_tti(document: &TtiDocument, part_number: &str) -> SupplierContribution {
    let mut contribution = SupplierContribution::none(SourceSupplier::Tti);

    let key = normalize_part_number(part_number);
    let matches = document
        .parts
        .iter()
        .filter(|part| part_numbers_match(&key, part.tti_part_number.as_deref()));

    for part in matches {
        let lead_time = lead_time_days(part.lead_time.as_deref());

        contribution.matched += 1;
        contribution.total_stock = contribution
            .total_stock
            .saturating_add(part.available_to_sell.unwrap_or(0));
        contribution.manufacturer_lead_time =
            min_lead_time(contribution.manufacturer_lead_time, lead_time);
        contribution.add_description(part.description.as_deref());

        if contribution.name.is_none() {
            contribution.name = part.manufacturer_part_number.clone();
        }
        if contribution.manufacturer_name.is_none() {
            contribution.manufacturer_name = part.manufacturer.clone();
        }
        if contribution.product_doc.is_none() {
            contribution.product_doc = non_blank(&part.datasheet_url);
        }
        if contribution.product_url.is_none() {
            contribution.product_url = non_blank(&part.buy_url);
        }
        if contribution.product_image_url.is_none() {
            contribution.product_image_url = non_blank(&part.image_url);
        }

        merge_compliance(&mut contribution.specifications, &key, part);
        contribution.packaging.push(tti_packaging(part, lead_time));
    }

    if !contribution.is_empty() && contribution.product_image_url.is_none() {
        contribution.product_image_url = Some(String::new());
    }

    debug!(part_number, matched = contribution.matched, "Normalized TTI feed");
    contribution
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

/// Fold export and environmental compliance fields under the part key.
fn merge_compliance(specifications: &mut Map<String, Value>, key: &str, part: &TtiPart) {
    let sections = [&part.export_information, &part.environmental_information];
    let fields: Vec<(&String, &Value)> = sections
        .into_iter()
        .flatten()
        .flat_map(|section| section.iter())
        .collect();

    if fields.is_empty() {
        return;
    }

    let entry = specifications
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if let Value::Object(merged) = entry {
        for (name, value) in fields {
            merged.insert(name.clone(), value.clone());
        }
    }
}

fn tti_packaging(part: &TtiPart, lead_time: Option<u32>) -> Packaging {
    let price_breaks = part
        .price_breaks()
        .iter()
        .filter_map(|pb| PriceBreak::new(pb.quantity?, pb.price?))
        .collect();

    Packaging {
        packaging_type: part
            .packaging
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| UNSPECIFIED_PACKAGING.to_string()),
        minimum_order_quantity: part.sales_minimum,
        quantity_available: part.available_to_sell.unwrap_or(0),
        // List price depends on the tier, so there is no single unit price.
        unit_price: None,
        supplier: SourceSupplier::Tti,
        price_breaks,
        manufacturer_lead_time: lead_time,
    }
}
