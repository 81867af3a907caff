//! Parts Service
//!
//! Aggregates both supplier feeds into one record per part number. Each call
//! fetches both documents concurrently and merges the per-supplier
//! contributions into a fresh [`AggregatedPart`]; nothing is kept between
//! calls.

use breadboard_models::{
    min_lead_time, push_distinct, AggregatedPart, ArrowDocument, SourceSupplier,
    SupplierContribution, TtiDocument,
};
use breadboard_utils::{BreadboardError, BreadboardResult, SuppliersConfig};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::arrow_normalizer::normalize_arrow;
use crate::metrics::Metrics;
use crate::supplier_client::SupplierClient;
use crate::tti_normalizer::normalize_tti;

/// Key a "Part Details" URL is kept under when it collides with compliance data.
pub const PART_DETAILS_URL_KEY: &str = "partDetailsUrl";

/// Fixed document URLs of the two supplier feeds.
#[derive(Debug, Clone)]
pub struct SupplierEndpoints {
    pub arrow_url: String,
    pub tti_url: String,
}

impl From<&SuppliersConfig> for SupplierEndpoints {
    fn from(config: &SuppliersConfig) -> Self {
        Self {
            arrow_url: config.arrow_url.clone(),
            tti_url: config.tti_url.clone(),
        }
    }
}

#[derive(Clone)]
pub struct PartsService {
    client: SupplierClient,
    endpoints: SupplierEndpoints,
    metrics: Metrics,
}

impl PartsService {
    pub fn new(client: SupplierClient, endpoints: SupplierEndpoints, metrics: Metrics) -> Self {
        Self {
            client,
            endpoints,
            metrics,
        }
    }

    /// Aggregate both supplier feeds for `part_number`.
    ///
    /// A supplier that cannot be fetched contributes nothing; the request only
    /// fails when both suppliers fail.
    #[instrument(skip(self))]
    pub async fn aggregate(&self, part_number: &str) -> BreadboardResult<AggregatedPart> {
        self.metrics.record_part_request();

        let (arrow, tti) = tokio::join!(
            self.arrow_contribution(part_number),
            self.tti_contribution(part_number),
        );

        if let (Err(arrow_error), Err(tti_error)) = (&arrow, &tti) {
            self.metrics.record_fetch_failure(SourceSupplier::Arrow);
            self.metrics.record_fetch_failure(SourceSupplier::Tti);
            return Err(BreadboardError::external_service(
                "suppliers",
                format!("Arrow: {}; TTI: {}", arrow_error, tti_error),
            ));
        }

        let contributions = [
            self.settle(SourceSupplier::Arrow, arrow),
            self.settle(SourceSupplier::Tti, tti),
        ];
        let part = merge_contributions(part_number, contributions);

        info!(
            sources = ?part.source_parts,
            total_stock = part.total_stock,
            packaging = part.packaging.len(),
            "Aggregated part"
        );
        Ok(part)
    }

    async fn arrow_contribution(&self, part_number: &str) -> BreadboardResult<SupplierContribution> {
        let document: ArrowDocument = self.client.fetch_document(&self.endpoints.arrow_url).await?;
        Ok(normalize_arrow(&document, part_number))
    }

    async fn tti_contribution(&self, part_number: &str) -> BreadboardResult<SupplierContribution> {
        let document: TtiDocument = self.client.fetch_document(&self.endpoints.tti_url).await?;
        Ok(normalize_tti(&document, part_number))
    }

    fn settle(
        &self,
        supplier: SourceSupplier,
        result: BreadboardResult<SupplierContribution>,
    ) -> SupplierContribution {
        match result {
            Ok(contribution) => contribution,
            Err(error) => {
                warn!(%supplier, error = %error, "Supplier fetch failed, continuing without it");
                self.metrics.record_fetch_failure(supplier);
                SupplierContribution::none(supplier)
            }
        }
    }
}

/// Merge supplier contributions, in order, into a single record.
///
/// Stock is summed, lead time is the minimum, descriptions are deduplicated
/// and joined, packaging is concatenated. Single-valued fields take the first
/// non-empty value. Suppliers with no matches are skipped entirely.
pub fn merge_contributions(
    part_number: &str,
    contributions: impl IntoIterator<Item = SupplierContribution>,
) -> AggregatedPart {
    let mut part = AggregatedPart::empty(part_number);
    let mut name: Option<String> = None;
    let mut manufacturer_name: Option<String> = None;
    let mut descriptions: Vec<String> = Vec::new();

    for contribution in contributions {
        if contribution.is_empty() {
            continue;
        }

        if !part.source_parts.contains(&contribution.supplier) {
            part.source_parts.push(contribution.supplier);
        }

        part.total_stock = part.total_stock.saturating_add(contribution.total_stock);
        part.manufacturer_lead_time =
            min_lead_time(part.manufacturer_lead_time, contribution.manufacturer_lead_time);

        for description in &contribution.descriptions {
            push_distinct(&mut descriptions, Some(description));
        }

        name = first_non_empty(name, contribution.name);
        manufacturer_name = first_non_empty(manufacturer_name, contribution.manufacturer_name);
        part.product_doc = first_non_empty(part.product_doc, contribution.product_doc);
        part.product_url = first_non_empty(part.product_url, contribution.product_url);
        part.product_image_url =
            first_non_empty(part.product_image_url, contribution.product_image_url);

        part.packaging.extend(contribution.packaging);
        merge_specifications(&mut part.specifications, contribution.specifications);
    }

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        part.name = name;
    }
    part.manufacturer_name = manufacturer_name.unwrap_or_default();
    part.description = descriptions.join(", ");
    part
}

/// Keep `current` unless it is missing or blank.
fn first_non_empty(current: Option<String>, incoming: Option<String>) -> Option<String> {
    let is_blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());

    match (is_blank(&current), is_blank(&incoming)) {
        (false, _) => current,
        (true, false) => incoming,
        (true, true) => current.or(incoming),
    }
}

fn merge_specifications(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_specification_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Objects merge field-wise with the first value winning. A URL meeting an
/// object is kept inside it under [`PART_DETAILS_URL_KEY`].
fn merge_specification_value(existing: &mut Value, incoming: Value) {
    if let Value::String(url) = existing {
        if let Value::Object(mut fields) = incoming {
            fields
                .entry(PART_DETAILS_URL_KEY)
                .or_insert_with(|| Value::String(url.clone()));
            *existing = Value::Object(fields);
        }
        return;
    }

    if let Value::Object(fields) = existing {
        match incoming {
            Value::Object(incoming) => {
                for (name, value) in incoming {
                    fields.entry(name).or_insert(value);
                }
            }
            url @ Value::String(_) => {
                fields.entry(PART_DETAILS_URL_KEY).or_insert(url);
            }
            _ => {}
        }
    }
}
