//! Arrow-style supplier feed schema.
//!
//! Mirrors the `{status, pricingResponse: [...]}` pricing document. Every field
//! is optional and decoded leniently; interpretation happens in the normalizer.

use serde::Deserialize;

use crate::lenient;

/// Status value that marks a usable Arrow document.
pub const ARROW_SUCCESS_STATUS: &str = "SUCCESS";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowDocument {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub pricing_response: Vec<ArrowPricingEntry>,
}

impl ArrowDocument {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(ARROW_SUCCESS_STATUS)
    }
}

/// One line item in the pricing response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowPricingEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub part_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Free-on-hand quantity.
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub foh_quantity: Option<u64>,
    /// Standard (shipped) package quantity.
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub spq: Option<u64>,
    /// Packaging type, e.g. "Cut Strips" or "Reel".
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pkg: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub lead_time: Option<ArrowLeadTime>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub pricing_tier: Vec<ArrowPricingTier>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub url_data: Vec<ArrowUrlData>,
}

impl ArrowPricingEntry {
    /// First URL whose declared type satisfies `matches`.
    pub fn find_url(&self, matches: impl Fn(&str) -> bool) -> Option<&str> {
        self.url_data
            .iter()
            .find(|item| item.kind.as_deref().map(&matches).unwrap_or(false))
            .and_then(|item| item.value.as_deref())
    }

    pub fn datasheet_url(&self) -> Option<&str> {
        self.find_url(|kind| kind == "Datasheet")
    }

    pub fn part_details_url(&self) -> Option<&str> {
        self.find_url(|kind| kind == "Part Details")
    }

    pub fn image_url(&self) -> Option<&str> {
        self.find_url(|kind| kind.contains("Image"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowLeadTime {
    /// Quoted as text, e.g. "12 Weeks".
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub supplier_lead_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowPricingTier {
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub min_quantity: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub max_quantity: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub resale_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArrowUrlData {
    #[serde(rename = "type", default, deserialize_with = "lenient::opt_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_pricing_entry() {
        let doc: ArrowDocument = serde_json::from_value(json!({
            "status": "SUCCESS",
            "pricingResponse": [{
                "partNumber": "BAV99-7-F",
                "manufacturer": "Diodes Inc",
                "description": "Diode Switching",
                "fohQuantity": "1500",
                "spq": 3000,
                "pkg": "Reel",
                "leadTime": {"supplierLeadTime": "12 Weeks"},
                "pricingTier": [
                    {"minQuantity": "1", "maxQuantity": "99", "resalePrice": "0.12"},
                    {"minQuantity": "100", "maxQuantity": "999", "resalePrice": "0.08"}
                ],
                "urlData": [
                    {"type": "Image Large", "value": "https://img.example/large.jpg"},
                    {"type": "Datasheet", "value": "https://docs.example/bav99.pdf"},
                    {"type": "Part Details", "value": "https://shop.example/bav99"}
                ]
            }]
        }))
        .unwrap();

        assert!(doc.is_success());
        let entry = &doc.pricing_response[0];
        assert_eq!(entry.foh_quantity, Some(1500));
        assert_eq!(entry.spq, Some(3000));
        assert_eq!(entry.pricing_tier.len(), 2);
        assert_eq!(entry.pricing_tier[1].resale_price, Some(0.08));
        assert_eq!(entry.datasheet_url(), Some("https://docs.example/bav99.pdf"));
        assert_eq!(entry.part_details_url(), Some("https://shop.example/bav99"));
        assert_eq!(entry.image_url(), Some("https://img.example/large.jpg"));
        assert_eq!(
            entry.lead_time.as_ref().and_then(|l| l.supplier_lead_time.as_deref()),
            Some("12 Weeks")
        );
    }

    #[test]
    fn test_failed_status_and_missing_fields() {
        let doc: ArrowDocument = serde_json::from_value(json!({
            "status": "FAILURE",
            "pricingResponse": [{}]
        }))
        .unwrap();

        assert!(!doc.is_success());
        let entry = &doc.pricing_response[0];
        assert!(entry.part_number.is_none());
        assert!(entry.datasheet_url().is_none());
        assert!(entry.lead_time.is_none());
    }
}
