//! TTI-style supplier feed schema (`{parts: [...]}`).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::lenient;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TtiDocument {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub parts: Vec<TtiPart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtiPart {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub tti_part_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub manufacturer_part_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub available_to_sell: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub sales_minimum: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub lead_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub packaging: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub pricing: Option<TtiPricing>,
    #[serde(rename = "datasheetURL", default, deserialize_with = "lenient::opt_string")]
    pub datasheet_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub buy_url: Option<String>,
    #[serde(rename = "imageURL", default, deserialize_with = "lenient::opt_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub export_information: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub environmental_information: Option<Map<String, Value>>,
}

impl TtiPart {
    pub fn price_breaks(&self) -> &[TtiPriceBreak] {
        self.pricing
            .as_ref()
            .map(|p| p.quantity_price_breaks.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtiPricing {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub quantity_price_breaks: Vec<TtiPriceBreak>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TtiPriceBreak {
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub quantity: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
}
