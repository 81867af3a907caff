//! # Breadboard Core Domain Models
//!
//! Data structures shared by the parts aggregation service.
//!
//! ## Key Models
//!
//! - **AggregatedPart**: merged view of one part number across supplier feeds
//! - **Packaging** / **PriceBreak**: purchasable options and their pricing tiers
//! - **SupplierContribution**: what a single feed contributes before merging
//! - **ArrowDocument** / **TtiDocument**: raw supplier feed schemas
//! - **PartQuery**: validated inbound query
//!
//! Supplier documents are decoded leniently (see [`lenient`]): missing or
//! malformed fields become absent values rather than decode errors.

pub mod arrow;
pub mod lenient;
pub mod part;
pub mod query;
pub mod tti;


pub use arrow::*;
pub use part::*;
pub use query::*;
pub use tti::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_supplier_names() {
        assert_eq!(SourceSupplier::Arrow.to_string(), "Arrow");
        assert_eq!(SourceSupplier::Tti.to_string(), "TTI");
        assert_eq!(
            serde_json::to_value(vec![SourceSupplier::Arrow, SourceSupplier::Tti]).unwrap(),
            json!(["Arrow", "TTI"])
        );
    }

    #[test]
    fn test_contribution_descriptions() {
        let mut contribution = SupplierContribution::none(SourceSupplier::Arrow);
        assert!(contribution.is_empty());

        contribution.add_description(Some("Diode Switching 75V"));
        contribution.add_description(Some("Diode Switching 75V"));
        contribution.add_description(None);
        assert_eq!(contribution.descriptions, vec!["Diode Switching 75V"]);
    }
}
