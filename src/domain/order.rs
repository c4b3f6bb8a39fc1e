//! Raw order records as returned by the order-management API

use crate::domain::{Result, ShiplabelError};
use serde::{Deserialize, Deserializer, Serialize};

/// A single line item inside an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item identifier (product SKU / id)
    pub id: String,
}

impl LineItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An order exactly as received from the API
///
/// Only the fields the label pipeline reads are modelled; anything else in the
/// payload is ignored. Nullable fields must still be present as keys: an order
/// without e.g. a `notes` key is a schema error, while `"notes": null` is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    pub invoice_number: String,

    /// ISO-8601 UTC timestamp, e.g. `2024-03-05T12:00:00Z`
    pub creation_date: String,

    pub shipping_address_name: String,

    #[serde(deserialize_with = "nullable")]
    pub shipping_address_company_name: Option<String>,

    #[serde(deserialize_with = "nullable")]
    pub shipping_address_address1: Option<String>,

    #[serde(deserialize_with = "nullable")]
    pub shipping_address_address2: Option<String>,

    pub shipping_address_city: String,

    #[serde(deserialize_with = "nullable")]
    pub shipping_address_province: Option<String>,

    pub shipping_address_postal_code: String,

    /// Two-letter country code
    pub shipping_address_country: String,

    pub shipping_method: String,

    #[serde(deserialize_with = "nullable")]
    pub notes: Option<String>,

    pub number_of_items_in_order: u32,

    pub items: Vec<LineItem>,
}

impl RawOrder {
    /// Decode one element of the API's `items` array
    ///
    /// `index` is the element's position and only used for the error message.
    pub fn from_value(value: serde_json::Value, index: usize) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| ShiplabelError::Schema(format!("order at index {index}: {e}")))
    }
}

/// Key must be present, value may be null
fn nullable<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A fully populated order shipping to Germany
    pub fn order(invoice: &str, country: &str, item_ids: &[&str]) -> RawOrder {
        RawOrder {
            invoice_number: invoice.to_string(),
            creation_date: "2024-03-05T12:00:00Z".to_string(),
            shipping_address_name: "Erika Mustermann".to_string(),
            shipping_address_company_name: Some("ACME GmbH".to_string()),
            shipping_address_address1: Some("Hauptstr. 1".to_string()),
            shipping_address_address2: Some("Hinterhaus".to_string()),
            shipping_address_city: "Berlin".to_string(),
            shipping_address_province: Some("BE".to_string()),
            shipping_address_postal_code: "10115".to_string(),
            shipping_address_country: country.to_string(),
            shipping_method: "DHL Paket".to_string(),
            notes: Some("Leave at door".to_string()),
            number_of_items_in_order: item_ids.len() as u32,
            items: item_ids.iter().map(|id| LineItem::new(*id)).collect(),
        }
    }
}
