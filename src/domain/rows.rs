//! Tabular rows produced by the transform stages
//!
//! Each stage produces a new immutable value:
//! [`FlatOrderRow`] → [`EnrichedOrderRow`] → [`OutputRow`].

use chrono::NaiveDate;
use serde::Serialize;

/// Header of the published worksheet, in column order
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "invoiceNumber",
    "creationDate",
    "shippingAddressName",
    "itemsInOrder",
    "items",
    "shippingMethod",
    "notes",
    "printLabel",
];

/// Date format used in the published sheet and for worksheet titles
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One order flattened into a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatOrderRow {
    pub invoice_number: String,
    pub creation_date: NaiveDate,
    pub shipping_address_name: String,
    pub items_in_order: u32,
    /// Item identifiers of this order joined with `", "`
    pub items: String,
    pub shipping_method: String,
    pub notes: Option<String>,
    pub shipping_address_company_name: Option<String>,
    pub shipping_address_address1: Option<String>,
    pub shipping_address_address2: Option<String>,
    pub shipping_address_city: String,
    pub shipping_address_province: Option<String>,
    pub shipping_address_postal_code: String,
    pub shipping_address_country: String,
}

/// A flattened row whose country code resolved to a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedOrderRow {
    pub order: FlatOrderRow,
    /// Country display name, e.g. `Germany`
    pub country: String,
}

/// Final published row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRow {
    pub invoice_number: String,
    pub creation_date: NaiveDate,
    pub shipping_address_name: String,
    pub items_in_order: u32,
    pub items: String,
    pub shipping_method: String,
    pub notes: Option<String>,
    pub print_label: String,
}

impl OutputRow {
    /// Render the row as cell values in [`OUTPUT_COLUMNS`] order
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.invoice_number.clone(),
            self.creation_date.format(DATE_FORMAT).to_string(),
            self.shipping_address_name.clone(),
            self.items_in_order.to_string(),
            self.items.clone(),
            self.shipping_method.clone(),
            self.notes.clone().unwrap_or_default(),
            self.print_label.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(notes: Option<&str>) -> OutputRow {
        OutputRow {
            invoice_number: "SNIP-1".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            shipping_address_name: "Jane Doe".to_string(),
            items_in_order: 3,
            items: "a, b, c".to_string(),
            shipping_method: "Standard".to_string(),
            notes: notes.map(str::to_string),
            print_label: "Jane Doe \n1 Main St \nSpringfield\n12345 \nUnited States".to_string(),
        }
    }

    #[test]
    fn test_cells_follow_column_order() {
        let cells = row(Some("fragile")).to_cells();
        assert_eq!(cells.len(), OUTPUT_COLUMNS.len());
        assert_eq!(cells[0], "SNIP-1");
        assert_eq!(cells[1], "2024-03-05");
        assert_eq!(cells[3], "3");
        assert_eq!(cells[4], "a, b, c");
        assert_eq!(cells[6], "fragile");
        assert!(cells[7].ends_with("United States"));
    }

    #[test]
    fn test_missing_notes_render_empty() {
        assert_eq!(row(None).to_cells()[6], "");
    }

    #[test]
    fn test_serialized_keys_match_header() {
        let value = serde_json::to_value(row(None)).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for column in OUTPUT_COLUMNS {
            assert!(keys.contains(&column), "missing column {column}");
        }
        assert_eq!(keys.len(), OUTPUT_COLUMNS.len());
    }
}
