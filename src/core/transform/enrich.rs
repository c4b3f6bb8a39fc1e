//! Country enrichment and label rendering
//!
//! Rows whose country code has no entry in the reference table are dropped.
//! The surviving rows keep their flattened order.

use crate::domain::{CountryReference, EnrichedOrderRow, FlatOrderRow, OutputRow};

/// Inner join of flattened rows against the country reference
///
/// Matching is exact on the code string. Unmatched rows are logged at debug
/// level and omitted; they are not errors.
pub fn join_countries(
    rows: Vec<FlatOrderRow>,
    reference: &CountryReference,
) -> Vec<EnrichedOrderRow> {
    rows.into_iter()
        .filter_map(|order| match reference.name_for(&order.shipping_address_country) {
            Some(name) => Some(EnrichedOrderRow {
                country: name.to_string(),
                order,
            }),
            None => {
                tracing::debug!(
                    invoice = %order.invoice_number,
                    country_code = %order.shipping_address_country,
                    "Dropping order with unknown country code"
                );
                None
            }
        })
        .collect()
}

/// Render the five-line shipping label
///
/// ```text
/// {name} {company}
/// {address1} {address2}
/// {city}
/// {postal code} {province}
/// {country}
/// ```
///
/// Absent optional fields render as empty strings; the separating space is
/// kept either way.
pub fn print_label(row: &EnrichedOrderRow) -> String {
    let order = &row.order;
    format!(
        "{} {}\n{} {}\n{}\n{} {}\n{}",
        order.shipping_address_name,
        or_empty(&order.shipping_address_company_name),
        or_empty(&order.shipping_address_address1),
        or_empty(&order.shipping_address_address2),
        order.shipping_address_city,
        order.shipping_address_postal_code,
        or_empty(&order.shipping_address_province),
        row.country,
    )
}

/// Reduce an enriched row to the published columns
pub fn project(row: EnrichedOrderRow) -> OutputRow {
    let print_label = print_label(&row);
    let order = row.order;
    OutputRow {
        invoice_number: order.invoice_number,
        creation_date: order.creation_date,
        shipping_address_name: order.shipping_address_name,
        items_in_order: order.items_in_order,
        items: order.items,
        shipping_method: order.shipping_method,
        notes: order.notes,
        print_label,
    }
}

/// Join, label and project in one pass
///
/// # Examples
///
/// ```
/// use shiplabel::core::transform::clean_orders;
/// use shiplabel::domain::CountryReference;
///
/// let reference: CountryReference = [("DE", "Germany")].into_iter().collect();
/// assert!(clean_orders(Vec::new(), &reference).is_empty());
/// ```
pub fn clean_orders(rows: Vec<FlatOrderRow>, reference: &CountryReference) -> Vec<OutputRow> {
    join_countries(rows, reference)
        .into_iter()
        .map(project)
        .collect()
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
