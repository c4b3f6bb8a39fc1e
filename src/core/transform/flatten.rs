//! Order flattening
//!
//! Converts each nested [`RawOrder`] into one [`FlatOrderRow`]: the creation
//! timestamp is reduced to its date and the line items collapse into a
//! comma-separated id list.

use crate::domain::{FlatOrderRow, RawOrder, Result, ShiplabelError};
use chrono::NaiveDateTime;

/// Exact timestamp shape the orders API returns
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const ITEM_SEPARATOR: &str = ", ";

/// Flatten raw orders, one row per order, preserving input order
///
/// # Errors
///
/// Returns [`ShiplabelError::Schema`] naming the offending invoice if a
/// creation date does not match [`CREATION_DATE_FORMAT`].
///
/// # Examples
///
/// ```
/// use shiplabel::core::transform::extract_orders;
///
/// let rows = extract_orders(&[]).unwrap();
/// assert!(rows.is_empty());
/// ```
pub fn extract_orders(orders: &[RawOrder]) -> Result<Vec<FlatOrderRow>> {
    let rows = orders
        .iter()
        .map(flatten_order)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(orders = orders.len(), rows = rows.len(), "Flattened orders");
    Ok(rows)
}

fn flatten_order(order: &RawOrder) -> Result<FlatOrderRow> {
    let creation_date = NaiveDateTime::parse_from_str(&order.creation_date, CREATION_DATE_FORMAT)
        .map_err(|e| {
            ShiplabelError::Schema(format!(
                "order {}: creationDate '{}' is not {CREATION_DATE_FORMAT}: {e}",
                order.invoice_number, order.creation_date
            ))
        })?
        .date();

    Ok(FlatOrderRow {
        invoice_number: order.invoice_number.clone(),
        creation_date,
        shipping_address_name: order.shipping_address_name.clone(),
        items_in_order: order.number_of_items_in_order,
        items: join_item_ids(order),
        shipping_method: order.shipping_method.clone(),
        notes: order.notes.clone(),
        shipping_address_company_name: order.shipping_address_company_name.clone(),
        shipping_address_address1: order.shipping_address_address1.clone(),
        shipping_address_address2: order.shipping_address_address2.clone(),
        shipping_address_city: order.shipping_address_city.clone(),
        shipping_address_province: order.shipping_address_province.clone(),
        shipping_address_postal_code: order.shipping_address_postal_code.clone(),
        shipping_address_country: order.shipping_address_country.clone(),
    })
}

/// Item ids of this order only, joined with `", "`
fn join_item_ids(order: &RawOrder) -> String {
    let mut items = String::new();
    for (i, item) in order.items.iter().enumerate() {
        if i > 0 {
            items.push_str(ITEM_SEPARATOR);
        }
        items.push_str(&item.id);
    }
    items
}
