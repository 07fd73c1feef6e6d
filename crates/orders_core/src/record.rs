//! Order record types.
//!
//! This module contains the typed representation of an order row and the
//! column names of the order table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column holding the order identifier.
pub const ORDER_ID: &str = "order_id";
/// Column holding the ordered quantity.
pub const QTY: &str = "qty";
/// Column holding the order amount.
pub const AMOUNT: &str = "amount";
/// Column holding the currency code.
pub const CURRENCY: &str = "currency";
/// Column holding the destination country code.
pub const SHIP_COUNTRY: &str = "ship_country";
/// Column holding the order date (`MM-DD-YY`).
pub const DATE: &str = "date";

/// Required columns of an order table, in output order.
pub const ORDER_COLUMNS: [&str; 6] = [ORDER_ID, QTY, AMOUNT, CURRENCY, SHIP_COUNTRY, DATE];

/// A raw row as read from the input table: column name to raw text.
pub type RawRow = HashMap<String, String>;

/// A normalized order that satisfied every field rule.
///
/// Field order matches [`ORDER_COLUMNS`] so the struct serializes directly
/// into the valid-rows table.
///
/// # Example
///
/// ```rust
/// use orders_core::OrderRecord;
///
/// let order = OrderRecord {
///     order_id: "A1".to_string(),
///     qty: 2,
///     amount: 100.0,
///     currency: "INR".to_string(),
///     ship_country: "IN".to_string(),
///     date: "01-15-24".to_string(),
/// };
/// assert_eq!(order.order_id, "A1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier, never blank
    pub order_id: String,

    /// Ordered quantity
    pub qty: u64,

    /// Order amount, finite and non-negative
    pub amount: f64,

    /// Currency code, equal to the configured market currency
    pub currency: String,

    /// Destination country, equal to the configured market country
    pub ship_country: String,

    /// Order date as written in the input (`MM-DD-YY`)
    pub date: String,
}
