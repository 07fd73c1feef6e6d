//! # Order Validator
//!
//! Validation engine for order tables. This crate provides:
//!
//! - Field rules (non-empty, non-negative integer/decimal, fixed constants, dates)
//! - Row validation producing a typed record or a full list of field errors
//! - Stable partitioning of a table into valid and invalid rows
//!
//! ## Example
//!
//! ```rust
//! use orders_core::{MarketRules, RawRow};
//! use orders_validator::{OrderTable, Partitioner};
//!
//! let row: RawRow = [
//!     ("order_id", "A1"),
//!     ("qty", "2"),
//!     ("amount", "100.0"),
//!     ("currency", "INR"),
//!     ("ship_country", "IN"),
//!     ("date", "01-15-24"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let table = OrderTable::with_standard_headers(vec![row]);
//! let partitioner = Partitioner::for_market(&MarketRules::default()).unwrap();
//! let partition = partitioner.partition(&table);
//!
//! assert_eq!(partition.valid.len(), 1);
//! assert!(partition.invalid.is_empty());
//! ```

mod dataset;
mod error;
mod partition;
mod rules;
mod schema;

pub use dataset::*;
pub use error::*;
pub use partition::*;
pub use rules::*;
pub use schema::*;
