//! # Order Check Core
//!
//! Core data structures for validating order datasets.
//!
//! This crate holds the types shared by every stage of a validation run: the
//! typed order record, per-row outcomes, run summaries and the configuration
//! that parameterizes the rule set.
//!
//! ## Key Concepts
//!
//! - **OrderRecord**: A normalized order row that passed every field rule
//! - **RowOutcome**: The classification of one raw row (valid or invalid)
//! - **RunSummary**: Total/valid/invalid counts and the resulting exit status
//! - **CheckConfig**: Market constants, file locations and notification settings
//!
//! ## Example
//!
//! ```rust
//! use orders_core::{CheckConfigBuilder, ExitStatus, RunSummary};
//!
//! let config = CheckConfigBuilder::new()
//!     .currency("INR")
//!     .ship_country("IN")
//!     .input("amazon_orders.csv")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.market.currency, "INR");
//!
//! let summary = RunSummary::new(3, 1);
//! assert_eq!(summary.total, 4);
//! assert_eq!(summary.exit_status(), ExitStatus::InvalidRows);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod outcome;
pub mod record;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use outcome::*;
pub use record::*;
