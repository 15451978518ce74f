// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(clippy::unreadable_literal)]
#![warn(
  bad_style,
  dead_code,
  future_incompatible,
  improper_ctypes,
  late_bound_lifetime_arguments,
  missing_copy_implementations,
  missing_debug_implementations,
  missing_docs,
  no_mangle_generic_items,
  non_shorthand_field_patterns,
  nonstandard_style,
  overflowing_literals,
  path_statements,
  patterns_in_fns_without_body,
  proc_macro_derive_resolution_fallback,
  renamed_and_removed_lints,
  rust_2018_compatibility,
  rust_2018_idioms,
  stable_features,
  trivial_bounds,
  trivial_numeric_casts,
  type_alias_bounds,
  tyvar_behind_raw_pointer,
  unconditional_recursion,
  unreachable_code,
  unreachable_patterns,
  unstable_features,
  unstable_name_collisions,
  unused,
  unused_comparisons,
  unused_import_braces,
  unused_lifetimes,
  unused_qualifications,
  unused_results,
  while_true,
  rustdoc::broken_intra_doc_links
)]

//! A crate for interacting with the FinancialData.Net API.
//!
//! All data is retrieved through a [`Client`], which provides one
//! method per API endpoint, e.g., [`Client::stock_prices`], as well as
//! the generic [`Client::get_data`]. Every method returns the records
//! the API reported, without imposing any schema on them.
//!
//! ```no_run
//! # async fn example() -> Result<(), fdn::Error> {
//! use fdn::ApiInfo;
//! use fdn::Client;
//!
//! // Reads the API key from the FINANCIAL_DATA_API_KEY variable.
//! let api_info = ApiInfo::from_env()?;
//! let client = Client::new(api_info);
//!
//! let prices = client.stock_prices("MSFT").await?;
//! for record in prices {
//!   println!("{} closed at {}", record["date"], record["close"]);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod endpoint;

/// A module comprising the API's endpoints, grouped by the kind of data
/// they provide.
pub mod data;

mod api_info;
mod client;
mod error;
#[cfg(test)]
mod mock;
mod query;

use std::borrow::Cow;

pub use crate::api_info::ApiInfo;
pub use crate::client::Builder;
pub use crate::client::Client;
pub use crate::endpoint::Endpoint;
pub use crate::error::Error;
pub use crate::error::HttpBody;
pub use crate::query::IntoParam;
pub use crate::query::ParamValue;
pub use crate::query::Period;
pub use crate::query::Query;

/// A single record as returned by the API, mapping field names to
/// values.
pub type Record = serde_json::Map<String, serde_json::Value>;
/// The records returned by a single request, in the order reported by
/// the API.
pub type Records = Vec<Record>;

type Str = Cow<'static, str>;
