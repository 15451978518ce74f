// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::endpoint::Endpoint;

/// Market calendars for earnings, IPOs, splits, dividends, and economic
/// events.
pub mod calendars;
/// Company profiles and key metrics.
pub mod companies;
/// Crypto currency information and prices.
pub mod crypto;
/// Options, futures, and commodities.
pub mod derivatives;
/// Environmental, social, and governance data.
pub mod esg;
/// Historical corporate events for individual companies.
pub mod events;
/// Exchange traded funds and mutual funds.
pub mod funds;
/// Market indices.
pub mod indices;
/// Insider, congressional, and institutional ownership.
pub mod ownership;
/// Financial ratios.
pub mod ratios;
/// Financial statements.
pub mod statements;
/// Stock symbols, quotes, and prices.
pub mod stocks;

/// The API base URL.
pub(crate) const API_BASE_URL: &str = "https://financialdata.net/api/v1/";
/// The query parameter carrying the API key.
pub(crate) const PARAM_KEY: &str = "key";


/// Retrieve an iterator over all endpoints supported by the client.
pub fn catalog() -> impl Iterator<Item = &'static Endpoint> {
  calendars::ENDPOINTS
    .iter()
    .chain(companies::ENDPOINTS)
    .chain(crypto::ENDPOINTS)
    .chain(derivatives::ENDPOINTS)
    .chain(esg::ENDPOINTS)
    .chain(events::ENDPOINTS)
    .chain(funds::ENDPOINTS)
    .chain(indices::ENDPOINTS)
    .chain(ownership::ENDPOINTS)
    .chain(ratios::ENDPOINTS)
    .chain(statements::ENDPOINTS)
    .chain(stocks::ENDPOINTS)
}
