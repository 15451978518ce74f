// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoints! {
  /// Retrieve the symbols of all supported exchange traded funds.
  etf_symbols() => "etf_symbols",
  /// Retrieve real-time quotes for a list of exchange traded funds.
  etf_quotes(identifiers: &[&str]) => "etf_quotes",
  /// Retrieve historical prices of an exchange traded fund.
  etf_prices(identifier: &str) => "etf_prices",
  /// Retrieve the holdings of an exchange traded fund.
  etf_holdings(identifier: &str) => "etf_holdings",
  /// Retrieve the symbols of all supported mutual funds.
  mutual_fund_symbols() => "mutual_fund_symbols",
  /// Retrieve the holdings of a mutual fund.
  mutual_fund_holdings(identifier: &str) => "mutual_fund_holdings",
  /// Retrieve statistics about a mutual fund.
  mutual_fund_statistics(identifier: &str) => "mutual_fund_statistics",
}
