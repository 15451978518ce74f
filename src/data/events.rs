// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoints! {
  /// Retrieve the history of earnings releases of a company.
  earnings_releases(identifier: &str) => "earnings_releases",
  /// Retrieve information about a company's initial public offering.
  initial_public_offerings(identifier: &str) => "initial_public_offerings",
  /// Retrieve the history of stock splits of a company.
  stock_splits(identifier: &str) => "stock_splits",
  /// Retrieve the history of dividend payments of a company.
  dividends(identifier: &str) => "dividends",
  /// Retrieve the short interest in a company's stock.
  short_interest(identifier: &str) => "short_interest",
}
