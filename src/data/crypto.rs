// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;


Endpoints! {
  /// Retrieve the symbols of all supported crypto currencies.
  crypto_symbols() => "crypto_symbols",
  /// Retrieve general information about a crypto currency.
  crypto_information(identifier: &str) => "crypto_information",
  /// Retrieve real-time quotes for a list of crypto currency pairs.
  crypto_quotes(identifiers: &[&str]) => "crypto_quotes",
  /// Retrieve historical prices of a crypto currency pair.
  crypto_prices(identifier: &str) => "crypto_prices",
  /// Retrieve the minute-by-minute prices of a crypto currency pair on
  /// a given day.
  crypto_minute_prices(identifier: &str, date: NaiveDate) => "crypto_minute_prices",
}
