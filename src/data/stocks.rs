// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;


Endpoints! {
  /// Retrieve the symbols of all stocks traded on US exchanges.
  stock_symbols() => "stock_symbols",
  /// Retrieve the symbols of stocks traded on international exchanges.
  international_stock_symbols() => "international_stock_symbols",
  /// Retrieve real-time quotes for a list of stocks.
  stock_quotes(identifiers: &[&str]) => "stock_quotes",
  /// Retrieve historical end-of-day prices of a stock.
  stock_prices(identifier: &str) => "stock_prices",
  /// Retrieve historical end-of-day prices of an internationally
  /// traded stock.
  international_stock_prices(identifier: &str) => "international_stock_prices",
  /// Retrieve the minute-by-minute prices of a stock on a given day.
  minute_prices(identifier: &str, date: NaiveDate) => "minute_prices",
  /// Retrieve the most recent prices of a stock.
  latest_prices(identifier: &str) => "latest_prices",
  /// Retrieve the symbols of securities traded over the counter.
  otc_symbols() => "otc_symbols",
  /// Retrieve historical prices of a security traded over the counter.
  otc_prices(identifier: &str) => "otc_prices",
  /// Retrieve the trading volume of a security traded over the
  /// counter.
  otc_volume(identifier: &str) => "otc_volume",
}
