// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoints! {
  /// Retrieve the option chain of an underlying security.
  option_chain(identifier: &str) => "option_chain",
  /// Retrieve historical prices of an option contract.
  option_prices(identifier: &str) => "option_prices",
  /// Retrieve the greeks of an option contract.
  option_greeks(identifier: &str) => "option_greeks",
  /// Retrieve the symbols of all supported futures.
  futures_symbols() => "futures_symbols",
  /// Retrieve historical prices of a futures contract.
  futures_prices(identifier: &str) => "futures_prices",
  /// Retrieve the symbols of all supported commodities.
  commodity_symbols() => "commodity_symbols",
  /// Retrieve historical prices of a commodity.
  commodity_prices(identifier: &str) => "commodity_prices",
}
