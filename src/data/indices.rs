// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoints! {
  /// Retrieve the symbols of all supported market indices.
  index_symbols() => "index_symbols",
  /// Retrieve real-time quotes for a list of indices.
  index_quotes(identifiers: &[&str]) => "index_quotes",
  /// Retrieve historical prices of an index.
  index_prices(identifier: &str) => "index_prices",
  /// Retrieve the constituents of an index.
  index_constituents(identifier: &str) => "index_constituents",
}
