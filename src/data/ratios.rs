// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Period;


Endpoints! {
  /// Retrieve the liquidity ratios of a company.
  liquidity_ratios(identifier: &str, period: Option<Period>) => "liquidity_ratios",
  /// Retrieve the solvency ratios of a company.
  solvency_ratios(identifier: &str, period: Option<Period>) => "solvency_ratios",
  /// Retrieve the efficiency ratios of a company.
  efficiency_ratios(identifier: &str, period: Option<Period>) => "efficiency_ratios",
  /// Retrieve the profitability ratios of a company.
  profitability_ratios(identifier: &str, period: Option<Period>) => "profitability_ratios",
  /// Retrieve the valuation ratios of a company.
  valuation_ratios(identifier: &str, period: Option<Period>) => "valuation_ratios",
}
