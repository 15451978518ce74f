// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoints! {
  /// Retrieve the profile of a company.
  company_information(identifier: &str) => "company_information",
  /// Retrieve the profile of an internationally listed company.
  international_company_information(identifier: &str) => "international_company_information",
  /// Retrieve key metrics of a company.
  key_metrics(identifier: &str) => "key_metrics",
  /// Retrieve the historical market capitalization of a company.
  market_cap(identifier: &str) => "market_cap",
  /// Retrieve the historical employee count of a company.
  employee_count(identifier: &str) => "employee_count",
  /// Retrieve the compensation of a company's executives.
  executive_compensation(identifier: &str) => "executive_compensation",
  /// Retrieve information about the securities a company issued.
  securities_information(identifier: &str) => "securities_information",
}
