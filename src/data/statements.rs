// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Period;


Endpoints! {
  /// Retrieve the income statements of a company.
  ///
  /// Without a `period` the API's default reporting period is used.
  income_statements(identifier: &str, period: Option<Period>) => "income_statements",
  /// Retrieve the balance sheet statements of a company.
  balance_sheet_statements(identifier: &str, period: Option<Period>) => "balance_sheet_statements",
  /// Retrieve the cash flow statements of a company.
  cash_flow_statements(identifier: &str, period: Option<Period>) => "cash_flow_statements",
  /// Retrieve the income statements of an internationally listed
  /// company.
  international_income_statements(identifier: &str, period: Option<Period>) => "international_income_statements",
  /// Retrieve the balance sheet statements of an internationally listed
  /// company.
  international_balance_sheet_statements(identifier: &str, period: Option<Period>) => "international_balance_sheet_statements",
  /// Retrieve the cash flow statements of an internationally listed
  /// company.
  international_cash_flow_statements(identifier: &str, period: Option<Period>) => "international_cash_flow_statements",
}
