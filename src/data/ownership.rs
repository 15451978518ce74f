// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoints! {
  /// Retrieve the transactions of a company's insiders.
  insider_transactions(identifier: &str) => "insider_transactions",
  /// Retrieve proposed sales of restricted securities of a company.
  proposed_sales(identifier: &str) => "proposed_sales",
  /// Retrieve trades in a company's stock by members of the Senate.
  senate_trading(identifier: &str) => "senate_trading",
  /// Retrieve trades in a company's stock by members of the House of
  /// Representatives.
  house_trading(identifier: &str) => "house_trading",
  /// Retrieve the institutional holdings of a company's stock.
  institutional_holdings(identifier: &str) => "institutional_holdings",
  /// Retrieve the names of institutional investors.
  institutional_investor_names() => "institutional_investor_names",
  /// Retrieve portfolio statistics of an institutional investor,
  /// identified by its CIK.
  institutional_portfolio_statistics(identifier: &str) => "institutional_portfolio_statistics",
  /// Retrieve the names of registered investment advisers.
  investment_adviser_names() => "investment_adviser_names",
  /// Retrieve information about a registered investment adviser,
  /// identified by its name.
  investment_adviser_information(identifier: &str) => "investment_adviser_information",
}


#[cfg(test)]
mod tests {
  use http::StatusCode;

  use test_log::test;

  use crate::mock::MockServer;


  /// Check that identifiers with spaces and commas survive encoding.
  #[test(tokio::test)]
  async fn request_investment_adviser_information() {
    let server = MockServer::start(StatusCode::OK, r#"{"name":"BLACKROCK"}"#).await;
    let client = server.client("TESTKEY");

    let name = "BLACKROCK INVESTMENT MANAGEMENT, LLC";
    let info = client.investment_adviser_information(name).await.unwrap();
    // A bare object is treated like a list with a single record.
    assert_eq!(info.len(), 1);

    let request = server.last_request();
    assert_eq!(request.params()["identifier"], name);
  }
}
