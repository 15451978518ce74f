// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;


Endpoints! {
  /// Retrieve the earnings releases scheduled for a day.
  earnings_calendar(date: NaiveDate) => "earnings_calendar",
  /// Retrieve the initial public offerings scheduled for a day.
  ipo_calendar(date: NaiveDate) => "ipo_calendar",
  /// Retrieve the stock splits scheduled for a day.
  splits_calendar(date: NaiveDate) => "splits_calendar",
  /// Retrieve the dividend payments scheduled for a day.
  dividends_calendar(date: NaiveDate) => "dividends_calendar",
  /// Retrieve the economic events scheduled for a day.
  economic_calendar(date: NaiveDate) => "economic_calendar",
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::StatusCode;

  use serde_json::json;

  use test_log::test;

  use crate::mock::MockServer;


  /// Check that a calendar is requested for the provided day only.
  #[test(tokio::test)]
  async fn request_earnings_calendar() {
    let server = MockServer::start(
      StatusCode::OK,
      r#"[{"symbol":"XOM","date":"2025-10-31","eps_estimate":null}]"#,
    )
    .await;
    let client = server.client("TESTKEY");

    let date = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
    let earnings = client.earnings_calendar(date).await.unwrap();
    assert_eq!(earnings.len(), 1);
    assert_eq!(earnings[0]["eps_estimate"], json!(null));

    let request = server.last_request();
    assert_eq!(request.path(), "/earnings_calendar/");
    assert_eq!(request.query(), "date=2025-10-31&key=TESTKEY");
  }
}
