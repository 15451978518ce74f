// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;


Endpoints! {
  /// Retrieve the ESG scores of a company.
  esg_scores(identifier: &str) => "esg_scores",
  /// Retrieve the ESG ratings of a company.
  esg_ratings(identifier: &str) => "esg_ratings",
  /// Retrieve ESG scores aggregated per industry, as of a given day.
  industry_esg_scores(date: NaiveDate) => "industry_esg_scores",
}
