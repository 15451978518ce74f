// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::env::var_os;
use std::ffi::OsString;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use url::Url;

use crate::data::API_BASE_URL;
use crate::Error;

/// The base URL to the API to use.
const ENV_API_URL: &str = "FINANCIAL_DATA_API_BASE_URL";
/// The environment variable representing the API key.
const ENV_API_KEY: &str = "FINANCIAL_DATA_API_KEY";


/// An object encapsulating the information used for working with the
/// FinancialData.Net API.
#[derive(Clone, PartialEq)]
pub struct ApiInfo {
  /// The base URL for the API.
  pub(crate) base_url: Url,
  /// The key to use for authentication.
  pub(crate) api_key: String,
}

impl ApiInfo {
  /// Create an `ApiInfo` from the required data.
  ///
  /// # Errors
  /// - [`Error::Url`](crate::Error::Url) If `base_url` cannot be parsed
  ///   into a [`url::Url`](url::Url).
  /// - [`Error::Config`](crate::Error::Config) If `api_key` is empty or
  ///   `base_url` cannot have a path.
  pub fn from_parts(base_url: impl AsRef<str>, api_key: impl ToString) -> Result<Self, Error> {
    let base_url = Url::parse(base_url.as_ref())?;
    if base_url.cannot_be_a_base() {
      return Err(Error::Config(
        format!("base URL {} cannot be used as a base", base_url).into(),
      ))
    }

    let api_key = api_key.to_string();
    if api_key.trim().is_empty() {
      return Err(Error::Config("API key must not be empty".into()))
    }

    Ok(Self { base_url, api_key })
  }

  /// Create an `ApiInfo` for the default API base URL.
  #[inline]
  pub fn new(api_key: impl ToString) -> Result<Self, Error> {
    Self::from_parts(API_BASE_URL, api_key)
  }

  /// Create an `ApiInfo` object with information from the environment.
  ///
  /// This constructor retrieves API related information from the
  /// environment and performs some preliminary validation on it. The
  /// following information is used:
  /// - the API base URL is retrieved from the
  ///   FINANCIAL_DATA_API_BASE_URL variable, if set
  /// - the API key is retrieved from the FINANCIAL_DATA_API_KEY
  ///   variable
  pub fn from_env() -> Result<Self, Error> {
    let base_url = var_os(ENV_API_URL)
      .unwrap_or_else(|| OsString::from(API_BASE_URL))
      .into_string()
      .map_err(|_| {
        Error::Config(format!("{} environment variable is not a valid string", ENV_API_URL).into())
      })?;

    let api_key = var_os(ENV_API_KEY)
      .ok_or_else(|| Error::Config(format!("{} environment variable not found", ENV_API_KEY).into()))?
      .into_string()
      .map_err(|_| {
        Error::Config(format!("{} environment variable is not a valid string", ENV_API_KEY).into())
      })?;

    Self::from_parts(base_url, api_key)
  }

  /// Retrieve the base URL requests are made against.
  #[inline]
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

impl Debug for ApiInfo {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("ApiInfo")
      .field("base_url", &self.base_url.as_str())
      .field("api_key", &"<masked>")
      .finish()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use std::env::remove_var;
  use std::env::set_var;

  use serial_test::serial;


  /// Check that we can create an `ApiInfo` for the default base URL.
  #[test]
  fn default_base_url() {
    let api_info = ApiInfo::new("TESTKEY").unwrap();
    assert_eq!(api_info.base_url().as_str(), API_BASE_URL);
    assert_eq!(api_info.api_key, "TESTKEY");
  }

  /// Verify that an empty API key is rejected.
  #[test]
  fn empty_api_key() {
    let err = ApiInfo::new("").unwrap_err();
    assert!(matches!(err, Error::Config(..)), "{err:?}");

    let err = ApiInfo::new("  ").unwrap_err();
    assert!(matches!(err, Error::Config(..)), "{err:?}");
  }

  /// Verify that invalid base URLs are rejected.
  #[test]
  fn invalid_base_url() {
    let err = ApiInfo::from_parts("not a url", "TESTKEY").unwrap_err();
    assert!(matches!(err, Error::Url(..)), "{err:?}");

    let err = ApiInfo::from_parts("mailto:someone@example.com", "TESTKEY").unwrap_err();
    assert!(matches!(err, Error::Config(..)), "{err:?}");
  }

  /// Make sure that the API key does not end up in debug output.
  #[test]
  fn debug_masks_api_key() {
    let api_info = ApiInfo::new("SECRETKEY").unwrap();
    let string = format!("{api_info:?}");
    assert!(!string.contains("SECRETKEY"), "{string}");
    assert!(string.contains("<masked>"), "{string}");
  }

  /// Check that we can create an `ApiInfo` from the environment.
  #[test]
  #[serial]
  fn from_env() {
    set_var(ENV_API_KEY, "ENVKEY");
    set_var(ENV_API_URL, "http://localhost:8080/api/v1/");

    let api_info = ApiInfo::from_env().unwrap();
    assert_eq!(api_info.api_key, "ENVKEY");
    assert_eq!(api_info.base_url().as_str(), "http://localhost:8080/api/v1/");

    remove_var(ENV_API_URL);
    let api_info = ApiInfo::from_env().unwrap();
    assert_eq!(api_info.base_url().as_str(), API_BASE_URL);

    remove_var(ENV_API_KEY);
  }

  /// Verify that a missing API key in the environment is reported.
  #[test]
  #[serial]
  fn from_env_missing_key() {
    remove_var(ENV_API_KEY);

    let err = ApiInfo::from_env().unwrap_err();
    match err {
      Error::Config(message) => assert!(message.contains(ENV_API_KEY), "{message}"),
      _ => panic!("Received unexpected error: {err:?}"),
    }
  }
}
