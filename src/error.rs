// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::str::from_utf8;

use http::Error as HttpError;
use http::StatusCode as HttpStatusCode;
use hyper::Error as HyperError;
use hyper_util::client::legacy::Error as HyperUtilError;
use serde_json::Error as JsonError;
use serde_urlencoded::ser::Error as UrlEncodeError;
use thiserror::Error;
use url::ParseError;

use crate::Str;


/// The body of an HTTP response, as reported by the API alongside a
/// failure status.
#[derive(Clone, Debug, Error, PartialEq)]
pub struct HttpBody(pub(crate) Vec<u8>);

impl HttpBody {
  /// Retrieve the raw bytes of the body.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl Display for HttpBody {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    match from_utf8(&self.0) {
      Ok(s) => fmt.write_str(s)?,
      Err(b) => write!(fmt, "{:?}", b)?,
    }
    Ok(())
  }
}


/// The error type as used by this crate.
#[derive(Debug, Error)]
pub enum Error {
  /// The client configuration is invalid, e.g., because the API key is
  /// missing.
  #[error("{0}")]
  Config(Str),
  /// An HTTP related error encountered while constructing a request.
  #[error("encountered an HTTP related error")]
  Http(
    #[from]
    #[source]
    HttpError,
  ),
  /// An error reported by the `hyper` crate.
  #[error("the hyper crate reported an error")]
  Hyper(
    #[from]
    #[source]
    HyperError,
  ),
  /// An error reported by the `hyper-util` crate while issuing a
  /// request.
  #[error("the hyper-util crate reported an error")]
  HyperUtil(
    #[from]
    #[source]
    HyperUtilError,
  ),
  /// We encountered an HTTP status code that represents a failure.
  #[error("encountered an unexpected HTTP status: {0}")]
  HttpStatus(HttpStatusCode, #[source] HttpBody),
  /// An I/O error, e.g., while decompressing a response body.
  #[error("encountered an I/O error")]
  Io(
    #[from]
    #[source]
    IoError,
  ),
  /// A JSON conversion error.
  #[error("a JSON conversion failed")]
  Json(
    #[from]
    #[source]
    JsonError,
  ),
  /// An URL parsing error.
  #[error("failed to parse the URL")]
  Url(
    #[from]
    #[source]
    ParseError,
  ),
  /// The query parameters could not be encoded.
  #[error("failed to encode the query string")]
  UrlEncode(
    #[from]
    #[source]
    UrlEncodeError,
  ),
}

impl Error {
  /// Retrieve the HTTP status code, if this error was caused by the
  /// API reporting a failure.
  pub fn status(&self) -> Option<HttpStatusCode> {
    match self {
      Self::HttpStatus(status, _) => Some(*status),
      _ => None,
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::from_str as from_json;


  /// Check that an HTTP body is displayed as text when possible.
  #[test]
  fn display_http_body() {
    let body = HttpBody(b"invalid api key".to_vec());
    assert_eq!(body.to_string(), "invalid api key");

    let body = HttpBody(vec![0xff, 0xfe]);
    assert!(!body.to_string().is_empty());
  }

  /// Make sure that the status code is only reported for API errors.
  #[test]
  fn error_status() {
    let err = Error::HttpStatus(HttpStatusCode::UNAUTHORIZED, HttpBody(Vec::new()));
    assert_eq!(err.status(), Some(HttpStatusCode::UNAUTHORIZED));

    let err = Error::from(from_json::<u8>("foo").unwrap_err());
    assert_eq!(err.status(), None);
  }
}
