// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::from_utf8;

use http::request::Builder as HttpRequestBuilder;
use http::HeaderValue;
use http::Method;
use http::Request;
use http::Response;
use http::StatusCode;
use http::Uri;
use http_body_util::BodyExt;
use http_body_util::Full;

use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::Error as HyperError;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Builder as HttpClientBuilder;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::TokioExecutor;

use serde::Deserialize;
use serde_json::from_slice as from_json;

use tracing::debug;
use tracing::field::debug;
use tracing::field::DebugValue;
use tracing::span;
use tracing::trace;
use tracing::Level;
use tracing_futures::Instrument;

use url::form_urlencoded::parse as parse_query;
use url::form_urlencoded::Serializer as QuerySerializer;

use crate::api_info::ApiInfo;
use crate::data::PARAM_KEY;
use crate::error::HttpBody;
use crate::Error;
use crate::Query;
use crate::Record;
use crate::Records;


/// The value shown in place of the API key in any diagnostics.
const MASKED: &str = "<masked>";


/// A type providing a display representation of a request URI, with
/// the API key being masked out.
struct MaskedUri<'u> {
  uri: &'u Uri,
}

impl Display for MaskedUri<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    if let (Some(scheme), Some(authority)) = (self.uri.scheme_str(), self.uri.authority()) {
      write!(f, "{scheme}://{authority}")?;
    }
    f.write_str(self.uri.path())?;

    if let Some(query) = self.uri.query() {
      let pairs = parse_query(query.as_bytes()).map(|(name, value)| {
        if name == PARAM_KEY {
          (name, Cow::Borrowed(MASKED))
        } else {
          (name, value)
        }
      });
      let query = QuerySerializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
      write!(f, "?{query}")?;
    }
    Ok(())
  }
}


/// A type providing a debug representation of an HTTP request, with
/// sensitive data being masked out.
struct DebugRequest<'r> {
  request: &'r Request<Full<Bytes>>,
}

impl Debug for DebugRequest<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let uri = MaskedUri {
      uri: self.request.uri(),
    }
    .to_string();

    f.debug_struct("Request")
      .field("method", self.request.method())
      .field("uri", &uri)
      .field("version", &self.request.version())
      .field("headers", self.request.headers())
      .finish()
  }
}


/// Emit a debug representation of an HTTP request.
fn debug_request(request: &Request<Full<Bytes>>) -> DebugValue<DebugRequest<'_>> {
  debug(DebugRequest { request })
}


/// The shapes of a successful response body we know how to handle.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
  /// The regular case: a list of records.
  Many(Records),
  /// A single record not wrapped in a list.
  One(Record),
}


/// Evaluate an HTTP response, given its status and body.
fn evaluate(status: StatusCode, body: &[u8]) -> Result<Records, Error> {
  if !status.is_success() {
    return Err(Error::HttpStatus(status, HttpBody(body.to_vec())))
  }

  match from_json::<Payload>(body)? {
    Payload::Many(records) => Ok(records),
    Payload::One(record) => Ok(vec![record]),
  }
}


/// A builder for creating customized `Client` objects.
#[derive(Debug)]
pub struct Builder {
  builder: HttpClientBuilder,
}

impl Builder {
  /// Adjust the maximum number of idle connections per host.
  #[inline]
  pub fn max_idle_per_host(&mut self, max_idle: usize) -> &mut Self {
    let _ = self.builder.pool_max_idle_per_host(max_idle);
    self
  }

  /// Build the final `Client` object.
  pub fn build(&self, api_info: ApiInfo) -> Client {
    let https = HttpsConnector::new();
    let client = self.builder.build(https);

    Client { api_info, client }
  }
}

impl Default for Builder {
  #[cfg(test)]
  fn default() -> Self {
    // Idle connections are kept alive by tasks on the runtime and tests
    // spin up a fresh runtime (and server) each. Don't keep any around.
    let mut builder = HttpClient::builder(TokioExecutor::new());
    let _ = builder.pool_max_idle_per_host(0);

    Self { builder }
  }

  #[cfg(not(test))]
  #[inline]
  fn default() -> Self {
    Self {
      builder: HttpClient::builder(TokioExecutor::new()),
    }
  }
}


/// A `Client` is the entity used by clients of this module for
/// interacting with the FinancialData.Net API.
///
/// Besides the generic [`get_data`](Client::get_data) method, the
/// client provides one method per API endpoint. See the modules in
/// [`data`](crate::data) for the available endpoints.
#[derive(Debug)]
pub struct Client {
  api_info: ApiInfo,
  client: HttpClient<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl Client {
  /// Instantiate a new `Builder` which allows for creating a customized `Client`.
  #[inline]
  pub fn builder() -> Builder {
    Builder::default()
  }

  /// Create a new `Client` using the given API information.
  #[inline]
  pub fn new(api_info: ApiInfo) -> Self {
    Builder::default().build(api_info)
  }

  /// Add "gzip" as an accepted encoding to the request.
  #[cfg(feature = "gzip")]
  fn maybe_add_gzip_header(request: &mut Request<Full<Bytes>>) {
    use http::header::ACCEPT_ENCODING;

    let _ = request
      .headers_mut()
      .insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
  }

  /// An implementation stub not actually doing anything.
  #[cfg(not(feature = "gzip"))]
  fn maybe_add_gzip_header(_request: &mut Request<Full<Bytes>>) {}

  /// Create a `Request` to the given endpoint.
  fn request(&self, endpoint: &str, query: &Query) -> Result<Request<Full<Bytes>>, Error> {
    let mut url = self.api_info.base_url.clone();
    let _ = url
      .path_segments_mut()
      .map_err(|()| Error::Config("base URL cannot be used as a base".into()))?
      .pop_if_empty()
      .push(endpoint)
      // The API expects a trailing slash.
      .push("");

    // Authentication happens by means of the API key in the query.
    let mut query = query.clone();
    let _ = query.push(PARAM_KEY, self.api_info.api_key.as_str());
    let query = query.encode()?;
    url.set_query(Some(query.as_str()));

    let mut request = HttpRequestBuilder::new()
      .method(Method::GET)
      .uri(url.as_str())
      .body(Full::new(Bytes::new()))?;

    Self::maybe_add_gzip_header(&mut request);
    Ok(request)
  }

  async fn retrieve_raw_body(response: Incoming) -> Result<Bytes, HyperError> {
    let bytes = BodyExt::collect(response).await?.to_bytes();
    Ok(bytes)
  }

  /// Retrieve the HTTP body, possible uncompressing it if it was gzip
  /// encoded.
  #[cfg(feature = "gzip")]
  async fn retrieve_body(response: Response<Incoming>) -> Result<Bytes, Error> {
    use async_compression::futures::bufread::GzipDecoder;
    use futures::AsyncReadExt as _;
    use http::header::CONTENT_ENCODING;

    let (parts, body) = response.into_parts();
    let encoding = parts.headers.get(CONTENT_ENCODING);

    let bytes = Self::retrieve_raw_body(body).await?;
    let bytes = match encoding {
      Some(value) if value == HeaderValue::from_static("gzip") => {
        let mut buffer = Vec::new();
        let _count = GzipDecoder::new(&*bytes).read_to_end(&mut buffer).await?;
        buffer.into()
      },
      _ => bytes,
    };

    Ok(bytes)
  }

  /// Retrieve the HTTP body.
  #[cfg(not(feature = "gzip"))]
  async fn retrieve_body(response: Response<Incoming>) -> Result<Bytes, Error> {
    let bytes = Self::retrieve_raw_body(response.into_body()).await?;
    Ok(bytes)
  }

  /// Retrieve the records of an endpoint.
  ///
  /// This is the generic method all endpoint specific methods delegate
  /// to. `endpoint` is the name of the endpoint, as it appears in the
  /// request path, and `query` contains the parameters to pass along.
  /// Exactly one request is issued; failures are not retried.
  ///
  /// # Errors
  /// - [`Error::HttpStatus`] if the API reported a failure status
  /// - [`Error::Json`] if the response body could not be decoded
  /// - [`Error::HyperUtil`] and [`Error::Hyper`] for transport failures
  pub async fn get_data(&self, endpoint: &str, query: &Query) -> Result<Records, Error> {
    let request = self.request(endpoint, query)?;
    let span = span!(
      Level::INFO,
      "get_data",
      endpoint = display(endpoint),
      uri = display(MaskedUri {
        uri: request.uri()
      })
    );
    self.issue(request).instrument(span).await
  }

  /// Issue a request.
  async fn issue(&self, request: Request<Full<Bytes>>) -> Result<Records, Error> {
    debug!("requesting");
    trace!(request = debug_request(&request));

    let result = self.client.request(request).await?;
    let status = result.status();
    debug!(status = debug(&status));
    trace!(response = debug(&result));

    let bytes = Self::retrieve_body(result).await?;
    let body = bytes.as_ref();
    match from_utf8(body) {
      Ok(s) => trace!(body = display(&s)),
      Err(b) => trace!(body = display(&b)),
    }

    evaluate(status, body)
  }

  /// Retrieve the `ApiInfo` object used by this `Client` instance.
  #[inline]
  pub fn api_info(&self) -> &ApiInfo {
    &self.api_info
  }
}
