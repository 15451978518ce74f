// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! A minimal HTTP server serving canned responses, for exercising the
//! client without network access.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::Mutex;

use http::header::HeaderName;
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use http::HeaderValue;
use http::Request;
use http::Response;
use http::StatusCode;
use http::Uri;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use url::form_urlencoded::parse as parse_query;

use crate::ApiInfo;
use crate::Client;


/// A request as received by the [`MockServer`].
#[derive(Clone, Debug)]
pub(crate) struct Recorded {
  pub uri: Uri,
  pub headers: HeaderMap,
}

impl Recorded {
  /// Retrieve the request's path.
  pub fn path(&self) -> &str {
    self.uri.path()
  }

  /// Retrieve the decoded query parameters of the request.
  pub fn params(&self) -> HashMap<String, String> {
    let query = self.uri.query().unwrap_or_default();
    parse_query(query.as_bytes()).into_owned().collect()
  }

  /// Retrieve the raw query string of the request.
  pub fn query(&self) -> &str {
    self.uri.query().unwrap_or_default()
  }
}


/// An HTTP server answering every request with the same response.
pub(crate) struct MockServer {
  base_url: String,
  requests: Arc<Mutex<Vec<Recorded>>>,
  task: JoinHandle<()>,
}

impl MockServer {
  /// Start a server responding with `status` and the given JSON body.
  pub async fn start(status: StatusCode, body: &'static str) -> Self {
    Self::start_with(status, Vec::new(), body.as_bytes().to_vec()).await
  }

  /// Start a server responding with `status`, the given additional
  /// headers, and a raw body.
  pub async fn start_with(
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Vec<u8>,
  ) -> Self {
    let body = Bytes::from(body);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = requests.clone();
    let task = tokio::spawn(async move {
      loop {
        let (stream, _) = match listener.accept().await {
          Ok(accepted) => accepted,
          Err(_) => break,
        };

        let recorded = recorded.clone();
        let headers = headers.clone();
        let body = body.clone();
        let service = service_fn(move |request: Request<Incoming>| {
          recorded.lock().unwrap().push(Recorded {
            uri: request.uri().clone(),
            headers: request.headers().clone(),
          });

          let mut builder = Response::builder()
            .status(status)
            .header(CONTENT_TYPE, "application/json");
          for (name, value) in &headers {
            builder = builder.header(name.clone(), value.clone());
          }
          let response = builder.body(Full::new(body.clone())).unwrap();
          async move { Ok::<_, Infallible>(response) }
        });

        let _handle = tokio::spawn(async move {
          let _result = http1::Builder::new()
            .serve_connection(TokioIo::new(stream), service)
            .await;
        });
      }
    });

    Self {
      base_url: format!("http://{addr}/"),
      requests,
      task,
    }
  }

  /// Create a client talking to this server, using the given API key.
  pub fn client(&self, api_key: &str) -> Client {
    let api_info = ApiInfo::from_parts(&self.base_url, api_key).unwrap();
    Client::new(api_info)
  }

  /// Retrieve all requests received so far.
  pub fn requests(&self) -> Vec<Recorded> {
    self.requests.lock().unwrap().clone()
  }

  /// Retrieve the most recently received request.
  pub fn last_request(&self) -> Recorded {
    self.requests().pop().expect("no request was received")
  }
}

impl Drop for MockServer {
  fn drop(&mut self) {
    self.task.abort()
  }
}
