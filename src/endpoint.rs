// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

/// A description of a single endpoint of the API.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Endpoint {
  /// The name of the endpoint, as it appears in the request path.
  pub name: &'static str,
  /// The names of the query parameters the endpoint accepts.
  pub params: &'static [&'static str],
}


/// A macro used for declaring a set of endpoints.
///
/// Each entry names the [`Client`](crate::Client) method to generate,
/// its arguments, and the endpoint it maps to. Argument names double
/// as query parameter names and argument values are passed through as
/// is, by means of [`IntoParam`](crate::IntoParam). Besides the
/// methods, the macro emits an `ENDPOINTS` table describing all
/// declared endpoints.
macro_rules! Endpoints {
  ( $(
      $(#[$docs:meta])*
      $method:ident($($arg:ident: $arg_ty:ty),* $(,)?) => $name:literal,
    )* ) => {

    /// The endpoints provided by this module.
    #[allow(unused_qualifications)]
    pub const ENDPOINTS: &[crate::endpoint::Endpoint] = &[
      $(
        crate::endpoint::Endpoint {
          name: $name,
          params: &[$(::std::stringify!($arg)),*],
        },
      )*
    ];

    #[allow(unused_qualifications)]
    impl crate::Client {
      $(
        $(#[$docs])*
        ///
        #[doc = ::std::concat!("**Endpoint:** `GET /", $name, "/`")]
        pub async fn $method(
          &self,
          $($arg: $arg_ty),*
        ) -> ::std::result::Result<crate::Records, crate::Error> {
          #[allow(unused_mut)]
          let mut query = crate::Query::new();
          $(
            let _ = query.push(::std::stringify!($arg), $arg);
          )*
          self.get_data($name, &query).await
        }
      )*
    }

    /// Invoke the method belonging to the endpoint `name`, if it is
    /// declared in this module, using sample arguments.
    #[cfg(test)]
    #[allow(unused_qualifications)]
    pub(crate) async fn invoke(
      client: &crate::Client,
      name: &str,
    ) -> ::std::option::Option<::std::result::Result<crate::Records, crate::Error>> {
      match name {
        $(
          $name => Some(
            client
              .$method($(<$arg_ty as crate::endpoint::Sample>::sample()),*)
              .await
          ),
        )*
        _ => None,
      }
    }
  };
}


/// A trait for producing sample values of endpoint arguments.
#[cfg(test)]
pub(crate) trait Sample {
  fn sample() -> Self;
}

#[cfg(test)]
impl Sample for &str {
  fn sample() -> Self {
    "MSFT"
  }
}

#[cfg(test)]
impl Sample for &[&str] {
  fn sample() -> Self {
    &["AAPL", "MSFT"]
  }
}

#[cfg(test)]
impl Sample for chrono::NaiveDate {
  fn sample() -> Self {
    chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
  }
}

#[cfg(test)]
impl Sample for Option<crate::Period> {
  fn sample() -> Self {
    Some(crate::Period::Year)
  }
}
