// Copyright (C) 2026 The fdn Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;

use serde::Serialize;
use serde::Serializer;
use serde_urlencoded::to_string as to_query;

use crate::Error;
use crate::Str;


/// The reporting period of financial statements and ratios.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Period {
  /// Annual figures.
  #[serde(rename = "year")]
  Year,
  /// Quarterly figures.
  #[serde(rename = "quarter")]
  Quarter,
}

impl Period {
  /// Retrieve the textual representation of the period, as understood
  /// by the API.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Year => "year",
      Self::Quarter => "quarter",
    }
  }
}


/// The value of a single query parameter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamValue {
  /// A single token, e.g., one identifier.
  Single(String),
  /// A non-empty list of tokens, e.g., multiple identifiers.
  List(Vec<String>),
}

impl Serialize for ParamValue {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Self::Single(value) => serializer.serialize_str(value),
      // The API expects lists as a single comma separated value and
      // not as repeated parameters.
      Self::List(values) => serializer.serialize_str(&values.join(",")),
    }
  }
}


/// A trait for types that can be used as the value of a query
/// parameter.
///
/// A result of `None` means that the parameter is left out of the
/// query entirely.
pub trait IntoParam {
  /// Convert the object into a parameter value.
  fn into_param(self) -> Option<ParamValue>;
}

impl IntoParam for ParamValue {
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    Some(self)
  }
}

impl IntoParam for &str {
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    Some(ParamValue::Single(self.to_string()))
  }
}

impl IntoParam for String {
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    Some(ParamValue::Single(self))
  }
}

impl IntoParam for NaiveDate {
  fn into_param(self) -> Option<ParamValue> {
    Some(ParamValue::Single(self.format("%Y-%m-%d").to_string()))
  }
}

impl IntoParam for Period {
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    Some(ParamValue::Single(self.as_str().to_string()))
  }
}

impl<T> IntoParam for Option<T>
where
  T: IntoParam,
{
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    self.and_then(T::into_param)
  }
}

/// Convert a list of tokens into a parameter value, treating an empty
/// list as absent.
fn list_param<I, S>(iter: I) -> Option<ParamValue>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let values = iter
    .into_iter()
    .map(|value| value.as_ref().to_string())
    .collect::<Vec<_>>();

  if values.is_empty() {
    None
  } else {
    Some(ParamValue::List(values))
  }
}

impl<S> IntoParam for &[S]
where
  S: AsRef<str>,
{
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    list_param(self)
  }
}

impl<S> IntoParam for Vec<S>
where
  S: AsRef<str>,
{
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    list_param(self)
  }
}

impl<S, const N: usize> IntoParam for [S; N]
where
  S: AsRef<str>,
{
  #[inline]
  fn into_param(self) -> Option<ParamValue> {
    list_param(self)
  }
}


/// The query parameters of a single request.
///
/// Parameters retain the order in which they were first added.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query {
  params: Vec<(Str, ParamValue)>,
}

impl Query {
  /// Create an empty `Query`.
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the parameter `name` to `value`.
  ///
  /// A previously set value for the same name is replaced. If `value`
  /// converts to `None`, the parameter is removed instead.
  pub fn push<N, V>(&mut self, name: N, value: V) -> &mut Self
  where
    N: Into<Str>,
    V: IntoParam,
  {
    let name = name.into();
    let value = value.into_param();
    let position = self.params.iter().position(|(n, _)| *n == name);

    match (position, value) {
      (Some(idx), Some(value)) => self.params[idx].1 = value,
      (Some(idx), None) => {
        let _ = self.params.remove(idx);
      },
      (None, Some(value)) => self.params.push((name, value)),
      (None, None) => (),
    }
    self
  }

  /// Set the parameter `name` to `value`, consuming and returning the
  /// `Query`.
  #[inline]
  pub fn with<N, V>(mut self, name: N, value: V) -> Self
  where
    N: Into<Str>,
    V: IntoParam,
  {
    let _ = self.push(name, value);
    self
  }

  /// Retrieve the value of the parameter `name`, if set.
  pub fn get(&self, name: &str) -> Option<&ParamValue> {
    self
      .params
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, value)| value)
  }

  /// Check whether any parameters are set.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.params.is_empty()
  }

  /// Encode the parameters as a URL query string.
  pub fn encode(&self) -> Result<String, Error> {
    let query = to_query(self)?;
    Ok(query)
  }
}

impl Serialize for Query {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_map(self.params.iter().map(|(name, value)| (name, value)))
  }
}
