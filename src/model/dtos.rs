use serde_json::Value;
use std::str::FromStr;
use url::form_urlencoded;

use super::structs::SortDirection;
use crate::error::{Error, ErrorKind, Result};

/// Ordered search query parameters.
///
/// Insertion order is the order keys appear on the wire. Setting a key that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn term(self, term: impl Into<String>) -> Self {
        self.with("txt_term", term)
    }

    /// Subject code, e.g. "CPSC".
    pub fn subject(self, subject: impl Into<String>) -> Self {
        self.with("txt_subject", subject)
    }

    pub fn attribute(self, attribute: impl Into<String>) -> Self {
        self.with("txt_attribute", attribute)
    }

    pub fn course_number(self, number: impl Into<String>) -> Self {
        self.with("txt_courseNumber", number)
    }

    pub fn keyword(self, keyword: impl Into<String>) -> Self {
        self.with("txt_keywordlike", keyword)
    }

    pub fn course_number_range(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.with("txt_course_number_range_From", from)
            .with("txt_course_number_range_To", to)
    }

    pub fn credit_hours(self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.with("txt_credithourlow", low)
            .with("txt_credithourhigh", high)
    }

    pub fn page_offset(self, offset: impl Into<String>) -> Self {
        self.with("pageOffset", offset)
    }

    pub fn page_max_size(self, size: impl Into<String>) -> Self {
        self.with("pageMaxSize", size)
    }

    pub fn sort_column(self, column: impl Into<String>) -> Self {
        self.with("sortColumn", column)
    }

    pub fn sort_direction(self, direction: SortDirection) -> Self {
        self.with("sortDirection", direction.as_str())
    }

    /// Lays `self` over `defaults`: default keys keep their position, values
    /// supplied here win, and keys unknown to `defaults` follow in order.
    pub fn merged_over(&self, defaults: SearchParams) -> SearchParams {
        let mut merged = defaults;
        for (k, v) in &self.pairs {
            merged.set(k.clone(), v.clone());
        }
        merged
    }

    /// `application/x-www-form-urlencoded` serialization.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = SearchParams::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Per-call options for the request primitive.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with a form-encoded body.
    pub fn post_form(body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            body: Some(body.into()),
            headers: vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded; charset=UTF-8".to_string(),
            )],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Text,
}

impl FromStr for ResponseType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResponseType::Json),
            "text" => Ok(ResponseType::Text),
            other => Err(ErrorKind::UnsupportedResponseType(other.to_string()).into()),
        }
    }
}

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn into_json(self) -> Result<Value> {
        match self {
            ResponseBody::Json(v) => Ok(v),
            ResponseBody::Text(t) => Ok(serde_json::from_str(&t)?),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Json(v) => v.to_string(),
            ResponseBody::Text(t) => t,
        }
    }
}

/// Fully resolved request handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
