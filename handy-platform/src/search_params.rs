// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use handy_error::{HandyError, Result};
use std::collections::HashMap;
use url::{form_urlencoded, Url};

/// Decoded key/value pairs of a query string, in their original order.
///
/// ```
/// use handy_platform::SearchParams;
///
/// let params = SearchParams::parse("?id=123&name=test");
///
/// assert_eq!(params.get("id"), Some("123"));
/// assert_eq!(params.get("invalid"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Parse a query string, with or without its leading `?`.
    ///
    /// `+` decodes to a space and percent escapes are resolved. Malformed input
    /// is decoded leniently rather than rejected.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);

        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Parameters of the query part of an absolute URL.
    ///
    /// # Errors
    /// `HandyError::InvalidInput` when `url` does not parse.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|error| HandyError::invalid_input(format!("url `{url}`: {error}")))?;

        Ok(Self::parse(url.query().unwrap_or_default()))
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Every value for `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All parameters as a map; for repeated keys the last value wins.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.pairs.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
