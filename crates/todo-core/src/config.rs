//! Store Configuration
//!
//! Endpoint and credential for the remote task table. Nothing here is
//! checked at startup; the gateway validates lazily on each call.

use reqwest::Url;

use crate::domain::{StoreError, StoreResult};

pub const URL_VAR: &str = "TODO_STORE_URL";
pub const KEY_VAR: &str = "TODO_STORE_KEY";
pub const TABLE_VAR: &str = "TODO_STORE_TABLE";

pub const DEFAULT_TABLE: &str = "todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    /// Anon/public API key, sent as `apikey` and bearer token
    pub key: Option<String>,
    pub table: String,
}

/// A configuration that passed [`StoreConfig::validate`]
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub base: Url,
    pub key: String,
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            key: Some(key.into()),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Read settings through `lookup`; blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            url: get(URL_VAR),
            key: get(KEY_VAR),
            table: get(TABLE_VAR).unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        }
    }

    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn validate(&self) -> StoreResult<ResolvedConfig> {
        let raw_url = self
            .url
            .as_deref()
            .ok_or_else(|| StoreError::Config(format!("{URL_VAR} is not set")))?;
        let key = self
            .key
            .clone()
            .ok_or_else(|| StoreError::Config(format!("{KEY_VAR} is not set")))?;

        let base = Url::parse(raw_url)
            .map_err(|e| StoreError::Config(format!("{URL_VAR} is not a valid URL: {e}")))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(StoreError::Config(format!(
                "{URL_VAR} must be an http(s) URL, got {raw_url}"
            )));
        }
        if self.table.is_empty() || self.table.contains('/') {
            return Err(StoreError::Config(format!(
                "invalid table name {:?}",
                self.table
            )));
        }

        Ok(ResolvedConfig {
            base,
            key,
            table: self.table.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults_table() {
        let config = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "https://example.supabase.co"),
            (KEY_VAR, "anon"),
        ]));
        assert_eq!(config, StoreConfig::new("https://example.supabase.co", "anon"));
        assert_eq!(config.table, "todo");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = StoreConfig::from_lookup(lookup(&[(URL_VAR, "  "), (TABLE_VAR, "")]));
        assert!(config.url.is_none());
        assert!(config.key.is_none());
        assert_eq!(config.table, DEFAULT_TABLE);
    }

    #[test]
    fn test_validate_reports_missing_settings() {
        let err = StoreConfig::default().validate().unwrap_err();
        assert!(matches!(err, StoreError::Config(ref msg) if msg.contains(URL_VAR)));

        let err = StoreConfig {
            url: Some("https://example.supabase.co".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, StoreError::Config(ref msg) if msg.contains(KEY_VAR)));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let err = StoreConfig::new("not a url", "k").validate().unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));

        let err = StoreConfig::new("ftp://example.com", "k").validate().unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_validate_accepts_custom_table() {
        let resolved = StoreConfig::new("https://example.supabase.co", "k")
            .with_table("tasks")
            .validate()
            .unwrap();
        assert_eq!(resolved.table, "tasks");
        assert_eq!(resolved.key, "k");
    }
}
