use crate::constants::API_BASE_URL;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Remote regions API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection root; the category path segment is appended to it.
    pub base_url: String,
}

/// Request bookkeeping knobs.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub stale_policy: StalePolicy,
}

/// What to do with a response that arrives after a newer request was issued.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Whatever response arrives last replaces the list, regardless of issue order.
    #[default]
    Apply,
    /// Only the response to the most recently issued request may replace the list.
    Discard,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: API_BASE_URL.to_owned() }
    }
}
