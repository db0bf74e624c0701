//! One options record per remote operation.
//!
//! Required inputs are taken positionally by `new`; optional inputs are set
//! through consuming setters. Nothing is checked until dispatch, when the
//! facade calls [`Validate::validate`](crate::Validate::validate) and refuses
//! to send a request with a required field left empty.

mod catalog_options;
mod cluster_options;
mod director_site_options;
mod oidc_options;
mod pvdc_options;
mod vdc_options;

pub use catalog_options::*;
pub use cluster_options::*;
pub use director_site_options::*;
pub use oidc_options::*;
pub use pvdc_options::*;
pub use vdc_options::*;

use std::collections::BTreeMap;

/// Per-request headers every operation accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    /// Preferred language of server messages (e.g., "en-us").
    pub accept_language: Option<String>,
    /// Correlation id sent as `X-Global-Transaction-ID`.
    pub transaction_id: Option<String>,
    /// Any other header, sent verbatim.
    pub extra: BTreeMap<String, String>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }

    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub(crate) fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.extra.len() + 2);
        if let Some(language) = &self.accept_language {
            pairs.push(("Accept-Language".to_string(), language.clone()));
        }
        if let Some(id) = &self.transaction_id {
            pairs.push(("X-Global-Transaction-ID".to_string(), id.clone()));
        }
        pairs.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}
