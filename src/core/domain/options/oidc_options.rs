use super::RequestHeaders;
use crate::core::domain::{
    error::ValidationError,
    validation::{Validate, require_str},
};
use serde_json::{Map, Value};

/// Options for `GET /director_sites/{site_id}/oidc_configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOidcConfigurationOptions {
    pub site_id: String,
    pub headers: RequestHeaders,
}

impl GetOidcConfigurationOptions {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for GetOidcConfigurationOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)
    }
}

/// Options for `PUT /director_sites/{site_id}/oidc_configuration`.
///
/// With no provider fields the request carries no body and the service
/// applies the default IAM federation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOidcConfigurationOptions {
    pub site_id: String,
    /// Provider fields, sent verbatim as the JSON body when non-empty.
    pub provider: Map<String, Value>,
    pub headers: RequestHeaders,
}

impl SetOidcConfigurationOptions {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            provider: Map::new(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn provider_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.provider.insert(key.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for SetOidcConfigurationOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)
    }
}
