use super::RequestHeaders;
use crate::core::domain::{
    error::ValidationError,
    model::{cluster::ClusterPrototype, pvdc::PvdcPrototype},
    validation::{Validate, require_str},
};

/// Options for `GET /director_sites/{site_id}/pvdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSitesPvdcsOptions {
    pub site_id: String,
    pub headers: RequestHeaders,
}

impl ListDirectorSitesPvdcsOptions {
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

impl Validate for ListDirectorSitesPvdcsOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)
    }
}

/// Options for `POST /director_sites/{site_id}/pvdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDirectorSitesPvdcsOptions {
    pub site_id: String,
    /// Body: the PVDC to add to the site.
    pub pvdc: PvdcPrototype,
    pub headers: RequestHeaders,
}

impl CreateDirectorSitesPvdcsOptions {
    pub fn new(
        site_id: impl Into<String>,
        name: impl Into<String>,
        data_center_name: impl Into<String>,
        clusters: Vec<ClusterPrototype>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc: PvdcPrototype::new(name, data_center_name, clusters),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for CreateDirectorSitesPvdcsOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        self.pvdc.validate()
    }
}

/// Options for `GET /director_sites/{site_id}/pvdcs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDirectorSitesPvdcsOptions {
    pub site_id: String,
    pub id: String,
    pub headers: RequestHeaders,
}

impl GetDirectorSitesPvdcsOptions {
    pub fn new(site_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            id: id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for GetDirectorSitesPvdcsOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        require_str("id", &self.id)
    }
}
