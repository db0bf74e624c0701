use super::RequestHeaders;
use crate::core::domain::{
    error::ValidationError,
    model::{cluster::ClusterPrototype, common::FileShares, merge_patch::MergePatch},
    validation::{Validate, require_str},
};

/// Options for `GET /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSitesPvdcsClustersOptions {
    pub site_id: String,
    pub pvdc_id: String,
    pub headers: RequestHeaders,
}

impl ListDirectorSitesPvdcsClustersOptions {
    pub fn new(site_id: impl Into<String>, pvdc_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for ListDirectorSitesPvdcsClustersOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        require_str("pvdc_id", &self.pvdc_id)
    }
}

/// Options for `POST /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDirectorSitesPvdcsClustersOptions {
    pub site_id: String,
    pub pvdc_id: String,
    /// Body: the cluster to add to the PVDC.
    pub cluster: ClusterPrototype,
    pub headers: RequestHeaders,
}

impl CreateDirectorSitesPvdcsClustersOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        name: impl Into<String>,
        host_count: i64,
        host_profile: impl Into<String>,
        file_shares: FileShares,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            pvdc_id: pvdc_id.into(),
            cluster: ClusterPrototype::new(name, host_count, host_profile, file_shares),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for CreateDirectorSitesPvdcsClustersOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        require_str("pvdc_id", &self.pvdc_id)?;
        self.cluster.validate()
    }
}

/// Options for `GET /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDirectorInstancesPvdcsClusterOptions {
    pub site_id: String,
    pub id: String,
    pub pvdc_id: String,
    pub headers: RequestHeaders,
}

impl GetDirectorInstancesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        id: impl Into<String>,
        pvdc_id: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            id: id.into(),
            pvdc_id: pvdc_id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for GetDirectorInstancesPvdcsClusterOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        require_str("id", &self.id)?;
        require_str("pvdc_id", &self.pvdc_id)
    }
}

/// Options for `DELETE /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDirectorSitesPvdcsClusterOptions {
    pub site_id: String,
    pub id: String,
    pub pvdc_id: String,
    pub headers: RequestHeaders,
}

impl DeleteDirectorSitesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        id: impl Into<String>,
        pvdc_id: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            id: id.into(),
            pvdc_id: pvdc_id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for DeleteDirectorSitesPvdcsClusterOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        require_str("id", &self.id)?;
        require_str("pvdc_id", &self.pvdc_id)
    }
}

/// Options for `PATCH /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`.
///
/// The body is a merge patch, usually rendered by
/// [`ClusterPatch::as_merge_patch`](crate::ClusterPatch::as_merge_patch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDirectorSitesPvdcsClusterOptions {
    pub site_id: String,
    pub id: String,
    pub pvdc_id: String,
    pub body: MergePatch,
    pub headers: RequestHeaders,
}

impl UpdateDirectorSitesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        id: impl Into<String>,
        pvdc_id: impl Into<String>,
        body: MergePatch,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            id: id.into(),
            pvdc_id: pvdc_id.into(),
            body,
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for UpdateDirectorSitesPvdcsClusterOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("site_id", &self.site_id)?;
        require_str("id", &self.id)?;
        require_str("pvdc_id", &self.pvdc_id)
    }
}
