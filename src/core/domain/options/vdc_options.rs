use super::RequestHeaders;
use crate::core::domain::{
    error::ValidationError,
    model::{
        common::ResourceGroupIdentity,
        merge_patch::MergePatch,
        vdc::{VdcDirectorSitePrototype, VdcEdgePrototype, VdcPrototype},
    },
    validation::{Validate, require_str},
};

/// Options for `GET /vdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVdcsOptions {
    pub headers: RequestHeaders,
}

impl ListVdcsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for ListVdcsOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `POST /vdcs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVdcOptions {
    pub vdc: VdcPrototype,
    pub headers: RequestHeaders,
}

impl CreateVdcOptions {
    pub fn new(name: impl Into<String>, director_site: VdcDirectorSitePrototype) -> Self {
        Self {
            vdc: VdcPrototype {
                name: name.into(),
                director_site,
                ..Default::default()
            },
            headers: RequestHeaders::default(),
        }
    }

    pub fn edge(mut self, edge: VdcEdgePrototype) -> Self {
        self.vdc.edge = Some(edge);
        self
    }

    pub fn fast_provisioning_enabled(mut self, enabled: bool) -> Self {
        self.vdc.fast_provisioning_enabled = Some(enabled);
        self
    }

    pub fn resource_group(mut self, resource_group: ResourceGroupIdentity) -> Self {
        self.vdc.resource_group = Some(resource_group);
        self
    }

    pub fn cpu(mut self, cpu: i64) -> Self {
        self.vdc.cpu = Some(cpu);
        self
    }

    pub fn ram(mut self, ram: i64) -> Self {
        self.vdc.ram = Some(ram);
        self
    }

    pub fn rhel_byol(mut self, rhel_byol: bool) -> Self {
        self.vdc.rhel_byol = Some(rhel_byol);
        self
    }

    pub fn windows_byol(mut self, windows_byol: bool) -> Self {
        self.vdc.windows_byol = Some(windows_byol);
        self
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for CreateVdcOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        self.vdc.validate()
    }
}

/// Options for `GET /vdcs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetVdcOptions {
    pub id: String,
    pub headers: RequestHeaders,
}

impl GetVdcOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for GetVdcOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("id", &self.id)
    }
}

/// Options for `PATCH /vdcs/{id}`.
///
/// The body is a merge patch, usually rendered by
/// [`VdcPatch::as_merge_patch`](crate::VdcPatch::as_merge_patch). An empty
/// map is a valid patch and is sent as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateVdcOptions {
    pub id: String,
    pub vdc_patch: MergePatch,
    pub headers: RequestHeaders,
}

impl UpdateVdcOptions {
    pub fn new(id: impl Into<String>, vdc_patch: MergePatch) -> Self {
        Self {
            id: id.into(),
            vdc_patch,
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for UpdateVdcOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("id", &self.id)
    }
}

/// Options for `DELETE /vdcs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteVdcOptions {
    pub id: String,
    pub headers: RequestHeaders,
}

impl DeleteVdcOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: RequestHeaders::default(),
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for DeleteVdcOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("id", &self.id)
    }
}
