//! Domain models for director sites, the top-level provisioning unit: a
//! hosted VMware Cloud Director deployment.
//!
//! Two creation shapes exist side by side. [`DirectorSitePrototype`] is the
//! current one; [`DirectorSiteOrderInfo`] is the older order format that
//! carries the resource group as a plain string and the storage type on each
//! cluster. Neither derives from the other.

use crate::core::domain::{
    error::ValidationError,
    model::{
        common::{ResourceGroupIdentity, ResourceGroupReference},
        pvdc::{Pvdc, PvdcOrderInfo, PvdcPrototype},
    },
    validation::{Validate, require_items, require_str},
};
use serde::{Deserialize, Serialize};

/// A director site as returned by `/director_sites/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectorSite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cloud resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provisioning status (e.g., "creating", "ready_to_use", "deleting").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Instance type (e.g., "single_tenant").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupReference>,
    /// When the instance was ordered (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    /// PVDCs in this site, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pvdcs: Vec<Pvdc>,
}

/// Response of the director site list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteCollection {
    #[serde(default)]
    pub director_sites: Vec<DirectorSite>,
}

/// A director site to create, in the current prototype shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectorSitePrototype {
    pub name: String,
    pub pvdcs: Vec<PvdcPrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    /// Billing model of the instance (e.g., "monthly").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_plan: Option<String>,
}

impl DirectorSitePrototype {
    pub fn new(name: impl Into<String>, pvdcs: Vec<PvdcPrototype>) -> Self {
        Self {
            name: name.into(),
            pvdcs,
            ..Default::default()
        }
    }
}

impl Validate for DirectorSitePrototype {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("name", &self.name)?;
        require_items("pvdcs", &self.pvdcs)?;
        if let Some(group) = &self.resource_group {
            require_str("resource_group.id", &group.id)?;
        }
        self.pvdcs.validate()
    }
}

/// A director site to create, in the legacy order shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectorSiteOrderInfo {
    pub name: String,
    pub resource_group: String,
    pub pvdcs: Vec<PvdcOrderInfo>,
}

impl DirectorSiteOrderInfo {
    pub fn new(
        name: impl Into<String>,
        resource_group: impl Into<String>,
        pvdcs: Vec<PvdcOrderInfo>,
    ) -> Self {
        Self {
            name: name.into(),
            resource_group: resource_group.into(),
            pvdcs,
        }
    }
}

impl Validate for DirectorSiteOrderInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("name", &self.name)?;
        require_str("resource_group", &self.resource_group)?;
        require_items("pvdcs", &self.pvdcs)?;
        self.pvdcs.validate()
    }
}

/// Body of a director site creation request, in either shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DirectorSiteRequestBody {
    /// Legacy order shape. Listed first so decoding prefers it when
    /// `resource_group` is a plain string.
    OrderInfo(DirectorSiteOrderInfo),
    Prototype(DirectorSitePrototype),
}

impl Validate for DirectorSiteRequestBody {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            DirectorSiteRequestBody::Prototype(prototype) => prototype.validate(),
            DirectorSiteRequestBody::OrderInfo(order_info) => order_info.validate(),
        }
    }
}

impl From<DirectorSitePrototype> for DirectorSiteRequestBody {
    fn from(prototype: DirectorSitePrototype) -> Self {
        DirectorSiteRequestBody::Prototype(prototype)
    }
}

impl From<DirectorSiteOrderInfo> for DirectorSiteRequestBody {
    fn from(order_info: DirectorSiteOrderInfo) -> Self {
        DirectorSiteRequestBody::OrderInfo(order_info)
    }
}
