//! Domain models for virtual data centers (VDCs), the tenant-visible
//! consumption units backed by a director site.

use crate::core::domain::{
    error::{ValidationError, VmwareResult},
    model::{
        common::ResourceGroupIdentity,
        merge_patch::{MergePatch, TouchedFields, insert_field},
    },
    validation::{Validate, require_str},
};
use serde::{Deserialize, Serialize};

/// A VDC as returned by `/vdcs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Vdc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provisioning status (e.g., "creating", "ready_to_use", "modifying").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Tenancy type (e.g., "dedicated", "multitenant").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The director site and PVDC this VDC draws capacity from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_site: Option<VdcDirectorSite>,
    /// Reserved vCPUs (multitenant VDCs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    /// Reserved RAM in GB (multitenant VDCs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_provisioning_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhel_byol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_byol: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

/// Response of the VDC list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VdcCollection {
    #[serde(default)]
    pub vdcs: Vec<Vdc>,
}

/// Director site reference embedded in a [`Vdc`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VdcDirectorSite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// URL of the VMware Cloud Director tenant portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvdc: Option<DirectorSitePvdc>,
}

/// A network edge attached to a VDC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public_ips: Vec<String>,
}

/// Selects the PVDC a VDC is placed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectorSitePvdc {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<VdcProviderType>,
}

impl DirectorSitePvdc {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider_type: None,
        }
    }

    pub fn provider_type(mut self, name: impl Into<String>) -> Self {
        self.provider_type = Some(VdcProviderType { name: name.into() });
        self
    }
}

/// Provider type requested for a VDC (e.g., "paygo", "on_demand", "reserved").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VdcProviderType {
    pub name: String,
}

/// The director site a new VDC consumes capacity from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VdcDirectorSitePrototype {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvdc: Option<DirectorSitePvdc>,
}

impl VdcDirectorSitePrototype {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pvdc: None,
        }
    }

    pub fn pvdc(mut self, pvdc: DirectorSitePvdc) -> Self {
        self.pvdc = Some(pvdc);
        self
    }
}

impl Validate for VdcDirectorSitePrototype {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("director_site.id", &self.id)?;
        if let Some(pvdc) = &self.pvdc {
            require_str("director_site.pvdc.id", &pvdc.id)?;
        }
        Ok(())
    }
}

/// Edge to create together with a VDC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VdcEdgePrototype {
    /// Edge type (e.g., "performance", "efficiency").
    #[serde(rename = "type")]
    pub kind: String,
    /// Edge size (e.g., "medium", "large").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Body of a VDC creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VdcPrototype {
    pub name: String,
    pub director_site: VdcDirectorSitePrototype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<VdcEdgePrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_provisioning_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhel_byol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_byol: Option<bool>,
}

impl Validate for VdcPrototype {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("name", &self.name)?;
        self.director_site.validate()?;
        if let Some(edge) = &self.edge {
            require_str("edge.type", &edge.kind)?;
        }
        if let Some(group) = &self.resource_group {
            require_str("resource_group.id", &group.id)?;
        }
        Ok(())
    }
}

/// Partial VDC update rendered as a merge patch.
///
/// Each setter records its field as touched. [`VdcPatch::as_merge_patch`]
/// renders touched fields only; `clear_*` setters render an explicit `null`.
///
/// # Examples
///
/// ```
/// use vmware_aas::VdcPatch;
///
/// let patch = VdcPatch::new().cpu(8).clear_ram().as_merge_patch().unwrap();
/// assert_eq!(patch["cpu"], 8);
/// assert!(patch["ram"].is_null());
/// assert!(!patch.contains_key("fast_provisioning_enabled"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VdcPatch {
    cpu: Option<i64>,
    ram: Option<i64>,
    fast_provisioning_enabled: Option<bool>,
    touched: TouchedFields,
}

impl VdcPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: i64) -> Self {
        self.cpu = Some(cpu);
        self.touched.touch("cpu");
        self
    }

    pub fn clear_cpu(mut self) -> Self {
        self.cpu = None;
        self.touched.touch("cpu");
        self
    }

    pub fn ram(mut self, ram: i64) -> Self {
        self.ram = Some(ram);
        self.touched.touch("ram");
        self
    }

    pub fn clear_ram(mut self) -> Self {
        self.ram = None;
        self.touched.touch("ram");
        self
    }

    pub fn fast_provisioning_enabled(mut self, enabled: bool) -> Self {
        self.fast_provisioning_enabled = Some(enabled);
        self.touched.touch("fast_provisioning_enabled");
        self
    }

    pub fn clear_fast_provisioning_enabled(mut self) -> Self {
        self.fast_provisioning_enabled = None;
        self.touched.touch("fast_provisioning_enabled");
        self
    }

    /// True when no setter has been called.
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Renders the touched fields as a merge-patch body.
    pub fn as_merge_patch(&self) -> VmwareResult<MergePatch> {
        let mut patch = MergePatch::new();
        if self.touched.contains("cpu") {
            insert_field(&mut patch, "cpu", self.cpu.as_ref())?;
        }
        if self.touched.contains("ram") {
            insert_field(&mut patch, "ram", self.ram.as_ref())?;
        }
        if self.touched.contains("fast_provisioning_enabled") {
            insert_field(
                &mut patch,
                "fast_provisioning_enabled",
                self.fast_provisioning_enabled.as_ref(),
            )?;
        }
        Ok(patch)
    }
}
