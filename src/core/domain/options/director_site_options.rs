use super::RequestHeaders;
use crate::core::domain::{
    error::ValidationError,
    model::{
        common::ResourceGroupIdentity,
        director_site::{DirectorSiteOrderInfo, DirectorSitePrototype, DirectorSiteRequestBody},
        pvdc::{PvdcOrderInfo, PvdcPrototype},
    },
    validation::{Validate, require_str},
};

/// Options for `GET /director_sites`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSitesOptions {
    pub headers: RequestHeaders,
}

impl ListDirectorSitesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for ListDirectorSitesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `POST /director_sites`.
///
/// [`CreateDirectorSitesOptions::new`] builds the current prototype body;
/// [`CreateDirectorSitesOptions::new_order_info`] builds the legacy one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDirectorSitesOptions {
    pub body: DirectorSiteRequestBody,
    pub headers: RequestHeaders,
}

impl CreateDirectorSitesOptions {
    pub fn new(name: impl Into<String>, pvdcs: Vec<PvdcPrototype>) -> Self {
        Self {
            body: DirectorSitePrototype::new(name, pvdcs).into(),
            headers: RequestHeaders::default(),
        }
    }

    /// Builds the legacy order-info body.
    ///
    /// This shape has no consumption plan, so
    /// [`consumption_plan`](Self::consumption_plan) leaves it unchanged and
    /// the service applies its default plan.
    pub fn new_order_info(
        name: impl Into<String>,
        resource_group: impl Into<String>,
        pvdcs: Vec<PvdcOrderInfo>,
    ) -> Self {
        Self {
            body: DirectorSiteOrderInfo::new(name, resource_group, pvdcs).into(),
            headers: RequestHeaders::default(),
        }
    }

    /// Sets the resource group. Only the prototype shape carries an
    /// identity; on the legacy shape the id replaces the resource group
    /// string.
    pub fn resource_group(mut self, resource_group: ResourceGroupIdentity) -> Self {
        match &mut self.body {
            DirectorSiteRequestBody::Prototype(prototype) => {
                prototype.resource_group = Some(resource_group)
            }
            DirectorSiteRequestBody::OrderInfo(order_info) => {
                order_info.resource_group = resource_group.id
            }
        }
        self
    }

    /// Sets the consumption plan on the prototype body. The order-info body
    /// has no such field and is left unchanged.
    pub fn consumption_plan(mut self, plan: impl Into<String>) -> Self {
        if let DirectorSiteRequestBody::Prototype(prototype) = &mut self.body {
            prototype.consumption_plan = Some(plan.into());
        }
        self
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for CreateDirectorSitesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        self.body.validate()
    }
}

/// Options for `GET /director_sites/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDirectorSiteOptions {
    pub id: String,
    pub headers: RequestHeaders,
}

impl GetDirectorSiteOptions {
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

impl Validate for GetDirectorSiteOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("id", &self.id)
    }
}

/// Options for `DELETE /director_sites/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDirectorSiteOptions {
    pub id: String,
    pub headers: RequestHeaders,
}

impl DeleteDirectorSiteOptions {
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

impl Validate for DeleteDirectorSiteOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("id", &self.id)
    }
}
