use crate::{
    auth::Authenticator,
    core::domain::value_object::{ApiVersion, ServiceUrl},
};
use std::{fmt, sync::Arc};

/// Where and how to reach the control plane: base URL, API contract version
/// and the authenticator that signs every request.
#[derive(Clone)]
pub struct VmwareConnection {
    service_url: ServiceUrl,
    version: ApiVersion,
    authenticator: Arc<dyn Authenticator>,
}

impl VmwareConnection {
    pub fn new(
        service_url: ServiceUrl,
        version: ApiVersion,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            service_url,
            version,
            authenticator,
        }
    }

    pub fn service_url(&self) -> &ServiceUrl {
        &self.service_url
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }
}

impl fmt::Debug for VmwareConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VmwareConnection")
            .field("service_url", &self.service_url.to_string())
            .field("version", &self.version.as_str())
            .field("authenticator", &self.authenticator.kind())
            .finish()
    }
}
