mod auth;
mod core;
mod resources;


pub use crate::auth::{
    Authenticator, BearerTokenAuthenticator, DEFAULT_IAM_URL, IamAuthenticator, NoAuthAuthenticator,
};
pub use crate::core::domain::model::{
    client_config::{ClientConfig, RateLimitConfig},
    cluster::{Cluster, ClusterCollection, ClusterOrderInfo, ClusterPatch, ClusterPrototype},
    common::{FileShares, ProviderType, ResourceGroupIdentity, ResourceGroupReference},
    detailed_response::{DetailedResponse, RawResponse},
    director_site::{
        DirectorSite, DirectorSiteCollection, DirectorSiteOrderInfo, DirectorSitePrototype,
        DirectorSiteRequestBody,
    },
    host_profile::{DirectorSiteHostProfile, DirectorSiteHostProfileCollection},
    merge_patch::{MERGE_PATCH_CONTENT_TYPE, MergePatch},
    multitenant::{MultitenantDirectorSite, MultitenantDirectorSiteCollection, MultitenantPvdc},
    oidc::OidcConfiguration,
    pvdc::{Pvdc, PvdcCollection, PvdcOrderInfo, PvdcPrototype},
    vdc::{
        DirectorSitePvdc, Edge, Vdc, VdcCollection, VdcDirectorSite, VdcDirectorSitePrototype,
        VdcEdgePrototype, VdcPatch, VdcPrototype, VdcProviderType,
    },
};
pub use crate::core::domain::{
    error::{ValidationError, VmwareError, VmwareResult},
    options::*,
    validation::Validate,
    value_object::{AccessToken, ApiVersion, DEFAULT_API_VERSION, DEFAULT_SERVICE_URL, ServiceUrl},
};
pub use tokio_util::sync::CancellationToken;

use crate::core::{
    domain::model::vmware_connection::VmwareConnection,
    infrastructure::api_client::{ApiClient, ApiRequest},
};
use serde::de::DeserializeOwned;
use std::{fmt, sync::Arc, time::Duration};

/// A client for the VMware-as-a-Service control plane.
///
/// The client covers director sites, their PVDCs and clusters, the host
/// profile and multitenant site catalogs, OIDC configuration and VDCs. Every
/// operation takes an options record, checks its required fields, sends one
/// request and returns the decoded model together with the raw response.
///
/// The client is cheap to clone and safe to share between tasks.
///
/// # Examples
///
/// ```no_run
/// use vmware_aas::{IamAuthenticator, ListDirectorSitesOptions, VmwareClient, VmwareResult};
///
/// #[tokio::main]
/// async fn main() -> VmwareResult<()> {
///     let client = VmwareClient::builder()
///         .authenticator(IamAuthenticator::new("my-api-key")?)
///         .build()?;
///
///     let sites = client
///         .list_director_sites(&ListDirectorSitesOptions::new())
///         .await?;
///     for site in &sites.result.director_sites {
///         println!("{:?}", site.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct VmwareClient {
    api_client: ApiClient,
    cancellation: Option<CancellationToken>,
}

/// Builder for VmwareClient configuration
#[derive(Default)]
pub struct VmwareClientBuilder {
    service_url: Option<String>,
    version: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    config: ClientConfig,
}

impl VmwareClientBuilder {
    /// Base URL of the API, including the `/v1` prefix.
    /// Defaults to [`DEFAULT_SERVICE_URL`].
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// API contract date sent as the `version` query parameter.
    /// Defaults to [`DEFAULT_API_VERSION`].
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Shares one authenticator (and its token cache) between several clients.
    pub fn shared_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Throttles outgoing requests client-side.
    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration and creates the client.
    ///
    /// # Errors
    /// Returns `VmwareError::Validation` if the URL or version is malformed,
    /// the rate limit is zero, or no authenticator was supplied.
    pub fn build(self) -> VmwareResult<VmwareClient> {
        let service_url = match self.service_url {
            Some(url) => ServiceUrl::new(url)?,
            None => ServiceUrl::default(),
        };
        let version = match self.version {
            Some(version) => ApiVersion::new(version)?,
            None => ApiVersion::default(),
        };
        let authenticator = self
            .authenticator
            .ok_or_else(|| VmwareError::missing_field("authenticator"))?;

        let connection = VmwareConnection::new(service_url, version, authenticator);
        Ok(VmwareClient {
            api_client: ApiClient::new(connection, self.config)?,
            cancellation: None,
        })
    }
}

impl fmt::Debug for VmwareClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VmwareClientBuilder")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field(
                "authenticator",
                &self.authenticator.as_ref().map(|a| a.kind()),
            )
            .field("config", &self.config)
            .finish()
    }
}

impl VmwareClient {
    /// Creates a new builder for VmwareClient configuration
    pub fn builder() -> VmwareClientBuilder {
        VmwareClientBuilder::default()
    }

    /// Returns a handle whose calls fail with `VmwareError::Cancelled` as soon
    /// as `token` is cancelled. The handle shares everything else with `self`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            api_client: self.api_client.clone(),
            cancellation: Some(token),
        }
    }

    pub fn service_url(&self) -> &ServiceUrl {
        self.api_client.connection().service_url()
    }

    pub fn version(&self) -> &ApiVersion {
        self.api_client.connection().version()
    }

    /// Validates `options`, then sends `request`.
    pub(crate) async fn send<O, T>(
        &self,
        options: &O,
        request: impl FnOnce() -> VmwareResult<ApiRequest>,
    ) -> VmwareResult<DetailedResponse<T>>
    where
        O: Validate + ?Sized,
        T: DeserializeOwned,
    {
        options.validate()?;
        self.api_client
            .execute(request()?, self.cancellation.as_ref())
            .await
    }
}

impl fmt::Debug for VmwareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VmwareClient")
            .field("api_client", &self.api_client)
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}
