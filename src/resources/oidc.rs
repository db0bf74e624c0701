use crate::{
    DetailedResponse, GetOidcConfigurationOptions, OidcConfiguration, SetOidcConfigurationOptions,
    VmwareClient, VmwareResult, core::infrastructure::api_client::ApiRequest,
};
use reqwest::Method;

impl VmwareClient {
    pub async fn get_oidc_configuration(
        &self,
        options: &GetOidcConfigurationOptions,
    ) -> VmwareResult<DetailedResponse<OidcConfiguration>> {
        self.send(options, || {
            Ok(ApiRequest::new(
                Method::GET,
                &["director_sites", &options.site_id, "oidc_configuration"],
            )
            .headers(&options.headers))
        })
        .await
    }

    /// Configures OIDC for a director site. Without provider fields no body
    /// is sent and the service federates with IAM.
    pub async fn set_oidc_configuration(
        &self,
        options: &SetOidcConfigurationOptions,
    ) -> VmwareResult<DetailedResponse<OidcConfiguration>> {
        self.send(options, || {
            let request = ApiRequest::new(
                Method::PUT,
                &["director_sites", &options.site_id, "oidc_configuration"],
            )
            .headers(&options.headers);
            if options.provider.is_empty() {
                Ok(request)
            } else {
                request.json(&options.provider)
            }
        })
        .await
    }
}
