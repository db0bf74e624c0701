use crate::{
    DetailedResponse, DirectorSiteHostProfileCollection, ListDirectorSiteHostProfilesOptions,
    ListMultitenantDirectorSitesOptions, MultitenantDirectorSiteCollection, VmwareClient,
    VmwareResult, core::infrastructure::api_client::ApiRequest,
};
use reqwest::Method;

impl VmwareClient {
    /// Lists the host profiles clusters can be ordered with.
    pub async fn list_director_site_host_profiles(
        &self,
        options: &ListDirectorSiteHostProfilesOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSiteHostProfileCollection>> {
        self.send(options, || {
            Ok(
                ApiRequest::new(Method::GET, &["director_site_host_profiles"])
                    .headers(&options.headers),
            )
        })
        .await
    }

    /// Lists the multitenant director sites VDCs can be placed on.
    pub async fn list_multitenant_director_sites(
        &self,
        options: &ListMultitenantDirectorSitesOptions,
    ) -> VmwareResult<DetailedResponse<MultitenantDirectorSiteCollection>> {
        self.send(options, || {
            Ok(
                ApiRequest::new(Method::GET, &["multitenant_director_sites"])
                    .headers(&options.headers),
            )
        })
        .await
    }
}
