use crate::{
    CreateDirectorSitesPvdcsOptions, DetailedResponse, GetDirectorSitesPvdcsOptions,
    ListDirectorSitesPvdcsOptions, Pvdc, PvdcCollection, VmwareClient, VmwareResult,
    core::infrastructure::api_client::ApiRequest,
};
use reqwest::Method;

impl VmwareClient {
    pub async fn list_director_sites_pvdcs(
        &self,
        options: &ListDirectorSitesPvdcsOptions,
    ) -> VmwareResult<DetailedResponse<PvdcCollection>> {
        self.send(options, || {
            Ok(
                ApiRequest::new(Method::GET, &["director_sites", &options.site_id, "pvdcs"])
                    .headers(&options.headers),
            )
        })
        .await
    }

    /// Adds a PVDC, with its initial clusters, to an existing director site.
    pub async fn create_director_sites_pvdcs(
        &self,
        options: &CreateDirectorSitesPvdcsOptions,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        self.send(options, || {
            ApiRequest::new(Method::POST, &["director_sites", &options.site_id, "pvdcs"])
                .headers(&options.headers)
                .json(&options.pvdc)
        })
        .await
    }

    pub async fn get_director_sites_pvdcs(
        &self,
        options: &GetDirectorSitesPvdcsOptions,
    ) -> VmwareResult<DetailedResponse<Pvdc>> {
        self.send(options, || {
            Ok(ApiRequest::new(
                Method::GET,
                &["director_sites", &options.site_id, "pvdcs", &options.id],
            )
            .headers(&options.headers))
        })
        .await
    }
}
