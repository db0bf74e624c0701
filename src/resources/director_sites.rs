use crate::{
    CreateDirectorSitesOptions, DeleteDirectorSiteOptions, DetailedResponse, DirectorSite,
    DirectorSiteCollection, GetDirectorSiteOptions, ListDirectorSitesOptions, VmwareClient,
    VmwareResult, core::infrastructure::api_client::ApiRequest,
};
use reqwest::Method;

impl VmwareClient {
    /// Lists the director site instances of the account.
    pub async fn list_director_sites(
        &self,
        options: &ListDirectorSitesOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSiteCollection>> {
        self.send(options, || {
            Ok(ApiRequest::new(Method::GET, &["director_sites"]).headers(&options.headers))
        })
        .await
    }

    /// Orders a director site instance with its PVDCs and clusters.
    ///
    /// The body is sent in whichever shape the options were built with:
    /// a prototype (`new`) or an order info (`new_order_info`).
    pub async fn create_director_sites(
        &self,
        options: &CreateDirectorSitesOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.send(options, || {
            ApiRequest::new(Method::POST, &["director_sites"])
                .headers(&options.headers)
                .json(&options.body)
        })
        .await
    }

    pub async fn get_director_site(
        &self,
        options: &GetDirectorSiteOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.send(options, || {
            Ok(ApiRequest::new(Method::GET, &["director_sites", &options.id])
                .headers(&options.headers))
        })
        .await
    }

    /// Deletes a director site instance. The service answers with the site
    /// in its deleting state.
    pub async fn delete_director_site(
        &self,
        options: &DeleteDirectorSiteOptions,
    ) -> VmwareResult<DetailedResponse<DirectorSite>> {
        self.send(options, || {
            Ok(ApiRequest::new(Method::DELETE, &["director_sites", &options.id])
                .headers(&options.headers))
        })
        .await
    }
}
