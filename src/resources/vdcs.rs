use crate::{
    CreateVdcOptions, DeleteVdcOptions, DetailedResponse, GetVdcOptions, ListVdcsOptions,
    UpdateVdcOptions, Vdc, VdcCollection, VmwareClient, VmwareResult,
    core::infrastructure::api_client::ApiRequest,
};
use reqwest::Method;

impl VmwareClient {
    pub async fn list_vdcs(
        &self,
        options: &ListVdcsOptions,
    ) -> VmwareResult<DetailedResponse<VdcCollection>> {
        self.send(options, || {
            Ok(ApiRequest::new(Method::GET, &["vdcs"]).headers(&options.headers))
        })
        .await
    }

    /// Creates a virtual data center on a director site.
    pub async fn create_vdc(
        &self,
        options: &CreateVdcOptions,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.send(options, || {
            ApiRequest::new(Method::POST, &["vdcs"])
                .headers(&options.headers)
                .json(&options.vdc)
        })
        .await
    }

    pub async fn get_vdc(&self, options: &GetVdcOptions) -> VmwareResult<DetailedResponse<Vdc>> {
        self.send(options, || {
            Ok(ApiRequest::new(Method::GET, &["vdcs", &options.id]).headers(&options.headers))
        })
        .await
    }

    /// Applies a merge patch to a VDC. Keys absent from the patch are left
    /// untouched; `null` values reset a field.
    pub async fn update_vdc(
        &self,
        options: &UpdateVdcOptions,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.send(options, || {
            ApiRequest::new(Method::PATCH, &["vdcs", &options.id])
                .headers(&options.headers)
                .merge_patch(&options.vdc_patch)
        })
        .await
    }

    pub async fn delete_vdc(
        &self,
        options: &DeleteVdcOptions,
    ) -> VmwareResult<DetailedResponse<Vdc>> {
        self.send(options, || {
            Ok(ApiRequest::new(Method::DELETE, &["vdcs", &options.id]).headers(&options.headers))
        })
        .await
    }
}
