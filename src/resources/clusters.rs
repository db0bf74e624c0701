use crate::{
    Cluster, ClusterCollection, CreateDirectorSitesPvdcsClustersOptions,
    DeleteDirectorSitesPvdcsClusterOptions, DetailedResponse,
    GetDirectorInstancesPvdcsClusterOptions, ListDirectorSitesPvdcsClustersOptions,
    UpdateDirectorSitesPvdcsClusterOptions, VmwareClient, VmwareResult,
    core::infrastructure::api_client::ApiRequest,
};
use reqwest::Method;

impl VmwareClient {
    pub async fn list_director_sites_pvdcs_clusters(
        &self,
        options: &ListDirectorSitesPvdcsClustersOptions,
    ) -> VmwareResult<DetailedResponse<ClusterCollection>> {
        self.send(options, || {
            Ok(ApiRequest::new(
                Method::GET,
                &[
                    "director_sites",
                    &options.site_id,
                    "pvdcs",
                    &options.pvdc_id,
                    "clusters",
                ],
            )
            .headers(&options.headers))
        })
        .await
    }

    /// Adds a cluster to a PVDC.
    pub async fn create_director_sites_pvdcs_clusters(
        &self,
        options: &CreateDirectorSitesPvdcsClustersOptions,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.send(options, || {
            ApiRequest::new(
                Method::POST,
                &[
                    "director_sites",
                    &options.site_id,
                    "pvdcs",
                    &options.pvdc_id,
                    "clusters",
                ],
            )
            .headers(&options.headers)
            .json(&options.cluster)
        })
        .await
    }

    pub async fn get_director_instances_pvdcs_cluster(
        &self,
        options: &GetDirectorInstancesPvdcsClusterOptions,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.send(options, || {
            Ok(ApiRequest::new(
                Method::GET,
                &cluster_path(&options.site_id, &options.pvdc_id, &options.id),
            )
            .headers(&options.headers))
        })
        .await
    }

    pub async fn delete_director_sites_pvdcs_cluster(
        &self,
        options: &DeleteDirectorSitesPvdcsClusterOptions,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.send(options, || {
            Ok(ApiRequest::new(
                Method::DELETE,
                &cluster_path(&options.site_id, &options.pvdc_id, &options.id),
            )
            .headers(&options.headers))
        })
        .await
    }

    /// Resizes a cluster or changes its file shares with a merge patch,
    /// usually rendered by [`ClusterPatch`](crate::ClusterPatch).
    pub async fn update_director_sites_pvdcs_cluster(
        &self,
        options: &UpdateDirectorSitesPvdcsClusterOptions,
    ) -> VmwareResult<DetailedResponse<Cluster>> {
        self.send(options, || {
            ApiRequest::new(
                Method::PATCH,
                &cluster_path(&options.site_id, &options.pvdc_id, &options.id),
            )
            .headers(&options.headers)
            .merge_patch(&options.body)
        })
        .await
    }
}

fn cluster_path<'a>(site_id: &'a str, pvdc_id: &'a str, id: &'a str) -> [&'a str; 6] {
    ["director_sites", site_id, "pvdcs", pvdc_id, "clusters", id]
}
