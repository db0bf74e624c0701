use super::create_test_client;
use crate::{
    ClusterPatch, CreateDirectorSitesPvdcsClustersOptions, DeleteDirectorSitesPvdcsClusterOptions,
    FileShares, GetDirectorInstancesPvdcsClusterOptions, ListDirectorSitesPvdcsClustersOptions,
    UpdateDirectorSitesPvdcsClusterOptions, VmwareError,
};
use reqwest::StatusCode;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, header, method, path},
};

fn cluster_json(status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "id",
        "name": "cluster_1",
        "href": "https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/site_id/pvdcs/pvdc_id/clusters/id",
        "ordered_at": "2023-03-31T12:00:00Z",
        "provisioned_at": "2023-03-31T14:00:00Z",
        "host_count": 2,
        "status": status,
        "data_center_name": "dal10",
        "host_profile": "BM_2S_20_CORES_192_GB",
        "storage_type": "nfs",
        "billing_plan": "monthly",
        "file_shares": {
            "STORAGE_POINT_TWO_FIVE_IOPS_GB": 0,
            "STORAGE_TEN_IOPS_GB": 8000
        }
    })
}

#[tokio::test]
async fn test_list_clusters_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site_id/pvdcs/pvdc_id/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "clusters": [cluster_json("ready_to_use")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_director_sites_pvdcs_clusters(&ListDirectorSitesPvdcsClustersOptions::new(
            "site_id", "pvdc_id",
        ))
        .await
        .unwrap();

    let cluster = &response.result.clusters[0];
    assert_eq!(cluster.billing_plan.as_deref(), Some("monthly"));
    let shares = cluster.file_shares.unwrap();
    assert_eq!(shares.storage_point_two_five_iops_gb, Some(0));
    assert_eq!(shares.storage_two_iops_gb, None);
    assert_eq!(shares.storage_ten_iops_gb, Some(8000));
}

#[tokio::test]
async fn test_create_cluster_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/director_sites/site_id/pvdcs/pvdc_id/clusters"))
        .and(body_json(serde_json::json!({
            "name": "cluster_1",
            "host_count": 2,
            "host_profile": "BM_2S_20_CORES_192_GB",
            "file_shares": {
                "STORAGE_POINT_TWO_FIVE_IOPS_GB": 0,
                "STORAGE_TEN_IOPS_GB": 8000
            }
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(cluster_json("creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = CreateDirectorSitesPvdcsClustersOptions::new(
        "site_id",
        "pvdc_id",
        "cluster_1",
        2,
        "BM_2S_20_CORES_192_GB",
        FileShares::default()
            .storage_point_two_five_iops_gb(0)
            .storage_ten_iops_gb(8000),
    );

    let response = client
        .create_director_sites_pvdcs_clusters(&options)
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("creating"));
}

#[tokio::test]
async fn test_create_cluster_requires_host_profile() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let options = CreateDirectorSitesPvdcsClustersOptions::new(
        "site_id",
        "pvdc_id",
        "cluster_1",
        2,
        "",
        FileShares::default(),
    );
    let result = client.create_director_sites_pvdcs_clusters(&options).await;
    assert!(matches!(result, Err(VmwareError::Validation(_))));
}

#[tokio::test]
async fn test_get_cluster_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site_id/pvdcs/pvdc_id/clusters/id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cluster_json("ready_to_use")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            "site_id", "id", "pvdc_id",
        ))
        .await
        .unwrap();
    assert_eq!(response.result.id.as_deref(), Some("id"));
    assert_eq!(response.result.host_count, Some(2));
}

#[tokio::test]
async fn test_delete_cluster_path() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/director_sites/site_id/pvdcs/pvdc_id/clusters/id"))
        .respond_with(ResponseTemplate::new(202).set_body_json(cluster_json("deleting")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::new(
            "site_id", "id", "pvdc_id",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.result.status.as_deref(), Some("deleting"));
}

#[tokio::test]
async fn test_delete_cluster_requires_every_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    for options in [
        DeleteDirectorSitesPvdcsClusterOptions::new("", "id", "pvdc_id"),
        DeleteDirectorSitesPvdcsClusterOptions::new("site_id", "", "pvdc_id"),
        DeleteDirectorSitesPvdcsClusterOptions::new("site_id", "id", ""),
    ] {
        let result = client.delete_director_sites_pvdcs_cluster(&options).await;
        assert!(matches!(result, Err(VmwareError::Validation(_))));
    }
}

#[tokio::test]
async fn test_update_cluster_merge_patch() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/director_sites/site_id/pvdcs/pvdc_id/clusters/id"))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(serde_json::json!({
            "host_count": 4,
            "file_shares": null
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(cluster_json("updating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let patch = ClusterPatch::new()
        .host_count(4)
        .clear_file_shares()
        .as_merge_patch()
        .unwrap();
    let options = UpdateDirectorSitesPvdcsClusterOptions::new("site_id", "id", "pvdc_id", patch);

    let response = client
        .update_director_sites_pvdcs_cluster(&options)
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("updating"));
}
