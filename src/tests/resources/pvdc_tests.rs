use super::create_test_client;
use crate::{
    ClusterPrototype, CreateDirectorSitesPvdcsOptions, FileShares, GetDirectorSitesPvdcsOptions,
    ListDirectorSitesPvdcsOptions, VmwareError,
};
use reqwest::StatusCode;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, method, path},
};

fn pvdc_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "pvdc-2",
        "href": format!("https://api.us-south.vmware.cloud.ibm.com/v1/director_sites/site-1/pvdcs/{}", id),
        "data_center_name": "dal12",
        "status": "ready_to_use",
        "provider_types": [{"name": "paygo"}],
        "clusters": [{
            "id": "cluster-9",
            "name": "cluster_9",
            "host_count": 3,
            "host_profile": "BM_2S_20_CORES_192_GB",
            "storage_type": "nfs",
            "data_center_name": "dal12",
            "file_shares": {"STORAGE_TWO_IOPS_GB": 24000}
        }]
    })
}

#[tokio::test]
async fn test_list_pvdcs_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site-1/pvdcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pvdcs": [pvdc_json("pvdc-1"), pvdc_json("pvdc-2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_director_sites_pvdcs(&ListDirectorSitesPvdcsOptions::new("site-1"))
        .await
        .unwrap();

    let pvdcs = response.result.pvdcs;
    assert_eq!(pvdcs.len(), 2);
    assert_eq!(pvdcs[1].id.as_deref(), Some("pvdc-2"));
    assert_eq!(pvdcs[0].provider_types[0].name, "paygo");
    assert_eq!(
        pvdcs[0].clusters[0]
            .file_shares
            .and_then(|shares| shares.storage_two_iops_gb),
        Some(24000)
    );
}

#[tokio::test]
async fn test_create_pvdc_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/director_sites/site-1/pvdcs"))
        .and(body_json(serde_json::json!({
            "name": "pvdc-2",
            "data_center_name": "dal12",
            "clusters": [{
                "name": "cluster_9",
                "host_count": 3,
                "host_profile": "BM_2S_20_CORES_192_GB",
                "file_shares": {"STORAGE_TWO_IOPS_GB": 24000}
            }]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(pvdc_json("pvdc-2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cluster = ClusterPrototype::new(
        "cluster_9",
        3,
        "BM_2S_20_CORES_192_GB",
        FileShares::default().storage_two_iops_gb(24000),
    );
    let options = CreateDirectorSitesPvdcsOptions::new("site-1", "pvdc-2", "dal12", vec![cluster]);

    let response = client.create_director_sites_pvdcs(&options).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.result.data_center_name.as_deref(), Some("dal12"));
}

#[tokio::test]
async fn test_create_pvdc_requires_clusters() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let options = CreateDirectorSitesPvdcsOptions::new("site-1", "pvdc-2", "dal12", Vec::new());
    let result = client.create_director_sites_pvdcs(&options).await;
    assert!(matches!(result, Err(VmwareError::Validation(_))));

    let options = CreateDirectorSitesPvdcsOptions::new(
        "",
        "pvdc-2",
        "dal12",
        vec![ClusterPrototype::new("c", 2, "BM", FileShares::default())],
    );
    let result = client.create_director_sites_pvdcs(&options).await;
    assert!(matches!(result, Err(VmwareError::Validation(_))));
}

#[tokio::test]
async fn test_get_pvdc_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site-1/pvdcs/pvdc-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pvdc_json("pvdc-2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get_director_sites_pvdcs(&GetDirectorSitesPvdcsOptions::new("site-1", "pvdc-2"))
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("ready_to_use"));
}

#[tokio::test]
async fn test_get_pvdc_requires_both_ids() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    for options in [
        GetDirectorSitesPvdcsOptions::new("", "pvdc-2"),
        GetDirectorSitesPvdcsOptions::new("site-1", ""),
    ] {
        let result = client.get_director_sites_pvdcs(&options).await;
        assert!(matches!(result, Err(VmwareError::Validation(_))));
    }
}
