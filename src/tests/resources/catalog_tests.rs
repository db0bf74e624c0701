use super::create_test_client;
use crate::{ListDirectorSiteHostProfilesOptions, ListMultitenantDirectorSitesOptions, VmwareError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_list_host_profiles_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_site_host_profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "director_site_host_profiles": [{
                "id": "BM_2S_20_CORES_192_GB",
                "cpu": 40,
                "family": "Cascade Lake",
                "processor": "Xeon Gold 5218",
                "ram": 192,
                "socket": 2,
                "speed": "2.3GHz",
                "manufacturer": "Intel",
                "features": ["hyperthreading", "vsan"]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_director_site_host_profiles(&ListDirectorSiteHostProfilesOptions::new())
        .await
        .unwrap();

    let profile = &response.result.director_site_host_profiles[0];
    assert_eq!(profile.id.as_deref(), Some("BM_2S_20_CORES_192_GB"));
    assert_eq!(profile.cpu, Some(40));
    assert_eq!(profile.socket, Some(2));
    assert_eq!(profile.features, vec!["hyperthreading", "vsan"]);
}

#[tokio::test]
async fn test_list_host_profiles_malformed_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_site_host_profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "director_site_host_profiles": [{"cpu": "forty"}]
        })))
        .mount(&mock_server)
        .await;

    let err = client
        .list_director_site_host_profiles(&ListDirectorSiteHostProfilesOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, VmwareError::Decode { .. }));
    assert!(err.response().unwrap().text().contains("forty"));
}

#[tokio::test]
async fn test_list_multitenant_director_sites_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/multitenant_director_sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "multitenant_director_sites": [{
                "id": "mt-1",
                "name": "dal",
                "display_name": "Dallas",
                "region": "us-south",
                "pvdcs": [{
                    "id": "pvdc_id",
                    "name": "dal10-pvdc",
                    "data_center_name": "dal10",
                    "region_name": "us-south"
                }]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .list_multitenant_director_sites(&ListMultitenantDirectorSitesOptions::new())
        .await
        .unwrap();

    let site = &response.result.multitenant_director_sites[0];
    assert_eq!(site.display_name.as_deref(), Some("Dallas"));
    assert_eq!(site.pvdcs[0].data_center_name.as_deref(), Some("dal10"));
}
