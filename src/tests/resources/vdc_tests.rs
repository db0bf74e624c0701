use super::create_test_client;
use crate::{
    CreateVdcOptions, DeleteVdcOptions, DirectorSitePvdc, GetVdcOptions, ListVdcsOptions,
    MergePatch, UpdateVdcOptions, VdcDirectorSitePrototype, VdcEdgePrototype, VdcPatch, VmwareError,
};
use reqwest::StatusCode;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, header, method, path},
};

fn vdc_json(status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "vdc_id",
        "href": "https://api.us-south.vmware.cloud.ibm.com/v1/vdcs/vdc_id",
        "crn": "crn:v1:bluemix:public:vmware:us-south:a/123::vdc:vdc_id",
        "name": "sampleVDC",
        "status": status,
        "type": "dedicated",
        "cpu": 0,
        "ram": 16,
        "fast_provisioning_enabled": true,
        "rhel_byol": false,
        "windows_byol": false,
        "ordered_at": "2023-03-31T12:00:00Z",
        "director_site": {
            "id": "directorsiteuuid",
            "url": "https://vcd.example.com",
            "pvdc": {"id": "pvdc_uuid", "provider_type": {"name": "paygo"}}
        },
        "edges": [{
            "id": "edge-1",
            "type": "performance",
            "size": "medium",
            "status": "ready_to_use",
            "public_ips": ["1.2.3.4"]
        }]
    })
}

#[tokio::test]
async fn test_list_vdcs_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/vdcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "vdcs": [vdc_json("ready_to_use")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client.list_vdcs(&ListVdcsOptions::new()).await.unwrap();
    let vdc = &response.result.vdcs[0];
    assert_eq!(vdc.cpu, Some(0));
    assert_eq!(vdc.kind.as_deref(), Some("dedicated"));
    assert_eq!(vdc.edges[0].public_ips, vec!["1.2.3.4"]);
    let pvdc = vdc
        .director_site
        .as_ref()
        .and_then(|site| site.pvdc.as_ref())
        .unwrap();
    assert_eq!(pvdc.id, "pvdc_uuid");
}

#[tokio::test]
async fn test_create_vdc_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/vdcs"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "sampleVDC",
            "director_site": {
                "id": "directorsiteuuid",
                "pvdc": {"id": "pvdc_uuid"}
            }
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let director_site = VdcDirectorSitePrototype::new("directorsiteuuid")
        .pvdc(DirectorSitePvdc::new("pvdc_uuid"));
    let options = CreateVdcOptions::new("sampleVDC", director_site);
    let response = client.create_vdc(&options).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.result.status.as_deref(), Some("creating"));
}

#[tokio::test]
async fn test_create_vdc_sends_present_zero_values() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/vdcs"))
        .and(body_json(serde_json::json!({
            "name": "sampleVDC",
            "director_site": {"id": "directorsiteuuid"},
            "edge": {"type": "efficiency"},
            "cpu": 0,
            "rhel_byol": false
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("creating")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let director_site = VdcDirectorSitePrototype::new("directorsiteuuid");
    let options = CreateVdcOptions::new("sampleVDC", director_site)
        .edge(VdcEdgePrototype {
            kind: "efficiency".to_string(),
            size: None,
        })
        .cpu(0)
        .rhel_byol(false);
    assert!(client.create_vdc(&options).await.is_ok());
}

#[tokio::test]
async fn test_create_vdc_requires_director_site() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let options = CreateVdcOptions::new("sampleVDC", VdcDirectorSitePrototype::new(""));
    let result = client.create_vdc(&options).await;
    assert!(matches!(result, Err(VmwareError::Validation(_))));
}

#[tokio::test]
async fn test_get_vdc_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/vdcs/vdc_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vdc_json("ready_to_use")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client.get_vdc(&GetVdcOptions::new("vdc_id")).await.unwrap();
    assert_eq!(response.result.name.as_deref(), Some("sampleVDC"));
    assert_eq!(response.result.fast_provisioning_enabled, Some(true));
}

#[tokio::test]
async fn test_update_vdc_empty_patch() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/vdcs/vdc_id"))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("modifying")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .update_vdc(&UpdateVdcOptions::new("vdc_id", MergePatch::new()))
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("modifying"));
}

#[tokio::test]
async fn test_update_vdc_touched_fields_only() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/vdcs/vdc_id"))
        .and(body_json(serde_json::json!({
            "cpu": 8,
            "ram": null
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("modifying")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let patch = VdcPatch::new().cpu(8).clear_ram().as_merge_patch().unwrap();
    assert!(
        client
            .update_vdc(&UpdateVdcOptions::new("vdc_id", patch))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_delete_vdc_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/vdcs/vdc_id"))
        .respond_with(ResponseTemplate::new(202).set_body_json(vdc_json("deleting")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .delete_vdc(&DeleteVdcOptions::new("vdc_id"))
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("deleting"));
}

#[tokio::test]
async fn test_delete_vdc_conflict() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/vdcs/vdc_id"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "code": "vdc_in_use",
            "message": "The VDC has running workloads."
        })))
        .mount(&mock_server)
        .await;

    let err = client
        .delete_vdc(&DeleteVdcOptions::new("vdc_id"))
        .await
        .unwrap_err();
    match err {
        VmwareError::Service { status, code, .. } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(code.as_deref(), Some("vdc_in_use"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
