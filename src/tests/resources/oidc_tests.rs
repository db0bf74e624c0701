use super::create_test_client;
use crate::{GetOidcConfigurationOptions, SetOidcConfigurationOptions, VmwareError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, method, path},
};

#[tokio::test]
async fn test_get_oidc_configuration_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites/site_id/oidc_configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "added",
            "last_set_at": "2023-03-31T12:00:00Z",
            "issuer": "https://iam.cloud.ibm.com/identity"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get_oidc_configuration(&GetOidcConfigurationOptions::new("site_id"))
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("added"));
    assert_eq!(
        response.result.provider["issuer"],
        "https://iam.cloud.ibm.com/identity"
    );
}

#[tokio::test]
async fn test_set_oidc_configuration_without_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/director_sites/site_id/oidc_configuration"))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "status": "pending"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .set_oidc_configuration(&SetOidcConfigurationOptions::new("site_id"))
        .await
        .unwrap();
    assert_eq!(response.result.status.as_deref(), Some("pending"));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(!requests[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn test_set_oidc_configuration_with_provider_fields() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/director_sites/site_id/oidc_configuration"))
        .and(body_json(serde_json::json!({
            "issuer": "https://issuer.example.com",
            "client_id": "abc"
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "status": "pending"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = SetOidcConfigurationOptions::new("site_id")
        .provider_field("issuer", "https://issuer.example.com")
        .provider_field("client_id", "abc");
    assert!(client.set_oidc_configuration(&options).await.is_ok());
}

#[tokio::test]
async fn test_oidc_requires_site_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let get = client
        .get_oidc_configuration(&GetOidcConfigurationOptions::new(""))
        .await;
    assert!(matches!(get, Err(VmwareError::Validation(_))));
    let set = client
        .set_oidc_configuration(&SetOidcConfigurationOptions::new(""))
        .await;
    assert!(matches!(set, Err(VmwareError::Validation(_))));
}
