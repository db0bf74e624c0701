use super::create_test_client;
use crate::{
    CancellationToken, GetDirectorSiteOptions, GetVdcOptions, ListDirectorSitesOptions,
    NoAuthAuthenticator, VmwareClient, VmwareError, auth::MockAuthenticator,
};
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, header, method, path},
};

#[tokio::test]
async fn test_concurrent_calls_match_sequential_calls() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    for id in ["a", "b", "c", "d"] {
        let body = serde_json::json!({"id": id, "name": format!("site-{}", id)});
        Mock::given(method("GET"))
            .and(path(format!("/director_sites/{}", id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(Duration::from_millis(20)),
            )
            .mount(&mock_server)
            .await;
    }

    let ids = ["a", "b", "c", "d"];
    let mut sequential = Vec::new();
    for id in ids {
        let response = client
            .get_director_site(&GetDirectorSiteOptions::new(id))
            .await
            .unwrap();
        sequential.push(response.result);
    }

    let handles: Vec<_> = ids
        .iter()
        .map(|id| {
            let client = client.clone();
            let options = GetDirectorSiteOptions::new(*id);
            tokio::spawn(async move { client.get_director_site(&options).await })
        })
        .collect();
    let mut concurrent = Vec::new();
    for handle in handles {
        concurrent.push(handle.await.unwrap().unwrap().result);
    }

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn test_cancelled_handle_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    token.cancel();
    let result = client
        .with_cancellation(token)
        .get_vdc(&GetVdcOptions::new("vdc_id"))
        .await;
    assert!(matches!(result, Err(VmwareError::Cancelled)));
}

#[tokio::test]
async fn test_cancellation_interrupts_slow_call() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"director_sites": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let cancellable = client.with_cancellation(token.clone());
    let call = tokio::spawn(async move {
        cancellable
            .list_director_sites(&ListDirectorSitesOptions::new())
            .await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();

    let result = tokio::time::timeout(Duration::from_secs(2), call)
        .await
        .expect("cancellation was not prompt")
        .unwrap();
    assert!(matches!(result, Err(VmwareError::Cancelled)));
}

#[tokio::test]
async fn test_shared_authenticator_is_consulted_per_request() {
    let mock_server = MockServer::start().await;

    let mut authenticator = MockAuthenticator::new();
    authenticator.expect_kind().return_const("mock");
    authenticator
        .expect_authorization()
        .times(2)
        .returning(|| Ok(Some("Bearer shared".to_string())));
    let authenticator = Arc::new(authenticator);

    let first = VmwareClient::builder()
        .service_url(mock_server.uri())
        .shared_authenticator(authenticator.clone())
        .build()
        .unwrap();
    let second = VmwareClient::builder()
        .service_url(mock_server.uri())
        .shared_authenticator(authenticator)
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .and(header("authorization", "Bearer shared"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&mock_server)
        .await;

    first
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap();
    second
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unauthenticated_client_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;
    let client = VmwareClient::builder()
        .service_url(mock_server.uri())
        .authenticator(NoAuthAuthenticator)
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    client
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap();
    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}
