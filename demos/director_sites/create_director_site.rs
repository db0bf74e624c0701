//! Orders a single-tenant director site with one PVDC and one cluster,
//! then reads it back.

use std::env;
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    ClusterPrototype, CreateDirectorSitesOptions, DEFAULT_SERVICE_URL, FileShares,
    GetDirectorSiteOptions, IamAuthenticator, PvdcPrototype, ResourceGroupIdentity, VmwareClient,
    VmwareResult,
};

#[tokio::main]
async fn main() -> VmwareResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("VMWARE_API_KEY").unwrap_or_default();
    let url = env::var("VMWARE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
    let client = VmwareClient::builder()
        .service_url(url)
        .authenticator(IamAuthenticator::new(api_key)?)
        .build()?;

    let cluster = ClusterPrototype::new(
        "cluster_1",
        2,
        "BM_2S_20_CORES_192_GB",
        FileShares::default()
            .storage_two_iops_gb(24000)
            .storage_ten_iops_gb(8000),
    );
    let pvdc = PvdcPrototype::new("pvdc-1", "dal10", vec![cluster]);
    let mut options = CreateDirectorSitesOptions::new("my_director_site", vec![pvdc]);
    if let Ok(group) = env::var("VMWARE_RESOURCE_GROUP_ID") {
        options = options.resource_group(ResourceGroupIdentity::new(group));
    }

    let created = client.create_director_sites(&options).await?;
    println!("Ordered director site: {:?}", created.result.id);
    println!(
        "Request id: {}",
        created.response.header("x-request-id").unwrap_or("-")
    );

    if let Some(id) = created.result.id {
        let site = client
            .get_director_site(&GetDirectorSiteOptions::new(id))
            .await?;
        println!(
            "Status: {}",
            site.result.status.as_deref().unwrap_or("unknown")
        );
    }

    Ok(())
}
