//! Orders a director site using the order-info shape, which names the
//! resource group directly and gives each cluster a storage type.

use std::env;
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    ClusterOrderInfo, CreateDirectorSitesOptions, FileShares, IamAuthenticator, PvdcOrderInfo,
    VmwareClient, VmwareResult,
};

#[tokio::main]
async fn main() -> VmwareResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("VMWARE_API_KEY").unwrap_or_default();
    let client = VmwareClient::builder()
        .authenticator(IamAuthenticator::new(api_key)?)
        .build()?;

    let file_shares = FileShares::default()
        .storage_point_two_five_iops_gb(0)
        .storage_two_iops_gb(24000)
        .storage_four_iops_gb(24000)
        .storage_ten_iops_gb(8000);
    let cluster = ClusterOrderInfo::new("cluster_1", "nfs", "BM_2S_20_CORES_192_GB")
        .host_count(3)
        .file_shares(file_shares);
    let pvdc = PvdcOrderInfo::new("pvdc-1", "dal10", vec![cluster]);
    let resource_group = env::var("VMWARE_RESOURCE_GROUP_ID").unwrap_or_default();

    let options =
        CreateDirectorSitesOptions::new_order_info("my_director_site", resource_group, vec![pvdc]);
    let created = client.create_director_sites(&options).await?;

    println!("HTTP {}", created.status());
    println!("{:#?}", created.result);
    Ok(())
}
