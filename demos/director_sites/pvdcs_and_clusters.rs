//! Walks the PVDCs and clusters of a director site, adds a cluster, resizes
//! it, and finally removes it.
//!
//! Expects `VMWARE_SITE_ID` and `VMWARE_PVDC_ID` besides the API key.

use std::env;
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    ClusterPatch, CreateDirectorSitesPvdcsClustersOptions, DeleteDirectorSitesPvdcsClusterOptions,
    FileShares, GetDirectorInstancesPvdcsClusterOptions, GetDirectorSitesPvdcsOptions,
    IamAuthenticator, ListDirectorSitesPvdcsClustersOptions, ListDirectorSitesPvdcsOptions,
    UpdateDirectorSitesPvdcsClusterOptions, VmwareClient, VmwareResult,
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
        .rate_limit(5, 10)
        .build()?;

    let site_id = env::var("VMWARE_SITE_ID").unwrap_or_default();
    let pvdc_id = env::var("VMWARE_PVDC_ID").unwrap_or_default();

    // 1. PVDCs of the site.
    let pvdcs = client
        .list_director_sites_pvdcs(&ListDirectorSitesPvdcsOptions::new(&site_id))
        .await?;
    for pvdc in &pvdcs.result.pvdcs {
        println!(
            "PVDC {} ({})",
            pvdc.name.as_deref().unwrap_or("-"),
            pvdc.status.as_deref().unwrap_or("unknown")
        );
    }

    let pvdc = client
        .get_director_sites_pvdcs(&GetDirectorSitesPvdcsOptions::new(&site_id, &pvdc_id))
        .await?;
    println!("Selected PVDC in {:?}", pvdc.result.data_center_name);

    // 2. Clusters of the selected PVDC.
    let list_options = ListDirectorSitesPvdcsClustersOptions::new(&site_id, &pvdc_id);
    let clusters = client
        .list_director_sites_pvdcs_clusters(&list_options)
        .await?;
    for cluster in &clusters.result.clusters {
        println!(
            "  cluster {}: {} host(s)",
            cluster.name.as_deref().unwrap_or("-"),
            cluster.host_count.unwrap_or(0)
        );
    }

    // 3. Add, resize and remove a cluster.
    let created = client
        .create_director_sites_pvdcs_clusters(&CreateDirectorSitesPvdcsClustersOptions::new(
            &site_id,
            &pvdc_id,
            "cluster_2",
            2,
            "BM_2S_20_CORES_192_GB",
            FileShares::default().storage_two_iops_gb(2000),
        ))
        .await?;
    let Some(cluster_id) = created.result.id else {
        println!("The service did not return a cluster id.");
        return Ok(());
    };

    let cluster = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            &site_id,
            &cluster_id,
            &pvdc_id,
        ))
        .await?;
    println!("New cluster status: {:?}", cluster.result.status);

    let patch = ClusterPatch::new().host_count(3).as_merge_patch()?;
    client
        .update_director_sites_pvdcs_cluster(&UpdateDirectorSitesPvdcsClusterOptions::new(
            &site_id,
            &cluster_id,
            &pvdc_id,
            patch,
        ))
        .await?;

    let deleted = client
        .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::new(
            &site_id,
            &cluster_id,
            &pvdc_id,
        ))
        .await?;
    println!("Delete accepted: {}", deleted.status());

    Ok(())
}
