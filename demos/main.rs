//! Lists the director sites of an account.
//!
//! Reads `VMWARE_API_KEY` (and optionally `VMWARE_URL`) from the environment
//! or a `.env` file. Set `RUST_LOG=vmware_aas=debug` to see each request.

use std::env;
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    DEFAULT_SERVICE_URL, IamAuthenticator, ListDirectorSitesOptions, VmwareClient, VmwareResult,
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

    let response = client
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await?;
    println!("Status: {}", response.status());

    for site in &response.result.director_sites {
        println!(
            "  • {} ({}): {}",
            site.name.as_deref().unwrap_or("-"),
            site.id.as_deref().unwrap_or("-"),
            site.status.as_deref().unwrap_or("unknown")
        );
        for pvdc in &site.pvdcs {
            println!(
                "      PVDC {} in {} with {} cluster(s)",
                pvdc.name.as_deref().unwrap_or("-"),
                pvdc.data_center_name.as_deref().unwrap_or("-"),
                pvdc.clusters.len()
            );
        }
    }

    if response.result.director_sites.is_empty() {
        println!("No director sites found.");
    }

    Ok(())
}
