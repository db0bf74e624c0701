//! Prints the host profiles and multitenant director sites on offer.

use std::env;
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    IamAuthenticator, ListDirectorSiteHostProfilesOptions, ListMultitenantDirectorSitesOptions,
    RequestHeaders, VmwareClient, VmwareResult,
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
    let headers = RequestHeaders::new().accept_language("en-us");

    let profiles = client
        .list_director_site_host_profiles(
            &ListDirectorSiteHostProfilesOptions::new().headers(headers.clone()),
        )
        .await?;
    println!("Host profiles:");
    for profile in &profiles.result.director_site_host_profiles {
        println!(
            "  • {}: {} cores, {} GB RAM, {}",
            profile.id.as_deref().unwrap_or("-"),
            profile.cpu.unwrap_or(0),
            profile.ram.unwrap_or(0),
            profile.processor.as_deref().unwrap_or("-")
        );
    }

    let sites = client
        .list_multitenant_director_sites(
            &ListMultitenantDirectorSitesOptions::new().headers(headers),
        )
        .await?;
    println!("\nMultitenant director sites:");
    for site in &sites.result.multitenant_director_sites {
        println!(
            "  • {} ({})",
            site.display_name.as_deref().unwrap_or("-"),
            site.region.as_deref().unwrap_or("-")
        );
        for pvdc in &site.pvdcs {
            println!("      PVDC {:?} in {:?}", pvdc.id, pvdc.data_center_name);
        }
    }

    Ok(())
}
