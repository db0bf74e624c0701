//! Creates a VDC on a director site, resizes it with a merge patch, lists
//! all VDCs and deletes the new one.
//!
//! Expects `VMWARE_SITE_ID` and `VMWARE_PVDC_ID` besides the API key.

use std::{env, time::Duration};
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    CancellationToken, CreateVdcOptions, DeleteVdcOptions, DirectorSitePvdc, GetVdcOptions,
    IamAuthenticator, ListVdcsOptions, UpdateVdcOptions, VdcDirectorSitePrototype, VdcPatch,
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
        .timeout(Duration::from_secs(30))
        .build()?;

    // Give up on the whole walk-through after two minutes.
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(120)).await;
        trigger.cancel();
    });
    let client = client.with_cancellation(token);

    let site_id = env::var("VMWARE_SITE_ID").unwrap_or_default();
    let pvdc_id = env::var("VMWARE_PVDC_ID").unwrap_or_default();

    let pvdc = DirectorSitePvdc::new(pvdc_id);
    let director_site = VdcDirectorSitePrototype::new(site_id).pvdc(pvdc);
    let vdc_options = CreateVdcOptions::new("sampleVDC", director_site)
        .fast_provisioning_enabled(true);
    let created = client.create_vdc(&vdc_options).await?;
    let Some(vdc_id) = created.result.id else {
        println!("The service did not return a VDC id.");
        return Ok(());
    };
    println!("Created VDC {}", vdc_id);

    let vdc = client.get_vdc(&GetVdcOptions::new(&vdc_id)).await?;
    println!("Status: {:?}", vdc.result.status);

    let patch = VdcPatch::new().cpu(4).ram(32).as_merge_patch()?;
    client
        .update_vdc(&UpdateVdcOptions::new(&vdc_id, patch))
        .await?;

    let vdcs = client.list_vdcs(&ListVdcsOptions::new()).await?;
    for vdc in &vdcs.result.vdcs {
        println!(
            "  • {} ({})",
            vdc.name.as_deref().unwrap_or("-"),
            vdc.status.as_deref().unwrap_or("unknown")
        );
    }

    let deleted = client.delete_vdc(&DeleteVdcOptions::new(&vdc_id)).await?;
    println!("Delete accepted: {}", deleted.status());
    Ok(())
}
