//! Reads the OIDC configuration of a director site and, when none is set,
//! federates the site with IAM.

use std::env;
use tracing_subscriber::EnvFilter;
use vmware_aas::{
    GetOidcConfigurationOptions, IamAuthenticator, SetOidcConfigurationOptions, VmwareClient,
    VmwareError, VmwareResult,
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
    let site_id = env::var("VMWARE_SITE_ID").unwrap_or_default();

    match client
        .get_oidc_configuration(&GetOidcConfigurationOptions::new(&site_id))
        .await
    {
        Ok(config) => {
            println!("OIDC status: {:?}", config.result.status);
            println!("Last set at: {:?}", config.result.last_set_at);
        }
        Err(VmwareError::Service { status, .. }) if status.as_u16() == 404 => {
            println!("No OIDC configuration yet, setting the IAM default.");
            let config = client
                .set_oidc_configuration(&SetOidcConfigurationOptions::new(&site_id))
                .await?;
            println!("OIDC status: {:?}", config.result.status);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
