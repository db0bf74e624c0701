pub mod client_config;
pub mod cluster;
pub mod common;
pub mod detailed_response;
pub mod director_site;
pub mod host_profile;
pub mod merge_patch;
pub mod multitenant;
pub mod oidc;
pub mod pvdc;
pub mod vdc;
pub mod vmware_connection;
