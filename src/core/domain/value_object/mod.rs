mod access_token;
mod api_version;
mod service_url;

pub use access_token::AccessToken;
pub use api_version::{ApiVersion, DEFAULT_API_VERSION};
pub use service_url::{DEFAULT_SERVICE_URL, ServiceUrl};
