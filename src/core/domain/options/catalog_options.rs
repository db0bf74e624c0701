use super::RequestHeaders;
use crate::core::domain::{error::ValidationError, validation::Validate};

/// Options for `GET /director_site_host_profiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectorSiteHostProfilesOptions {
    pub headers: RequestHeaders,
}

impl ListDirectorSiteHostProfilesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for ListDirectorSiteHostProfilesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Options for `GET /multitenant_director_sites`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMultitenantDirectorSitesOptions {
    pub headers: RequestHeaders,
}

impl ListMultitenantDirectorSitesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Validate for ListMultitenantDirectorSitesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
