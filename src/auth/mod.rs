//! Authenticators that turn credentials into an `Authorization` header.

pub mod application;
mod authenticator;

pub use application::service::iam_token_service::{DEFAULT_IAM_URL, IamAuthenticator};
pub use authenticator::{Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator};

#[cfg(test)]
pub use authenticator::MockAuthenticator;
