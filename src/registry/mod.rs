//! Registry clients for the three release sources
//!
//! Each client takes an injectable base URL so tests can point it at a
//! local mock server. A non-success HTTP status (other than the GitHub
//! rate-limit case) is an absence, not an error.

pub mod conda;
pub mod error;
pub mod github;
pub mod pypi;

pub use conda::CondaRegistry;
pub use github::GitHubRegistry;
pub use pypi::{IndexReleases, PypiRegistry};
