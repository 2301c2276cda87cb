use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered 403 or 429. Continuing would produce a misleadingly
    /// incomplete report, so the whole run aborts on this.
    #[error("GitHub rate limit or access denied (status {status}): {url}")]
    RateLimited { status: u16, url: String },
}
