//! Remote content-type probe used by the image link rule.

use async_trait::async_trait;
use url::Url;

/// Looks up the declared content type of a remote resource.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpContentProbe`] - HEAD request via reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentProbe: Send + Sync {
    /// Returns the `content-type` header declared for `url`.
    ///
    /// Returns `None` when the resource could not be reached or declared no
    /// content type. Transport failures are never propagated.
    async fn content_type(&self, url: &Url) -> Option<String>;
}
