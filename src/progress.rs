//! User-visible progress reporting

use async_trait::async_trait;

/// Receives progress lines and per-PR warnings as the workflow advances
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A step completed or started
    async fn on_message(&self, message: &str);

    /// A PR was skipped or a non-fatal lookup failed
    async fn on_warning(&self, message: &str);
}

/// Progress sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

#[async_trait]
impl ProgressCallback for NoProgress {
    async fn on_message(&self, _message: &str) {}

    async fn on_warning(&self, _message: &str) {}
}
