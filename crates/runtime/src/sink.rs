//! Presentation barrier.
//!
//! Each executed action node may emit one [`VisualRequest`]; the driver
//! awaits the sink before completing the node, so game logic and visual
//! pacing stay ordered without the core ever touching a clock. A headless
//! host plugs in [`SilentSink`] and the whole turn resolves immediately.

use async_trait::async_trait;
use combat_core::VisualRequest;

/// Receives visual steps and resolves when each has been shown.
#[async_trait]
pub trait PresentationSink: Send + Sync {
    async fn present(&self, visual: &VisualRequest);
}

/// Sink that shows nothing and returns at once. Used by tests, server-side
/// simulation and AI lookahead.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

#[async_trait]
impl PresentationSink for SilentSink {
    async fn present(&self, _visual: &VisualRequest) {}
}

/// Sink that logs every visual step at debug level. Handy when running
/// headless but watching what a turn did.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl PresentationSink for TracingSink {
    async fn present(&self, visual: &VisualRequest) {
        tracing::debug!(?visual, "presenting");
    }
}
