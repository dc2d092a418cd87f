//! Platform renderer infrastructure module
//!
//! One adapter per platform. Each one only decides how a notification
//! looks; every notification kind works with every renderer.

mod desktop;
mod mobile;
mod web;

use std::sync::Arc;

pub use desktop::DesktopRenderer;
pub use mobile::{MobileRenderer, MOBILE_ICON};
pub use web::WebRenderer;

use crate::application::ports::{OutputSink, PlatformRenderer};
use crate::domain::config::RenderSettings;
use crate::domain::platform::Platform;

/// Create the renderer adapter for a platform
pub fn create_renderer(
    platform: Platform,
    settings: &RenderSettings,
    sink: Arc<dyn OutputSink>,
) -> Arc<dyn PlatformRenderer> {
    match platform {
        Platform::Web => Arc::new(WebRenderer::new(sink)),
        Platform::Mobile => Arc::new(MobileRenderer::new(sink)),
        Platform::Desktop => Arc::new(DesktopRenderer::with_settings(sink, settings)),
    }
}
