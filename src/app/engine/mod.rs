use anyhow::Result;
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use crate::app::engine::context::Context;

mod context;

const WINDOW_TITLE: &str = "Vulkan";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Owns the window and the Vulkan context for its lifetime.
///
/// Field order is load-bearing: `context` is declared before `window` so the
/// Vulkan objects are destroyed before the window they were created against.
pub struct Engine {
    context: Context,
    window: Window,
}

impl Engine {
    pub fn new(event_loop: &ActiveEventLoop) -> Result<Self> {
        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = event_loop.create_window(attributes)?;
        tracing::debug!(window = ?window.id(), "window created");

        // SAFETY: the window outlives the context because `Engine` owns both
        // and drops the context first.
        let context = unsafe { Context::create(&window)? };
        tracing::info!("engine initialized");

        Ok(Self { context, window })
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        tracing::debug!(window = ?self.window.id(), "engine shutting down");
    }
}
