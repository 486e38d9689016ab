//! Vulkan bootstrap: a window, an instance, a validation messenger in debug
//! builds, and a poll loop that waits for the window to close.

use crate::app::App;
use anyhow::Result;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;

fn main() -> Result<()> {
    // Validation and diagnostic output belongs on stderr; stdout is reserved
    // for the extension listing.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;

    app.into_result()
}
