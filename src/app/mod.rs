mod engine;

use crate::app::engine::Engine;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowId,
};

/// Event-loop handler. Initialization failures are recorded here and
/// surfaced to `main` once the loop has returned, so every error path goes
/// through a single exit.
#[derive(Default)]
pub struct App {
    engine: Option<Engine>,
    fatal: Option<anyhow::Error>,
}

/// What the event loop should do after handling a window event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EventResponse {
    Continue,
    Exit,
}

fn respond(event: &WindowEvent) -> EventResponse {
    match event {
        WindowEvent::CloseRequested => EventResponse::Exit,
        _ => EventResponse::Continue,
    }
}

impl App {
    /// Consumes the handler after the loop has finished, yielding the
    /// process result: `Ok` for a clean close, the recorded error otherwise.
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.fatal {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }
        match Engine::new(event_loop) {
            Ok(engine) => self.engine = Some(engine),
            Err(error) => {
                self.fatal = Some(error);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if respond(&event) == EventResponse::Exit {
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Dropping the engine tears down context then window, in that order.
        self.engine = None;
    }
}
