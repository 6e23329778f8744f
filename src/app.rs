use std::{cell::Cell, rc::Rc, sync::Arc, time::Instant};

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, Window, WindowAttributes, WindowId},
};

use crate::{
    card::{CardComposition, FrameOutput},
    gfx::camera::{CameraManager, CameraUniform},
    input::{Anywhere, HitRegion},
};

/// Longest frame the spring integrator is fed, in seconds
const MAX_FRAME_DELTA: f64 = 0.1;
const FALLBACK_FRAME_DELTA: f64 = 1.0 / 60.0;

/// Renderer seam: receives the finished state of every frame
pub trait FrameSink {
    fn present(&mut self, frame: &FrameOutput, camera: &CameraUniform);
}

/// Sink that only logs frames, at trace level
#[derive(Default)]
pub struct LogSink {
    frames: u64,
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &FrameOutput, camera: &CameraUniform) {
        self.frames += 1;
        log::trace!(
            "frame {}: y={:.3} yaw={:.3} meshes={} dragging={} eye={:?}",
            self.frames,
            frame.transform.position_y,
            frame.transform.rotation_y,
            frame.meshes.len(),
            frame.is_dragging,
            camera.view_position
        );
    }
}

pub struct CardViewerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    title: String,
    card: CardComposition,
    camera_manager: CameraManager,
    sink: Box<dyn FrameSink>,
    hit_region: Box<dyn HitRegion>,
    cursor: PhysicalPosition<f64>,
    last_frame: Option<Instant>,
    /// Latest drag flag reported by the card, waiting to reach the cursor icon
    pending_drag_flag: Rc<Cell<Option<bool>>>,
    /// Set while a consumed press owns the pointer; scroll zoom is suspended
    press_captured: bool,
}

impl CardViewerApp {
    /// Create a viewer for `card` presenting frames to `sink`.
    ///
    /// A drag callback already set on the card's viewer keeps firing; the
    /// cursor icon listener is chained after it.
    pub fn new<S>(card: CardComposition, sink: S) -> anyhow::Result<Self>
    where
        S: FrameSink + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState::new(card, Box::new(sink)),
        })
    }

    /// Builder pattern: Restrict pointer presses to a screen region
    pub fn with_hit_region<H>(mut self, hit_region: H) -> Self
    where
        H: HitRegion + 'static,
    {
        self.app_state.hit_region = Box::new(hit_region);
        self
    }

    /// Builder pattern: Set the window title
    pub fn with_title(mut self, title: &str) -> Self {
        self.app_state.title = title.to_string();
        self
    }

    /// Forwards drag-flag changes to `listener` in addition to the cursor icon
    pub fn on_drag_changed<F>(mut self, listener: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        self.app_state.chain_drag_listener(listener);
        self
    }

    pub fn card_mut(&mut self) -> &mut CardComposition {
        &mut self.app_state.card
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated with an error")
    }
}

impl AppState {
    fn new(card: CardComposition, sink: Box<dyn FrameSink>) -> Self {
        let mut state = Self {
            window: None,
            title: "Card Viewer".to_string(),
            card,
            camera_manager: CameraManager::default(),
            sink,
            hit_region: Box::new(Anywhere),
            cursor: PhysicalPosition::new(0.0, 0.0),
            last_frame: None,
            pending_drag_flag: Rc::new(Cell::new(None)),
            press_captured: false,
        };
        let pending = Rc::clone(&state.pending_drag_flag);
        state.chain_drag_listener(move |dragging| pending.set(Some(dragging)));
        state
    }

    /// Runs `listener` after whatever drag callback the viewer already has
    fn chain_drag_listener<F>(&mut self, mut listener: F)
    where
        F: FnMut(bool) + 'static,
    {
        let viewer = self.card.viewer_mut();
        let mut previous = viewer.take_drag_callback();
        viewer.set_drag_callback(move |dragging| {
            if let Some(previous) = previous.as_mut() {
                previous(dragging);
            }
            listener(dragging);
        });
    }

    fn frame_delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(FALLBACK_FRAME_DELTA);
        self.last_frame = Some(now);
        delta.min(MAX_FRAME_DELTA)
    }

    fn sync_cursor_icon(&self) {
        let (Some(window), Some(dragging)) = (self.window.as_ref(), self.pending_drag_flag.take())
        else {
            return;
        };
        window.set_cursor(if dragging {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        });
    }

    fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                if self.hit_region.contains(self.cursor.x, self.cursor.y) {
                    let disposition = self.card.on_pointer_down(self.cursor.x);
                    log::trace!("pointer press on card: {disposition:?}");
                    self.press_captured |= disposition.is_consumed();
                }
            }
            ElementState::Released => {
                if self.card.viewer().pointer_hub().is_listening() {
                    self.card.on_pointer_up();
                }
                self.press_captured = false;
            }
        }
    }

    fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = position;
        // Moves outside a drag have no listener
        if self.card.viewer().pointer_hub().is_listening() {
            self.card.on_pointer_move(position.x);
        }
    }

    fn handle_scroll(&mut self, delta: &MouseScrollDelta) {
        if self.press_captured {
            return;
        }
        self.camera_manager.process_scroll(delta);
    }

    /// The release may never arrive once the window loses focus
    fn handle_focus_lost(&mut self) {
        if self.card.viewer().is_dragging() {
            log::debug!("focus lost during drag, releasing");
        }
        self.card.on_pointer_up();
        self.press_captured = false;
    }

    fn redraw(&mut self) {
        let delta = self.frame_delta();
        let frame = self.card.frame(delta);

        self.camera_manager.camera.update_view_proj();
        self.sink.present(&frame, &self.camera_manager.camera.uniform);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1200, 800));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                let PhysicalSize { width, height } = window.inner_size();
                self.camera_manager.camera.resize_projection(width, height);
                window.set_cursor(CursorIcon::Grab);
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("failed to create window: {err}");
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
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(state, button);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_scroll(&delta);
            }
            WindowEvent::Focused(false) => {
                self.handle_focus_lost();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera_manager.camera.resize_projection(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => (),
        }
        self.sync_cursor_icon();
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
