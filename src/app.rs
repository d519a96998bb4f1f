//! # Application
//!
//! Winit event loop wiring: window and GPU start-up, input translation,
//! per-frame recording of the scene and the ImGui overlay.

use std::sync::Arc;
use std::time::Instant;

use anyhow::anyhow;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::EditorConfig;
use crate::editor::{EditorController, Flow, InputAction, InputTranslator};
use crate::gfx::{
    rendering::{DrawRecorder, RenderEngine},
    scene::Scene,
};
use crate::ui::{editor_panel, UiManager};

pub struct StagehandApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: EditorConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    controller: EditorController,
    input: InputTranslator,
    recorder: DrawRecorder,
    started: Instant,
    title: String,
    failure: Option<anyhow::Error>,
}

impl StagehandApp {
    /// Create an editor with the start-up scene
    pub fn new(config: EditorConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new()?;
        let scene = Scene::with_default_bodies(config.aspect_ratio());
        let controller = EditorController::new(&config);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                controller,
                input: InputTranslator::new(),
                recorder: DrawRecorder::new(),
                started: Instant::now(),
                title: String::new(),
                failure: None,
            },
        })
    }

    /// Run the application until the window closes
    ///
    /// # Errors
    /// Fails if the event loop cannot run, or if rendering hit a fatal
    /// error such as a missing shader uniform.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .ok_or_else(|| anyhow!("event loop already consumed"))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;

        match self.app_state.failure.take() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, failure: anyhow::Error) {
        error!("{:#}", failure);
        self.failure = Some(failure);
        event_loop.exit();
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match self.controller.handle(action, &mut self.scene) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => event_loop.exit(),
            Err(e) => error!("add shape failed: {}", e),
        }
        self.refresh_title();
    }

    /// Mirrors the edit status into the window title
    fn refresh_title(&mut self) {
        let title = format!(
            "{} - {}",
            self.config.window_title,
            self.controller.manager().status()
        );
        if title != self.title {
            if let Some(window) = self.window.as_ref() {
                window.set_title(&title);
            }
            self.title = title;
        }
    }

    fn translate(&mut self, event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.key(&event.logical_key, event.state, event.repeat)
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.input.set_modifiers(modifiers.state());
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.input.mouse_button(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.input.cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseWheel { delta, .. } => self.input.wheel(*delta),
            _ => None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let elapsed_ms = self.started.elapsed().as_secs_f32() * 1000.0;
        if let Err(e) = self.scene.render(&mut self.recorder, elapsed_ms) {
            self.fail(event_loop, e.into());
            return;
        }
        let draws = self.recorder.take_calls();

        let (Some(render_engine), Some(window)) = (self.render_engine.as_mut(), self.window.as_ref())
        else {
            return;
        };

        let mut requested = None;
        let scene = &self.scene;
        let manager = self.controller.manager();
        let result = match self.ui_manager.as_mut() {
            Some(ui_manager) => render_engine.render_frame_with_ui(&draws, |device, queue, encoder, color_attachment| {
                ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                    requested = editor_panel(ui, scene, manager);
                });
            }),
            None => render_engine.render_frame_simple(&draws),
        };

        if let Err(e) = result {
            self.fail(event_loop, e.into());
            return;
        }
        if let Some(action) = requested {
            self.apply(event_loop, action);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.config.window_title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        let window_handle = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let background = self.config.background_color;
        let window_clone = window_handle.clone();
        let renderer = match pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, background).await
        }) {
            Ok(renderer) => renderer,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.scene.projection.resize(width, height);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.refresh_title();
        info!("editor ready with {} bodies", self.scene.bodies().len());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if let Some(ui_manager) = self.ui_manager.as_mut() {
            if ui_manager.handle_window_event(&window, window_id, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
                self.scene.projection.resize(width, height);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(action) = self.translate(&other) {
                    self.apply(event_loop, action);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
