use std::sync::Arc;

use anyhow::{Context as _, Result};
use parking_lot::Mutex;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::cli::Cli;
use crate::core::{
    DrawableSize, FrameSurface, RenderLoopController, SliderStack, TickOutcome,
};
use crate::gpu::{DofRenderer, GpuContext, OverlayFrame, SurfaceFrame, WgpuSurface};
use crate::ui::SliderPanel;

type ViewerController = RenderLoopController<SurfaceFrame, DofRenderer>;

/// Window and render settings taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub show_ui: bool,
}

impl From<&Cli> for ViewerOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            vsync: cli.vsync,
            show_ui: !cli.no_ui,
        }
    }
}

/// Everything that lives as long as the window
struct Session {
    window: Arc<Window>,
    surface: FrameSurface<WgpuSurface, ViewerController>,
    controller: Arc<Mutex<ViewerController>>,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl Session {
    fn new(
        event_loop: &ActiveEventLoop,
        options: ViewerOptions,
        stack: &mut SliderStack,
    ) -> Result<Self> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("DoF Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(options.width, options.height)),
            )
            .context("failed to create window")?;
        let window = Arc::new(window);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let context = pollster::block_on(GpuContext::for_surface(&instance, &surface))?;

        let inner = window.inner_size();
        let size = DrawableSize::new(inner.width, inner.height);
        let wgpu_surface = WgpuSurface::new(surface, context.clone(), size, options.vsync)?;
        let renderer =
            DofRenderer::new(context, wgpu_surface.format(), size, &stack.snapshot());

        let controller = Arc::new(Mutex::new(RenderLoopController::bind(stack, renderer)));
        let mut surface = FrameSurface::new(wgpu_surface);
        surface.attach_delegate(&controller);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        log::info!("viewer initialized: {} sliders", stack.len());

        Ok(Self {
            window,
            surface,
            controller,
            egui_state,
            egui_ctx,
        })
    }

    /// Run the slider panel and hand its output to the renderer's overlay
    fn run_panel(&mut self, panel: &SliderPanel, stack: &mut SliderStack) {
        let fps = self.controller.lock().pacing().fps();

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            panel.show(ctx, stack, fps);
        });
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        self.controller
            .lock()
            .renderer_mut()
            .queue_overlay(OverlayFrame {
                primitives,
                textures_delta: full_output.textures_delta,
                pixels_per_point: full_output.pixels_per_point,
            });
    }

    fn redraw(&mut self, panel: Option<&SliderPanel>, stack: &mut SliderStack) {
        if let Some(panel) = panel {
            self.run_panel(panel, stack);
        }

        if let TickOutcome::Idle = self.surface.tick() {
            log::trace!("redraw with no render delegate attached");
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(&self.window, event).consumed
    }
}

/// winit application hosting the slider panel and the DoF render loop
pub struct ViewerApp {
    options: ViewerOptions,
    stack: SliderStack,
    panel: SliderPanel,
    session: Option<Session>,
}

impl ViewerApp {
    pub fn new(options: ViewerOptions, stack: SliderStack) -> Self {
        Self {
            options,
            stack,
            panel: SliderPanel::default(),
            session: None,
        }
    }

    pub fn stack(&self) -> &SliderStack {
        &self.stack
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }

        match Session::new(event_loop, self.options, &mut self.stack) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                log::error!("failed to initialize viewer: {e:#}");
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
        let Self {
            options,
            stack,
            panel,
            session,
        } = self;
        let Some(session) = session.as_mut() else {
            return;
        };

        if options.show_ui && session.handle_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                session
                    .surface
                    .resize(DrawableSize::new(size.width, size.height));
                session.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let panel = options.show_ui.then_some(&*panel);
                session.redraw(panel, stack);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = &self.session {
            session.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = self.session.take() {
            log::info!("exiting after {:?}", session.surface.stats());
        }
    }
}
