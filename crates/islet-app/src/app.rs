use std::sync::Arc;
use std::time::Instant;

use islet_core::constants::CANVAS_SIZE;
use islet_core::controls::ControlState;
use islet_core::frame::{build_uniforms, FrameInputs};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::assets::SketchAssets;
use crate::gpu::{init_gpu, GpuContext};
use crate::input::InputState;
use crate::renderer::Renderer;

/// Main application struct. Owns all subsystems: the control state machine,
/// accumulated input, the GPU context, and the renderer.
pub struct SketchApp {
    assets: SketchAssets,
    controls: ControlState,
    input: InputState,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<Renderer>,
    start_time: Instant,
    last_frame_time: Instant,
}

impl SketchApp {
    /// Assets are preloaded before the event loop starts; the GPU side
    /// comes up in `resumed` once a window exists.
    pub fn new(assets: SketchAssets) -> Self {
        let controls = ControlState::new(assets.heightmaps.len());
        let now = Instant::now();
        Self {
            assets,
            controls,
            input: InputState::new(),
            window: None,
            gpu: None,
            renderer: None,
            start_time: now,
            last_frame_time: now,
        }
    }

    /// Render a single frame: integrate held keys, rebuild the uniform
    /// block from scratch, upload it, draw the quad.
    ///
    /// Frame pacing lives in `about_to_wait`, so returning early here
    /// (e.g. on a lost surface) skips one frame without stalling the loop.
    fn render_frame(&mut self) {
        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return;
        };

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let held = self.input.held_keys();
        self.controls.apply_held(held, dt);

        let inputs = FrameInputs {
            mouse: self.input.cursor(),
            elapsed: now.duration_since(self.start_time).as_secs_f32(),
            held,
        };
        let uniforms = build_uniforms(&self.controls, &inputs);

        let output = match gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => {
                if surface_error_needs_reconfigure(&e) {
                    gpu.surface.configure(&gpu.device, &gpu.surface_config);
                } else {
                    log::error!("Surface error: {e:?}");
                }
                return;
            }
        };
        let view = output.texture.create_view(&Default::default());

        renderer.update_uniforms(&gpu.queue, uniforms);

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        renderer.render(&mut encoder, &view, self.controls.heightmap_index());
        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

/// Whether a failed surface acquisition is recovered by reconfiguring the
/// surface. `Lost` and `Outdated` are transient; everything else is only
/// worth logging, and the frame is dropped either way.
fn surface_error_needs_reconfigure(err: &wgpu::SurfaceError) -> bool {
    matches!(
        err,
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated
    )
}


impl ApplicationHandler for SketchApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        // The canvas is sized in physical pixels so that `CursorMoved`
        // positions (which winit reports in physical coordinates) line up
        // one-to-one with the fixed-size surface on any scale factor.
        let attrs = WindowAttributes::default()
            .with_title("islet")
            .with_inner_size(PhysicalSize::new(CANVAS_SIZE, CANVAS_SIZE))
            .with_resizable(false);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(init_gpu(window.clone(), CANVAS_SIZE)) {
            Ok(gpu) => {
                let renderer =
                    Renderer::new(&gpu.device, &gpu.queue, gpu.surface_format, &self.assets);
                self.renderer = Some(renderer);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                log::error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        // The clock starts once the preload phase is complete.
        self.start_time = Instant::now();
        self.last_frame_time = self.start_time;

        self.window = Some(window);
    }

    /// Continuous redraw: one request per loop iteration, independent of
    /// whether the previous frame rendered or was dropped.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key) = self.input.on_key_event(&event) {
                    self.controls.on_key_press(key, self.input.cursor());
                    log::debug!("{key:?} -> {:?}", self.controls);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}
