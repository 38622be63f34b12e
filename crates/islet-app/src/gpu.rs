use std::sync::Arc;

use islet_core::error::IsletError;
use wgpu::{
    Adapter, Backends, Device, DeviceDescriptor, Instance, InstanceDescriptor, PowerPreference,
    Queue, RequestAdapterOptions, Surface, SurfaceConfiguration, TextureFormat, TextureUsages,
};
use winit::window::Window;

/// Holds all GPU resources initialized at startup.
pub struct GpuContext {
    #[allow(dead_code)]
    pub adapter: Adapter,
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub surface_format: TextureFormat,
}

/// Initialize the GPU against the sketch window. The canvas is a fixed
/// square, so the surface is configured once and never resized.
pub async fn init_gpu(window: Arc<Window>, size: u32) -> Result<GpuContext, IsletError> {
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::PRIMARY,
        ..Default::default()
    });

    // Arc<Window> keeps the surface target alive for 'static.
    let surface: Surface<'static> = instance
        .create_surface(window)
        .map_err(|e| IsletError::SurfaceConfigFailed(format!("{e}")))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| IsletError::AdapterNotFound("no compatible GPU adapter".into()))?;

    let adapter_info = adapter.get_info();
    log::info!("Adapter: {} ({:?})", adapter_info.name, adapter_info.backend);

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("islet-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| IsletError::DeviceRequestFailed(format!("{e}")))?;

    // Select sRGB surface format with fallback
    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .copied()
        .unwrap_or(surface_caps.formats[0]);

    let surface_config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size,
        height: size,
        present_mode: wgpu::PresentMode::AutoVsync,
        desired_maximum_frame_latency: 2,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
    };
    surface.configure(&device, &surface_config);

    log::info!("Surface format: {:?}, size: {}x{}", surface_format, size, size);

    Ok(GpuContext {
        adapter,
        device,
        queue,
        surface,
        surface_config,
        surface_format,
    })
}
