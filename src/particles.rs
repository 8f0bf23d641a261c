//! Background particle scene: a WebGPU point cloud that drifts, follows the
//! pointer and parallaxes with scroll.

use crate::constants::{CANVAS_CONTAINER_ID, PARTICLE_CANVAS_ID};
use crate::dom;
use crate::events;
use crate::frame::{self, LoopHandle};
use crate::render::GpuState;
use folio_core::particles::{
    capped_pixel_ratio, generate_cloud, CloudMotion, ParticleUniforms, PointerState,
};
use folio_core::{Camera, PARTICLE_COUNT, PARTICLE_SPREAD};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ParticleScene {
    gpu: GpuState,
    canvas: web::HtmlCanvasElement,
    camera: Camera,
    motion: CloudMotion,
    pointer: Rc<Cell<PointerState>>,
    started: Instant,
}

impl ParticleScene {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let scroll = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        self.motion.step(elapsed, scroll, self.pointer.get());
        self.motion.apply_to_camera(&mut self.camera);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let (w, h) = self.gpu.size();
        let uniforms = ParticleUniforms::new(&self.camera, &self.motion, [w as f32, h as f32]);
        match self.gpu.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[particles] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("[particles] render error: {:?}", e),
        }
    }

    /// Viewport changed: new aspect, new backing size at the capped pixel ratio.
    pub fn resize(&mut self) {
        let (w, h) = dom::viewport_size();
        self.camera.set_viewport(w, h);
        fit_canvas(&self.canvas);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
    }
}

fn pixel_ratio() -> f64 {
    capped_pixel_ratio(web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0))
}

fn fit_canvas(canvas: &web::HtmlCanvasElement) {
    let (w, h) = dom::viewport_size();
    dom::sync_canvas_backing_size(canvas, pixel_ratio());
    dom::set_style(canvas, "width", &format!("{}px", w));
    dom::set_style(canvas, "height", &format!("{}px", h));
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    points: &[glam::Vec3],
) -> Option<GpuState> {
    match GpuState::new(canvas, points).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[particles] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Build the scene inside `#canvas-container` and start its frame loop.
/// `Ok(None)` when the container is absent or WebGPU is unavailable.
pub async fn init(document: &web::Document) -> anyhow::Result<Option<LoopHandle>> {
    let Some(container) = document.get_element_by_id(CANVAS_CONTAINER_ID) else {
        log::debug!("[particles] #{} not found; scene disabled", CANVAS_CONTAINER_ID);
        return Ok(None);
    };

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(PARTICLE_CANVAS_ID);
    dom::set_style(&canvas, "display", "block");
    fit_canvas(&canvas);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let points = generate_cloud(&mut rand::thread_rng(), PARTICLE_COUNT, PARTICLE_SPREAD);
    let Some(gpu) = init_gpu(&canvas, &points).await else {
        return Ok(None);
    };

    let (w, h) = dom::viewport_size();
    let pointer = Rc::new(Cell::new(PointerState::default()));
    events::wire_pointer_tracking(pointer.clone());

    let scene = Rc::new(RefCell::new(ParticleScene {
        gpu,
        canvas,
        camera: Camera::new(if h > 0.0 { (w / h) as f32 } else { 1.0 }),
        motion: CloudMotion::default(),
        pointer,
        started: Instant::now(),
    }));

    {
        let scene = scene.clone();
        dom::on_window("resize", move |_: web::Event| scene.borrow_mut().resize());
    }

    let handle = LoopHandle::new("particles");
    frame::start_loop(handle.clone(), move |_now_ms| scene.borrow_mut().frame());
    Ok(Some(handle))
}
