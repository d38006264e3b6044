use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use breathscan::scene::{icosahedron_edges, Camera, Scene};

const STAR_COLOR: &str = "#ffffff";
const SKY_COLOR: &str = "#0b0c1a";
// Frames longer than this are treated as a pause (hidden tab).
const MAX_FRAME_SECONDS: f64 = 0.1;

/// Full-screen canvas behind every view: a starfield and floating wireframe
/// icosahedra, redrawn on every animation frame.
#[component]
pub fn Background() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(e) = start(canvas) {
            log::warn!("Background animation unavailable: {e:?}");
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="fixed inset-0 w-full h-full z-0 pointer-events-none"></canvas>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context missing"))?;
    ctx.dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let ctx = context_2d(&canvas)?;
    let mut scene = Scene::new(js_sys::Date::now() as u64);
    let camera = Camera::default();
    let edges = icosahedron_edges();
    let mut last_ts: Option<f64> = None;

    // The frame closure re-arms itself through this slot and drops it once the
    // canvas leaves the document.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let window_for_cb = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !canvas.is_connected() {
            frame_for_cb.borrow_mut().take();
            return;
        }

        let dt = last_ts.map_or(0.0, |prev| ((ts - prev) / 1000.0).clamp(0.0, MAX_FRAME_SECONDS));
        last_ts = Some(ts);
        scene.advance(dt);

        draw(&canvas, &ctx, &scene, &camera, &edges);

        if let Some(cb) = frame_for_cb.borrow().as_ref() {
            _ = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

fn draw(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    edges: &[(usize, usize)],
) {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    let (w, h) = (f64::from(width), f64::from(height));

    ctx.set_fill_style_str(SKY_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Stars twinkle together.
    let twinkle = 3.0 + (scene.elapsed() + 100.0).sin();
    ctx.set_fill_style_str(STAR_COLOR);
    for (position, size) in scene.starfield.world_positions() {
        let Some(p) = camera.project(position, w, h) else {
            continue;
        };
        let px = (size * 30.0 / p.depth * twinkle).clamp(0.5, 4.0);
        ctx.fill_rect(p.x - px / 2.0, p.y - px / 2.0, px, px);
    }

    ctx.set_line_width(1.0);
    for shape in &scene.shapes {
        let vertices = shape.world_vertices(scene.elapsed());
        let projected = vertices.map(|v| camera.project(v, w, h));

        ctx.set_stroke_style_str(shape.color);
        ctx.begin_path();
        for &(a, b) in edges {
            if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
                ctx.move_to(pa.x, pa.y);
                ctx.line_to(pb.x, pb.y);
            }
        }
        ctx.stroke();
    }
}
