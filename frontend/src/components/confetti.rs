use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use rand::Rng;
use shared::constants::{CONFETTI_COLORS, CONFETTI_COUNT, CONFETTI_DURATION_MS, CONFETTI_SIZE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    color_index: usize,
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Bump this counter to fire a new burst; zero means no burst yet.
    pub burst: u32,
}

/// Transparent canvas overlay that showers confetti over whatever it
/// covers. Purely decorative, ignores pointer events.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.burst, move |burst| {
            if *burst > 0 {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    run_burst(canvas);
                }
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="450"
            height="450"
            class="absolute inset-0 w-full h-full pointer-events-none"
        />
    }
}

fn run_burst(canvas: HtmlCanvasElement) {
    let context = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(context) => context,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let mut rng = rand::thread_rng();
    let particles: Vec<Particle> = (0..CONFETTI_COUNT)
        .map(|i| {
            let angle = rng.gen_range(0.0..2.0 * PI);
            let speed = rng.gen_range(2.0..7.0);
            Particle {
                x: width / 2.0,
                y: height / 2.0,
                vx: angle.cos() * speed,
                // Bias upward so the shower arcs over the wheel
                vy: angle.sin() * speed - 3.0,
                color_index: i % CONFETTI_COLORS.len(),
            }
        })
        .collect();
    let particles = Rc::new(RefCell::new(particles));

    let start_time = js_sys::Date::now();
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = js_sys::Date::now() - start_time;
        context.clear_rect(0.0, 0.0, width, height);

        if elapsed >= CONFETTI_DURATION_MS {
            return;
        }

        for particle in particles.borrow_mut().iter_mut() {
            particle.vy += 0.12;
            particle.x += particle.vx;
            particle.y += particle.vy;

            context.begin_path();
            context.set_fill_style_str(CONFETTI_COLORS[particle.color_index]);
            let _ = context.arc(
                particle.x,
                particle.y,
                CONFETTI_SIZE / 2.0,
                0.0,
                2.0 * PI,
            );
            context.fill();
        }

        if let Some(window) = window() {
            let _ = window.request_animation_frame(
                f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = window() {
        let _ = window.request_animation_frame(
            g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        );
    }
}
