use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::wheel_geometry::WheelSlice;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub slices: Rc<Vec<WheelSlice>>,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let slices = props.slices.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with(
            (slices, rotation, is_spinning),
            move |(slices, rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, slices, *rotation, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    slices: &[WheelSlice],
    rotation: f64,
    is_spinning: bool,
) {
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
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = if width < height {
        width / 2.0 - 20.0
    } else {
        height / 2.0 - 20.0
    };

    // Clear canvas
    context.clear_rect(0.0, 0.0, width, height);

    // Check if dark mode is active
    let is_dark_mode = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false);

    // Outer glow, stronger while spinning
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    // Wheel background
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str("#1a1c2e");
    } else {
        context.set_fill_style_str("#f0f2ff");
    }
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.fill();

    // Save context state before rotation
    context.save();

    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center_x, -center_y);

    // One filled arc per prize, sized by its weight share
    for slice in slices {
        let start = slice.start_angle * PI / 180.0;
        let end = (slice.start_angle + slice.slice_angle) * PI / 180.0;

        context.begin_path();
        context.set_fill_style_str(&slice.color);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.fill();
    }

    // Dividing lines between slices
    context.set_line_width(2.5);
    context.set_stroke_style_str(if is_dark_mode {
        "rgba(255, 255, 255, 0.7)"
    } else {
        "rgba(255, 255, 255, 0.9)"
    });
    for slice in slices {
        let angle = slice.start_angle * PI / 180.0;
        context.begin_path();
        context.move_to(center_x, center_y);
        context.line_to(
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        );
        context.stroke();
    }

    // Labels along each slice midline
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color(if is_dark_mode {
        "rgba(0, 0, 0, 0.7)"
    } else {
        "rgba(0, 0, 0, 0.5)"
    });
    context.set_shadow_blur(3.0);
    context.set_shadow_offset_x(1.0);
    context.set_shadow_offset_y(1.0);

    for slice in slices {
        let midpoint = (slice.start_angle + slice.slice_angle / 2.0) * PI / 180.0;
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(midpoint);
        let _ = context.translate(radius * 0.62, 0.0);
        context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(&slice.label, 0.0, 0.0);
        context.restore();
    }

    // Reset shadow for subsequent drawing
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);

    // Restore context to original state (no rotation)
    context.restore();

    // Hub
    let inner_radius = radius * 0.18;
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str("#2d3142");
    } else {
        context.set_fill_style_str("#8b5cf6");
    }
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_stroke_style_str(if is_dark_mode {
        "rgba(0, 0, 0, 0.5)"
    } else {
        "rgba(0, 0, 0, 0.2)"
    });
    context.set_line_width(2.0);
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.stroke();

    // Outer ring
    context.begin_path();
    if is_spinning {
        let pulse = (js_sys::Date::now() / 400.0).sin() * 0.2 + 0.5;
        let stroke_color = if is_dark_mode {
            format!("rgba(180, 130, 255, {})", pulse)
        } else {
            format!("rgba(130, 100, 255, {})", pulse)
        };
        context.set_stroke_style_str(&stroke_color);
        context.set_line_width(5.0);
    } else {
        context.set_stroke_style_str(if is_dark_mode {
            "rgba(180, 130, 255, 0.5)"
        } else {
            "rgba(130, 100, 255, 0.5)"
        });
        context.set_line_width(4.0);
    }
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer at the top, glowing while the wheel turns
    context.set_shadow_color(if is_spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(255, 215, 0, 0.6)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    let pointer_width = 18.0;
    let pointer_height = 28.0;
    context.begin_path();
    context.move_to(center_x, center_y - radius + 5.0);
    context.line_to(center_x - pointer_width, center_y - radius - pointer_height);
    context.line_to(center_x + pointer_width, center_y - radius - pointer_height);
    context.close_path();

    if is_spinning {
        context.set_fill_style_str("#ffd700");
    } else {
        context.set_fill_style_str("#f59e0b");
    }
    context.fill();

    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    // Reset shadow
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}
