use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::toolbar_panel::ToolbarPanel;
use crate::model::Tool;
use crate::state::{Brush, StrokeState};

pub const BOARD_WIDTH: u32 = 800;
pub const BOARD_HEIGHT: u32 = 600;

// Missing 2d context makes every canvas operation a silent no-op.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[function_component(BoardView)]
pub fn board_view() -> Html {
    let canvas_ref = use_node_ref();
    let brush = use_mut_ref(Brush::default);
    let stroke = use_mut_ref(StrokeState::default);
    let color = use_state(|| Brush::default().color);
    let size = use_state(|| Brush::default().size);
    let tool = use_state(|| Tool::Pen);

    // Mirror toolbar state into the brush the raw listeners read. Segments
    // pick up the values current at draw time, so a mid-stroke change only
    // affects what follows.
    {
        let brush = brush.clone();
        let color_v = (*color).clone();
        let size_v = *size;
        let tool_v = *tool;
        use_effect_with((color_v.clone(), size_v, tool_v), move |_| {
            let mut b = brush.borrow_mut();
            b.color = color_v;
            b.size = size_v;
            b.tool = tool_v;
            || ()
        });
    }

    // Mount effect: fixed canvas size, round caps, pointer listeners.
    {
        let canvas_ref = canvas_ref.clone();
        let brush = brush.clone();
        let stroke = stroke.clone();
        use_effect_with((), move |_| {
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            canvas.set_width(BOARD_WIDTH);
            canvas.set_height(BOARD_HEIGHT);
            if let Some(ctx) = context_2d(&canvas) {
                ctx.set_line_cap("round");
                ctx.set_line_join("round");
            }

            let mousedown_cb = {
                let canvas = canvas.clone();
                let stroke = stroke.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let Some(ctx) = context_2d(&canvas) else {
                        return;
                    };
                    ctx.begin_path();
                    ctx.move_to(e.offset_x() as f64, e.offset_y() as f64);
                    stroke.borrow_mut().active = true;
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            let mousemove_cb = {
                let canvas = canvas.clone();
                let brush = brush.clone();
                let stroke = stroke.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if !stroke.borrow().active {
                        return;
                    }
                    let Some(ctx) = context_2d(&canvas) else {
                        return;
                    };
                    {
                        let b = brush.borrow();
                        ctx.set_line_width(b.size);
                        ctx.set_stroke_style_str(b.stroke_style());
                    }
                    ctx.line_to(e.offset_x() as f64, e.offset_y() as f64);
                    ctx.stroke();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            // Leaving the surface ends the stroke the same way releasing does.
            let end_stroke_cb = {
                let stroke = stroke.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    stroke.borrow_mut().active = false;
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mouseup", end_stroke_cb.as_ref().unchecked_ref())
                .unwrap();
            canvas
                .add_event_listener_with_callback(
                    "mouseleave",
                    end_stroke_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseup",
                    end_stroke_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    end_stroke_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&mousedown_cb, &mousemove_cb, &end_stroke_cb);
            }
        });
    }

    let on_clear = {
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |_| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                return;
            };
            log::debug!("board: clear");
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        })
    };
    let on_select_tool = {
        let tool = tool.clone();
        Callback::from(move |t: Tool| tool.set(t))
    };
    let on_color = {
        let color = color.clone();
        Callback::from(move |c: String| color.set(c))
    };
    let on_size = {
        let size = size.clone();
        Callback::from(move |s: f64| size.set(s))
    };

    html! {
        <div style="flex:1; background:#ffffff; border:1px solid #d0d7de; border-radius:8px;">
            <div style="padding:12px 16px; border-bottom:1px solid #d0d7de;">
                <h2 style="margin:0; font-size:18px;">{"Collaborative Whiteboard"}</h2>
            </div>
            <ToolbarPanel
                tool={*tool}
                color={(*color).clone()}
                size={*size}
                on_select_tool={on_select_tool}
                on_color={on_color}
                on_size={on_size}
                on_clear={on_clear}
            />
            <div style="padding:12px 16px;">
                <canvas
                    ref={canvas_ref}
                    style="border:1px solid #d0d7de; background:#ffffff; display:block; cursor:crosshair;"
                />
            </div>
        </div>
    }
}
