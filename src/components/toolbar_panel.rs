use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::Tool;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarPanelProps {
    pub tool: Tool,
    pub color: String,
    pub size: f64,
    pub on_select_tool: Callback<Tool>,
    pub on_color: Callback<String>,
    pub on_size: Callback<f64>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn ToolbarPanel(props: &ToolbarPanelProps) -> Html {
    let pen_cb = {
        let cb = props.on_select_tool.clone();
        Callback::from(move |_| cb.emit(Tool::Pen))
    };
    let eraser_cb = {
        let cb = props.on_select_tool.clone();
        Callback::from(move |_| cb.emit(Tool::Eraser))
    };
    let color_cb = {
        let cb = props.on_color.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let size_cb = {
        let cb = props.on_size.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(v);
            }
        })
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let tool_style = |active: bool| {
        if active {
            "padding:6px 12px; background:#1f6feb; color:#fff; border:1px solid #1f6feb; border-radius:6px;"
        } else {
            "padding:6px 12px; background:#f6f8fa; border:1px solid #d0d7de; border-radius:6px;"
        }
    };

    html! {
        <div style="display:flex; align-items:center; gap:10px; flex-wrap:wrap; padding:12px 16px; border-bottom:1px solid #d0d7de;">
            <button onclick={pen_cb} style={tool_style(props.tool == Tool::Pen)}>{"Pen"}</button>
            <button onclick={eraser_cb} style={tool_style(props.tool == Tool::Eraser)}>{"Eraser"}</button>
            <label style="display:flex; align-items:center; gap:6px;">
                <span style="font-size:13px; font-weight:500;">{"Color:"}</span>
                <input type="color" value={props.color.clone()} oninput={color_cb} />
            </label>
            <label style="display:flex; align-items:center; gap:6px;">
                <span style="font-size:13px; font-weight:500;">{"Brush Size:"}</span>
                <input
                    type="range"
                    min="1"
                    max="20"
                    step="1"
                    value={props.size.to_string()}
                    oninput={size_cb}
                    style="width:120px;"
                />
                <span style="font-size:13px; min-width:18px; text-align:right;">{ props.size as u32 }</span>
            </label>
            <button
                onclick={clear_cb}
                style="margin-left:auto; padding:6px 12px; background:#f85149; color:#fff; border:1px solid #b62324; border-radius:6px;"
            >
                {"Clear"}
            </button>
        </div>
    }
}
