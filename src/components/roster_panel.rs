use yew::prelude::*;

use crate::model::ROSTER;

/// Fixed list of "connected" users; renders the same three entries no matter
/// what the chat does.
#[function_component]
pub fn RosterPanel() -> Html {
    html! {
        <div style="padding:12px 16px; border-bottom:1px solid #d0d7de;">
            <h2 style="margin:0 0 10px 0; font-size:16px;">{"Connected Users"}</h2>
            <div style="display:flex; flex-direction:column; gap:6px;">
                { for ROSTER.iter().map(|user| html! {
                    <div key={user.id.to_string()} style="display:flex; align-items:center; gap:8px;">
                        <span style={format!("width:28px; height:28px; border-radius:50%; background:{}; color:#fff; display:flex; align-items:center; justify-content:center; font-size:13px; font-weight:600;", user.color)}>
                            { user.name.chars().next().unwrap_or('?').to_string() }
                        </span>
                        <span>{ user.name }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
