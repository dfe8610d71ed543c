use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::model::{self, ChatMessage};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatPanelProps {
    pub messages: Vec<ChatMessage>,
    pub on_submit: Callback<String>,
}

#[function_component]
pub fn ChatPanel(props: &ChatPanelProps) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    // Whitespace-only drafts submit nothing and keep the input as typed.
    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(text) = model::sanitize_message(&draft) else {
                return;
            };
            on_submit.emit(text);
            draft.set(String::new());
        })
    };

    html! {
        <div style="padding:12px 16px;">
            <h3 style="margin:0 0 8px 0; font-size:14px;">{"Chat"}</h3>
            <div style="height:160px; overflow-y:auto; border:1px solid #d0d7de; border-radius:6px; padding:8px; margin-bottom:8px; font-size:13px;">
                { for props.messages.iter().map(|msg| html! {
                    <p style="margin:0 0 4px 0;">
                        <strong>{ format!("{}:", msg.author) }</strong>
                        { format!(" {}", msg.text) }
                    </p>
                }) }
            </div>
            <form onsubmit={onsubmit} style="display:flex; gap:6px;">
                <input
                    type="text"
                    value={(*draft).clone()}
                    oninput={oninput}
                    placeholder="Type a message..."
                    style="flex:1; padding:4px 8px; border:1px solid #d0d7de; border-radius:6px;"
                />
                <button type="submit" style="padding:4px 12px;">{"Send"}</button>
            </form>
        </div>
    }
}
