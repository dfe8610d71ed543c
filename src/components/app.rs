use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::{board_view::BoardView, chat_panel::ChatPanel, roster_panel::RosterPanel};
use crate::model::{self, ChatAction, ChatLog, REPLY_DELAY_MS};

#[function_component(App)]
pub fn app() -> Html {
    let chat = use_reducer(ChatLog::default);

    // Append the local message, then schedule the fabricated peer reply.
    // The timeout is one-shot and never cancelled, even if the panel goes
    // away mid-flight.
    let on_submit = {
        let chat = chat.clone();
        Callback::from(move |text: String| {
            log::debug!("chat: local message ({} chars)", text.len());
            chat.dispatch(ChatAction::Local { text: text.clone() });
            let chat = chat.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                let peer = model::pick_peer(js_sys::Math::random());
                chat.dispatch(ChatAction::Peer {
                    author: peer.name,
                    text,
                });
            })
            .forget();
        })
    };

    html! {
        <div style="display:flex; gap:16px; padding:16px; align-items:flex-start;">
            <BoardView />
            <div style="width:280px; flex-shrink:0; background:#ffffff; border:1px solid #d0d7de; border-radius:8px;">
                <RosterPanel />
                <ChatPanel messages={chat.messages.clone()} on_submit={on_submit} />
            </div>
        </div>
    }
}
