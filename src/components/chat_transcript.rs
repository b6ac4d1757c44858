//! Transcript of the active document's conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders messages from session state, shows the selection placeholder when
//! no document is active, and an activity indicator while any request is in
//! flight.

use leptos::prelude::*;

use crate::state::chat::{Message, Role};
use crate::state::session::Session;
use crate::util::markdown::render_markdown_html;

pub const NO_SELECTION_TEXT: &str = "Select a document to start chatting";

#[component]
pub fn ChatTranscript() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        session.with(|s| {
            let _ = s.active_messages().len();
            let _ = s.selection.active().map(str::len);
            let _ = s.is_busy();
        });

        #[cfg(feature = "csr")]
        {
            if let Some(el) = transcript_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-transcript" node_ref=transcript_ref>
            {move || {
                session
                    .with(|s| {
                        if s.selection.active().is_none() {
                            return view! {
                                <div class="chat-transcript__placeholder">{NO_SELECTION_TEXT}</div>
                            }
                                .into_any();
                        }
                        s.active_messages().iter().map(message_view).collect::<Vec<_>>().into_any()
                    })
            }}

            {move || {
                session
                    .with(|s| s.activity().indicator_text())
                    .map(|text| view! { <div class="chat-transcript__processing">{text}</div> })
            }}
        </div>
    }
}

fn message_view(message: &Message) -> AnyView {
    let is_user = message.role == Role::User;
    let body = if is_user {
        view! { <span>{message.content.clone()}</span> }.into_any()
    } else {
        let rendered = render_markdown_html(&message.content);
        view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
    };

    view! {
        <div class="chat-message" class:chat-message--user=is_user class:chat-message--assistant=!is_user>
            <div class="chat-message__bubble">{body}</div>
        </div>
    }
    .into_any()
}
