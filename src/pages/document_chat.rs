//! Document chat page: upload control, document chips, transcript, and form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It kicks off the initial document listing once on
//! mount; everything after that is driven by user actions.

use leptos::prelude::*;

use crate::actions;
use crate::components::chat_transcript::ChatTranscript;
use crate::components::document_chips::DocumentChips;
use crate::components::message_form::MessageForm;
use crate::components::upload_button::UploadButton;
use crate::config::ApiConfig;
use crate::state::session::Session;

#[component]
pub fn DocumentChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ApiConfig>();

    actions::load_documents(session, config);

    view! {
        <div class="document-chat">
            <header class="document-chat__header">
                <h1 class="document-chat__title">"Document Chat"</h1>
                <UploadButton/>
            </header>
            <DocumentChips/>
            <ChatTranscript/>
            <MessageForm/>
        </div>
    }
}
