//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::ApiConfig;
use crate::pages::document_chat::DocumentChatPage;
use crate::state::session::Session;
use crate::util::storage::default_storage;

/// Root application component.
///
/// Provides the session (backed by `localStorage`) and the backend config to
/// every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::new(default_storage()));
    let config = ApiConfig::from_build_env();
    leptos::logging::log!("document chat backend: {}", config.base_url);

    provide_context(session);
    provide_context(config);

    view! {
        <Title text="Document Chat"/>
        <Meta name="description" content="Chat with your documents using AI"/>
        <DocumentChatPage/>
    }
}
