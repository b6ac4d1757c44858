//! Query input and send button.

use leptos::prelude::*;

use crate::actions;
use crate::config::ApiConfig;
use crate::state::session::Session;

#[component]
pub fn MessageForm() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ApiConfig>();
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        if actions::submit_query(session, config.clone(), &text) {
            query.set(String::new());
        }
    };

    let has_selection = move || session.with(|s| s.selection.active().is_some());
    let input_enabled = move || session.with(Session::input_enabled);
    let can_send = move || input_enabled() && !query.with(|q| q.trim().is_empty());

    view! {
        <form class="message-form" on:submit=on_submit>
            <input
                class="message-form__input"
                type="text"
                placeholder=move || {
                    if has_selection() { "Ask a question about this document..." } else { "Select a document first" }
                }
                disabled=move || !input_enabled()
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="btn btn--primary message-form__send" type="submit" disabled=move || !can_send()>
                "Send"
            </button>
        </form>
    }
}
