//! Document chips: select, open, and delete known documents.

use leptos::prelude::*;

use crate::actions;
use crate::config::ApiConfig;
use crate::net::api::file_url;
use crate::net::types::Document;
use crate::state::session::Session;
use crate::util::format::document_summary;

/// Chip row for all known documents. Hidden while the list is empty.
#[component]
pub fn DocumentChips() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || {
        let (documents, active) = session.with(|s| {
            if s.documents.is_empty() {
                return None;
            }
            Some((s.documents.items().to_vec(), s.selection.active().map(str::to_owned)))
        })?;
        let chips = documents
            .into_iter()
            .map(|document| {
                let is_active = active.as_deref() == Some(document.id.as_str());
                view! { <DocumentChip document=document active=is_active/> }
            })
            .collect::<Vec<_>>();

        Some(view! {
            <section class="documents">
                <h2 class="documents__title">"Documents"</h2>
                <div class="documents__chips">{chips}</div>
            </section>
        })
    }
}

#[component]
fn DocumentChip(document: Document, active: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ApiConfig>();

    let summary = document_summary(&document);
    let href = document.file_path.as_deref().map(|path| file_url(&config, path));
    let select_id = document.id.clone();
    let delete_id = document.id.clone();

    let on_select = move |_| {
        session.update(|s| {
            s.select(&select_id);
        });
    };
    let on_delete = move |_| actions::delete_document(session, config.clone(), delete_id.clone());

    view! {
        <div class="document-chip" class:document-chip--active=active>
            <button class="document-chip__name" type="button" title=summary on:click=on_select>
                {document.name}
            </button>
            {href
                .map(|href| {
                    view! {
                        <a
                            class="document-chip__open"
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            title="Open original"
                        >
                            "↗"
                        </a>
                    }
                })}
            <button class="document-chip__delete" type="button" title="Delete document" on:click=on_delete>
                "✕"
            </button>
        </div>
    }
}
