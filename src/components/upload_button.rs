//! Upload button backed by a hidden multi-file input.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::session::Session;
use crate::util::upload::accept_attribute;

#[component]
pub fn UploadButton() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ApiConfig>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let files = picked_files(&input);
            // Reset so picking the same file again still fires `change`.
            input.set_value("");
            crate::actions::upload_files(session, config.clone(), files);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, &config);
        }
    };

    view! {
        <button
            class="btn btn--primary upload-button"
            type="button"
            on:click=on_click
            disabled=move || session.with(Session::is_busy)
        >
            "Upload Documents"
        </button>
        <input
            class="upload-button__input"
            type="file"
            multiple=true
            accept=accept_attribute()
            node_ref=input_ref
            on:change=on_change
        />
    }
}

/// Accepted files from the input's selection, in pick order.
#[cfg(feature = "csr")]
fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    use crate::util::upload::partition_by_name;

    let Some(list) = input.files() else {
        return Vec::new();
    };
    let picked = (0..list.length()).filter_map(|index| list.get(index));
    let (accepted, rejected) = partition_by_name(picked, web_sys::File::name);
    for file in &rejected {
        leptos::logging::warn!("skipping unsupported file type: {}", file.name());
    }
    accepted
}
