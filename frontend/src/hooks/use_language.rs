use shared::constants::LANGUAGE_STORAGE_KEY;
use shared::i18n::Language;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

pub const LANGUAGE_UPDATE_EVENT: &str = "languageUpdate";

/// Language selection backed by localStorage. Every mounted component
/// sharing the hook stays in sync through a window-level custom event.
#[hook]
pub fn use_language() -> UseStateHandle<Language> {
    let language = use_state(stored_language);

    {
        let language = language.clone();
        use_effect(move || {
            let handle = language.clone();

            let listener = Closure::wrap(Box::new(move |event: CustomEvent| {
                if let Some(code) = event.detail().as_string() {
                    if let Some(new_language) = Language::from_code(&code) {
                        handle.set(new_language);
                    }
                }
            }) as Box<dyn FnMut(CustomEvent)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    LANGUAGE_UPDATE_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            // Keep the closure alive for the component lifetime
            let cleanup_listener = listener;

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        LANGUAGE_UPDATE_EVENT,
                        cleanup_listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    language
}

fn stored_language() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persists the choice, mirrors it to `<html lang>` and notifies every
/// listener registered by `use_language`.
pub fn dispatch_language_event(language: Language) {
    if let Some(window) = window() {
        if let Some(storage) = window.local_storage().ok().flatten() {
            let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.code());
        }

        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("lang", language.code());
        }

        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(language.code()));
        if let Ok(event) =
            CustomEvent::new_with_event_init_dict(LANGUAGE_UPDATE_EVENT, &event_init)
        {
            let _ = window.dispatch_event(&event);
        }
    }
}
