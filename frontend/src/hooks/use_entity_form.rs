use crm_store::Cached;
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_store::use_store;

/// State behind a create/edit form for one entity type
pub struct EntityForm<E: Cached> {
    pub draft: UseStateHandle<E::Draft>,
    pub saving: bool,
    pub error: Option<String>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Seeds the draft from `existing` (or the draft defaults) and submits it
/// through the store. `prepare` runs on the draft right before it is sent.
///
/// `on_close` fires only once the save has succeeded; a failed save keeps the
/// form open with a generic message.
#[hook]
pub fn use_entity_form<E: Cached>(
    existing: Option<E>,
    on_close: Callback<()>,
    prepare: fn(E::Draft) -> E::Draft,
) -> EntityForm<E> {
    let store = use_store();
    let id = existing.as_ref().map(|entity| entity.id().to_string());
    let draft = use_state(move || existing.as_ref().map(E::to_draft).unwrap_or_default());
    let saving = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_submit = {
        let draft = draft.clone();
        let saving = saving.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }

            let store = store.clone();
            let id = id.clone();
            let payload = prepare((*draft).clone());
            let saving = saving.clone();
            let error = error.clone();
            let on_close = on_close.clone();

            saving.set(true);
            error.set(None);
            spawn_local(async move {
                let result = store.save::<E>(id, payload).await;
                saving.set(false);
                match result {
                    Ok(_) => on_close.emit(()),
                    Err(e) => {
                        error!("{}", e);
                        error.set(Some(format!("Failed to save {}. Please try again.", E::NAME)));
                    }
                }
            });
        })
    };

    EntityForm {
        draft,
        saving: *saving,
        error: (*error).clone(),
        on_submit,
    }
}
