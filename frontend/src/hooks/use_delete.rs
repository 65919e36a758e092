use crm_store::Cached;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_store::use_store;

/// Confirm-then-delete flow for a list of `E`
pub struct PendingDelete<E: Cached> {
    pub target: Option<E>,
    pub busy: bool,
    pub error: Option<String>,
    /// Open the confirmation for an entity
    pub request: Callback<E>,
    pub cancel: Callback<()>,
    pub confirm: Callback<()>,
}

#[hook]
pub fn use_delete<E: Cached>() -> PendingDelete<E> {
    let store = use_store();
    let target = use_state(|| Option::<E>::None);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let request = {
        let target = target.clone();
        let error = error.clone();
        Callback::from(move |entity: E| {
            error.set(None);
            target.set(Some(entity));
        })
    };

    let cancel = {
        let target = target.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            if *busy {
                return;
            }
            target.set(None);
            error.set(None);
        })
    };

    let confirm = {
        let target = target.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let Some(entity) = (*target).clone() else {
                return;
            };
            let store = store.clone();
            let target = target.clone();
            let busy = busy.clone();
            let error = error.clone();

            busy.set(true);
            error.set(None);
            spawn_local(async move {
                let result = store.delete::<E>(entity.id()).await;
                busy.set(false);
                match result {
                    Ok(()) => target.set(None),
                    Err(_) => error.set(Some(format!("Failed to delete {}. Please try again.", E::NAME))),
                }
            });
        })
    };

    PendingDelete {
        target: (*target).clone(),
        busy: *busy,
        error: (*error).clone(),
        request,
        cancel,
        confirm,
    }
}
