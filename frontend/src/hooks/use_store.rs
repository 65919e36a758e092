use crm_store::{Cached, Store, StoreError};
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::HttpGateway;

pub type AppStore = Store<HttpGateway>;

/// Bumped after every store operation so context consumers re-render
#[derive(Debug, Default, PartialEq)]
pub struct Revision(u32);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

/// The application store as seen through context.
///
/// Reads go straight to the store through `Deref`. The async operations here
/// wrap the store's and notify consumers once the operation has settled,
/// whatever its outcome.
#[derive(Clone)]
pub struct StoreHandle {
    store: Rc<AppStore>,
    revision: UseReducerHandle<Revision>,
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && *self.revision == *other.revision
    }
}

impl Deref for StoreHandle {
    type Target = AppStore;

    fn deref(&self) -> &AppStore {
        &self.store
    }
}

impl StoreHandle {
    pub fn new(store: Rc<AppStore>, revision: UseReducerHandle<Revision>) -> Self {
        Self { store, revision }
    }

    pub fn notify(&self) {
        self.revision.dispatch(());
    }

    pub async fn fetch<E: Cached>(&self) -> Result<bool, StoreError> {
        let result = self.store.fetch::<E>().await;
        self.notify();
        result
    }

    /// Drop the fetched flag and load the collection again
    pub async fn refresh<E: Cached>(&self) -> Result<(), StoreError> {
        self.store.invalidate::<E>();
        let result = self.store.fetch::<E>().await.map(|_| ());
        self.notify();
        result
    }

    /// Create when `id` is `None`, otherwise update the entity with that id
    pub async fn save<E: Cached>(&self, id: Option<String>, draft: E::Draft) -> Result<E, StoreError> {
        let result = match id {
            Some(id) => self.store.update::<E>(&id, draft).await,
            None => self.store.create::<E>(draft).await,
        };
        self.notify();
        result
    }

    pub async fn delete<E: Cached>(&self, id: &str) -> Result<(), StoreError> {
        let result = self.store.delete::<E>(id).await;
        self.notify();
        result
    }
}

#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().expect("StoreHandle must be provided by App")
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Load collection `E` on mount unless the store already holds it
#[hook]
pub fn use_fetch<E: Cached>() -> FetchStatus {
    let store = use_store();
    let loading = use_state(|| !store.is_fetched::<E>());
    let error = use_state(|| Option::<String>::None);

    {
        let store = store.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            if !store.is_fetched::<E>() {
                spawn_local(async move {
                    loading.set(true);
                    match store.fetch::<E>().await {
                        Ok(_) => error.set(None),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    FetchStatus {
        loading: *loading,
        error: (*error).clone(),
    }
}
