pub mod use_delete;
pub mod use_entity_form;
pub mod use_store;

pub use use_delete::use_delete;
pub use use_entity_form::use_entity_form;
pub use use_store::{use_fetch, use_store, AppStore, Revision, StoreHandle};
