pub mod clients;
pub mod confirm_dialog;
pub mod dashboard;
pub mod form_field;
pub mod invoices;
pub mod layout;
pub mod modal;
pub mod projects;
pub mod status_badge;
pub mod tasks;
