use chrono::Utc;
use gloo::dialogs::alert;
use log::error;
use shared::{format_display_date, format_money, invoice_document, Client, Invoice, Project};
use yew::prelude::*;

use super::invoice_form::InvoiceForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::modal::Modal;
use crate::components::status_badge::StatusBadge;
use crate::hooks::{use_delete, use_fetch, use_store, StoreHandle};
use crate::services::download::download_html;

/// Render the printable document for `invoice` and hand it to the browser
fn download_invoice(store: &StoreHandle, invoice: &Invoice) {
    let client = store.find::<Client>(&invoice.client_id);
    let project = store.find::<Project>(&invoice.project_id);

    let (Some(client), Some(project)) = (client, project) else {
        alert("Could not generate invoice: Client or project not found");
        return;
    };

    let html = invoice_document::render(invoice, &client, &project, Utc::now().date_naive());
    if let Err(e) = download_html(&invoice_document::file_name(invoice), &html) {
        error!("Failed to download invoice {}: {}", invoice.number(), e);
        alert("Failed to download invoice. Please try again.");
    }
}

#[function_component(InvoiceList)]
pub fn invoice_list() -> Html {
    let store = use_store();
    let status = use_fetch::<Invoice>();
    let _clients = use_fetch::<Client>();
    let _projects = use_fetch::<Project>();
    let editing = use_state(|| Option::<Invoice>::None);
    let pending = use_delete::<Invoice>();

    if status.loading && !store.is_fetched::<Invoice>() {
        return html! { <div class="loading">{"Loading invoices..."}</div> };
    }

    let invoices = store.items::<Invoice>();

    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    html! {
        <>
            {if let Some(error) = status.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="table-container">
                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>{"Invoice Details"}</th>
                            <th>{"Client/Project"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Status"}</th>
                            <th>{"Due Date"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if invoices.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="6" class="empty">
                                        {"No invoices found. Create your first invoice to get started."}
                                    </td>
                                </tr>
                            }
                        } else {
                            invoices.into_iter().map(|invoice| {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |_: MouseEvent| editing.set(Some(invoice.clone())))
                                };
                                let on_download = {
                                    let store = store.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |_: MouseEvent| download_invoice(&store, &invoice))
                                };
                                let on_delete = {
                                    let request = pending.request.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |_: MouseEvent| request.emit(invoice.clone()))
                                };
                                html! {
                                    <tr key={invoice.id.clone()}>
                                        <td>
                                            <div class="name">{format!("#{}", invoice.number())}</div>
                                            <div class="secondary">{format!("{} items", invoice.items.len())}</div>
                                        </td>
                                        <td>
                                            <div>{store.client_name(&invoice.client_id)}</div>
                                            <div class="secondary">{store.project_name(&invoice.project_id)}</div>
                                        </td>
                                        <td class="amount">{format_money(invoice.amount)}</td>
                                        <td><StatusBadge value={invoice.status.as_str()} label={invoice.status.label()} /></td>
                                        <td class="date">{format_display_date(&invoice.due_date)}</td>
                                        <td class="actions">
                                            <button type="button" class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                                            <button type="button" class="btn btn-secondary" onclick={on_download}>{"Download"}</button>
                                            <button type="button" class="btn btn-outline" onclick={on_delete}>{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }}
                    </tbody>
                </table>
            </div>

            {if let Some(invoice) = (*editing).clone() {
                html! {
                    <Modal is_open=true title="Edit Invoice" on_close={close_edit.clone()}>
                        <InvoiceForm invoice={Some(invoice)} on_close={close_edit} />
                    </Modal>
                }
            } else { html! {} }}

            {if let Some(invoice) = pending.target.as_ref() {
                html! {
                    <ConfirmDialog
                        is_open=true
                        title="Delete Invoice"
                        message={format!(
                            "Are you sure you want to delete invoice #{}? This action cannot be undone.",
                            invoice.number()
                        )}
                        on_confirm={pending.confirm.clone()}
                        on_close={pending.cancel.clone()}
                        busy={pending.busy}
                        error={pending.error.clone()}
                    />
                }
            } else { html! {} }}
        </>
    }
}
