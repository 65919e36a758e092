use shared::Client;
use yew::prelude::*;

use super::client_form::ClientForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::modal::Modal;
use crate::components::status_badge::StatusBadge;
use crate::hooks::{use_delete, use_fetch, use_store};

#[function_component(ClientList)]
pub fn client_list() -> Html {
    let store = use_store();
    let status = use_fetch::<Client>();
    let editing = use_state(|| Option::<Client>::None);
    let pending = use_delete::<Client>();

    if status.loading && !store.is_fetched::<Client>() {
        return html! { <div class="loading">{"Loading clients..."}</div> };
    }

    let clients = store.items::<Client>();

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
                            <th>{"Name"}</th>
                            <th>{"Company"}</th>
                            <th>{"Email"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if clients.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="5" class="empty">
                                        {"No clients found. Add your first client to get started."}
                                    </td>
                                </tr>
                            }
                        } else {
                            clients.into_iter().map(|client| {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let client = client.clone();
                                    Callback::from(move |_: MouseEvent| editing.set(Some(client.clone())))
                                };
                                let on_delete = {
                                    let request = pending.request.clone();
                                    let client = client.clone();
                                    Callback::from(move |_: MouseEvent| request.emit(client.clone()))
                                };
                                html! {
                                    <tr key={client.id.clone()}>
                                        <td class="name">{&client.name}</td>
                                        <td>{&client.company}</td>
                                        <td>{&client.email}</td>
                                        <td><StatusBadge value={client.status.as_str()} label={client.status.label()} /></td>
                                        <td class="actions">
                                            <button type="button" class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                                            <button type="button" class="btn btn-outline" onclick={on_delete}>{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }}
                    </tbody>
                </table>
            </div>

            {if let Some(client) = (*editing).clone() {
                html! {
                    <Modal is_open=true title="Edit Client" on_close={close_edit.clone()}>
                        <ClientForm client={Some(client)} on_close={close_edit} />
                    </Modal>
                }
            } else { html! {} }}

            {if let Some(client) = pending.target.as_ref() {
                html! {
                    <ConfirmDialog
                        is_open=true
                        title="Delete Client"
                        message={format!(
                            "Are you sure you want to delete {}? This action cannot be undone.",
                            client.name
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
