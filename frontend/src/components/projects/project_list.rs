use shared::{format_display_date, format_money, Client, Project};
use yew::prelude::*;

use super::project_form::ProjectForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::modal::Modal;
use crate::components::status_badge::StatusBadge;
use crate::hooks::{use_delete, use_fetch, use_store};

#[function_component(ProjectList)]
pub fn project_list() -> Html {
    let store = use_store();
    let status = use_fetch::<Project>();
    // names in the client column
    let _clients = use_fetch::<Client>();
    let editing = use_state(|| Option::<Project>::None);
    let pending = use_delete::<Project>();

    if status.loading && !store.is_fetched::<Project>() {
        return html! { <div class="loading">{"Loading projects..."}</div> };
    }

    let projects = store.items::<Project>();

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
                            <th>{"Project Name"}</th>
                            <th>{"Client"}</th>
                            <th>{"Status"}</th>
                            <th>{"Start Date"}</th>
                            <th>{"Budget"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if projects.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="6" class="empty">
                                        {"No projects found. Add your first project to get started."}
                                    </td>
                                </tr>
                            }
                        } else {
                            projects.into_iter().map(|project| {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let project = project.clone();
                                    Callback::from(move |_: MouseEvent| editing.set(Some(project.clone())))
                                };
                                let on_delete = {
                                    let request = pending.request.clone();
                                    let project = project.clone();
                                    Callback::from(move |_: MouseEvent| request.emit(project.clone()))
                                };
                                html! {
                                    <tr key={project.id.clone()}>
                                        <td>
                                            <div class="name">{&project.name}</div>
                                            <div class="secondary">{&project.description}</div>
                                        </td>
                                        <td>{store.client_name(&project.client_id)}</td>
                                        <td><StatusBadge value={project.status.as_str()} label={project.status.label()} /></td>
                                        <td class="date">{format_display_date(&project.start_date)}</td>
                                        <td class="amount">{format_money(project.budget)}</td>
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

            {if let Some(project) = (*editing).clone() {
                html! {
                    <Modal is_open=true title="Edit Project" on_close={close_edit.clone()}>
                        <ProjectForm project={Some(project)} on_close={close_edit} />
                    </Modal>
                }
            } else { html! {} }}

            {if let Some(project) = pending.target.as_ref() {
                html! {
                    <ConfirmDialog
                        is_open=true
                        title="Delete Project"
                        message={format!(
                            "Are you sure you want to delete {}? This action cannot be undone.",
                            project.name
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
