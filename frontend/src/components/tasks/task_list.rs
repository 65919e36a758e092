use shared::{format_display_date, Client, Project, Task};
use yew::prelude::*;

use super::task_form::TaskForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::modal::Modal;
use crate::components::status_badge::StatusBadge;
use crate::hooks::{use_delete, use_fetch, use_store};

#[function_component(TaskList)]
pub fn task_list() -> Html {
    let store = use_store();
    let status = use_fetch::<Task>();
    let _projects = use_fetch::<Project>();
    let _clients = use_fetch::<Client>();
    let editing = use_state(|| Option::<Task>::None);
    let pending = use_delete::<Task>();

    if status.loading && !store.is_fetched::<Task>() {
        return html! { <div class="loading">{"Loading tasks..."}</div> };
    }

    let tasks = store.items::<Task>();

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
                            <th>{"Task"}</th>
                            <th>{"Project/Client"}</th>
                            <th>{"Priority"}</th>
                            <th>{"Status"}</th>
                            <th>{"Due Date"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if tasks.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="6" class="empty">
                                        {"No tasks found. Add your first task to get started."}
                                    </td>
                                </tr>
                            }
                        } else {
                            tasks.into_iter().map(|task| {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let task = task.clone();
                                    Callback::from(move |_: MouseEvent| editing.set(Some(task.clone())))
                                };
                                let on_delete = {
                                    let request = pending.request.clone();
                                    let task = task.clone();
                                    Callback::from(move |_: MouseEvent| request.emit(task.clone()))
                                };
                                // unset references resolve to the same placeholders as dangling ones
                                let project = store.project_name(task.project_id.as_deref().unwrap_or_default());
                                let client = store.client_name(task.client_id.as_deref().unwrap_or_default());
                                html! {
                                    <tr key={task.id.clone()}>
                                        <td>
                                            <div class="name">{&task.title}</div>
                                            <div class="secondary">{&task.description}</div>
                                        </td>
                                        <td>
                                            <div>{project}</div>
                                            <div class="secondary">{client}</div>
                                        </td>
                                        <td><StatusBadge value={task.priority.as_str()} label={task.priority.label()} /></td>
                                        <td><StatusBadge value={task.status.as_str()} label={task.status.label()} /></td>
                                        <td class="date">{format_display_date(&task.due_date)}</td>
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

            {if let Some(task) = (*editing).clone() {
                html! {
                    <Modal is_open=true title="Edit Task" on_close={close_edit.clone()}>
                        <TaskForm task={Some(task)} on_close={close_edit} />
                    </Modal>
                }
            } else { html! {} }}

            {if let Some(task) = pending.target.as_ref() {
                html! {
                    <ConfirmDialog
                        is_open=true
                        title="Delete Task"
                        message={format!(
                            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                            task.title
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
