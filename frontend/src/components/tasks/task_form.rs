use shared::{parse_date_input, to_date_input, Client, Project, Task, TaskPriority, TaskStatus};
use std::convert::identity;
use yew::prelude::*;

use crate::components::form_field::{
    bind_input, bind_select, bind_textarea, optional_id, options, FormError, FormField,
};
use crate::hooks::{use_entity_form, use_fetch, use_store};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    #[prop_or_default]
    pub task: Option<Task>,
    pub on_close: Callback<()>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let store = use_store();
    let _clients = use_fetch::<Client>();
    let _projects = use_fetch::<Project>();
    let form = use_entity_form::<Task>(props.task.clone(), props.on_close.clone(), identity);
    let draft = &*form.draft;
    let editing = props.task.is_some();
    let clients = store.items::<Client>();
    let projects = store.items::<Project>();
    let project_id = draft.project_id.clone().unwrap_or_default();
    let client_id = draft.client_id.clone().unwrap_or_default();

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <form class="entity-form" onsubmit={form.on_submit.clone()}>
            <FormError error={form.error.clone()} />

            <FormField label="Task Title" html_for="title">
                <input
                    type="text"
                    id="title"
                    value={draft.title.clone()}
                    oninput={bind_input(&form.draft, |d, v| d.title = v)}
                    required=true
                />
            </FormField>

            <div class="form-row">
                <FormField label="Project" html_for="projectId">
                    <select id="projectId" onchange={bind_select(&form.draft, |d, v| d.project_id = optional_id(v))}>
                        <option value="" selected={project_id.is_empty()}>{"Select a project"}</option>
                        {options(projects.iter().map(|p| (p.id.as_str(), p.name.as_str())), &project_id)}
                    </select>
                </FormField>
                <FormField label="Client" html_for="clientId">
                    <select id="clientId" onchange={bind_select(&form.draft, |d, v| d.client_id = optional_id(v))}>
                        <option value="" selected={client_id.is_empty()}>{"Select a client"}</option>
                        {options(clients.iter().map(|c| (c.id.as_str(), c.name.as_str())), &client_id)}
                    </select>
                </FormField>
            </div>

            <FormField label="Due Date" html_for="dueDate">
                <input
                    type="date"
                    id="dueDate"
                    value={to_date_input(&draft.due_date)}
                    oninput={bind_input(&form.draft, |d, v| {
                        if let Some(date) = parse_date_input(&v) {
                            d.due_date = date;
                        }
                    })}
                    required=true
                />
            </FormField>

            <div class="form-row">
                <FormField label="Priority" html_for="priority">
                    <select id="priority" onchange={bind_select(&form.draft, |d, v| d.priority = v.parse().unwrap_or_default())}>
                        {options(TaskPriority::ALL.iter().map(|p| (p.as_str(), p.label())), draft.priority.as_str())}
                    </select>
                </FormField>
                <FormField label="Status" html_for="status">
                    <select id="status" onchange={bind_select(&form.draft, |d, v| d.status = v.parse().unwrap_or_default())}>
                        {options(TaskStatus::ALL.iter().map(|s| (s.as_str(), s.label())), draft.status.as_str())}
                    </select>
                </FormField>
            </div>

            <FormField label="Description" html_for="description">
                <textarea
                    id="description"
                    rows="3"
                    value={draft.description.clone()}
                    oninput={bind_textarea(&form.draft, |d, v| d.description = v)}
                    required=true
                />
            </FormField>

            <div class="form-buttons">
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={form.saving}>
                    {match (form.saving, editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Changes",
                        (false, false) => "Create Task",
                    }}
                </button>
            </div>
        </form>
    }
}
