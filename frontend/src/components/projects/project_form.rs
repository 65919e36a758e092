use shared::{parse_date_input, to_date_input, Client, Project, ProjectStatus};
use std::convert::identity;
use yew::prelude::*;

use crate::components::form_field::{
    bind_input, bind_number, bind_select, bind_textarea, options, FormError, FormField, NumberInput,
};
use crate::hooks::{use_entity_form, use_fetch, use_store};

#[derive(Properties, PartialEq)]
pub struct ProjectFormProps {
    #[prop_or_default]
    pub project: Option<Project>,
    pub on_close: Callback<()>,
}

#[function_component(ProjectForm)]
pub fn project_form(props: &ProjectFormProps) -> Html {
    let store = use_store();
    let _clients = use_fetch::<Client>();
    let form = use_entity_form::<Project>(props.project.clone(), props.on_close.clone(), identity);
    let draft = &*form.draft;
    let editing = props.project.is_some();
    let clients = store.items::<Client>();

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <form class="entity-form" onsubmit={form.on_submit.clone()}>
            <FormError error={form.error.clone()} />

            <FormField label="Project Name" html_for="name">
                <input
                    type="text"
                    id="name"
                    value={draft.name.clone()}
                    oninput={bind_input(&form.draft, |d, v| d.name = v)}
                    required=true
                />
            </FormField>

            <FormField label="Description" html_for="description">
                <textarea
                    id="description"
                    rows="3"
                    value={draft.description.clone()}
                    oninput={bind_textarea(&form.draft, |d, v| d.description = v)}
                    required=true
                />
            </FormField>

            <FormField label="Client" html_for="clientId">
                <select
                    id="clientId"
                    onchange={bind_select(&form.draft, |d, v| d.client_id = v)}
                    required=true
                >
                    <option value="" selected={draft.client_id.is_empty()}>{"Select a client"}</option>
                    {options(clients.iter().map(|c| (c.id.as_str(), c.name.as_str())), &draft.client_id)}
                </select>
            </FormField>

            <FormField label="Status" html_for="status">
                <select id="status" onchange={bind_select(&form.draft, |d, v| d.status = v.parse().unwrap_or_default())}>
                    {options(ProjectStatus::ALL.iter().map(|s| (s.as_str(), s.label())), draft.status.as_str())}
                </select>
            </FormField>

            <div class="form-row">
                <FormField label="Start Date" html_for="startDate">
                    <input
                        type="date"
                        id="startDate"
                        value={to_date_input(&draft.start_date)}
                        oninput={bind_input(&form.draft, |d, v| {
                            if let Some(date) = parse_date_input(&v) {
                                d.start_date = date;
                            }
                        })}
                        required=true
                    />
                </FormField>
                <FormField label="End Date" html_for="endDate">
                    <input
                        type="date"
                        id="endDate"
                        value={draft.end_date.as_ref().map(to_date_input).unwrap_or_default()}
                        oninput={bind_input(&form.draft, |d, v| d.end_date = parse_date_input(&v))}
                    />
                </FormField>
            </div>

            <FormField label="Budget" html_for="budget">
                <NumberInput
                    id="budget"
                    min="0"
                    step="0.01"
                    value={draft.budget}
                    on_change={bind_number(&form.draft, |d, v| d.budget = v.max(0.0))}
                    required=true
                />
            </FormField>

            <div class="form-buttons">
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={form.saving}>
                    {match (form.saving, editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Changes",
                        (false, false) => "Create Project",
                    }}
                </button>
            </div>
        </form>
    }
}
