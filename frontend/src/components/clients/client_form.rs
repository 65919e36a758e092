use shared::{Client, ClientStatus};
use std::convert::identity;
use yew::prelude::*;

use crate::components::form_field::{bind_input, bind_select, options, FormError, FormField};
use crate::hooks::use_entity_form;

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    #[prop_or_default]
    pub client: Option<Client>,
    pub on_close: Callback<()>,
}

#[function_component(ClientForm)]
pub fn client_form(props: &ClientFormProps) -> Html {
    let form = use_entity_form::<Client>(props.client.clone(), props.on_close.clone(), identity);
    let draft = &*form.draft;
    let editing = props.client.is_some();

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <form class="entity-form" onsubmit={form.on_submit.clone()}>
            <FormError error={form.error.clone()} />

            <div class="form-row">
                <FormField label="Name" html_for="name">
                    <input
                        type="text"
                        id="name"
                        value={draft.name.clone()}
                        oninput={bind_input(&form.draft, |d, v| d.name = v)}
                        required=true
                    />
                </FormField>
                <FormField label="Email" html_for="email">
                    <input
                        type="email"
                        id="email"
                        value={draft.email.clone()}
                        oninput={bind_input(&form.draft, |d, v| d.email = v)}
                        required=true
                    />
                </FormField>
            </div>

            <div class="form-row">
                <FormField label="Company" html_for="company">
                    <input
                        type="text"
                        id="company"
                        value={draft.company.clone()}
                        oninput={bind_input(&form.draft, |d, v| d.company = v)}
                        required=true
                    />
                </FormField>
                <FormField label="Phone" html_for="phone">
                    <input
                        type="tel"
                        id="phone"
                        value={draft.phone.clone()}
                        oninput={bind_input(&form.draft, |d, v| d.phone = v)}
                        required=true
                    />
                </FormField>
            </div>

            <FormField label="Status" html_for="status">
                <select id="status" onchange={bind_select(&form.draft, |d, v| d.status = v.parse().unwrap_or_default())}>
                    {options(ClientStatus::ALL.iter().map(|s| (s.as_str(), s.label())), draft.status.as_str())}
                </select>
            </FormField>

            <div class="form-buttons">
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={form.saving}>
                    {match (form.saving, editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Changes",
                        (false, false) => "Add Client",
                    }}
                </button>
            </div>
        </form>
    }
}
