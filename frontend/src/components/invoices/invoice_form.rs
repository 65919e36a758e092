use shared::{
    format_money, parse_date_input, to_date_input, Client, Invoice, InvoiceDraft, InvoiceStatus, Project,
};
use yew::prelude::*;

use crate::components::form_field::{
    bind_input, bind_number, bind_select, options, FormError, FormField, NumberInput,
};
use crate::hooks::{use_entity_form, use_fetch, use_store};

#[derive(Properties, PartialEq)]
pub struct InvoiceFormProps {
    #[prop_or_default]
    pub invoice: Option<Invoice>,
    pub on_close: Callback<()>,
}

#[function_component(InvoiceForm)]
pub fn invoice_form(props: &InvoiceFormProps) -> Html {
    let store = use_store();
    let _clients = use_fetch::<Client>();
    let _projects = use_fetch::<Project>();
    let form = use_entity_form::<Invoice>(props.invoice.clone(), props.on_close.clone(), InvoiceDraft::finalize);
    let draft = &*form.draft;
    let editing = props.invoice.is_some();
    let clients = store.items::<Client>();
    let projects = store.items::<Project>();

    let client_labels: Vec<(String, String)> = clients
        .iter()
        .map(|c| (c.id.clone(), format!("{} - {}", c.name, c.company)))
        .collect();

    let on_add_item = {
        let draft = form.draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.add_item();
            draft.set(next);
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let single_item = draft.items.len() <= 1;

    html! {
        <form class="entity-form invoice-form" onsubmit={form.on_submit.clone()}>
            <FormError error={form.error.clone()} />

            <div class="form-row">
                <FormField label="Client" html_for="clientId">
                    <select
                        id="clientId"
                        onchange={bind_select(&form.draft, |d, v| d.client_id = v)}
                        required=true
                    >
                        <option value="" selected={draft.client_id.is_empty()}>{"Select a client"}</option>
                        {options(client_labels.iter().map(|(id, label)| (id.as_str(), label.as_str())), &draft.client_id)}
                    </select>
                </FormField>
                <FormField label="Project" html_for="projectId">
                    <select
                        id="projectId"
                        onchange={bind_select(&form.draft, |d, v| d.project_id = v)}
                        required=true
                    >
                        <option value="" selected={draft.project_id.is_empty()}>{"Select a project"}</option>
                        {options(projects.iter().map(|p| (p.id.as_str(), p.name.as_str())), &draft.project_id)}
                    </select>
                </FormField>
            </div>

            <div class="form-row">
                <FormField label="Status" html_for="status">
                    <select id="status" onchange={bind_select(&form.draft, |d, v| d.status = v.parse().unwrap_or_default())}>
                        {options(InvoiceStatus::ALL.iter().map(|s| (s.as_str(), s.label())), draft.status.as_str())}
                    </select>
                </FormField>
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
            </div>

            <div class="invoice-items">
                <div class="invoice-items-header">
                    <h4>{"Invoice Items"}</h4>
                    <button type="button" class="btn btn-secondary" onclick={on_add_item}>{"Add Item"}</button>
                </div>

                {for draft.items.iter().enumerate().map(|(index, item)| {
                    let on_remove = {
                        let draft = form.draft.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*draft).clone();
                            if next.remove_item(index) {
                                draft.set(next);
                            }
                        })
                    };
                    html! {
                        <div class="invoice-item">
                            <input
                                type="text"
                                class="item-description"
                                placeholder="Description"
                                value={item.description.clone()}
                                oninput={bind_input(&form.draft, move |d, v| d.set_item_description(index, v))}
                                required=true
                            />
                            <NumberInput
                                class="item-quantity"
                                placeholder="Qty"
                                min="1"
                                value={item.quantity}
                                on_change={bind_number(&form.draft, move |d, v| d.set_item_quantity(index, v))}
                                required=true
                            />
                            <NumberInput
                                class="item-rate"
                                placeholder="Rate"
                                min="0"
                                step="0.01"
                                value={item.rate}
                                on_change={bind_number(&form.draft, move |d, v| d.set_item_rate(index, v))}
                                required=true
                            />
                            <span class="item-amount">{format_money(item.amount)}</span>
                            <button
                                type="button"
                                class="btn btn-outline"
                                onclick={on_remove}
                                disabled={single_item}
                            >
                                {"Remove"}
                            </button>
                        </div>
                    }
                })}

                <div class="invoice-total">
                    <span>{"Total:"}</span>
                    <span class="amount">{format_money(draft.total())}</span>
                </div>
            </div>

            <div class="form-buttons">
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={form.saving}>
                    {match (form.saving, editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Changes",
                        (false, false) => "Create Invoice",
                    }}
                </button>
            </div>
        </form>
    }
}
