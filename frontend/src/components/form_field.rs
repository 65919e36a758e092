use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub html_for: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Label plus control, stacked
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.html_for.clone()}>{props.label.clone()}</label>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormErrorProps {
    pub error: Option<String>,
}

#[function_component(FormError)]
pub fn form_error(props: &FormErrorProps) -> Html {
    match &props.error {
        Some(error) => html! { <div class="form-error" role="alert">{error}</div> },
        None => html! {},
    }
}

/// Callback for an `<input>` that writes its value into a piece of form state
pub fn bind_input<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

pub fn bind_textarea<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, textarea.value());
        state.set(next);
    })
}

pub fn bind_select<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<Event>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, select.value());
        state.set(next);
    })
}

/// `<option>` list for a select, given `(value, label)` pairs
pub fn options<'a>(choices: impl IntoIterator<Item = (&'a str, &'a str)>, selected: &str) -> Html {
    choices
        .into_iter()
        .map(|(value, label)| {
            html! {
                <option value={value.to_string()} selected={value == selected}>{label}</option>
            }
        })
        .collect()
}

/// Parse a number input, treating blank or malformed text as zero
pub fn parse_number(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Text shown in a number input.
///
/// The user's raw text is kept while it still parses to `value`, so a field
/// can be cleared or hold "1." mid-edit without being rewritten to `0`.
pub fn number_text(raw: &str, value: f64) -> String {
    if parse_number(raw) == value {
        raw.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct NumberInputProps {
    pub value: f64,
    pub on_change: Callback<f64>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
}

/// Number input that owns its text and reports parsed values
#[function_component(NumberInput)]
pub fn number_input(props: &NumberInputProps) -> Html {
    let initial = props.value;
    let raw = use_state(move || initial.to_string());

    let oninput = {
        let raw = raw.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            on_change.emit(parse_number(&text));
            raw.set(text);
        })
    };

    html! {
        <input
            type="number"
            id={props.id.clone()}
            class={props.class.clone()}
            placeholder={props.placeholder.clone()}
            min={props.min.clone()}
            step={props.step.clone()}
            value={number_text(&raw, props.value)}
            {oninput}
            required={props.required}
        />
    }
}

/// Callback for a [`NumberInput`] that writes into a piece of form state
pub fn bind_number<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<f64>
where
    T: Clone + 'static,
    F: Fn(&mut T, f64) + 'static,
{
    let state = state.clone();
    Callback::from(move |value: f64| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

/// Empty select value means "none"
pub fn optional_id(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
