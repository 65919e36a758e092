use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    /// Wire value, e.g. "in-progress"; also selects the CSS modifier
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("status-badge", format!("status-{}", props.value))}>
            {props.label.clone()}
        </span>
    }
}
