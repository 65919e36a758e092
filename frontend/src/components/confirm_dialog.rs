use web_sys::MouseEvent;
use yew::prelude::*;

use super::form_field::FormError;
use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal is_open={props.is_open} title={props.title.clone()} on_close={props.on_close.clone()}>
            <p class="confirm-message">{props.message.clone()}</p>
            <FormError error={props.error.clone()} />
            <div class="form-buttons">
                <button type="button" class="btn btn-outline" onclick={on_cancel} disabled={props.busy}>
                    {"Cancel"}
                </button>
                <button type="button" class="btn btn-danger" onclick={on_confirm} disabled={props.busy}>
                    {if props.busy { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </Modal>
    }
}
