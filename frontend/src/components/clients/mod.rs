pub mod client_form;
pub mod client_list;

use yew::prelude::*;

use crate::components::modal::Modal;
use client_form::ClientForm;
use client_list::ClientList;

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    let adding = use_state(|| false);

    let open = {
        let adding = adding.clone();
        Callback::from(move |_: MouseEvent| adding.set(true))
    };
    let close = {
        let adding = adding.clone();
        Callback::from(move |_: ()| adding.set(false))
    };

    html! {
        <section class="entity-page">
            <div class="page-header">
                <h2>{"Clients"}</h2>
                <button type="button" class="btn btn-primary" onclick={open}>{"Add Client"}</button>
            </div>

            <ClientList />

            <Modal is_open={*adding} title="Add New Client" on_close={close.clone()}>
                if *adding {
                    <ClientForm on_close={close} />
                }
            </Modal>
        </section>
    }
}
