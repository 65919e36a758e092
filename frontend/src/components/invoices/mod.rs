pub mod invoice_form;
pub mod invoice_list;

use yew::prelude::*;

use crate::components::modal::Modal;
use invoice_form::InvoiceForm;
use invoice_list::InvoiceList;

#[function_component(InvoicesPage)]
pub fn invoices_page() -> Html {
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
                <h2>{"Invoices"}</h2>
                <button type="button" class="btn btn-primary" onclick={open}>{"Create Invoice"}</button>
            </div>

            <InvoiceList />

            <Modal is_open={*adding} title="Create New Invoice" on_close={close.clone()}>
                if *adding {
                    <InvoiceForm on_close={close} />
                }
            </Modal>
        </section>
    }
}
