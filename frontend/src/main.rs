use crm_store::Store;
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::clients::ClientsPage;
use components::dashboard::Dashboard;
use components::invoices::InvoicesPage;
use components::layout::{Layout, Page};
use components::projects::ProjectsPage;
use components::tasks::TasksPage;
use hooks::{AppStore, Revision, StoreHandle};
use services::api::HttpGateway;
use services::logging;

#[function_component(App)]
fn app() -> Html {
    // One store for the whole session, shared through context
    let store: Rc<AppStore> = use_memo((), |_| Store::new(HttpGateway::default()));
    let revision = use_reducer(Revision::default);
    let handle = StoreHandle::new(store, revision);

    let page = use_state(Page::default);
    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    html! {
        <ContextProvider<StoreHandle> context={handle}>
            <Layout current={*page} on_navigate={on_navigate}>
                {match *page {
                    Page::Dashboard => html! { <Dashboard /> },
                    Page::Clients => html! { <ClientsPage /> },
                    Page::Projects => html! { <ProjectsPage /> },
                    Page::Tasks => html! { <TasksPage /> },
                    Page::Invoices => html! { <InvoicesPage /> },
                }}
            </Layout>
        </ContextProvider<StoreHandle>>
    }
}

fn main() {
    if let Err(e) = logging::init() {
        gloo::console::error!(format!("Failed to install logger: {}", e));
    }
    log::info!("Starting Freelance CRM against {}", HttpGateway::default().config().base_url());
    yew::Renderer::<App>::new().render();
}
