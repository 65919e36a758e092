use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Clients,
    Projects,
    Tasks,
    Invoices,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Clients,
        Page::Projects,
        Page::Tasks,
        Page::Invoices,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Clients => "Clients",
            Page::Projects => "Projects",
            Page::Tasks => "Tasks",
            Page::Invoices => "Invoices",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app">
            <header class="header">
                <div class="container">
                    <h1>{"Freelance CRM"}</h1>
                    <nav class="nav-tabs">
                        {for Page::ALL.iter().map(|page| {
                            let page = *page;
                            let on_click = {
                                let on_navigate = props.on_navigate.clone();
                                Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("nav-tab", (page == props.current).then_some("active"))}
                                    onclick={on_click}
                                >
                                    {page.title()}
                                </button>
                            }
                        })}
                    </nav>
                </div>
            </header>
            <main class="main">
                <div class="container">
                    {props.children.clone()}
                </div>
            </main>
        </div>
    }
}
