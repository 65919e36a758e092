pub mod project_form;
pub mod project_list;

use yew::prelude::*;

use crate::components::modal::Modal;
use project_form::ProjectForm;
use project_list::ProjectList;

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
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
                <h2>{"Projects"}</h2>
                <button type="button" class="btn btn-primary" onclick={open}>{"Add Project"}</button>
            </div>

            <ProjectList />

            <Modal is_open={*adding} title="Create New Project" on_close={close.clone()}>
                if *adding {
                    <ProjectForm on_close={close} />
                }
            </Modal>
        </section>
    }
}
