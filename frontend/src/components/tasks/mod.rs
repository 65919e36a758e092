pub mod task_form;
pub mod task_list;

use yew::prelude::*;

use crate::components::modal::Modal;
use task_form::TaskForm;
use task_list::TaskList;

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
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
                <h2>{"Tasks"}</h2>
                <button type="button" class="btn btn-primary" onclick={open}>{"Add Task"}</button>
            </div>

            <TaskList />

            <Modal is_open={*adding} title="Create New Task" on_close={close.clone()}>
                if *adding {
                    <TaskForm on_close={close} />
                }
            </Modal>
        </section>
    }
}
