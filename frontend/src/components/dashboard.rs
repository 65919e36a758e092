use shared::{format_display_date, Client, Invoice, Project, Task};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::status_badge::StatusBadge;
use crate::hooks::{use_fetch, use_store};

const UPCOMING_TASKS: usize = 5;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: usize,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-label">{props.label.clone()}</span>
            <span class="stat-value">{props.value}</span>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let store = use_store();
    let clients = use_fetch::<Client>();
    let projects = use_fetch::<Project>();
    let tasks = use_fetch::<Task>();
    let invoices = use_fetch::<Invoice>();
    let refreshing = use_state(|| false);
    let refresh_error = use_state(|| Option::<String>::None);

    let on_refresh = {
        let store = store.clone();
        let refreshing = refreshing.clone();
        let refresh_error = refresh_error.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            let refreshing = refreshing.clone();
            let refresh_error = refresh_error.clone();
            refreshing.set(true);
            spawn_local(async move {
                // sequential; the first failure is the one reported
                let results = [
                    store.refresh::<Client>().await,
                    store.refresh::<Project>().await,
                    store.refresh::<Task>().await,
                    store.refresh::<Invoice>().await,
                ];
                refresh_error.set(results.into_iter().find_map(Result::err).map(|e| e.to_string()));
                refreshing.set(false);
            });
        })
    };

    let loading = *refreshing || clients.loading || projects.loading || tasks.loading || invoices.loading;
    let error = [(*refresh_error).clone(), clients.error, projects.error, tasks.error, invoices.error]
        .into_iter()
        .flatten()
        .next();

    let summary = store.summary();
    let upcoming = store.upcoming_tasks(UPCOMING_TASKS);

    html! {
        <section class="dashboard">
            <div class="page-header">
                <h2>{"Dashboard"}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_refresh} disabled={*refreshing}>
                    {if *refreshing { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            {if let Some(error) = error {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="stat-grid">
                <StatCard label="Total Clients" value={summary.total_clients} />
                <StatCard label="Active Projects" value={summary.active_projects} />
                <StatCard label="Pending Tasks" value={summary.pending_tasks} />
                <StatCard label="Unpaid Invoices" value={summary.unpaid_invoices} />
            </div>

            <h3>{"Upcoming Tasks"}</h3>
            {if loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else if upcoming.is_empty() {
                html! { <div class="empty">{"No upcoming tasks"}</div> }
            } else {
                html! {
                    <ul class="upcoming-tasks">
                        {for upcoming.iter().map(|task| html! {
                            <li key={task.id.clone()} class="upcoming-task">
                                <span class="task-title">{&task.title}</span>
                                <span class="task-due">{format_display_date(&task.due_date)}</span>
                                <StatusBadge value={task.priority.as_str()} label={task.priority.label()} />
                            </li>
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
