//! # Client State Store
//!
//! The in-memory cache the views read from and mutate through. It holds the
//! four entity collections with a fetched flag each, calls the gateway, and
//! reconciles the local collection once the server has accepted a change.
//!
//! State lives behind a `RefCell` that is only borrowed in synchronous
//! sections, never across a gateway await. Overlapping mutations on the same
//! collection are applied in completion order.

use log::{error, info, warn};
use shared::{
    Client, Entity, Invoice, InvoiceStatus, Project, ProjectStatus, Task, TaskStatus,
};
use std::cell::{Ref, RefCell};

use crate::collection::Collection;
use crate::error::{GatewayError, Operation, StoreError};
use crate::gateway::Gateway;

pub const UNKNOWN_CLIENT: &str = "Unknown Client";
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

#[derive(Debug, Default)]
pub struct StoreState {
    clients: Collection<Client>,
    projects: Collection<Project>,
    tasks: Collection<Task>,
    invoices: Collection<Invoice>,
}

/// Entities with a collection slot in [`StoreState`]
pub trait Cached: Entity {
    fn collection(state: &StoreState) -> &Collection<Self>;
    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self>;
}

impl Cached for Client {
    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.clients
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.clients
    }
}

impl Cached for Project {
    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.projects
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.projects
    }
}

impl Cached for Task {
    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.tasks
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.tasks
    }
}

impl Cached for Invoice {
    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.invoices
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.invoices
    }
}

/// Counts shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_clients: usize,
    pub active_projects: usize,
    pub pending_tasks: usize,
    pub unpaid_invoices: usize,
}

pub struct Store<G> {
    gateway: G,
    state: RefCell<StoreState>,
}

impl<G> Store<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RefCell::new(StoreState::default()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn collection<E: Cached>(&self) -> Ref<'_, Collection<E>> {
        Ref::map(self.state.borrow(), E::collection)
    }

    pub fn is_fetched<E: Cached>(&self) -> bool {
        self.collection::<E>().is_fetched()
    }

    /// Snapshot of a collection in server order
    pub fn items<E: Cached>(&self) -> Vec<E> {
        self.collection::<E>().items().to_vec()
    }

    pub fn find<E: Cached>(&self, id: &str) -> Option<E> {
        self.collection::<E>().find(id).cloned()
    }

    pub fn count<E: Cached>(&self) -> usize {
        self.collection::<E>().items().len()
    }

    /// Forget that a collection was loaded; the next `fetch` goes to the server
    pub fn invalidate<E: Cached>(&self) {
        info!("Invalidating cached {}", E::RESOURCE);
        E::collection_mut(&mut self.state.borrow_mut()).invalidate();
    }

    /// Name of a cached client, or a placeholder when it is gone
    pub fn client_name(&self, id: &str) -> String {
        self.collection::<Client>()
            .find(id)
            .map(|client| client.name.clone())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
    }

    /// Name of a cached project, or a placeholder when it is gone
    pub fn project_name(&self, id: &str) -> String {
        self.collection::<Project>()
            .find(id)
            .map(|project| project.name.clone())
            .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
    }

    pub fn summary(&self) -> Summary {
        let state = self.state.borrow();
        Summary {
            total_clients: state.clients.items().len(),
            active_projects: state
                .projects
                .items()
                .iter()
                .filter(|project| project.status == ProjectStatus::InProgress)
                .count(),
            pending_tasks: state
                .tasks
                .items()
                .iter()
                .filter(|task| task.status != TaskStatus::Completed)
                .count(),
            unpaid_invoices: state
                .invoices
                .items()
                .iter()
                .filter(|invoice| invoice.status != InvoiceStatus::Paid)
                .count(),
        }
    }

    /// Incomplete tasks ordered by due date, soonest first
    pub fn upcoming_tasks(&self, limit: usize) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .collection::<Task>()
            .items()
            .iter()
            .filter(|task| task.status != TaskStatus::Completed)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| task.due_date);
        tasks.truncate(limit);
        tasks
    }
}

impl<G: Gateway> Store<G> {
    /// Load a collection unless it is already loaded.
    ///
    /// Returns whether a request was made. On failure the collection and its
    /// flag are left as they were, so the next call tries again.
    pub async fn fetch<E: Cached>(&self) -> Result<bool, StoreError> {
        if self.is_fetched::<E>() {
            return Ok(false);
        }
        self.reload::<E>().await?;
        Ok(true)
    }

    /// Load a collection from the server regardless of the fetched flag
    pub async fn reload<E: Cached>(&self) -> Result<(), StoreError> {
        info!("Fetching {}", E::RESOURCE);

        let items = self
            .gateway
            .list::<E>()
            .await
            .map_err(|e| failed::<E>(Operation::List, e))?;

        info!("Fetched {} {}", items.len(), E::RESOURCE);
        E::collection_mut(&mut self.state.borrow_mut()).load(items);
        Ok(())
    }

    /// Load one entity by id and cache it
    pub async fn fetch_one<E: Cached>(&self, id: &str) -> Result<E, StoreError> {
        info!("Fetching {}: {}", E::NAME, id);

        let entity = self
            .gateway
            .get::<E>(id)
            .await
            .map_err(|e| failed::<E>(Operation::Get, e))?;

        E::collection_mut(&mut self.state.borrow_mut()).upsert(entity.clone());
        Ok(entity)
    }

    /// Create on the server and append the returned entity, with its
    /// server-assigned id, to the end of the local collection
    pub async fn create<E: Cached>(&self, draft: E::Draft) -> Result<E, StoreError> {
        info!("Creating {}", E::NAME);

        let entity = self
            .gateway
            .create::<E>(&draft)
            .await
            .map_err(|e| failed::<E>(Operation::Create, e))?;

        info!("Created {} with ID: {}", E::NAME, entity.id());
        E::collection_mut(&mut self.state.borrow_mut()).push(entity.clone());
        Ok(entity)
    }

    /// Update on the server, then replace the cached entity with one built
    /// from the request payload and the id. The response body is not used.
    pub async fn update<E: Cached>(&self, id: &str, draft: E::Draft) -> Result<E, StoreError> {
        info!("Updating {}: {}", E::NAME, id);

        self.gateway
            .update::<E>(id, &draft)
            .await
            .map_err(|e| failed::<E>(Operation::Update, e))?;

        let entity = E::from_draft(id.to_string(), draft);
        if !E::collection_mut(&mut self.state.borrow_mut()).replace(entity.clone()) {
            warn!("Updated {} {} is not cached locally", E::NAME, id);
        }
        Ok(entity)
    }

    /// Delete on the server, then drop the entity with this id locally
    pub async fn delete<E: Cached>(&self, id: &str) -> Result<(), StoreError> {
        info!("Deleting {}: {}", E::NAME, id);

        self.gateway
            .delete::<E>(id)
            .await
            .map_err(|e| failed::<E>(Operation::Delete, e))?;

        let removed = E::collection_mut(&mut self.state.borrow_mut()).remove(id);
        if removed == 0 {
            warn!("Deleted {} {} was not cached locally", E::NAME, id);
        }
        Ok(())
    }
}

fn failed<E: Entity>(operation: Operation, source: GatewayError) -> StoreError {
    let err = StoreError::new::<E>(operation, source);
    error!("{}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeGateway;
    use chrono::{TimeZone, Utc};
    use shared::{
        ClientDraft, ClientStatus, InvoiceDraft, InvoiceItem, ProjectDraft, TaskDraft,
    };

    fn acme() -> ClientDraft {
        ClientDraft {
            name: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            company: "Acme Co".to_string(),
            phone: "555".to_string(),
            status: ClientStatus::Lead,
        }
    }

    fn client(id: &str, name: &str) -> Client {
        Client::from_draft(
            id.to_string(),
            ClientDraft {
                name: name.to_string(),
                ..acme()
            },
        )
    }

    fn project(id: &str, client_id: &str, status: ProjectStatus) -> Project {
        Project::from_draft(
            id.to_string(),
            ProjectDraft {
                name: format!("Project {}", id),
                client_id: client_id.to_string(),
                status,
                ..ProjectDraft::default()
            },
        )
    }

    fn task(id: &str, status: TaskStatus, day: u32) -> Task {
        Task::from_draft(
            id.to_string(),
            TaskDraft {
                title: format!("Task {}", id),
                status,
                due_date: Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap(),
                ..TaskDraft::default()
            },
        )
    }

    fn outage() -> GatewayError {
        GatewayError::Network("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_fetch_loads_collection_and_sets_flag() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A"), client("c2", "B")]);
        let store = Store::new(gateway);

        assert!(!store.is_fetched::<Client>());
        assert!(store.fetch::<Client>().await.unwrap());

        assert!(store.is_fetched::<Client>());
        assert_eq!(store.count::<Client>(), 2);
        assert_eq!(store.items::<Client>()[1].name, "B");
    }

    #[tokio::test]
    async fn test_fetch_when_already_fetched_skips_gateway() {
        let store = Store::new(FakeGateway::new());
        store.fetch::<Client>().await.unwrap();
        assert_eq!(store.gateway().calls(Operation::List, "clients"), 1);

        assert!(!store.fetch::<Client>().await.unwrap());
        assert_eq!(store.gateway().calls(Operation::List, "clients"), 1);
    }

    #[tokio::test]
    async fn test_fetching_clients_keeps_other_flags() {
        let store = Store::new(FakeGateway::new());
        store.fetch::<Project>().await.unwrap();
        store.fetch::<Task>().await.unwrap();
        store.fetch::<Invoice>().await.unwrap();

        store.fetch::<Client>().await.unwrap();

        assert!(store.is_fetched::<Project>());
        assert!(store.is_fetched::<Task>());
        assert!(store.is_fetched::<Invoice>());
        assert_eq!(store.gateway().total_calls(), 4);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_state_and_retries() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        gateway.fail_with(outage());
        let store = Store::new(gateway);

        let err = store.fetch::<Client>().await.unwrap_err();
        assert_eq!(err.operation, Operation::List);
        assert_eq!(err.source, outage());
        assert!(!store.is_fetched::<Client>());
        assert_eq!(store.count::<Client>(), 0);

        store.gateway().recover();
        assert!(store.fetch::<Client>().await.unwrap());
        assert_eq!(store.count::<Client>(), 1);
        assert_eq!(store.gateway().calls(Operation::List, "clients"), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_next_fetch() {
        let store = Store::new(FakeGateway::new());
        store.fetch::<Task>().await.unwrap();

        store.invalidate::<Task>();
        assert!(!store.is_fetched::<Task>());
        assert!(store.fetch::<Task>().await.unwrap());
        assert_eq!(store.gateway().calls(Operation::List, "tasks"), 2);
    }

    #[tokio::test]
    async fn test_reload_replaces_whole_collection() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();

        store.gateway().seed(&[client("c2", "B"), client("c3", "C")]);
        store.reload::<Client>().await.unwrap();

        let ids: Vec<_> = store.items::<Client>().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c2", "c3"]);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_items_and_flag() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();

        store.gateway().fail_with(outage());
        let err = store.reload::<Client>().await.unwrap_err();

        assert_eq!(err.operation, Operation::List);
        assert!(store.is_fetched::<Client>());
        assert_eq!(store.count::<Client>(), 1);
        assert_eq!(store.find::<Client>("c1").unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_create_appends_server_entity() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "Existing")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();
        let before = store.count::<Client>();

        let created = store.create::<Client>(acme()).await.unwrap();

        assert_eq!(store.count::<Client>(), before + 1);
        let last = store.items::<Client>().pop().unwrap();
        assert_eq!(last, created);
        assert_eq!(last.status, ClientStatus::Lead);
        assert!(!last.id.is_empty());
        assert_eq!(store.gateway().server_items::<Client>().last().unwrap().id, last.id);
    }

    #[tokio::test]
    async fn test_failed_create_leaves_collection() {
        let store = Store::new(FakeGateway::new());
        store.fetch::<Client>().await.unwrap();
        store.gateway().fail_with(GatewayError::Status {
            status: 422,
            body: "email required".to_string(),
        });

        let err = store.create::<Client>(acme()).await.unwrap_err();

        assert_eq!(err.operation, Operation::Create);
        assert_eq!(err.subject, "client");
        assert_eq!(store.count::<Client>(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A"), client("c2", "B")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();

        let payload = ClientDraft {
            name: "Bee Ltd".to_string(),
            status: ClientStatus::Active,
            ..acme()
        };
        let updated = store.update::<Client>("c2", payload.clone()).await.unwrap();

        assert_eq!(updated.id, "c2");
        assert_eq!(store.find::<Client>("c2").unwrap(), Client::from_draft("c2".to_string(), payload));
        assert_eq!(store.find::<Client>("c1").unwrap().name, "A");
        assert_eq!(store.count::<Client>(), 2);
    }

    #[tokio::test]
    async fn test_update_reconciles_invoice_from_request_payload() {
        let gateway = FakeGateway::new();
        let original = Invoice::from_draft("i1".to_string(), InvoiceDraft::default());
        gateway.seed(&[original]);
        let store = Store::new(gateway);
        store.fetch::<Invoice>().await.unwrap();

        let draft = InvoiceDraft {
            items: vec![InvoiceItem::new("Design", 2.0, 50.0)],
            ..InvoiceDraft::default()
        }
        .finalize();
        store.update::<Invoice>("i1", draft).await.unwrap();

        let cached = store.find::<Invoice>("i1").unwrap();
        assert_eq!(cached.amount, 100.0);
        assert_eq!(cached.items.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_entity() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();
        store.gateway().fail_with(outage());

        assert!(store.update::<Client>("c1", acme()).await.is_err());
        assert_eq!(store.find::<Client>("c1").unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_update_of_uncached_id_keeps_collection() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        let store = Store::new(gateway);

        let updated = store.update::<Client>("c1", acme()).await.unwrap();

        assert_eq!(updated.name, "Acme");
        assert_eq!(store.count::<Client>(), 0);
        assert!(!store.is_fetched::<Client>());
        assert_eq!(store.gateway().server_items::<Client>()[0].name, "Acme");
    }

    #[tokio::test]
    async fn test_clearing_task_link_reaches_server() {
        let gateway = FakeGateway::new();
        let linked = Task::from_draft(
            "t1".to_string(),
            TaskDraft {
                project_id: Some("p1".to_string()),
                client_id: Some("c1".to_string()),
                ..TaskDraft::default()
            },
        );
        gateway.seed(&[linked.clone()]);
        let store = Store::new(gateway);
        store.fetch::<Task>().await.unwrap();

        let mut draft = linked.to_draft();
        draft.project_id = None;
        store.update::<Task>("t1", draft).await.unwrap();
        assert_eq!(store.find::<Task>("t1").unwrap().project_id, None);

        store.reload::<Task>().await.unwrap();
        let reloaded = store.find::<Task>("t1").unwrap();
        assert_eq!(reloaded.project_id, None);
        assert_eq!(reloaded.client_id.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn test_delete_removes_only_matching_id() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A"), client("c2", "B"), client("c3", "C")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();

        store.delete::<Client>("c2").await.unwrap();

        let ids: Vec<_> = store.items::<Client>().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
        assert_eq!(store.gateway().server_items::<Client>().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_entity() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();

        let err = store.delete::<Client>("missing").await.unwrap_err();
        assert!(err.source.is_not_found());
        assert_eq!(store.count::<Client>(), 1);
    }

    #[tokio::test]
    async fn test_deleted_client_renders_placeholder_name() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "Acme")]);
        gateway.seed(&[project("p1", "c1", ProjectStatus::Pending)]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();
        store.fetch::<Project>().await.unwrap();
        assert_eq!(store.client_name("c1"), "Acme");

        store.delete::<Client>("c1").await.unwrap();

        let project = store.find::<Project>("p1").unwrap();
        assert_eq!(store.client_name(&project.client_id), UNKNOWN_CLIENT);
        assert_eq!(store.project_name("gone"), UNKNOWN_PROJECT);
    }

    #[tokio::test]
    async fn test_fetch_one_upserts() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A")]);
        let store = Store::new(gateway);

        let fetched = store.fetch_one::<Client>("c1").await.unwrap();
        assert_eq!(fetched.name, "A");
        assert_eq!(store.count::<Client>(), 1);
        // A single lookup does not count as loading the collection
        assert!(!store.is_fetched::<Client>());

        let err = store.fetch_one::<Client>("nope").await.unwrap_err();
        assert_eq!(err.operation, Operation::Get);
    }

    #[tokio::test]
    async fn test_summary_and_upcoming_tasks() {
        let gateway = FakeGateway::new();
        gateway.seed(&[client("c1", "A"), client("c2", "B")]);
        gateway.seed(&[
            project("p1", "c1", ProjectStatus::InProgress),
            project("p2", "c1", ProjectStatus::Completed),
        ]);
        gateway.seed(&[
            task("t1", TaskStatus::Todo, 20),
            task("t2", TaskStatus::Completed, 1),
            task("t3", TaskStatus::InProgress, 5),
        ]);
        let paid = Invoice::from_draft(
            "i1".to_string(),
            InvoiceDraft {
                status: InvoiceStatus::Paid,
                ..InvoiceDraft::default()
            },
        );
        let sent = Invoice::from_draft(
            "i2".to_string(),
            InvoiceDraft {
                status: InvoiceStatus::Sent,
                ..InvoiceDraft::default()
            },
        );
        gateway.seed(&[paid, sent]);
        let store = Store::new(gateway);
        store.fetch::<Client>().await.unwrap();
        store.fetch::<Project>().await.unwrap();
        store.fetch::<Task>().await.unwrap();
        store.fetch::<Invoice>().await.unwrap();

        assert_eq!(
            store.summary(),
            Summary {
                total_clients: 2,
                active_projects: 1,
                pending_tasks: 2,
                unpaid_invoices: 1,
            }
        );

        let upcoming: Vec<_> = store.upcoming_tasks(5).into_iter().map(|t| t.id).collect();
        assert_eq!(upcoming, vec!["t3", "t1"]);
        assert_eq!(store.upcoming_tasks(1).len(), 1);
    }
}
