use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod invoice_document;

/// A record owned by the remote API.
///
/// Every entity has a "draft" twin without the identifier. Drafts are what the
/// client sends on create and update; the server assigns the `_id`.
pub trait Entity: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + 'static {
    /// The entity without its identifier
    type Draft: Clone + PartialEq + fmt::Debug + Default + Serialize + DeserializeOwned + 'static;

    /// Path segment under `/api`, e.g. "clients"
    const RESOURCE: &'static str;

    /// Singular human-readable name, e.g. "client"
    const NAME: &'static str;

    fn id(&self) -> &str;

    /// Rebuild an entity from a known identifier and a draft payload
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;
}

/// Error returned when a status string does not name a known variant
#[derive(Debug, Clone, PartialEq)]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseStatusError {}

/// Declares a string-backed enum whose wire form is lowercase kebab-case.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value used on the wire and in form selects
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Capitalized label for display
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ParseStatusError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Sales stage of a client
    ClientStatus, "client status", default = Lead {
        Lead => ("lead", "Lead"),
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
    }
}

string_enum! {
    ProjectStatus, "project status", default = Pending {
        Pending => ("pending", "Pending"),
        InProgress => ("in-progress", "In Progress"),
        Completed => ("completed", "Completed"),
    }
}

string_enum! {
    TaskPriority, "task priority", default = Medium {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

string_enum! {
    TaskStatus, "task status", default = Todo {
        Todo => ("todo", "To Do"),
        InProgress => ("in-progress", "In Progress"),
        Completed => ("completed", "Completed"),
    }
}

string_enum! {
    /// Billing state of an invoice
    InvoiceStatus, "invoice status", default = Draft {
        Draft => ("draft", "Draft"),
        Sent => ("sent", "Sent"),
        Paid => ("paid", "Paid"),
        Overdue => ("overdue", "Overdue"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub status: ClientStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub status: ClientStatus,
}

impl Entity for Client {
    type Draft = ClientDraft;
    const RESOURCE: &'static str = "clients";
    const NAME: &'static str = "client";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            company: draft.company,
            phone: draft.phone,
            status: draft.status,
        }
    }

    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            phone: self.phone.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Owning client; only the server checks that it exists
    pub client_id: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub client_id: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: DateTime<Utc>,
    // None is sent as null, never omitted
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub budget: f64,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            client_id: String::new(),
            description: String::new(),
            status: ProjectStatus::default(),
            start_date: today(),
            end_date: None,
            budget: 0.0,
        }
    }
}

impl Entity for Project {
    type Draft = ProjectDraft;
    const RESOURCE: &'static str = "projects";
    const NAME: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            client_id: draft.client_id,
            description: draft.description,
            status: draft.status,
            start_date: draft.start_date,
            end_date: draft.end_date,
            budget: draft.budget,
        }
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            client_id: self.client_id.clone(),
            description: self.description.clone(),
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            project_id: None,
            client_id: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            due_date: today(),
        }
    }
}

impl Entity for Task {
    type Draft = TaskDraft;
    const RESOURCE: &'static str = "tasks";
    const NAME: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            project_id: draft.project_id,
            client_id: draft.client_id,
            priority: draft.priority,
            status: draft.status,
            due_date: draft.due_date,
        }
    }

    fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            project_id: self.project_id.clone(),
            client_id: self.client_id.clone(),
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

/// One billed line of an invoice. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    /// Always quantity × rate after any edit made through the setters
    pub amount: f64,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            amount: quantity * rate,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.rate
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.amount = self.line_total();
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
        self.amount = self.line_total();
    }
}

impl Default for InvoiceItem {
    fn default() -> Self {
        Self::new("", 1.0, 0.0)
    }
}

/// Sum of the stored line amounts
pub fn items_total(items: &[InvoiceItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub client_id: String,
    pub project_id: String,
    /// Stored total. Not re-validated against the items on load.
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: DateTime<Utc>,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Short display number: the first 8 characters of the identifier
    pub fn number(&self) -> String {
        self.id.chars().take(8).collect()
    }

    pub fn items_total(&self) -> f64 {
        items_total(&self.items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub client_id: String,
    pub project_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: DateTime<Utc>,
    pub items: Vec<InvoiceItem>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            project_id: String::new(),
            amount: 0.0,
            status: InvoiceStatus::default(),
            due_date: today(),
            items: vec![InvoiceItem::default()],
        }
    }
}

impl InvoiceDraft {
    pub fn total(&self) -> f64 {
        items_total(&self.items)
    }

    pub fn add_item(&mut self) {
        self.items.push(InvoiceItem::default());
        self.sync_amount();
    }

    /// Remove a line. The last remaining line cannot be removed.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        self.sync_amount();
        true
    }

    pub fn set_item_description(&mut self, index: usize, description: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_description(description);
        }
    }

    pub fn set_item_quantity(&mut self, index: usize, quantity: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_quantity(quantity);
        }
        self.sync_amount();
    }

    pub fn set_item_rate(&mut self, index: usize, rate: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_rate(rate);
        }
        self.sync_amount();
    }

    /// Recompute every line amount and the invoice total before submission
    pub fn finalize(mut self) -> Self {
        for item in &mut self.items {
            item.amount = item.line_total();
        }
        self.sync_amount();
        self
    }

    fn sync_amount(&mut self) {
        self.amount = self.total();
    }
}

impl Entity for Invoice {
    type Draft = InvoiceDraft;
    const RESOURCE: &'static str = "invoices";
    const NAME: &'static str = "invoice";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: InvoiceDraft) -> Self {
        Self {
            id,
            client_id: draft.client_id,
            project_id: draft.project_id,
            amount: draft.amount,
            status: draft.status,
            due_date: draft.due_date,
            items: draft.items,
        }
    }

    fn to_draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            client_id: self.client_id.clone(),
            project_id: self.project_id.clone(),
            amount: self.amount,
            status: self.status,
            due_date: self.due_date,
            items: self.items.clone(),
        }
    }
}

/// Midnight UTC of the current day
pub fn today() -> DateTime<Utc> {
    let date = Utc::now().date_naive();
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}

/// Parse the `YYYY-MM-DD` value of a date input into midnight UTC
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

/// Format a date as the `YYYY-MM-DD` value of a date input
pub fn to_date_input(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date as e.g. "Mar 5, 2025"
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an amount as dollars with thousands separators, e.g. "$1,234.50"
pub fn format_money(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(ProjectStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!("overdue".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Overdue);

        let err = "archived".parse::<ClientStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid client status: 'archived'");
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(ClientStatus::default(), ClientStatus::Lead);
        assert_eq!(ProjectStatus::default(), ProjectStatus::Pending);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Draft);
    }

    #[test]
    fn test_project_deserializes_server_payload() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "name": "Website",
            "clientId": "c1",
            "description": "Landing page",
            "status": "in-progress",
            "startDate": "2024-03-01T00:00:00.000Z",
            "endDate": null,
            "budget": 1500,
            "__v": 0
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "65f1c0ffee");
        assert_eq!(project.client_id, "c1");
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.start_date, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(project.end_date, None);
        assert_eq!(project.budget, 1500.0);
    }

    #[test]
    fn test_draft_serializes_without_identifier() {
        let draft = TaskDraft {
            title: "Write copy".to_string(),
            ..TaskDraft::default()
        };
        let value = serde_json::to_value(&draft).unwrap();

        assert!(value.get("_id").is_none());
        assert!(value["projectId"].is_null());
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["status"], "todo");
        assert!(value.get("dueDate").is_some());
    }

    #[test]
    fn test_cleared_links_are_sent_as_null() {
        let task = Task::from_draft(
            "t1".to_string(),
            TaskDraft {
                project_id: Some("p1".to_string()),
                client_id: Some("c1".to_string()),
                ..TaskDraft::default()
            },
        );
        let mut draft = task.to_draft();
        draft.project_id = None;
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.as_object().unwrap().contains_key("projectId"));
        assert!(value["projectId"].is_null());
        assert_eq!(value["clientId"], "c1");

        let project = ProjectDraft {
            end_date: None,
            ..ProjectDraft::default()
        };
        let value = serde_json::to_value(&project).unwrap();
        assert!(value.as_object().unwrap().contains_key("endDate"));
        assert!(value["endDate"].is_null());
    }

    #[test]
    fn test_from_draft_preserves_identifier() {
        let draft = ClientDraft {
            name: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            company: "Acme Co".to_string(),
            phone: "555".to_string(),
            status: ClientStatus::Active,
        };
        let client = Client::from_draft("abc".to_string(), draft.clone());

        assert_eq!(client.id(), "abc");
        assert_eq!(client.to_draft(), draft);
    }

    #[test]
    fn test_item_amount_follows_quantity_and_rate() {
        let mut item = InvoiceItem::new("Design", 2.0, 50.0);
        assert_eq!(item.amount, 100.0);

        item.set_quantity(3.0);
        assert_eq!(item.amount, 150.0);

        item.set_rate(10.0);
        assert_eq!(item.amount, 30.0);
    }

    #[test]
    fn test_invoice_draft_total_tracks_edits() {
        let mut draft = InvoiceDraft::default();
        draft.set_item_quantity(0, 2.0);
        draft.set_item_rate(0, 50.0);
        assert_eq!(draft.total(), 100.0);
        assert_eq!(draft.amount, 100.0);

        draft.add_item();
        draft.set_item_quantity(1, 1.0);
        draft.set_item_rate(1, 25.0);
        assert_eq!(draft.total(), 125.0);
        assert_eq!(draft.amount, 125.0);

        assert!(draft.remove_item(0));
        assert_eq!(draft.amount, 25.0);
    }

    #[test]
    fn test_invoice_draft_keeps_last_item() {
        let mut draft = InvoiceDraft::default();
        assert!(!draft.remove_item(0));
        assert_eq!(draft.items.len(), 1);
        assert!(!draft.remove_item(5));
    }

    #[test]
    fn test_finalize_repairs_stale_amounts() {
        let mut item = InvoiceItem::new("Hosting", 4.0, 12.5);
        item.amount = 0.0;
        let draft = InvoiceDraft {
            items: vec![item],
            amount: 999.0,
            ..InvoiceDraft::default()
        }
        .finalize();

        assert_eq!(draft.items[0].amount, 50.0);
        assert_eq!(draft.amount, 50.0);
    }

    #[test]
    fn test_invoice_number() {
        let invoice = Invoice::from_draft("0123456789abcdef".to_string(), InvoiceDraft::default());
        assert_eq!(invoice.number(), "01234567");

        let short = Invoice::from_draft("abc".to_string(), InvoiceDraft::default());
        assert_eq!(short.number(), "abc");
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = parse_date_input("2025-03-05").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap());
        assert_eq!(to_date_input(&date), "2025-03-05");
        assert_eq!(format_display_date(&date), "Mar 5, 2025");
        assert!(parse_date_input("05/03/2025").is_none());
        assert!(parse_date_input("").is_none());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(125.0), "$125.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_money(-42.1), "-$42.10");
    }
}
