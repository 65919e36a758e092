//! In-memory stand-in for the remote API.
//!
//! Records are kept as JSON per resource, so one fake serves every entity the
//! same way the real server does: drafts go in, `_id` is assigned on create.

use async_trait::async_trait;
use serde_json::Value;
use shared::Entity;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{GatewayError, Operation};
use crate::gateway::Gateway;

#[derive(Default)]
pub struct FakeGateway {
    records: RefCell<HashMap<&'static str, Vec<Value>>>,
    calls: RefCell<Vec<(Operation, &'static str)>>,
    failure: RefCell<Option<GatewayError>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the server-side records of one resource
    pub fn seed<E: Entity>(&self, items: &[E]) {
        let values = items
            .iter()
            .map(|item| serde_json::to_value(item).expect("Failed to serialize seed"))
            .collect();
        self.records.borrow_mut().insert(E::RESOURCE, values);
    }

    /// Make every following call fail with `error`
    pub fn fail_with(&self, error: GatewayError) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    pub fn calls(&self, operation: Operation, resource: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(op, res)| *op == operation && *res == resource)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn server_items<E: Entity>(&self) -> Vec<E> {
        self.records
            .borrow()
            .get(E::RESOURCE)
            .map(|values| {
                values
                    .iter()
                    .map(|value| serde_json::from_value(value.clone()).expect("Failed to decode record"))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn begin<E: Entity>(&self, operation: Operation) -> Result<(), GatewayError> {
        self.calls.borrow_mut().push((operation, E::RESOURCE));
        match self.failure.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn position<E: Entity>(&self, id: &str) -> Result<usize, GatewayError> {
        self.records
            .borrow()
            .get(E::RESOURCE)
            .and_then(|values| values.iter().position(|value| value["_id"] == id))
            .ok_or_else(|| not_found::<E>(id))
    }
}

fn not_found<E: Entity>(id: &str) -> GatewayError {
    GatewayError::Status {
        status: 404,
        body: format!("{} {} not found", E::NAME, id),
    }
}

fn decode<E: Entity>(value: Value) -> Result<E, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn with_id(draft: Value, id: &str) -> Result<Value, GatewayError> {
    match draft {
        Value::Object(mut fields) => {
            fields.insert("_id".to_string(), Value::String(id.to_string()));
            Ok(Value::Object(fields))
        }
        other => Err(GatewayError::Encode(format!("expected an object, got {}", other))),
    }
}

#[async_trait(?Send)]
impl Gateway for FakeGateway {
    async fn list<E: Entity>(&self) -> Result<Vec<E>, GatewayError> {
        self.begin::<E>(Operation::List)?;
        let values = self
            .records
            .borrow()
            .get(E::RESOURCE)
            .cloned()
            .unwrap_or_default();
        values.into_iter().map(decode::<E>).collect()
    }

    async fn get<E: Entity>(&self, id: &str) -> Result<E, GatewayError> {
        self.begin::<E>(Operation::Get)?;
        let index = self.position::<E>(id)?;
        let value = self.records.borrow()[E::RESOURCE][index].clone();
        decode(value)
    }

    async fn create<E: Entity>(&self, draft: &E::Draft) -> Result<E, GatewayError> {
        self.begin::<E>(Operation::Create)?;
        let draft = serde_json::to_value(draft).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let id = uuid::Uuid::new_v4().simple().to_string();
        let record = with_id(draft, &id)?;

        self.records
            .borrow_mut()
            .entry(E::RESOURCE)
            .or_default()
            .push(record.clone());
        decode(record)
    }

    async fn update<E: Entity>(&self, id: &str, draft: &E::Draft) -> Result<Value, GatewayError> {
        self.begin::<E>(Operation::Update)?;
        let index = self.position::<E>(id)?;
        let draft = serde_json::to_value(draft).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let fields = match draft {
            Value::Object(fields) => fields,
            other => return Err(GatewayError::Encode(format!("expected an object, got {}", other))),
        };

        // merge like a document store: keys missing from the body are kept
        let mut records = self.records.borrow_mut();
        let record = records
            .get_mut(E::RESOURCE)
            .and_then(|values| values.get_mut(index))
            .ok_or_else(|| not_found::<E>(id))?;
        if let Value::Object(existing) = record {
            existing.extend(fields);
        }
        Ok(record.clone())
    }

    async fn delete<E: Entity>(&self, id: &str) -> Result<Value, GatewayError> {
        self.begin::<E>(Operation::Delete)?;
        let index = self.position::<E>(id)?;
        let removed = self
            .records
            .borrow_mut()
            .get_mut(E::RESOURCE)
            .map(|values| values.remove(index))
            .unwrap_or(Value::Null);
        Ok(removed)
    }
}
