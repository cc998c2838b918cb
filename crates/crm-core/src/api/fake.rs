//! In-memory `RecordApi` for tests

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::query::QueryParams;
use super::resource::{Listing, RecordApi};
use crate::error::{ApiError, ApiResult};
use crate::listing::total_pages_for;
use crate::models::{Lead, Record};

pub(crate) struct FakeApi<R> {
    rows: RefCell<Vec<Map<String, Value>>>,
    next_id: Cell<i64>,
    failing_ids: RefCell<HashSet<i64>>,
    create_error: RefCell<Option<ApiError>>,
    last_update: RefCell<Option<Value>>,
    pub requests: Cell<usize>,
    pub creates: Cell<usize>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record + Serialize + DeserializeOwned> FakeApi<R> {
    pub fn new(records: Vec<R>) -> Self {
        let rows: Vec<Map<String, Value>> = records
            .iter()
            .filter_map(|r| match serde_json::to_value(r) {
                Ok(Value::Object(map)) => Some(map),
                _ => None,
            })
            .collect();
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            rows: RefCell::new(rows),
            next_id: Cell::new(next_id),
            failing_ids: RefCell::new(HashSet::new()),
            create_error: RefCell::new(None),
            last_update: RefCell::new(None),
            requests: Cell::new(0),
            creates: Cell::new(0),
            _record: PhantomData,
        }
    }

    /// Updates and deletes of `id` fail with a 500
    pub fn fail_on(&self, id: i64) {
        self.failing_ids.borrow_mut().insert(id);
    }

    /// Next create fails with `err`
    pub fn fail_next_create(&self, err: ApiError) {
        *self.create_error.borrow_mut() = Some(err);
    }

    pub fn last_update_body(&self) -> Option<Value> {
        self.last_update.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    fn bump(&self) {
        self.requests.set(self.requests.get() + 1);
    }

    fn check_failing(&self, id: i64) -> ApiResult<()> {
        if self.failing_ids.borrow().contains(&id) {
            return Err(ApiError::Status { status: 500, message: Some(format!("kayıt {} güncellenemedi", id)) });
        }
        Ok(())
    }
}

impl FakeApi<Lead> {
    pub fn with_leads(count: i64) -> Self {
        let leads = (1..=count)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": i,
                    "firstName": format!("Ad{}", i),
                    "lastName": format!("Soyad{}", i),
                    "phone": format!("05320000{:03}", i),
                    "propertyStatus": "aranacak",
                    "isArchived": false
                }))
                .expect("valid lead fixture")
            })
            .collect();
        Self::new(leads)
    }
}

fn not_found() -> ApiError {
    ApiError::Status { status: 404, message: Some("Kayıt bulunamadı".to_string()) }
}

#[async_trait(?Send)]
impl<R: Record + Serialize + DeserializeOwned> RecordApi<R> for FakeApi<R> {
    async fn list(&self, query: &QueryParams) -> ApiResult<Listing<R>> {
        self.bump();
        let archived = query.get("isArchived") == Some("true");
        let rows: Vec<Value> = self
            .rows
            .borrow()
            .iter()
            .filter(|row| row.get("isArchived").and_then(Value::as_bool).unwrap_or(false) == archived)
            .map(|row| Value::Object(row.clone()))
            .collect();
        let total_count = rows.len() as u32;

        let page: Option<u32> = query.get("page").and_then(|p| p.parse().ok());
        let limit: Option<u32> = query.get("limit").and_then(|l| l.parse().ok());
        let (rows, total_pages) = match (page, limit) {
            (Some(page), Some(limit)) if limit > 0 => {
                let start = ((page.max(1) - 1) * limit) as usize;
                let pages = total_pages_for(total_count, limit);
                (rows.into_iter().skip(start).take(limit as usize).collect(), pages)
            }
            _ => (rows, 1),
        };

        let items: Vec<R> = serde_json::from_value(Value::Array(rows))?;
        Ok(Listing { items, total_count, total_pages })
    }

    async fn create(&self, body: &Value) -> ApiResult<()> {
        self.bump();
        self.creates.set(self.creates.get() + 1);
        if let Some(err) = self.create_error.borrow_mut().take() {
            return Err(err);
        }
        let mut row = body.as_object().cloned().unwrap_or_default();
        let id = self.next_id.get();
        row.insert("id".to_string(), json!(id));
        // reject payloads the record type cannot represent
        serde_json::from_value::<R>(Value::Object(row.clone()))?;
        self.next_id.set(id + 1);
        self.rows.borrow_mut().push(row);
        Ok(())
    }

    async fn update(&self, id: i64, body: &Value) -> ApiResult<()> {
        self.bump();
        self.check_failing(id)?;
        *self.last_update.borrow_mut() = Some(body.clone());
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| row.get("id").and_then(Value::as_i64) == Some(id))
            .ok_or_else(not_found)?;
        if let Some(patch) = body.as_object() {
            for (key, value) in patch {
                row.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.bump();
        self.check_failing(id)?;
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|row| row.get("id").and_then(Value::as_i64) != Some(id));
        if rows.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
