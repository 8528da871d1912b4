//! In-memory collaborators shared by the controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::Api;
use crate::dialog::Dialog;
use crate::error::{Error, Result};
use crate::upload::{MediaUploader, UploadCallback, UploadOutcome, UploadRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct FakeApi {
    next_id: Cell<usize>,
    categories: RefCell<Vec<Value>>,
    quotes: RefCell<Vec<Value>>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<HashSet<String>>,
    failing_reads: RefCell<HashSet<String>>,
    overrides: RefCell<HashMap<String, Value>>,
    delays: RefCell<HashMap<String, usize>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    pub fn with_category(self, id: &str, name: &str, icon: &str) -> Self {
        self.categories
            .borrow_mut()
            .push(json!({"_id": id, "name": name, "icon": icon}));
        self
    }

    pub fn with_quote(self, id: &str, text: &str, category_id: &str) -> Self {
        let category = self.embedded_category(category_id);
        self.quotes.borrow_mut().push(json!({
            "_id": id,
            "text": text,
            "author": "Anonymous",
            "imageUrl": "",
            "videoUrl": "",
            "audioUrl": "",
            "category": category,
        }));
        self
    }

    /// Every request to `path` fails with a 500.
    pub fn fail(&self, path: &str) {
        self.failing.borrow_mut().insert(path.to_string());
    }

    /// Only `GET path` fails with a 500; writes still go through.
    pub fn fail_reads(&self, path: &str) {
        self.failing_reads.borrow_mut().insert(path.to_string());
    }

    pub fn recover(&self, path: &str) {
        self.failing.borrow_mut().remove(path);
        self.failing_reads.borrow_mut().remove(path);
    }

    /// `GET path` answers with `value` instead of the stored collection.
    pub fn respond_with(&self, path: &str, value: Value) {
        self.overrides.borrow_mut().insert(path.to_string(), value);
    }

    /// Requests to `path` yield to the runtime `polls` times before answering.
    pub fn delay(&self, path: &str, polls: usize) {
        self.delays.borrow_mut().insert(path.to_string(), polls);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.method != "GET")
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn embedded_category(&self, id: &str) -> Value {
        self.categories
            .borrow()
            .iter()
            .find(|c| c["_id"] == id)
            .map(|c| json!({"_id": c["_id"], "name": c["name"]}))
            .unwrap_or(Value::Null)
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{prefix}-new-{id}")
    }

    async fn handle(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        let polls = self.delays.borrow().get(path).copied().unwrap_or(0);
        for _ in 0..polls {
            tokio::task::yield_now().await;
        }

        let read_fails = method == "GET" && self.failing_reads.borrow().contains(path);
        if read_fails || self.failing.borrow().contains(path) {
            return Err(Error::Status {
                status: 500,
                path: path.to_string(),
            });
        }

        if method == "GET" {
            if let Some(value) = self.overrides.borrow().get(path) {
                return Ok(value.clone());
            }
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let not_found = || Error::Status {
            status: 404,
            path: path.to_string(),
        };

        match (method, segments.as_slice()) {
            ("GET", ["categories"]) => Ok(Value::Array(self.categories.borrow().clone())),
            ("POST", ["categories"]) => {
                let mut record = body.cloned().unwrap_or(Value::Null);
                record["_id"] = Value::String(self.next_id("c"));
                self.categories.borrow_mut().push(record.clone());
                Ok(record)
            }
            ("PUT", ["categories", id]) => {
                let mut categories = self.categories.borrow_mut();
                let record = categories
                    .iter_mut()
                    .find(|c| c["_id"] == *id)
                    .ok_or_else(not_found)?;
                let body = body.cloned().unwrap_or(Value::Null);
                record["name"] = body["name"].clone();
                record["icon"] = body["icon"].clone();
                Ok(record.clone())
            }
            ("DELETE", ["categories", id]) => {
                let mut categories = self.categories.borrow_mut();
                let before = categories.len();
                categories.retain(|c| c["_id"] != *id);
                if categories.len() == before {
                    return Err(not_found());
                }
                Ok(Value::Null)
            }
            ("GET", ["quotes"]) => Ok(json!({"quotes": self.quotes.borrow().clone()})),
            ("POST", ["quotes"]) => {
                let mut record = body.cloned().unwrap_or(Value::Null);
                let category_id = record["category"].as_str().unwrap_or_default().to_string();
                record["_id"] = Value::String(self.next_id("q"));
                record["category"] = self.embedded_category(&category_id);
                self.quotes.borrow_mut().push(record.clone());
                Ok(record)
            }
            ("DELETE", ["quotes", id]) => {
                let mut quotes = self.quotes.borrow_mut();
                let before = quotes.len();
                quotes.retain(|q| q["_id"] != *id);
                if quotes.len() == before {
                    return Err(not_found());
                }
                Ok(Value::Null)
            }
            _ => Err(not_found()),
        }
    }
}

#[async_trait(?Send)]
impl Api for FakeApi {
    async fn get(&self, path: &str) -> Result<Value> {
        self.handle("GET", path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.handle("POST", path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.handle("PUT", path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.handle("DELETE", path, None).await
    }
}

/// Answers confirmations with a fixed value and records alerts.
pub struct ScriptedDialog {
    answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedDialog {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            alerts: RefCell::new(vec![]),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&self, _message: &str) -> bool {
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Replays queued outcomes, one per `open`.
#[derive(Default)]
pub struct FakeUploader {
    outcomes: RefCell<VecDeque<UploadOutcome>>,
    requests: RefCell<Vec<UploadRequest>>,
}

impl FakeUploader {
    pub fn push(&self, outcome: UploadOutcome) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<UploadRequest> {
        self.requests.borrow().clone()
    }
}

impl MediaUploader for FakeUploader {
    fn open(&self, request: UploadRequest, mut on_outcome: UploadCallback) {
        self.requests.borrow_mut().push(request);
        if let Some(outcome) = self.outcomes.borrow_mut().pop_front() {
            on_outcome(outcome);
        }
    }
}
