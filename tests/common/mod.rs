//! Scripted transport for driving the client without a network.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pco_tools::config::Config;
use pco_tools::error::{Error, Result};
use pco_tools::planning_center::{ApiRequest, ApiResponse, Method, PlanningCenterClient, Transport};
use serde_json::{json, Value};

pub const PEOPLE: &str = "http://pco.test/people/v2";
pub const PUBLISHING: &str = "http://pco.test/publishing/v2";

enum Reply {
    Status(u16, String),
    Unreachable,
}

/// Answers requests from a fixed table and records every request it sees.
///
/// Requests are keyed as `METHOD url[?k=v&...]`; unknown keys get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Reply>,
    log: Mutex<Vec<ApiRequest>>,
}

pub fn key(method: Method, url: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        format!("{method} {url}")
    } else {
        let q: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{method} {url}?{}", q.join("&"))
    }
}

fn request_key(request: &ApiRequest) -> String {
    let query: Vec<(&str, &str)> = request
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    key(request.method, &request.url, &query)
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, method: Method, url: &str, query: &[(&str, &str)], status: u16, body: Value) -> Self {
        let text = if body.is_null() { String::new() } else { body.to_string() };
        self.routes.insert(key(method, url, query), Reply::Status(status, text));
        self
    }

    pub fn get(self, url: &str, query: &[(&str, &str)], body: Value) -> Self {
        self.reply(Method::Get, url, query, 200, body)
    }

    pub fn unreachable(mut self, method: Method, url: &str, query: &[(&str, &str)]) -> Self {
        self.routes.insert(key(method, url, query), Reply::Unreachable);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn requests_with(&self, method: Method) -> Vec<ApiRequest> {
        self.requests().into_iter().filter(|r| r.method == method).collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = request_key(&request);
        self.log.lock().unwrap().push(request);
        match self.routes.get(&key) {
            Some(Reply::Status(status, body)) => Ok(ApiResponse { status: *status, body: body.clone() }),
            Some(Reply::Unreachable) => Err(Error::Network(format!("{key}: connection refused"))),
            None => Ok(ApiResponse { status: 404, body: json!({"errors": [{"title": "Not Found"}]}).to_string() }),
        }
    }
}

/// Config pointing both APIs at the fake host with placeholder credentials and no pacing.
pub fn config() -> Config {
    let mut config = Config::default();
    config.pco_app_id = "app".to_string();
    config.pco_secret = "secret".to_string();
    config.people_url = PEOPLE.to_string();
    config.publishing_url = PUBLISHING.to_string();
    config.request_delay = Duration::ZERO;
    config
}

pub fn client(transport: FakeTransport) -> PlanningCenterClient<FakeTransport> {
    PlanningCenterClient::with_transport(&config(), transport)
}

/// A collection page; `next` becomes `links.next`.
pub fn page(records: Vec<Value>, next: Option<&str>) -> Value {
    json!({ "data": records, "links": { "next": next }, "meta": {} })
}

pub fn person(id: &str) -> Value {
    json!({ "type": "Person", "id": id, "attributes": {} })
}

pub fn field_datum(id: &str, person_id: &str, value: &str) -> Value {
    json!({
        "type": "FieldDatum",
        "id": id,
        "attributes": { "value": value },
        "relationships": { "customizable": { "data": { "type": "Person", "id": person_id } } }
    })
}

pub fn definition(id: &str) -> Value {
    json!({ "type": "FieldDefinition", "id": id, "attributes": {} })
}

pub fn email(address: &str) -> Value {
    json!({ "type": "Email", "id": "e1", "attributes": { "address": address } })
}

pub fn phone(number: &str) -> Value {
    json!({ "type": "PhoneNumber", "id": "p1", "attributes": { "number": number } })
}
