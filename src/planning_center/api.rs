use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::planning_center::transport::{ApiRequest, HttpTransport, Transport};
use crate::planning_center::types::{Contact, FieldDatum, FieldDefinitionId, Fetched, FetchStatus, Page, Record};

/// Build a `where[<field>]=<value>` server-side filter.
pub fn where_filter(field: &str, value: &str) -> (String, String) {
    (format!("where[{field}]"), value.to_string())
}

/// Client for the People and Publishing APIs.
///
/// All calls are made one at a time. Pagination and mutations pause for
/// `config.request_delay` after each request to stay under the rate limit.
#[derive(Clone)]
pub struct PlanningCenterClient<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl PlanningCenterClient<HttpTransport> {
    /// Create a new Planning Center client from config
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, HttpTransport::new(config))
    }
}

impl<T: Transport> PlanningCenterClient<T> {
    /// Create a client that sends through `transport`
    pub fn with_transport(config: &Config, transport: T) -> Self {
        Self {
            config: config.clone(),
            transport,
        }
    }

    /// Configuration this client was built with
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn people_url(&self, path: &str) -> String {
        format!("{}{}", self.config.people_url, path)
    }

    fn publishing_url(&self, path: &str) -> String {
        format!("{}{}", self.config.publishing_url, path)
    }

    async fn pause(&self) {
        if !self.config.request_delay.is_zero() {
            tokio::time::sleep(self.config.request_delay).await;
        }
    }

    /// Send a request, reject non-2xx statuses, and decode the JSON body.
    ///
    /// An empty body (e.g. `204 No Content`) decodes to `Value::Null`.
    async fn request_json(&self, request: ApiRequest) -> Result<Value> {
        let method = request.method;
        let url = request.url.clone();
        let resp = self.transport.send(request).await?;

        if !resp.is_success() {
            return Err(Error::pco_status(
                format!("{} {} returned {}: {}", method, url, resp.status, resp.body.trim()),
                resp.status,
            ));
        }

        if resp.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&resp.body)
            .map_err(|e| Error::parse(format!("Invalid JSON from {url}: {e}"), None))
    }

    async fn request_page(&self, request: ApiRequest) -> Result<Page> {
        let url = request.url.clone();
        let json = self.request_json(request).await?;
        serde_json::from_value(json)
            .map_err(|e| Error::parse(format!("Unexpected collection shape from {url}: {e}"), None))
    }

    /// Send a write and pause afterwards, whether or not it succeeded.
    async fn mutate(&self, request: ApiRequest) -> Result<Value> {
        let result = self.request_json(request).await;
        self.pause().await;
        result
    }

    /// Walk a cursor-linked collection and gather every record.
    ///
    /// The first request carries `filter` plus the page-size cap; later
    /// requests use only the cursor URL. A failed request ends the walk and
    /// the records gathered so far come back marked as truncated.
    pub async fn fetch_all(&self, url: &str, filter: Vec<(String, String)>) -> Fetched<Record> {
        let mut query = filter;
        query.push(("per_page".to_string(), self.config.per_page.to_string()));

        let mut request = ApiRequest::get(url).with_query(query);
        let mut records = Vec::new();
        let mut pages = 0;

        loop {
            let page = match self.request_page(request).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Stopped paging {} after {} pages: {}", url, pages, e);
                    return Fetched {
                        records,
                        pages,
                        status: FetchStatus::Truncated { reason: e.to_string() },
                    };
                }
            };

            pages += 1;
            let next = page.next_cursor();
            tracing::debug!("Page {} of {}: {} records", pages, url, page.data.len());
            records.extend(page.data);
            self.pause().await;

            match next {
                Some(cursor) => request = ApiRequest::get(cursor.into_url()),
                None => break,
            }
        }

        Fetched {
            records,
            pages,
            status: FetchStatus::Complete,
        }
    }

    /// Ids of every person.
    pub async fn people_ids(&self) -> Fetched<String> {
        self.fetch_all(&self.people_url("/people"), Vec::new())
            .await
            .filter_map(|record| Some(record.id))
    }

    /// Resolve a field definition id by its exact name.
    ///
    /// Fails when the request fails or no definition has that name.
    pub async fn field_definition_id(&self, name: &str) -> Result<FieldDefinitionId> {
        let request = ApiRequest::get(self.people_url("/field_definitions"))
            .with_query(vec![where_filter("name", name)]);
        let page = self.request_page(request).await?;

        page.data
            .into_iter()
            .next()
            .map(|record| FieldDefinitionId(record.id))
            .ok_or_else(|| Error::NotFound(format!("Field definition '{name}' not found")))
    }

    /// Every stored value of one field definition.
    pub async fn field_data(&self, definition: &FieldDefinitionId) -> Fetched<FieldDatum> {
        let filter = vec![where_filter("field_definition_id", &definition.0)];
        self.fetch_all(&self.people_url("/field_data"), filter)
            .await
            .filter_map(|record| {
                let datum = FieldDatum::from_record(&record);
                if datum.is_none() {
                    tracing::warn!("Field datum {} has no owning person, skipping", record.id);
                }
                datum
            })
    }

    /// First attribute `key` of the first record under `/people/{id}/{path}`.
    async fn first_person_attribute(&self, person_id: &str, path: &str, key: &str) -> Option<String> {
        let request = ApiRequest::get(self.people_url(&format!("/people/{person_id}/{path}")));
        match self.request_page(request).await {
            Ok(page) => page.data.first()?.attribute_str(key).map(str::to_string),
            Err(e) => {
                tracing::warn!("Looking up {} for person {} failed: {}", path, person_id, e);
                None
            }
        }
    }

    /// Find a person by name and collect their first email and phone.
    ///
    /// Only the first search match is used. `None` when nothing matches or the
    /// search fails; a missing email or phone leaves that part `None`.
    pub async fn find_contact(&self, name: &str) -> Option<Contact> {
        let request = ApiRequest::get(self.people_url("/people"))
            .with_query(vec![where_filter("search_name", name)]);
        let page = match self.request_page(request).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Searching for {:?} failed: {}", name, e);
                return None;
            }
        };

        let person_id = page.data.into_iter().next()?.id;
        let email = self.first_person_attribute(&person_id, "emails", "address").await;
        let phone = self.first_person_attribute(&person_id, "phone_numbers", "number").await;

        Some(Contact { person_id, email, phone })
    }

    /// Store `value` for `person_id` under `definition`.
    pub async fn create_field_data(
        &self,
        person_id: &str,
        definition: &FieldDefinitionId,
        value: &str,
    ) -> Result<()> {
        let body = field_datum_body(definition, value);
        let url = self.people_url(&format!("/people/{person_id}/field_data"));
        self.mutate(ApiRequest::post(url, body)).await.map(drop)
    }

    /// Overwrite an existing field datum.
    pub async fn update_field_data(
        &self,
        field_datum_id: &str,
        definition: &FieldDefinitionId,
        value: &str,
    ) -> Result<()> {
        let body = field_datum_body(definition, value);
        let url = self.people_url(&format!("/field_data/{field_datum_id}"));
        self.mutate(ApiRequest::patch(url, body)).await.map(drop)
    }

    /// Remove a field datum.
    pub async fn delete_field_data(&self, field_datum_id: &str) -> Result<()> {
        let url = self.people_url(&format!("/field_data/{field_datum_id}"));
        self.mutate(ApiRequest::delete(url)).await.map(drop)
    }

    /// Remove a person record.
    pub async fn delete_person(&self, person_id: &str) -> Result<()> {
        let url = self.people_url(&format!("/people/{person_id}"));
        self.mutate(ApiRequest::delete(url)).await.map(drop)
    }

    /// Set a person's birthday to null.
    pub async fn clear_birthday(&self, person_id: &str) -> Result<()> {
        let body = json!({
            "data": {
                "type": "Person",
                "attributes": { "birthday": null }
            }
        });
        let url = self.people_url(&format!("/people/{person_id}"));
        self.mutate(ApiRequest::patch(url, body)).await.map(drop)
    }

    /// Id of the first publishing channel, ordered by name.
    pub async fn first_channel_id(&self) -> Result<String> {
        let request = ApiRequest::get(self.publishing_url("/channels"))
            .with_query(vec![("order".to_string(), "name".to_string())]);
        let page = self.request_page(request).await?;

        page.data
            .into_iter()
            .next()
            .map(|record| record.id)
            .ok_or_else(|| Error::NotFound("No publishing channels".to_string()))
    }

    /// Create an episode on `channel_id` and return the created resource.
    pub async fn create_episode(&self, channel_id: &str, title: &str) -> Result<Value> {
        let body = json!({
            "data": {
                "attributes": { "title": title }
            }
        });
        let url = self.publishing_url(&format!("/channels/{channel_id}/episodes"));
        self.mutate(ApiRequest::post(url, body)).await
    }
}

fn field_datum_body(definition: &FieldDefinitionId, value: &str) -> Value {
    json!({
        "data": {
            "attributes": {
                "field_definition_id": definition.0,
                "value": value
            }
        }
    })
}
