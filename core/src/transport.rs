//! Async transport over the stateless builder/parser.
//!
//! `TodoApi` is the seam the synchronizer drives: production code uses
//! `HttpTodoApi`, which executes the requests built by `TodoClient` over
//! reqwest, while tests substitute scripted implementations.

use async_trait::async_trait;
use tracing::debug;

use crate::client::TodoClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// The four operations the todo service exposes.
#[async_trait]
pub trait TodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError>;
    async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError>;
    async fn update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<Todo, ApiError>;
    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError>;
}

/// `TodoApi` implementation that performs real HTTP round-trips.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: TodoClient,
    http: reqwest::Client,
}

impl HttpTodoApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client: TodoClient::new(&config.base_url),
            http,
        })
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = ?request.method, path = %request.path, "dispatching request");
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
            HttpMethod::Put => self.http.put(&request.path),
            HttpMethod::Delete => self.http.delete(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let request = self.client.build_list_todos();
        let response = self.execute(request).await?;
        self.client.parse_list_todos(response)
    }

    async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(input)?;
        let response = self.execute(request).await?;
        self.client.parse_create_todo(response)
    }

    async fn update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<Todo, ApiError> {
        let request = self.client.build_update_todo(id, input)?;
        let response = self.execute(request).await?;
        self.client.parse_update_todo(response)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self.execute(request).await?;
        self.client.parse_delete_todo(response)
    }
}
