use axum::http::{self, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use mock_server::{app, Todo};
use tower::{Service, ServiceExt};

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn raw_body(response: Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

/// Drive one request through a reusable service instance.
async fn send<S>(app: &mut S, req: Request<String>) -> Response
where
    S: Service<Request<String>, Response = Response>,
    S::Error: std::fmt::Debug,
{
    app.ready().await.unwrap().call(req).await.unwrap()
}

// --- health ---

#[tokio::test]
async fn health_reports_healthy() {
    let resp = app().oneshot(request("GET", "/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["status"], "healthy");
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = json_body(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_id_1() {
    let resp = app()
        .oneshot(json_request("POST", "/todos/add", r#"{"text":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = json_body(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.text, "Buy milk");
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos/add", r#"{"not_text":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_todo_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/todos/999", r#"{"text":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_todo_bad_id_returns_400() {
    let resp = app()
        .oneshot(json_request("PUT", "/todos/not-a-number", r#"{"text":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(request("DELETE", "/todos/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let mut app = app().into_service();

    // create
    let resp = send(
        &mut app,
        json_request("POST", "/todos/add", r#"{"text":"Walk dog"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = json_body(resp).await;
    assert_eq!(created.id, 1);
    assert_eq!(created.text, "Walk dog");
    let id = created.id;

    // list contains the one todo
    let resp = send(&mut app, request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = json_body(resp).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);

    // update replaces the text, id unchanged
    let resp = send(
        &mut app,
        json_request("PUT", &format!("/todos/{id}"), r#"{"text":"Walk cat"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = json_body(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.text, "Walk cat");

    // delete answers 204 with an empty body
    let resp = send(&mut app, request("DELETE", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(raw_body(resp).await.is_empty());

    // update after delete reports the id unknown
    let resp = send(
        &mut app,
        json_request("PUT", &format!("/todos/{id}"), r#"{"text":"Ghost"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list is empty again
    let resp = send(&mut app, request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = json_body(resp).await;
    assert!(todos.is_empty());

    // a later create does not reuse the deleted id
    let resp = send(
        &mut app,
        json_request("POST", "/todos/add", r#"{"text":"Feed fish"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Todo = json_body(resp).await;
    assert_eq!(second.id, 2);
}
