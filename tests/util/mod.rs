//! Helpers for driving the full router with session cookies.

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, Response,
    },
    Router,
};
use placement_portal::server::{model::app::AppState, router};
use placement_test_utils::TestContext;
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

/// Boundary used by [`multipart_body`].
pub static BOUNDARY: &str = "placement-test-boundary";

/// Builds the application router backed by the test database, upload directory and the
/// context's memory session store.
pub fn test_router(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();
    let session = SessionManagerLayer::new((*test.store).clone()).with_secure(false);

    router::routes().with_state(state).layer(session)
}

/// Sends a single request through a fresh clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    match app.clone().oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    }
}

/// `name=value` pair of the session cookie set by a response, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Location header of a redirect response.
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn post_multipart(uri: &str, body: Vec<u8>, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(
        CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    );
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body)).unwrap()
}

/// Encodes text fields and an optional `(field, file name, bytes)` file part as
/// `multipart/form-data` using [`BOUNDARY`].
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    if let Some((name, file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Logs in through `POST /login` and returns the session cookie.
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let body = format!("email={}&password={}", email.replace('@', "%40"), password);
    let response = send(app, post_form("/login", &body, None)).await;

    session_cookie(&response).expect("login should set a session cookie")
}

pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
