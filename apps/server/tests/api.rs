use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use roster_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

// sha256("admin@email.com") / sha256("guest@email.com")
const ADMIN_AUTH: &str = "e502f4c7c766c54391f08a91d6776cc42d51279f239a97e736c29fecc8c959ed";
const GUEST_AUTH: &str = "14907954a147647744d042f874fef7504403f7b974344cbcb5e0a1da9cac783e";

fn app() -> axum::Router {
    Server::builder().build().expect("server should build").into_router()
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn full_stack_admin_flow() {
    let app = app();

    // The bootstrap admin may create a guest.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header(header::AUTHORIZATION, ADMIN_AUTH)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "email": "guest@email.com", "role": "guest" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // That guest cannot mutate the directory.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/guest@email.com")
                .header(header::AUTHORIZATION, GUEST_AUTH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // But anyone can read it.
    let response = app
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let users: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn scalar_docs_are_served() {
    let response = app()
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
