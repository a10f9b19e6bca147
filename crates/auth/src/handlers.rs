//! HTTP handlers for auth routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use covidportal_core::auth::{AuthError as CoreError, LoginRequest, LoginResponse};

use crate::error::AuthError;
use crate::password::verify_password;
use crate::AuthState;

/// Creates the auth router.
///
/// Routes:
/// - `POST /login/` - Exchange username and password for a bearer token
pub fn auth_routes() -> Router<AuthState> {
    Router::new().route("/login/", post(login))
}

async fn login(
    State(state): State<AuthState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AuthError> {
    let Json(request) = body.map_err(|e| AuthError::InvalidRequest(e.body_text()))?;

    tracing::debug!(username = %request.username, "Received login request");

    let user = state
        .users
        .get_user_by_username(&request.username)
        .await?
        .ok_or(CoreError::UnknownUser)?;

    if !verify_password(request.password, user.password_hash).await? {
        return Err(CoreError::WrongPassword.into());
    }

    let jwt_token = state.tokens.issue(&user.username)?;

    tracing::info!(username = %user.username, "Issued token");

    Ok(Json(LoginResponse { jwt_token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::get,
    };
    use covidportal_core::auth::UserCredential;
    use covidportal_core::storage::{Result, UserRepository};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{hash_password, AuthConfig, CurrentUser};

    #[derive(Default)]
    struct TestUsers {
        users: HashMap<String, String>,
    }

    #[async_trait]
    impl UserRepository for TestUsers {
        async fn get_user_by_username(&self, username: &str) -> Result<Option<UserCredential>> {
            Ok(self.users.get(username).map(|hash| UserCredential {
                username: username.to_string(),
                password_hash: hash.clone(),
            }))
        }
    }

    async fn whoami(user: CurrentUser) -> String {
        user.username
    }

    async fn test_app() -> (Router, AuthState) {
        let mut users = TestUsers::default();
        users.users.insert(
            "rahul".to_string(),
            hash_password("rahul123".to_string(), 4).await.unwrap(),
        );

        let config = AuthConfig::new("MY_SECRET_TOKEN", None).unwrap();
        let state = AuthState::new(Arc::new(users), &config);

        let app = auth_routes()
            .route("/whoami/", get(whoami))
            .with_state(state.clone());

        (app, state)
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let (app, state) = test_app().await;

        let response = app
            .oneshot(login_request(
                r#"{"username":"rahul","password":"rahul123"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: LoginResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(!body.jwt_token.is_empty());
        assert_eq!(
            state.tokens.verify(&body.jwt_token).unwrap().username,
            "rahul"
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(login_request(
                r#"{"username":"rahul","password":"wrong"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid password");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(login_request(
                r#"{"username":"ravi","password":"rahul123"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid user");
    }

    #[tokio::test]
    async fn test_login_malformed_body() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(login_request(r#"{"username":"rahul"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_gate_accepts_issued_token() {
        let (app, state) = test_app().await;
        let token = state.tokens.issue("rahul").unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami/")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "rahul");
    }

    #[tokio::test]
    async fn test_gate_rejects_missing_header() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/whoami/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Invalid JWT Token");
    }

    #[tokio::test]
    async fn test_gate_rejects_foreign_token() {
        let (app, _) = test_app().await;
        let foreign = crate::TokenSigner::new(&AuthConfig::new("OTHER_SECRET", None).unwrap())
            .issue("rahul")
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami/")
                    .header(header::AUTHORIZATION, format!("Bearer {foreign}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Invalid JWT Token");
    }
}
