use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Form};
use entity::role::UserType;
use placement_portal::{
    model::{api::ErrorDto, user::ResetPasswordForm},
    server::{controller::auth::reset_password, service::auth::login::AuthService},
};

use super::*;

fn form(email: &str, old_password: &str, new_password: &str) -> Form<ResetPasswordForm> {
    Form(ResetPasswordForm {
        email: email.to_string(),
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
    })
}

/// Expect 200 and the new password to verify afterwards
#[tokio::test]
async fn updates_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Tnp)).await?;

    let result = reset_password(
        State(test.to_app_state()),
        form(&user.email, TEST_PASSWORD, "brand_new"),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let auth = AuthService::new(&test.db);
    assert!(auth.verify_credentials(&user.email, "brand_new").await.is_ok());
    assert!(auth
        .verify_credentials(&user.email, TEST_PASSWORD)
        .await
        .is_err());

    Ok(())
}

/// Expect 401 and an unchanged password when the old password is wrong
#[tokio::test]
async fn rejects_incorrect_old_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Tnp)).await?;

    let result = reset_password(
        State(test.to_app_state()),
        form(&user.email, "not_it", "brand_new"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Incorrect old password");

    let auth = AuthService::new(&test.db);
    assert!(auth
        .verify_credentials(&user.email, TEST_PASSWORD)
        .await
        .is_ok());

    Ok(())
}

/// Expect 404 for an unregistered email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let result = reset_password(
        State(test.to_app_state()),
        form("nobody@example.com", TEST_PASSWORD, "brand_new"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
