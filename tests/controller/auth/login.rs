use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Form,
};
use entity::role::{UserRole, UserType};
use placement_portal::{
    model::user::LoginForm,
    server::{controller::auth::login, model::session::user::SessionUser},
};

use super::*;

fn form(email: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Expect 303 redirect to the recruiter dashboard with the user stored in session
#[tokio::test]
async fn redirects_recruiter_to_dashboard() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_user("recruiter@acme.test", "s3cret", Some(UserType::Recruiter))
        .build()
        .await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        form("recruiter@acme.test", "s3cret"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/recruiter");

    let session_user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(session_user.role(), Some(UserType::Recruiter));

    Ok(())
}

/// Expect faculty and heads of department to share the department dashboard
#[tokio::test]
async fn redirects_faculty_and_hod_to_department() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.user().insert_mock_user(Some(UserType::Faculty)).await?;
    test.user().insert_mock_user(Some(UserType::Hod)).await?;

    for email in ["faculty@example.com", "hod@example.com"] {
        let session = test.load_session(None);
        let resp = login(State(test.to_app_state()), session, form(email, TEST_PASSWORD))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/department");
    }

    Ok(())
}

/// Expect a user without a role to be logged in and sent home
#[tokio::test]
async fn redirects_user_without_role_home() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(None).await?;

    let resp = login(
        State(test.to_app_state()),
        test.session.clone(),
        form(&user.email, TEST_PASSWORD),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");
    let session_user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(session_user.user_id, user.id);
    assert_eq!(session_user.user_type, None);

    Ok(())
}

/// Expect a stored role outside the known set to log in and be sent home
#[tokio::test]
async fn redirects_unrecognized_role_home() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_role_value("ops@example.com", TEST_PASSWORD, Some("admin"))
        .await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        form(&user.email, TEST_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");

    let session_user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(session_user.user_id, user.id);
    assert_eq!(
        session_user.user_type,
        Some(UserRole::Unrecognized("admin".to_string()))
    );

    Ok(())
}

/// Expect the session ID issued before login to stop resolving afterwards
#[tokio::test]
async fn issues_new_session_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Student)).await?;

    test.session.insert("visited", true).await?;
    test.session.save().await?;
    let anonymous_id = test.session.id();

    login(
        State(test.to_app_state()),
        test.session.clone(),
        form(&user.email, TEST_PASSWORD),
    )
    .await
    .unwrap();
    test.session.save().await?;

    assert_ne!(test.session.id(), anonymous_id);

    let previous = test.load_session(anonymous_id);
    assert!(SessionUser::get(&previous).await.unwrap().is_none());

    Ok(())
}

/// Expect 401 and an anonymous session on wrong password
#[tokio::test]
async fn rejects_incorrect_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Student)).await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        form(&user.email, "wrong_password"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 404 for an unregistered email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        form("nobody@example.com", TEST_PASSWORD),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        form("student@example.com", TEST_PASSWORD),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
