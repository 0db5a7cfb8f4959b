use std::sync::Arc;

use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use entity::role::UserType;
use placement_portal::server::{controller::auth::logout, model::session::user::SessionUser};
use tower_sessions::Session;

use super::*;

/// Expect 307 redirect home and the stored session to be destroyed
#[tokio::test]
async fn destroys_session_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    SessionUser::insert(&test.session, SessionUser::new(1, Some(UserType::Student)))
        .await
        .unwrap();
    test.session.save().await?;
    let session_id = test.session.id();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");

    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    // A later request presenting the old cookie is anonymous
    let reused = test.load_session(session_id);
    assert!(SessionUser::get(&reused).await.unwrap().is_none());

    Ok(())
}

/// Expect 307 redirect home for an anonymous session
#[tokio::test]
async fn redirects_anonymous_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}

/// Expect 500 and an intact session when the store fails to delete it
#[tokio::test]
async fn keeps_session_when_store_delete_fails() -> Result<(), TestError> {
    let store = Arc::new(FailingDeleteStore::default());
    let session = Session::new(None, store.clone(), None);

    let user = SessionUser::new(1, Some(UserType::Student));
    SessionUser::insert(&session, user.clone()).await.unwrap();
    session.save().await?;
    let session_id = session.id();

    let result = logout(session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(SessionUser::get(&session).await.unwrap(), Some(user.clone()));

    // The stored record survives too, so the cookie keeps working
    let reloaded = Session::new(session_id, store, None);
    assert_eq!(SessionUser::get(&reloaded).await.unwrap(), Some(user));

    Ok(())
}
