use entity::prelude::PortalUser;
use sea_orm::EntityTrait;

use super::*;
use crate::util::{multipart_body, post_multipart, BOUNDARY};

/// Expect the name and picture to be stored and the student redirected to their dashboard
#[tokio::test]
async fn updates_name_and_picture() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Student)).await?;
    let app = test_router(&test);

    let cookie = login(&app, "student@example.com", TEST_PASSWORD).await;

    let body = multipart_body(
        &[("name", "Ada Lovelace")],
        Some(("profilePicture", "me.png", b"fake png bytes")),
    );
    let resp = send(&app, post_multipart("/update_profile", body, Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/student"));

    let stored = PortalUser::find_by_id(user.id).one(&test.db).await?.unwrap();
    let file_name = format!("{}-me.png", user.id);
    assert_eq!(stored.name, "Ada Lovelace");
    assert_eq!(
        stored.profile_picture,
        Some(format!("/uploads/{}", file_name))
    );

    let written = std::fs::read(test.upload_dir().join(file_name))?;
    assert_eq!(written, b"fake png bytes");

    Ok(())
}

/// Expect an empty file part to leave the picture unchanged
#[tokio::test]
async fn ignores_empty_file_part() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Student)).await?;
    let app = test_router(&test);

    let cookie = login(&app, "student@example.com", TEST_PASSWORD).await;

    let body = multipart_body(&[("name", "Grace")], Some(("profilePicture", "", b"")));
    let resp = send(&app, post_multipart("/update_profile", body, Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = PortalUser::find_by_id(user.id).one(&test.db).await?.unwrap();
    assert_eq!(stored.name, "Grace");
    assert!(stored.profile_picture.is_none());
    assert_eq!(std::fs::read_dir(test.upload_dir())?.count(), 0);

    Ok(())
}

/// Expect the gate to run before the body is read: an anonymous request with no multipart
/// body is redirected to login rather than rejected as bad input
#[tokio::test]
async fn redirects_anonymous_before_reading_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let app = test_router(&test);

    let resp = send(&app, post_form("/update_profile", "name=x", None)).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));

    Ok(())
}

/// Expect 403 for a recruiter with nothing written
#[tokio::test]
async fn forbids_recruiter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.user()
        .insert_mock_user(Some(UserType::Recruiter))
        .await?;
    let app = test_router(&test);

    let cookie = login(&app, "recruiter@example.com", TEST_PASSWORD).await;

    let body = multipart_body(&[], Some(("profilePicture", "me.png", b"bytes")));
    let resp = send(&app, post_multipart("/update_profile", body, Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(std::fs::read_dir(test.upload_dir())?.count(), 0);

    Ok(())
}

/// Expect 400 for a student sending a body that is not multipart
#[tokio::test]
async fn rejects_non_multipart_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.user().insert_mock_user(Some(UserType::Student)).await?;
    let app = test_router(&test);

    let cookie = login(&app, "student@example.com", TEST_PASSWORD).await;

    let resp = send(&app, post_form("/update_profile", "name=x", Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect no picture left on disk when the student's record vanished mid-session
#[tokio::test]
async fn discards_picture_when_user_is_gone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Student)).await?;
    let app = test_router(&test);

    let cookie = login(&app, "student@example.com", TEST_PASSWORD).await;
    PortalUser::delete_by_id(user.id).exec(&test.db).await?;

    let body = multipart_body(
        &[("name", "Ada Lovelace")],
        Some(("profilePicture", "me.png", b"fake png bytes")),
    );
    let resp = send(&app, post_multipart("/update_profile", body, Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(std::fs::read_dir(test.upload_dir())?.count(), 0);

    Ok(())
}

/// Expect a body cut off after the picture part to be rejected without writing the picture
#[tokio::test]
async fn writes_nothing_for_truncated_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let user = test.user().insert_mock_user(Some(UserType::Student)).await?;
    let app = test_router(&test);

    let cookie = login(&app, "student@example.com", TEST_PASSWORD).await;

    let mut body = multipart_body(&[], Some(("profilePicture", "me.png", b"fake png bytes")));
    let closing = format!("--{}--\r\n", BOUNDARY);
    body.truncate(body.len() - closing.len());
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAda",
            BOUNDARY
        )
        .as_bytes(),
    );
    let resp = send(&app, post_multipart("/update_profile", body, Some(&cookie))).await;

    assert!(resp.status().is_client_error());
    assert_eq!(std::fs::read_dir(test.upload_dir())?.count(), 0);

    let stored = PortalUser::find_by_id(user.id).one(&test.db).await?.unwrap();
    assert!(stored.profile_picture.is_none());

    Ok(())
}
