use axum::extract::State;

use super::*;
use crate::state::test_helpers::test_app_state;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_5521__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_17__"), None);
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_site_wide() {
    let cookie = session_cookie("abc123".to_owned());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc123");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn login_with_seeded_student_creates_session() {
    let state = test_app_state();
    let body = LoginBody { email: "student@example.com".to_owned(), password: "password".to_owned() };

    let response = login(State(state.clone()), Json(body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.sessions.len().await, 1);
}

#[tokio::test]
async fn login_with_bad_credentials_is_unauthorized() {
    let state = test_app_state();
    let body = LoginBody { email: "student@example.com".to_owned(), password: "wrong".to_owned() };

    let response = login(State(state.clone()), Json(body)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn signup_creates_session_and_returns_created() {
    let state = test_app_state();
    let body = SignupBody {
        name: "Zainab".to_owned(),
        email: "zainab@example.com".to_owned(),
        password: "hunter2".to_owned(),
        role: UserRole::Student,
    };

    let response = signup(State(state.clone()), Json(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(state.sessions.len().await, 1);
}

#[tokio::test]
async fn signup_with_bad_email_is_rejected() {
    let state = test_app_state();
    let body = SignupBody {
        name: "Zainab".to_owned(),
        email: "not-an-email".to_owned(),
        password: "hunter2".to_owned(),
        role: UserRole::Student,
    };

    let response = signup(State(state.clone()), Json(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let state = test_app_state();
    let user = auth_svc::login("student@example.com", "password").unwrap();
    let token = state.sessions.create(user.clone()).await;

    let auth = AuthUser { user, token: token.clone() };
    let _ = logout(State(state.clone()), auth).await;

    // A subsequent load finds no session.
    assert!(state.sessions.validate(&token).await.is_none());
    assert!(state.sessions.is_empty().await);
}
