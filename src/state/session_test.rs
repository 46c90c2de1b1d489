use super::*;

fn user(role: Role, first_login: bool) -> CurrentUser {
    CurrentUser {
        id: 7,
        first_name: "Awa".to_owned(),
        last_name: "Diop".to_owned(),
        email: "awa@example.test".to_owned(),
        role,
        is_active: true,
        first_login,
    }
}

fn session(role: Role, first_login: bool) -> Session {
    Session {
        token: "tok-123".to_owned(),
        user: user(role, first_login),
    }
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn default_state_has_no_session() {
    let state = SessionState::default();
    assert!(state.current().is_none());
    assert!(state.token().is_none());
}

#[test]
fn hydrated_without_browser_storage_is_logged_out() {
    let state = SessionState::hydrated();
    assert!(state.current().is_none());
}

#[test]
fn set_exposes_token_and_user_together() {
    let mut state = SessionState::default();
    state.set(session(Role::Manager, false));

    assert_eq!(state.token(), Some("tok-123"));
    let current = state.current().expect("session");
    assert_eq!(current.user.role, Role::Manager);
    assert!(!current.user.first_login);
}

#[test]
fn clear_removes_everything() {
    let mut state = SessionState::default();
    state.set(session(Role::Employee, true));
    state.clear();

    assert!(state.current().is_none());
    assert!(state.token().is_none());
}

#[test]
fn complete_password_change_clears_first_login_flag() {
    let mut state = SessionState::default();
    state.set(session(Role::Employee, true));
    state.complete_password_change();

    let current = state.current().expect("session");
    assert!(!current.user.first_login);
    // Token is untouched.
    assert_eq!(state.token(), Some("tok-123"));
}

#[test]
fn complete_password_change_without_session_is_noop() {
    let mut state = SessionState::default();
    state.complete_password_change();
    assert!(state.current().is_none());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn role_parses_screaming_snake_case() {
    assert_eq!(serde_json::from_str::<Role>("\"MANAGER\"").unwrap(), Role::Manager);
    assert_eq!(serde_json::from_str::<Role>("\"EMPLOYEE\"").unwrap(), Role::Employee);
}

#[test]
fn unrecognized_role_parses_as_unknown() {
    assert_eq!(serde_json::from_str::<Role>("\"INTERN\"").unwrap(), Role::Unknown);
}

#[test]
fn current_user_uses_camel_case_fields() {
    let json = r#"{
        "id": 3,
        "firstName": "Moussa",
        "lastName": "Ba",
        "email": "moussa@example.test",
        "role": "EMPLOYEE",
        "isActive": true,
        "firstLogin": true
    }"#;
    let parsed: CurrentUser = serde_json::from_str(json).expect("user");
    assert_eq!(parsed.role, Role::Employee);
    assert!(parsed.first_login);

    let back = serde_json::to_string(&parsed).expect("json");
    assert!(back.contains("\"firstLogin\":true"));
    assert!(back.contains("\"isActive\":true"));
}

#[test]
fn session_parses_login_response_shape() {
    let json = r#"{
        "token": "abc.def.ghi",
        "user": {
            "id": 1,
            "firstName": "Awa",
            "lastName": "Diop",
            "email": "awa@example.test",
            "role": "MANAGER",
            "isActive": true,
            "firstLogin": false
        }
    }"#;
    let parsed: Session = serde_json::from_str(json).expect("session");
    assert_eq!(parsed.token, "abc.def.ghi");
    assert_eq!(parsed.user.role, Role::Manager);
}
