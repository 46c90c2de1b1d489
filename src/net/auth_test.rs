use super::*;
use crate::net::error::remote;

// =============================================================
// Login failure classification
// =============================================================

#[test]
fn login_401_is_invalid_credentials() {
    let err = remote(401, r#"{"message":"bad credentials"}"#);
    assert_eq!(classify_login(err), ApiError::InvalidCredentials);
}

#[test]
fn login_403_is_account_disabled() {
    let err = remote(403, r#"{"message":"account deactivated"}"#);
    assert_eq!(classify_login(err), ApiError::AccountDisabled);
}

#[test]
fn login_other_statuses_stay_remote() {
    let err = classify_login(remote(500, r#"{"message":"boom"}"#));
    assert_eq!(
        err,
        ApiError::Remote {
            status: 500,
            message: "boom".to_owned()
        }
    );
}

#[test]
fn login_transport_failure_stays_unreachable() {
    assert_eq!(classify_login(ApiError::Unreachable), ApiError::Unreachable);
}

// =============================================================
// Password-change failure classification
// =============================================================

#[test]
fn password_change_400_is_wrong_old_password() {
    let err = remote(400, r#"{"error":"old password mismatch"}"#);
    assert_eq!(classify_password_change(err), ApiError::WrongOldPassword);
}

#[test]
fn password_change_other_statuses_stay_remote() {
    let err = classify_password_change(remote(404, "{}"));
    assert_eq!(
        err,
        ApiError::Remote {
            status: 404,
            message: String::new()
        }
    );
}

// =============================================================
// Remote message extraction
// =============================================================

#[test]
fn remote_prefers_message_then_error_field() {
    assert_eq!(
        remote(500, r#"{"message":"m1","error":"m2"}"#),
        ApiError::Remote {
            status: 500,
            message: "m1".to_owned()
        }
    );
    assert_eq!(
        remote(500, r#"{"error":"m2"}"#),
        ApiError::Remote {
            status: 500,
            message: "m2".to_owned()
        }
    );
}

#[test]
fn remote_tolerates_non_json_bodies() {
    assert_eq!(
        remote(502, "<html>Bad Gateway</html>"),
        ApiError::Remote {
            status: 502,
            message: String::new()
        }
    );
}
