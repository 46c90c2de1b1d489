use super::*;

#[test]
fn absent_allow_list_admits_any_role() {
    assert!(is_allowed(Role::Manager, None));
    assert!(is_allowed(Role::Employee, None));
    assert!(is_allowed(Role::Unknown, None));
}

#[test]
fn empty_allow_list_admits_any_role() {
    assert!(is_allowed(Role::Employee, Some(&[])));
    assert!(is_allowed(Role::Unknown, Some(&[])));
}

#[test]
fn member_role_is_admitted() {
    assert!(is_allowed(Role::Manager, Some(&[Role::Manager])));
    assert!(is_allowed(Role::Employee, Some(&[Role::Manager, Role::Employee])));
}

#[test]
fn non_member_role_is_denied() {
    assert!(!is_allowed(Role::Employee, Some(&[Role::Manager])));
}

#[test]
fn unknown_role_never_passes_an_allow_list() {
    assert!(!is_allowed(Role::Unknown, Some(&[Role::Manager, Role::Employee])));
}
