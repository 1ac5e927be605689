use crate::drive::{FileDescriptor, PermissionEntry, PrincipalType, Role};

use super::*;

fn policy() -> AllowListPolicy {
    AllowListPolicy::new(["fw@gmail.com", "corp.example"])
}

fn reasons(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}

#[test]
fn unshared_file_never_violates() {
    let mut file = FileDescriptor::file("f", "open.txt").shared_with(vec![
        PermissionEntry::anyone(Role::Reader),
        PermissionEntry::user("eve@evil.example", Role::Writer),
    ]);
    file.shared = false;
    assert!(evaluate(&file, &policy()).is_empty());
}

#[test]
fn shared_file_without_permissions_never_violates() {
    let file = FileDescriptor::file("f", "a.txt").shared_with(Vec::new());
    assert!(evaluate(&file, &policy()).is_empty());
}

#[test]
fn link_sharing_reported_once() {
    let file = FileDescriptor::file("f", "a.txt").shared_with(vec![
        PermissionEntry::anyone(Role::Reader),
        PermissionEntry::anyone(Role::Commenter),
        PermissionEntry::anyone(Role::Writer),
    ]);
    assert_eq!(evaluate(&file, &policy()), vec![Violation::LinkSharing]);
}

#[test]
fn external_reader_is_reported_with_address_and_role() {
    let file = FileDescriptor::file("f", "Budget.xlsx").shared_with(vec![
        PermissionEntry::new(PrincipalType::User, None, Role::Owner),
        PermissionEntry::user("bob@external.com", Role::Reader),
    ]);
    let found = evaluate(&file, &AllowListPolicy::new(["gmail.com"]));
    assert_eq!(
        reasons(&found),
        vec!["🚫 External share: bob@external.com [reader]".to_string()]
    );
}

#[test]
fn allow_listed_suffix_is_not_reported() {
    let file = FileDescriptor::file("f", "a.txt").shared_with(vec![
        PermissionEntry::user("alice@corp.example", Role::Writer),
        PermissionEntry::user("fw@gmail.com", Role::Reader),
    ]);
    assert!(evaluate(&file, &policy()).is_empty());
}

#[test]
fn full_address_entry_does_not_admit_its_domain() {
    let file = FileDescriptor::file("f", "a.txt")
        .shared_with(vec![PermissionEntry::user("someone@gmail.com", Role::Reader)]);
    assert_eq!(evaluate(&file, &policy()).len(), 1);
}

#[test]
fn suffix_match_is_case_sensitive() {
    let file = FileDescriptor::file("f", "a.txt")
        .shared_with(vec![PermissionEntry::user("alice@CORP.EXAMPLE", Role::Reader)]);
    assert_eq!(evaluate(&file, &policy()).len(), 1);
}

#[test]
fn external_owner_is_trusted() {
    let file = FileDescriptor::file("f", "a.txt")
        .shared_with(vec![PermissionEntry::user("boss@elsewhere.example", Role::Owner)]);
    assert!(evaluate(&file, &policy()).is_empty());
}

#[test]
fn link_sharing_precedes_domain_violations_in_permission_order() {
    let file = FileDescriptor::file("f", "a.txt").shared_with(vec![
        PermissionEntry::user("x@one.example", Role::Writer),
        PermissionEntry::new(PrincipalType::Domain, None, Role::Reader),
        PermissionEntry::anyone(Role::Reader),
        PermissionEntry::user("y@two.example", Role::Commenter),
    ]);
    assert_eq!(
        reasons(&evaluate(&file, &policy())),
        vec![
            "⚠️ Link-accessible by anyone with the link".to_string(),
            "🚫 External share: x@one.example [writer]".to_string(),
            "🚫 External share: y@two.example [commenter]".to_string(),
        ]
    );
}

#[test]
fn empty_allow_list_flags_every_address() {
    let file = FileDescriptor::file("f", "a.txt").shared_with(vec![
        PermissionEntry::user("a@corp.example", Role::Reader),
        PermissionEntry::user("b@corp.example", Role::Reader),
    ]);
    assert_eq!(evaluate(&file, &AllowListPolicy::default()).len(), 2);
}

#[test]
fn checker_trait_delegates_to_evaluate() {
    let file = FileDescriptor::file("f", "a.txt")
        .shared_with(vec![PermissionEntry::anyone(Role::Reader)]);
    let checker: &dyn FileChecker = &policy();
    assert_eq!(checker.check(&file), vec![Violation::LinkSharing]);
}
