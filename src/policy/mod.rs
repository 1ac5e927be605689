mod allowlist;
mod violation;

pub use allowlist::AllowListPolicy;
pub use violation::Violation;

use crate::drive::{FileDescriptor, PrincipalType, Role};

/// Trait for deciding whether a listed file breaks sharing policy.
pub trait FileChecker {
    /// Return every policy breach found on `file`, in detection order.
    fn check(&self, file: &FileDescriptor) -> Vec<Violation>;
}

impl FileChecker for AllowListPolicy {
    fn check(&self, file: &FileDescriptor) -> Vec<Violation> {
        evaluate(file, self)
    }
}

/// Evaluate one file against the allow-list.
///
/// Unshared files and files without permission entries never violate. Otherwise
/// a single link-sharing violation comes first (however many `anyone` grants
/// exist), followed by one external-share violation per non-owner address
/// outside the allow-list, in permission order.
#[must_use]
pub fn evaluate(file: &FileDescriptor, policy: &AllowListPolicy) -> Vec<Violation> {
    if !file.shared || file.permissions.is_empty() {
        return Vec::new();
    }

    let mut violations = Vec::new();

    if file
        .permissions
        .iter()
        .any(|p| *p.principal() == PrincipalType::Anyone)
    {
        violations.push(Violation::LinkSharing);
    }

    for permission in &file.permissions {
        // Owners are trusted even when their address is outside the allow-list.
        if *permission.role() == Role::Owner {
            continue;
        }
        let Some(email) = permission.email() else {
            continue;
        };
        if !policy.allows(email) {
            violations.push(Violation::ExternalShare {
                email: email.to_string(),
                role: permission.role().clone(),
            });
        }
    }

    violations
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
