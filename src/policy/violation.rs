use std::fmt;

use crate::drive::Role;

/// One detected policy breach on a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// At least one grant is to anyone holding the link.
    LinkSharing,
    /// A non-owner address outside the allow-list.
    ExternalShare { email: String, role: Role },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkSharing => f.write_str("⚠️ Link-accessible by anyone with the link"),
            Self::ExternalShare { email, role } => write!(f, "🚫 External share: {email} [{role}]"),
        }
    }
}
