use std::fmt;

use serde::Serialize;

/// Who a permission grants access to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalType {
    User,
    Group,
    Domain,
    /// Anyone holding the link.
    Anyone,
    Other,
}

impl PrincipalType {
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value {
            "user" => Self::User,
            "group" => Self::Group,
            "domain" => Self::Domain,
            "anyone" => Self::Anyone,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Role {
    Owner,
    Organizer,
    FileOrganizer,
    Writer,
    Commenter,
    Reader,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value {
            "owner" => Self::Owner,
            "organizer" => Self::Organizer,
            "fileOrganizer" => Self::FileOrganizer,
            "writer" => Self::Writer,
            "commenter" => Self::Commenter,
            "reader" => Self::Reader,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Owner => "owner",
            Self::Organizer => "organizer",
            Self::FileOrganizer => "fileOrganizer",
            Self::Writer => "writer",
            Self::Commenter => "commenter",
            Self::Reader => "reader",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    File,
}

/// A single grant on a file.
///
/// Constructed only through [`PermissionEntry::new`], which drops the address of
/// an `Anyone` grant: link-sharing grants never carry an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionEntry {
    principal: PrincipalType,
    email: Option<String>,
    role: Role,
}

impl PermissionEntry {
    #[must_use]
    pub fn new(principal: PrincipalType, email: Option<String>, role: Role) -> Self {
        let email = match principal {
            PrincipalType::Anyone => None,
            _ => email.filter(|address| !address.is_empty()),
        };
        Self {
            principal,
            email,
            role,
        }
    }

    #[must_use]
    pub fn user(email: &str, role: Role) -> Self {
        Self::new(PrincipalType::User, Some(email.to_string()), role)
    }

    #[must_use]
    pub fn anyone(role: Role) -> Self {
        Self::new(PrincipalType::Anyone, None, role)
    }

    #[must_use]
    pub const fn principal(&self) -> &PrincipalType {
        &self.principal
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub const fn role(&self) -> &Role {
        &self.role
    }
}

/// Snapshot of one listed item, as returned by a single listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub shared: bool,
    pub permissions: Vec<PermissionEntry>,
    pub view_url: String,
}

impl FileDescriptor {
    #[must_use]
    pub fn file(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::File,
            shared: false,
            permissions: Vec::new(),
            view_url: format!("https://drive.google.com/file/d/{id}/view"),
        }
    }

    #[must_use]
    pub fn folder(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::Folder,
            shared: false,
            permissions: Vec::new(),
            view_url: format!("https://drive.google.com/drive/folders/{id}"),
        }
    }

    #[must_use]
    pub fn shared_with(mut self, permissions: Vec<PermissionEntry>) -> Self {
        self.shared = true;
        self.permissions = permissions;
        self
    }

    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder)
    }
}
