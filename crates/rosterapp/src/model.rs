//! # Data Model
//!
//! A [`Record`] is the single managed entity: a person with a [`Role`] and a
//! [`Status`]. Identity is a [`RecordId`], assigned by the store on creation
//! and never changed afterwards.
//!
//! Records serialize to the flat JSON shape the persisted collection uses:
//!
//! ```text
//! {"id":5,"name":"Agus Pratama","email":"agus@example.com","role":"QA Engineer","status":"Active"}
//! ```
//!
//! [`RecordFields`] is a record without its id (the input to `create`), and
//! [`RecordPatch`] is a partial update where `None` means "leave untouched".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Coerces external input to an id the way a lenient integer parse would:
    /// leading whitespace is skipped, an optional sign and the leading run of
    /// digits are read, and anything after them is ignored (`"12abc"` is 12).
    ///
    /// Returns `None` when no digits are found or the value cannot be an id
    /// (negative or out of range). Callers treat `None` as not-found.
    pub fn coerce(input: &str) -> Option<RecordId> {
        let value = leading_integer(input)?;
        u64::try_from(value).ok().map(RecordId)
    }

    /// The id after this one, or `None` at `u64::MAX`.
    pub fn next(self) -> Option<RecordId> {
        self.0.checked_add(1).map(RecordId)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads the leading integer of `input`: leading whitespace is skipped, then
/// an optional sign and a run of ASCII digits. Trailing text is ignored.
/// Returns `None` when there are no digits or the value overflows `i64`.
pub fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Developer,
    Designer,
    Manager,
    #[serde(rename = "QA Engineer")]
    QaEngineer,
    DevOps,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Developer,
        Role::Designer,
        Role::Manager,
        Role::QaEngineer,
        Role::DevOps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::Manager => "Manager",
            Role::QaEngineer => "QA Engineer",
            Role::DevOps => "DevOps",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

impl Record {
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            role: fields.role,
            status: fields.status,
        }
    }

    /// Applies the supplied fields of `patch`. The id is never touched.
    pub fn apply(&mut self, patch: RecordPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// A record's fields without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

impl RecordFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role, status: Status) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<Status>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none() && self.status.is_none()
    }
}

impl From<RecordFields> for RecordPatch {
    fn from(fields: RecordFields) -> Self {
        Self {
            name: Some(fields.name),
            email: Some(fields.email),
            role: Some(fields.role),
            status: Some(fields.status),
        }
    }
}

/// The profile of the signed-in user, persisted under the user key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub full_name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: 1,
            username: "admin".to_string(),
            full_name: "Administrator".to_string(),
        }
    }
}

const SEED: [(&str, &str, Role, Status); 15] = [
    ("Ahmad Fauzi", "ahmad@example.com", Role::Developer, Status::Active),
    ("Siti Nurhaliza", "siti@example.com", Role::Designer, Status::Active),
    ("Budi Santoso", "budi@example.com", Role::Manager, Status::Inactive),
    ("Dewi Lestari", "dewi@example.com", Role::Developer, Status::Active),
    ("Agus Pratama", "agus@example.com", Role::QaEngineer, Status::Active),
    ("Rina Wati", "rina@example.com", Role::Designer, Status::Inactive),
    ("Joko Widodo", "joko@example.com", Role::Developer, Status::Active),
    ("Maya Sari", "maya@example.com", Role::Manager, Status::Active),
    ("Doni Kusuma", "doni@example.com", Role::Developer, Status::Inactive),
    ("Putri Anjani", "putri@example.com", Role::QaEngineer, Status::Active),
    ("Rudi Hartono", "rudi@example.com", Role::Designer, Status::Active),
    ("Sari Indah", "sari@example.com", Role::Developer, Status::Inactive),
    ("Eko Prasetyo", "eko@example.com", Role::Manager, Status::Active),
    ("Linda Pertiwi", "linda@example.com", Role::QaEngineer, Status::Active),
    ("Bambang Sutrisno", "bambang@example.com", Role::Developer, Status::Active),
];

/// The fixed demo collection used on first run and by `reset`.
pub fn seed_records() -> Vec<Record> {
    SEED.iter()
        .zip(1u64..)
        .map(|(&(name, email, role, status), id)| {
            Record::new(RecordId(id), RecordFields::new(name, email, role, status))
        })
        .collect()
}
