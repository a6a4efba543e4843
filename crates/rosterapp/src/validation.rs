//! # Form Validation
//!
//! Record input arrives as raw strings (from a form, the command line, or any
//! other client). Validation turns it into typed [`RecordFields`] or a
//! [`RecordPatch`] before anything reaches the store; the store itself never
//! re-validates.
//!
//! Rules per field:
//! - `name`: required (non-blank)
//! - `email`: required, shaped like `local@domain.tld`
//! - `role`: required, one of [`Role::ALL`]
//! - `status`: required, one of [`Status::ALL`]
//!
//! All failing fields are reported at once, in field order.

use crate::model::{RecordFields, RecordPatch, Role, Status};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Role,
    Status,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Role => "role",
            Field::Status => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw input for a full record.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl RecordForm {
    pub fn validate(&self) -> Result<RecordFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = check_name(&self.name, &mut errors);
        let email = check_email(&self.email, &mut errors);
        let role = check_role(&self.role, &mut errors);
        let status = check_status(&self.status, &mut errors);

        match (name, email, role, status) {
            (Some(name), Some(email), Some(role), Some(status)) if errors.is_empty() => {
                Ok(RecordFields::new(name, email, role, status))
            }
            _ => Err(errors),
        }
    }
}

/// Raw input for a partial edit. `None` fields are left untouched and are
/// not validated.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl RecordEdit {
    pub fn validate(&self) -> Result<RecordPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let patch = RecordPatch {
            name: self.name.as_deref().and_then(|v| check_name(v, &mut errors)),
            email: self.email.as_deref().and_then(|v| check_email(v, &mut errors)),
            role: self.role.as_deref().and_then(|v| check_role(v, &mut errors)),
            status: self
                .status
                .as_deref()
                .and_then(|v| check_status(v, &mut errors)),
        };
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

fn check_name(value: &str, errors: &mut ValidationErrors) -> Option<String> {
    if value.trim().is_empty() {
        errors.push(Field::Name, "Name is required");
        return None;
    }
    Some(value.to_string())
}

fn check_email(value: &str, errors: &mut ValidationErrors) -> Option<String> {
    if value.trim().is_empty() {
        errors.push(Field::Email, "Email is required");
        return None;
    }
    if !is_valid_email(value) {
        errors.push(Field::Email, "Email format is invalid");
        return None;
    }
    Some(value.to_string())
}

fn check_role(value: &str, errors: &mut ValidationErrors) -> Option<Role> {
    if value.trim().is_empty() {
        errors.push(Field::Role, "Role is required");
        return None;
    }
    match value.parse::<Role>() {
        Ok(role) => Some(role),
        Err(e) => {
            errors.push(Field::Role, e);
            None
        }
    }
}

fn check_status(value: &str, errors: &mut ValidationErrors) -> Option<Status> {
    if value.trim().is_empty() {
        errors.push(Field::Status, "Status is required");
        return None;
    }
    match value.parse::<Status>() {
        Ok(status) => Some(status),
        Err(e) => {
            errors.push(Field::Status, e);
            None
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@` with text on both
/// sides, and a dot inside the domain with text on both sides of it.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, role: &str, status: &str) -> RecordForm {
        RecordForm {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let fields = form("X", "x@y.com", "Developer", "Active").validate().unwrap();
        assert_eq!(fields.role, Role::Developer);
        assert_eq!(fields.status, Status::Active);
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = form("  ", "", "", "").validate().unwrap_err();
        assert_eq!(errors.errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Status), Some("Status is required"));
    }

    #[test]
    fn rejects_bad_email_shapes() {
        for bad in ["plain", "a@b", "a@.com", "a@b.", "a b@c.com", "a@b@c.com", "@b.com"] {
            assert!(!is_valid_email(bad), "{} should be rejected", bad);
        }
        for good in ["a@b.co", "first.last@example.com", "x@sub.domain.org", "a@b..c"] {
            assert!(is_valid_email(good), "{} should be accepted", good);
        }
    }

    #[test]
    fn blank_role_and_status_count_as_missing() {
        let errors = form("X", "x@y.com", "   ", "\t").validate().unwrap_err();
        assert_eq!(errors.get(Field::Role), Some("Role is required"));
        assert_eq!(errors.get(Field::Status), Some("Status is required"));

        let errors = RecordEdit {
            role: Some(" ".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get(Field::Role), Some("Role is required"));
    }

    #[test]
    fn rejects_unknown_role() {
        let errors = form("X", "x@y.com", "Intern", "Active").validate().unwrap_err();
        assert_eq!(errors.get(Field::Role), Some("Unknown role: Intern"));
    }

    #[test]
    fn edit_validates_only_supplied_fields() {
        let patch = RecordEdit {
            status: Some("Inactive".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(patch.status, Some(Status::Inactive));
        assert!(patch.name.is_none());

        let errors = RecordEdit {
            email: Some("nope".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email format is invalid"));
    }

    #[test]
    fn display_joins_field_messages() {
        let errors = form("", "x@y.com", "Developer", "").validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "name: Name is required; status: Status is required"
        );
    }
}
