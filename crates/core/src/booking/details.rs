//! Contact details

use serde::{Deserialize, Serialize};

/// How to reach the client about an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Full name; required
    pub name: String,

    /// Email address; required
    pub email: String,

    /// Phone number; required
    pub phone: String,

    /// Free text; optional
    #[serde(default)]
    pub notes: String,
}

impl ContactDetails {
    /// Whether name, email and phone are all present. Formats are not checked.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Notes, or `None` when left blank.
    pub fn notes(&self) -> Option<&str> {
        let notes = self.notes.trim();

        (!notes.is_empty()).then_some(notes)
    }
}
