//! Club aggregate - the tenant every other record hangs off.

use crate::domain::foundation::{ClubId, DomainError, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum length for the URL slug.
pub const MAX_WEB_NAME_LENGTH: usize = 100;

/// A club publishing seasons, classes and registrations.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `web_name` is a lowercase URL slug (`a-z`, `0-9`, `-`, `_`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    id: ClubId,
    name: String,
    web_name: String,
    location: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    contact_person: Option<String>,
    description: Option<String>,
}

impl Club {
    /// Creates a club with no contact details.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty or the slug is malformed
    pub fn new(id: ClubId, name: impl Into<String>, web_name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let web_name = web_name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        Self::validate_web_name(&web_name)?;

        Ok(Self {
            id,
            name,
            web_name,
            location: None,
            contact_email: None,
            contact_phone: None,
            contact_person: None,
            description: None,
        })
    }

    /// Reconstitute a club from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ClubId,
        name: String,
        web_name: String,
        location: Option<String>,
        contact_email: Option<String>,
        contact_phone: Option<String>,
        contact_person: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            web_name,
            location,
            contact_email,
            contact_phone,
            contact_person,
            description,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_contact(
        mut self,
        person: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        self.contact_person = person;
        self.contact_email = email;
        self.contact_phone = phone;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ClubId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL slug used in every public route.
    pub fn web_name(&self) -> &str {
        &self.web_name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
    }

    pub fn contact_phone(&self) -> Option<&str> {
        self.contact_phone.as_deref()
    }

    pub fn contact_person(&self) -> Option<&str> {
        self.contact_person.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn validate_web_name(web_name: &str) -> Result<(), ValidationError> {
        if web_name.is_empty() {
            return Err(ValidationError::empty_field("web_name"));
        }
        if web_name.len() > MAX_WEB_NAME_LENGTH {
            return Err(ValidationError::too_long("web_name", MAX_WEB_NAME_LENGTH, web_name.len()));
        }
        let valid = web_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(ValidationError::invalid_format(
                "web_name",
                "only lowercase letters, digits, '-' and '_' are allowed",
            ));
        }
        Ok(())
    }
}
