use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, SupplierId};

// Whole-string matches: `local@domain.tld` with a TLD of at least two letters,
// and a North American style `DDD-DDD-DDDD` phone number.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("valid phone pattern"));

/// Whether `email` has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `phone` has the shape `DDD-DDD-DDDD`.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Contact information for a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Both channels must be well-formed; a single error covers either failure.
    pub fn validate(&self) -> DomainResult<()> {
        if !is_valid_email(&self.email) || !is_valid_phone(&self.phone) {
            return Err(DomainError::validation(
                "contact info must be a valid email address and phone number",
            ));
        }
        Ok(())
    }
}

/// A supplier's contact record.
///
/// Constructing a `Supplier` does not validate it; the warehouse runs
/// [`Supplier::validate`] on admission. There is no update path after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    company_name: String,
    contact: ContactInfo,
}

impl Supplier {
    /// Create a supplier record with a fresh identifier.
    pub fn new(
        company_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::with_id(SupplierId::new(), company_name, ContactInfo::new(email, phone))
    }

    pub fn with_id(id: SupplierId, company_name: impl Into<String>, contact: ContactInfo) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            contact,
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    pub fn phone(&self) -> &str {
        &self.contact.phone
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }
        self.contact.validate()
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> SupplierId {
        self.id
    }
}
