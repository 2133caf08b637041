//! Holder domain model.
//!
//! # Responsibility
//! - Define the canonical holder record persisted by the repository layer.
//! - Provide validation and soft-delete lifecycle helpers.
//!
//! # Invariants
//! - `cpf_cnpj` and `name` are non-empty whenever a holder is saved.
//! - `id` is `None` until the first insert and never changes afterwards.
//! - `deleted` is the source of truth for tombstone state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned primary key of a holder.
pub type HolderId = i64;

/// Validation failures for holder write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderValidationError {
    /// Tax identifier is empty.
    EmptyCpfCnpj,
    /// Display name is empty.
    EmptyName,
}

impl Display for HolderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCpfCnpj => write!(f, "the CPF/CNPJ field is required"),
            Self::EmptyName => write!(f, "the name field is required"),
        }
    }
}

impl Error for HolderValidationError {}

/// Cardholder-like entity identified by a tax ID.
///
/// Serialized as a flat camelCase object. `id` may be omitted on creation
/// payloads; optional contact fields and `deleted` fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holder {
    #[serde(default)]
    pub id: Option<HolderId>,
    /// CPF (person) or CNPJ (company) tax identifier.
    pub cpf_cnpj: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    /// Soft delete tombstone; rows are never physically removed.
    #[serde(default)]
    pub deleted: bool,
}

impl Holder {
    /// Creates an unsaved holder with only the required fields set.
    pub fn new(cpf_cnpj: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf_cnpj: cpf_cnpj.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks required fields in fixed order: tax id first, then name.
    ///
    /// Only the first failing check is reported.
    pub fn validate(&self) -> Result<(), HolderValidationError> {
        if self.cpf_cnpj.is_empty() {
            return Err(HolderValidationError::EmptyCpfCnpj);
        }
        if self.name.is_empty() {
            return Err(HolderValidationError::EmptyName);
        }
        Ok(())
    }

    /// Copies the mutable contact/address fields from `patch`.
    ///
    /// `id`, `cpf_cnpj`, `name` and `deleted` are left untouched.
    pub fn apply_contact_patch(&mut self, patch: &Holder) {
        self.phone = patch.phone.clone();
        self.email = patch.email.clone();
        self.address = patch.address.clone();
        self.address_number = patch.address_number.clone();
        self.city = patch.city.clone();
        self.complement = patch.complement.clone();
    }

    /// Marks this holder as softly deleted.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    /// Returns whether this holder should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
