//! Holder use-case service.
//!
//! # Responsibility
//! - Enforce holder business rules before delegating to the repository.
//! - Expose get/list/save/update/delete entry points for callers.
//!
//! # Invariants
//! - `save` checks `cpf_cnpj` before `name`; the first failure is returned.
//! - `update` only copies the contact/address fields of the payload.
//! - `delete` is a soft delete; no row is ever removed.
//! - Repository failures pass through unmodified as `Repo(..)`.

use crate::model::holder::{Holder, HolderId, HolderValidationError};
use crate::repo::holder_repo::{HolderRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, HolderServiceError>;

/// Service error for holder use-cases.
#[derive(Debug)]
pub enum HolderServiceError {
    /// Input failed a required-field check.
    Validation(HolderValidationError),
    /// Target holder does not exist.
    NotFound(HolderId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for HolderServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "holder does not exist: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HolderServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<HolderValidationError> for HolderServiceError {
    fn from(value: HolderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for HolderServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Business-rule layer over a holder storage gateway.
#[derive(Debug)]
pub struct HolderService<R: HolderRepository> {
    repo: R,
}

impl<R: HolderRepository> HolderService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up one holder by id, soft-deleted records included.
    pub fn get(&self, id: HolderId) -> ServiceResult<Option<Holder>> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// Like [`get`](Self::get) but hides soft-deleted records.
    pub fn get_active(&self, id: HolderId) -> ServiceResult<Option<Holder>> {
        Ok(self.get(id)?.filter(Holder::is_active))
    }

    /// Returns every holder, soft-deleted records included.
    pub fn list(&self) -> ServiceResult<Vec<Holder>> {
        Ok(self.repo.find_all()?)
    }

    /// Returns only holders that are not soft-deleted.
    pub fn list_active(&self) -> ServiceResult<Vec<Holder>> {
        let mut holders = self.list()?;
        holders.retain(Holder::is_active);
        Ok(holders)
    }

    /// Validates and persists a holder.
    ///
    /// # Contract
    /// - Empty `cpf_cnpj` fails first, then empty `name`.
    /// - A holder without id is inserted and returned with its new id.
    pub fn save(&self, holder: Holder) -> ServiceResult<Holder> {
        if let Err(err) = holder.validate() {
            warn!("event=holder_save module=service status=rejected reason={err:?}");
            return Err(err.into());
        }

        let saved = self.repo.save(holder)?;
        info!(
            "event=holder_save module=service status=ok id={}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Soft-deletes an existing holder.
    ///
    /// # Errors
    /// - `NotFound` when no holder has this id.
    pub fn delete(&self, id: HolderId) -> ServiceResult<()> {
        let mut holder = self.require(id, "holder_delete")?;
        holder.soft_delete();
        self.repo.save(holder)?;
        info!("event=holder_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Copies phone, email, address, address number, city and complement
    /// from `patch` onto the stored holder and persists it.
    ///
    /// Tax id, name and deleted flag of the stored record are kept; the
    /// rest of `patch` is ignored.
    ///
    /// # Errors
    /// - `NotFound` when no holder has this id.
    pub fn update(&self, id: HolderId, patch: &Holder) -> ServiceResult<Holder> {
        let mut current = self.require(id, "holder_update")?;
        current.apply_contact_patch(patch);
        let updated = self.repo.save(current)?;
        info!("event=holder_update module=service status=ok id={id}");
        Ok(updated)
    }

    fn require(&self, id: HolderId, event: &str) -> ServiceResult<Holder> {
        match self.repo.find_by_id(id)? {
            Some(holder) => Ok(holder),
            None => {
                warn!("event={event} module=service status=not_found id={id}");
                Err(HolderServiceError::NotFound(id))
            }
        }
    }
}
