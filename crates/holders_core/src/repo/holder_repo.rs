//! Holder repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find-by-id, find-all and insert-or-update over `holders`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` validates before any SQL mutation.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Rows are never removed; soft delete is a regular `save`.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::holder::{Holder, HolderId, HolderValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const HOLDER_SELECT_SQL: &str = "SELECT
    id,
    cpf_cnpj,
    name,
    phone,
    email,
    address,
    address_number,
    city,
    complement,
    deleted
FROM holders";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for holder persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(HolderValidationError),
    Db(DbError),
    /// An update targeted an id with no row behind it.
    NotFound(HolderId),
    InvalidData(String),
    /// Connection schema is behind this binary (migrations not applied).
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "holder not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted holder data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HolderValidationError> for RepoError {
    fn from(value: HolderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage gateway required by `HolderService`.
pub trait HolderRepository {
    /// Loads one holder, including soft-deleted rows.
    fn find_by_id(&self, id: HolderId) -> RepoResult<Option<Holder>>;
    /// Loads every holder ordered by ascending id, including soft-deleted rows.
    fn find_all(&self) -> RepoResult<Vec<Holder>>;
    /// Inserts when `holder.id` is `None`, otherwise updates that row.
    ///
    /// Returns the persisted record with `id` populated.
    fn save(&self, holder: Holder) -> RepoResult<Holder>;
}

/// SQLite-backed holder repository.
#[derive(Debug)]
pub struct SqliteHolderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHolderRepository<'conn> {
    /// Wraps a connection previously opened through `db::open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` when the `holders` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_table: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'holders'
            );",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Err(RepoError::MissingRequiredTable("holders"));
        }

        Ok(Self { conn })
    }

    fn insert(&self, holder: Holder) -> RepoResult<Holder> {
        self.conn.execute(
            "INSERT INTO holders (
                cpf_cnpj,
                name,
                phone,
                email,
                address,
                address_number,
                city,
                complement,
                deleted
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                holder.cpf_cnpj,
                holder.name,
                holder.phone,
                holder.email,
                holder.address,
                holder.address_number,
                holder.city,
                holder.complement,
                holder.deleted,
            ],
        )?;

        Ok(Holder {
            id: Some(self.conn.last_insert_rowid()),
            ..holder
        })
    }

    fn update(&self, id: HolderId, holder: Holder) -> RepoResult<Holder> {
        let changed = self.conn.execute(
            "UPDATE holders
             SET
                cpf_cnpj = ?1,
                name = ?2,
                phone = ?3,
                email = ?4,
                address = ?5,
                address_number = ?6,
                city = ?7,
                complement = ?8,
                deleted = ?9,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?10;",
            params![
                holder.cpf_cnpj,
                holder.name,
                holder.phone,
                holder.email,
                holder.address,
                holder.address_number,
                holder.city,
                holder.complement,
                holder.deleted,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(holder)
    }
}

impl HolderRepository for SqliteHolderRepository<'_> {
    fn find_by_id(&self, id: HolderId) -> RepoResult<Option<Holder>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{HOLDER_SELECT_SQL} WHERE id = ?1;"))?;

        let row = stmt
            .query_row([id], |row| Ok(parse_holder_row(row)))
            .optional()?;
        row.transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<Holder>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{HOLDER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut holders = Vec::new();

        while let Some(row) = rows.next()? {
            holders.push(parse_holder_row(row)?);
        }

        Ok(holders)
    }

    fn save(&self, holder: Holder) -> RepoResult<Holder> {
        holder.validate()?;

        match holder.id {
            None => self.insert(holder),
            Some(id) => self.update(id, holder),
        }
    }
}

fn parse_holder_row(row: &Row<'_>) -> RepoResult<Holder> {
    let deleted = match row.get::<_, i64>("deleted")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid deleted value `{other}` in holders.deleted"
            )));
        }
    };

    Ok(Holder {
        id: Some(row.get("id")?),
        cpf_cnpj: row.get("cpf_cnpj")?,
        name: row.get("name")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
        address: row.get("address")?,
        address_number: row.get("address_number")?,
        city: row.get("city")?,
        complement: row.get("complement")?,
        deleted,
    })
}
