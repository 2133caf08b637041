//! Subcommand handlers over `HolderService`.
//!
//! Every handler opens its own connection. Validation, not-found and storage
//! errors come back as `Err(String)` so `main` reports them uniformly.

use crate::{ContactArgs, CreateArgs};
use holders_core::db::open_db;
use holders_core::{Holder, HolderId, HolderService, SqliteHolderRepository};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

impl ContactArgs {
    fn apply_to(self, holder: &mut Holder) {
        holder.phone = self.phone;
        holder.email = self.email;
        holder.address = self.address;
        holder.address_number = self.address_number;
        holder.city = self.city;
        holder.complement = self.complement;
    }
}

pub(crate) fn create(db_path: &Path, args: CreateArgs) -> Result<(), String> {
    let mut holder = Holder::new(args.cpf_cnpj, args.name);
    args.contact.apply_to(&mut holder);

    let conn = connect(db_path)?;
    let saved = service(&conn)?
        .save(holder)
        .map_err(|error| format!("failed to create holder: {error}"))?;
    print_json(&saved)
}

pub(crate) fn get(db_path: &Path, id: HolderId, active_only: bool) -> Result<(), String> {
    let conn = connect(db_path)?;
    let service = service(&conn)?;
    let found = if active_only {
        service.get_active(id)
    } else {
        service.get(id)
    }
    .map_err(|error| format!("failed to load holder: {error}"))?;

    match found {
        Some(holder) => print_json(&holder),
        None => Err(format!("holder not found: {id}")),
    }
}

pub(crate) fn list(db_path: &Path, active_only: bool) -> Result<(), String> {
    let conn = connect(db_path)?;
    let service = service(&conn)?;
    let holders = if active_only {
        service.list_active()
    } else {
        service.list()
    }
    .map_err(|error| format!("failed to list holders: {error}"))?;

    print_json(&holders)
}

pub(crate) fn update(db_path: &Path, id: HolderId, contact: ContactArgs) -> Result<(), String> {
    let mut patch = Holder::default();
    contact.apply_to(&mut patch);

    let conn = connect(db_path)?;
    let updated = service(&conn)?
        .update(id, &patch)
        .map_err(|error| format!("failed to update holder: {error}"))?;
    print_json(&updated)
}

pub(crate) fn delete(db_path: &Path, id: HolderId) -> Result<(), String> {
    let conn = connect(db_path)?;
    service(&conn)?
        .delete(id)
        .map_err(|error| format!("failed to delete holder: {error}"))?;
    println!("deleted holder {id}");
    Ok(())
}

fn connect(db_path: &Path) -> Result<Connection, String> {
    open_db(db_path).map_err(|error| {
        format!(
            "failed to open database `{}`: {error}",
            db_path.display()
        )
    })
}

fn service(conn: &Connection) -> Result<HolderService<SqliteHolderRepository<'_>>, String> {
    let repo = SqliteHolderRepository::try_new(conn)
        .map_err(|error| format!("failed to prepare holder repository: {error}"))?;
    Ok(HolderService::new(repo))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to encode output: {error}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{create, delete, get, list, update};
    use crate::{ContactArgs, CreateArgs};

    fn no_contact() -> ContactArgs {
        ContactArgs {
            phone: None,
            email: None,
            address: None,
            address_number: None,
            city: None,
            complement: None,
        }
    }

    #[test]
    fn handlers_cover_the_holder_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("holders.sqlite3");

        create(
            &db_path,
            CreateArgs {
                cpf_cnpj: "12345678900".to_string(),
                name: "Ana".to_string(),
                contact: no_contact(),
            },
        )
        .unwrap();

        let contact = ContactArgs {
            city: Some("SP".to_string()),
            ..no_contact()
        };
        update(&db_path, 1, contact).unwrap();
        delete(&db_path, 1).unwrap();

        get(&db_path, 1, false).unwrap();
        assert!(get(&db_path, 1, true).unwrap_err().contains("not found"));
        list(&db_path, true).unwrap();
    }

    #[test]
    fn create_reports_validation_message() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("holders.sqlite3");

        let err = create(
            &db_path,
            CreateArgs {
                cpf_cnpj: String::new(),
                name: "Ana".to_string(),
                contact: no_contact(),
            },
        )
        .unwrap_err();
        assert!(err.contains("CPF/CNPJ"));
    }

    #[test]
    fn delete_unknown_holder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("holders.sqlite3");

        let err = delete(&db_path, 5).unwrap_err();
        assert!(err.contains("holder does not exist"));
    }
}
