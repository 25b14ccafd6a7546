//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save whole address book snapshots.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - A save replaces every person row in a single transaction.
//! - Reads reject invalid persisted values instead of masking them.
//! - Person order is the `position` column order.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::address_book::AddressBook;
use crate::model::person::{
    Address, Email, Name, Person, PersonValidationError, Phone, Remark, Tag,
};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for address book persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted into a valid address book.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "person repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "person repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "person repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
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

/// Repository interface for address book snapshots.
pub trait PersonRepository {
    /// Returns `None` when no address book has ever been saved.
    fn load_address_book(&self) -> RepoResult<Option<AddressBook>>;
    /// Replaces the stored address book with `address_book`.
    fn save_address_book(&self, address_book: &AddressBook) -> RepoResult<()>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_person_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn load_address_book(&self) -> RepoResult<Option<AddressBook>> {
        let saved: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM address_book_meta WHERE id = 1);",
            [],
            |row| row.get(0),
        )?;
        if saved == 0 {
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT
                position,
                name,
                phone,
                email,
                address,
                remark
             FROM persons
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            let position: i64 = row.get("position")?;
            let tags = load_tags_for_person(self.conn, position)?;
            persons.push(parse_person_row(row, position, tags)?);
        }

        let book = AddressBook::from_persons(persons)
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;
        debug!(
            "event=address_book_load module=repo status=ok persons={}",
            book.len()
        );
        Ok(Some(book))
    }

    fn save_address_book(&self, address_book: &AddressBook) -> RepoResult<()> {
        // The session owns the connection exclusively; saves never nest.
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM person_tags;", [])?;
        tx.execute("DELETE FROM persons;", [])?;

        for (position, person) in address_book.persons().iter().enumerate() {
            let position = i64::try_from(position).map_err(|_| {
                RepoError::InvalidData(format!("person position {position} exceeds i64"))
            })?;
            tx.execute(
                "INSERT INTO persons (
                    position,
                    name,
                    phone,
                    email,
                    address,
                    remark
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    position,
                    person.name.as_str(),
                    person.phone.as_str(),
                    person.email.as_str(),
                    person.address.as_str(),
                    person.remark.as_str(),
                ],
            )?;
            for tag in &person.tags {
                tx.execute(
                    "INSERT INTO person_tags (person_position, tag) VALUES (?1, ?2);",
                    params![position, tag.as_str()],
                )?;
            }
        }

        tx.execute(
            "INSERT INTO address_book_meta (id, saved_at)
             VALUES (1, strftime('%s', 'now') * 1000)
             ON CONFLICT (id) DO UPDATE SET saved_at = excluded.saved_at;",
            [],
        )?;
        tx.commit()?;

        debug!(
            "event=address_book_save module=repo status=ok persons={}",
            address_book.len()
        );
        Ok(())
    }
}

fn parse_person_row(row: &Row<'_>, position: i64, tags: Vec<String>) -> RepoResult<Person> {
    let name = Name::parse(row.get::<_, String>("name")?)
        .map_err(invalid_column("name", position))?;
    let phone = Phone::parse(row.get::<_, String>("phone")?)
        .map_err(invalid_column("phone", position))?;
    let email = Email::parse(row.get::<_, String>("email")?)
        .map_err(invalid_column("email", position))?;
    let address = Address::parse(row.get::<_, String>("address")?)
        .map_err(invalid_column("address", position))?;
    let tags = tags
        .into_iter()
        .map(Tag::parse)
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(invalid_column("tags", position))?;

    Ok(Person {
        name,
        phone,
        email,
        address,
        remark: Remark::new(row.get::<_, String>("remark")?),
        tags,
    })
}

fn invalid_column(
    column: &'static str,
    position: i64,
) -> impl Fn(PersonValidationError) -> RepoError {
    move |err| RepoError::InvalidData(format!("persons.{column} at position {position}: {err}"))
}

fn load_tags_for_person(conn: &Connection, position: i64) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag
         FROM person_tags
         WHERE person_position = ?1
         ORDER BY tag ASC;",
    )?;
    let mut rows = stmt.query([position])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get(0)?);
    }
    Ok(tags)
}

fn ensure_person_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let required: [(&'static str, &[&'static str]); 3] = [
        (
            "persons",
            &["position", "name", "phone", "email", "address", "remark"],
        ),
        ("person_tags", &["person_position", "tag"]),
        ("address_book_meta", &["id", "saved_at"]),
    ];
    for (table, columns) in required {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
