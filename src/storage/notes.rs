//! Note persistence.
//!
//! CRUD operations and the date-range query backing the day and month
//! views.

use chrono::{NaiveDate, NaiveTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use crate::error::ZametkiError;
use crate::notes::{Note, NoteColor};
use crate::storage::Database;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Storage for calendar notes.
pub struct NoteStore {
    db: Database,
}

impl NoteStore {
    /// Open the store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, ZametkiError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new note, assigning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, note: &mut Note) -> Result<(), ZametkiError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO notes
              (title, start_date, end_date, start_time, end_time, color, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                note.title,
                note.start_date.format(DATE_FORMAT).to_string(),
                note.end_date.format(DATE_FORMAT).to_string(),
                note.start_time.format(TIME_FORMAT).to_string(),
                note.end_time.format(TIME_FORMAT).to_string(),
                note.color.as_str(),
                Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| ZametkiError::Database(format!("Failed to insert note: {e}")))?;

        note.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Update an existing note.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the note has no id or no row matches it.
    pub fn update(&self, note: &Note) -> Result<(), ZametkiError> {
        let id = note.id.ok_or(ZametkiError::NotFound(0))?;
        let conn = self.db.connection();

        let changed = conn
            .execute(
                r"UPDATE notes SET
                  title = ?1,
                  start_date = ?2,
                  end_date = ?3,
                  start_time = ?4,
                  end_time = ?5,
                  color = ?6
                  WHERE id = ?7",
                params![
                    note.title,
                    note.start_date.format(DATE_FORMAT).to_string(),
                    note.end_date.format(DATE_FORMAT).to_string(),
                    note.start_time.format(TIME_FORMAT).to_string(),
                    note.end_time.format(TIME_FORMAT).to_string(),
                    note.color.as_str(),
                    id,
                ],
            )
            .map_err(|e| ZametkiError::Database(format!("Failed to update note: {e}")))?;

        if changed == 0 {
            return Err(ZametkiError::NotFound(id));
        }
        Ok(())
    }

    /// Delete a note by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no note has the given id.
    pub fn delete(&self, id: i64) -> Result<(), ZametkiError> {
        let changed = self
            .db
            .connection()
            .execute("DELETE FROM notes WHERE id = ?1", [id])
            .map_err(|e| ZametkiError::Database(format!("Failed to delete note: {e}")))?;

        if changed == 0 {
            return Err(ZametkiError::NotFound(id));
        }
        Ok(())
    }

    /// Get a note by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Note>, ZametkiError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, start_date, end_date, start_time, end_time, color
                  FROM notes WHERE id = ?1",
            )
            .map_err(|e| ZametkiError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_note)
            .optional()
            .map_err(|e| ZametkiError::Database(format!("Failed to query note: {e}")))?;

        Ok(result)
    }

    /// All notes, ordered by start date and time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all(&self) -> Result<Vec<Note>, ZametkiError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, start_date, end_date, start_time, end_time, color
                  FROM notes ORDER BY start_date, start_time",
            )
            .map_err(|e| ZametkiError::Database(format!("Failed to prepare query: {e}")))?;

        let notes = stmt
            .query_map([], row_to_note)
            .map_err(|e| ZametkiError::Database(format!("Failed to query notes: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ZametkiError::Database(format!("Failed to read note: {e}")))?;

        Ok(notes)
    }

    /// Notes whose date span lies within the given period.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn for_period(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Note>, ZametkiError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, start_date, end_date, start_time, end_time, color
                  FROM notes
                  WHERE start_date >= ?1 AND end_date <= ?2
                  ORDER BY start_date, start_time",
            )
            .map_err(|e| ZametkiError::Database(format!("Failed to prepare query: {e}")))?;

        let notes = stmt
            .query_map(
                params![
                    from.format(DATE_FORMAT).to_string(),
                    to.format(DATE_FORMAT).to_string(),
                ],
                row_to_note,
            )
            .map_err(|e| ZametkiError::Database(format!("Failed to query notes: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ZametkiError::Database(format!("Failed to read note: {e}")))?;

        Ok(notes)
    }

    /// Notes for a single day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn for_day(&self, date: NaiveDate) -> Result<Vec<Note>, ZametkiError> {
        self.for_period(date, date)
    }
}

fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    let color: String = row.get(6)?;

    Ok(Note {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        start_date: parse_date(2, &row.get::<_, String>(2)?)?,
        end_date: parse_date(3, &row.get::<_, String>(3)?)?,
        start_time: parse_time(4, &row.get::<_, String>(4)?)?,
        end_time: parse_time(5, &row.get::<_, String>(5)?)?,
        // Unknown color names read back as the default
        color: color.parse().unwrap_or(NoteColor::Blue),
    })
}

fn parse_date(index: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_time(index: usize, value: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}
