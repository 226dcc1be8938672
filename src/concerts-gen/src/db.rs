use std::path::Path;

use rusqlite::params;
use rusqlite::Connection;
use tracing::debug;
use tracing::info;

use crate::artists::Artist;
use crate::error::ConcertsGenError;
use crate::error::Result;
use crate::generator::Dataset;
use crate::shows::Show;
use crate::venues::Venue;

pub const TABLE_ARTISTS: &str = "artists";
pub const TABLE_VENUES: &str = "venues";
pub const TABLE_SHOWS: &str = "shows";

const CREATE_TABLES: &str = r"
    CREATE TABLE IF NOT EXISTS artists(
        id INTEGER PRIMARY KEY,
        name TEXT
    );

    CREATE TABLE IF NOT EXISTS venues(
        id INTEGER PRIMARY KEY,
        name TEXT,
        city TEXT,
        state TEXT
    );

    CREATE TABLE IF NOT EXISTS shows(
        id INTEGER PRIMARY KEY,
        artist INTEGER,
        venue INTEGER,
        date INTEGER,
        FOREIGN KEY(artist) REFERENCES artists(id),
        FOREIGN KEY(venue) REFERENCES venues(id)
    );
";

// shows go first, they reference the other two
const DROP_TABLES: &str = r"
    DROP TABLE IF EXISTS shows;
    DROP TABLE IF EXISTS venues;
    DROP TABLE IF EXISTS artists;
";

/// The connection is closed when the store is dropped.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("opening {:?}", path.as_ref());
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Drops all tables. Safe to call on an empty or already reset store.
    pub fn reset(&self) -> Result<()> {
        info!("dropping tables...");
        self.conn.execute_batch(DROP_TABLES)?;
        Ok(())
    }

    pub fn create_tables(&self) -> Result<()> {
        info!("creating tables...");
        self.conn.execute_batch(CREATE_TABLES)?;
        Ok(())
    }

    /// Inserts the dataset table by table. Every table is written in its own
    /// transaction, so a failure leaves earlier tables written.
    pub fn write(&mut self, dataset: &Dataset) -> Result<()> {
        self.create_tables()?;
        self.write_artists(&dataset.artists)?;
        self.write_venues(&dataset.venues)?;
        self.write_shows(&dataset.shows)?;
        Ok(())
    }

    fn write_artists(&mut self, artists: &[Artist]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached("INSERT INTO artists (id, name) VALUES (?1, ?2)")?;
            for artist in artists.iter() {
                stmt.execute(params![artist.id as i64, artist.name])?;
            }
        }
        tx.commit()?;
        info!("{} artist(s) written", artists.len());
        Ok(())
    }

    fn write_venues(&mut self, venues: &[Venue]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO venues (id, name, city, state) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for venue in venues.iter() {
                stmt.execute(params![venue.id as i64, venue.name, venue.city, venue.state])?;
            }
        }
        tx.commit()?;
        info!("{} venue(s) written", venues.len());
        Ok(())
    }

    fn write_shows(&mut self, shows: &[Show]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO shows (id, artist, venue, date) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for show in shows.iter() {
                stmt.execute(params![
                    show.id as i64,
                    show.artist_id as i64,
                    show.venue_id as i64,
                    show.date
                ])?;
            }
        }
        tx.commit()?;
        info!("{} show(s) written", shows.len());
        Ok(())
    }

    pub fn count(&self, table: &str) -> Result<u64> {
        match table {
            TABLE_ARTISTS | TABLE_VENUES | TABLE_SHOWS => {}
            _ => {
                return Err(ConcertsGenError::Internal(format!(
                    "unknown table {table:?}"
                )));
            }
        }

        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(n as u64)
    }

    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(n > 0)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
