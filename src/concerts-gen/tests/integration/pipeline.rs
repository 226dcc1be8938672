use std::collections::HashMap;
use std::collections::HashSet;
use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use chrono::Duration;
use chrono::Utc;
use concerts_gen::db::Store;
use concerts_gen::db::TABLE_ARTISTS;
use concerts_gen::db::TABLE_SHOWS;
use concerts_gen::db::TABLE_VENUES;
use concerts_gen::defaults::CITIES_FILE;
use concerts_gen::defaults::EARLIEST_SHOW_DATE;
use concerts_gen::defaults::NAMES_FILE;
use concerts_gen::defaults::WORDS_FILE;
use concerts_gen::generator;
use concerts_gen::sources::Sources;
use concerts_gen::Generator;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn data_dir() -> PathBuf {
    let path = temp_dir().join(Uuid::new_v4().to_string());
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join(NAMES_FILE), "sharon\nziggy\nbillie\n").unwrap();
    fs::write(path.join(WORDS_FILE), "jones\nstardust\n\nspiders\nmars\n").unwrap();
    fs::write(
        path.join(CITIES_FILE),
        r#"[
            {"city": "Minneapolis", "population": 429954},
            {"city": "Saint Paul", "population": 311527},
            {"city": "Duluth", "population": 86697}
        ]"#,
    )
    .unwrap();

    path
}

#[test]
fn test_single_show() {
    let data = data_dir();
    let sources = Sources::load(&data).unwrap();

    let mut cfg = generator::Config::new(Utc::now());
    cfg.number_of_artists = 1;
    cfg.number_of_venues = 1;
    cfg.shows.max_shows_per_artist = Some(1);
    // zeros always keep the artist touring, the cap ends the tour after one show
    let dataset = Generator::new(StepRng::new(0, 0), cfg)
        .generate(&sources)
        .unwrap();

    assert_eq!(dataset.artists.len(), 1);
    assert_eq!(dataset.artists[0].name, "Jones");
    assert_eq!(dataset.venues.len(), 1);
    assert_eq!(dataset.venues[0].name, "The Jones Club");
    assert_eq!(dataset.venues[0].city, "Minneapolis");
    assert_eq!(dataset.shows.len(), 1);

    let db_path = data.join("concerts.sqlite3");
    let mut store = Store::open(&db_path).unwrap();
    store.reset().unwrap();
    store.write(&dataset).unwrap();
    drop(store);

    let store = Store::open(&db_path).unwrap();
    let (id, artist, venue, date): (i64, i64, i64, i64) = store
        .connection()
        .query_row("SELECT id, artist, venue, date FROM shows", [], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(artist, 1);
    assert_eq!(venue, 1);
    assert_eq!(
        date,
        EARLIEST_SHOW_DATE.timestamp() + Duration::hours(13).num_seconds()
    );

    drop(store);
    fs::remove_dir_all(&data).unwrap();
}

#[test]
fn test_full_run() {
    let data = data_dir();
    let sources = Sources::load(&data).unwrap();
    let dataset = Generator::new(
        StdRng::seed_from_u64(7),
        generator::Config::new(Utc::now()),
    )
    .generate(&sources)
    .unwrap();

    let artist_ids: HashSet<u64> = dataset.artists.iter().map(|a| a.id).collect();
    let venue_ids: HashSet<u64> = dataset.venues.iter().map(|v| v.id).collect();
    let mut last_date: HashMap<u64, i64> = HashMap::new();
    for show in dataset.shows.iter() {
        assert!(artist_ids.contains(&show.artist_id));
        assert!(venue_ids.contains(&show.venue_id));
        if let Some(prev) = last_date.insert(show.artist_id, show.date) {
            assert!(prev <= show.date);
        }
    }

    let db_path = data.join("concerts.sqlite3");
    let mut store = Store::open(&db_path).unwrap();
    store.reset().unwrap();
    store.write(&dataset).unwrap();

    assert_eq!(store.count(TABLE_ARTISTS).unwrap(), 200);
    assert_eq!(store.count(TABLE_VENUES).unwrap(), 20);
    assert_eq!(
        store.count(TABLE_SHOWS).unwrap(),
        dataset.shows.len() as u64
    );

    // a second run over a reset store starts from scratch
    store.reset().unwrap();
    store.write(&dataset).unwrap();
    assert_eq!(store.count(TABLE_ARTISTS).unwrap(), 200);

    drop(store);
    fs::remove_dir_all(&data).unwrap();
}

#[test]
fn test_missing_data_dir() {
    let path = temp_dir().join(Uuid::new_v4().to_string());

    assert!(Sources::load(&path).is_err());
}
