use chrono::DateTime;
use chrono::FixedOffset;
use lazy_static::lazy_static;

pub const NUMBER_OF_ARTISTS: usize = 200;
pub const NUMBER_OF_VENUES: usize = 20;
// a tour goes on with probability 1 / (ANOTHER_SHOW_CHANCE + 1) before each show
pub const ANOTHER_SHOW_CHANCE: u32 = 4;
pub const DAYS_PAST_NOW: i64 = 50;
pub const MAX_DAYS_BETWEEN_SHOWS: i64 = 10;
pub const VENUE_STATE: &str = "MN";

pub const SHOW_START_DATE_ISO: &str = "2021-01-01T00:00:00-06:00";
// central time
pub const TOURING_UTC_OFFSET_SECS: i32 = -6 * 3600;

pub const DATA_PATH: &str = "data";
pub const NAMES_FILE: &str = "names.txt";
pub const WORDS_FILE: &str = "words.txt";
pub const CITIES_FILE: &str = "cities.json";
pub const DATABASE_PATH: &str = "concerts.sqlite3";

/// `_` is a random word, `*` is a name.
pub const ARTIST_NAME_FORMATS: &[&str] = &[
    "_",
    "*",
    "*, * and *",
    "* _",
    "_ _",
    "The _",
    "The _ _",
    "* _ and the _ _",
    "* _ and the _ _ _",
];

/// `_` is a random word, `*` is a name, `^` is the venue's city.
pub const VENUE_NAME_FORMATS: &[&str] = &[
    "the _ club",
    "the _ theater",
    "* _ lounge",
    "_ center",
    "the _ _ center",
    "the * music house",
    "the ^ _ center",
];

lazy_static! {
    pub static ref TOURING_TIMEZONE: FixedOffset =
        FixedOffset::east_opt(TOURING_UTC_OFFSET_SECS).unwrap();
    pub static ref EARLIEST_SHOW_DATE: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339(SHOW_START_DATE_ISO).unwrap();
}
