use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::Rng;
use tracing::info;

use crate::artists::generate_artists;
use crate::artists::Artist;
use crate::defaults::ANOTHER_SHOW_CHANCE;
use crate::defaults::ARTIST_NAME_FORMATS;
use crate::defaults::DAYS_PAST_NOW;
use crate::defaults::EARLIEST_SHOW_DATE;
use crate::defaults::MAX_DAYS_BETWEEN_SHOWS;
use crate::defaults::NUMBER_OF_ARTISTS;
use crate::defaults::NUMBER_OF_VENUES;
use crate::defaults::TOURING_TIMEZONE;
use crate::defaults::VENUE_NAME_FORMATS;
use crate::defaults::VENUE_STATE;
use crate::error::Result;
use crate::shows;
use crate::shows::generate_shows;
use crate::shows::Show;
use crate::sources::Sources;
use crate::venues::generate_venues;
use crate::venues::Venue;

#[derive(Debug, Clone)]
pub struct Config {
    pub number_of_artists: usize,
    pub number_of_venues: usize,
    pub artist_name_formats: &'static [&'static str],
    pub venue_name_formats: &'static [&'static str],
    pub venue_state: String,
    pub shows: shows::Config,
}

impl Config {
    /// Default run; the touring window ends `DAYS_PAST_NOW` days after `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            number_of_artists: NUMBER_OF_ARTISTS,
            number_of_venues: NUMBER_OF_VENUES,
            artist_name_formats: ARTIST_NAME_FORMATS,
            venue_name_formats: VENUE_NAME_FORMATS,
            venue_state: VENUE_STATE.to_string(),
            shows: shows::Config {
                from: *EARLIEST_SHOW_DATE,
                to: now.with_timezone(&*TOURING_TIMEZONE) + Duration::days(DAYS_PAST_NOW),
                timezone: *TOURING_TIMEZONE,
                another_show_chance: ANOTHER_SHOW_CHANCE,
                max_days_between_shows: MAX_DAYS_BETWEEN_SHOWS,
                max_shows_per_artist: None,
            },
        }
    }
}

/// Everything one run produces. Nothing is written until the whole dataset exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub artists: Vec<Artist>,
    pub venues: Vec<Venue>,
    pub shows: Vec<Show>,
}

pub struct Generator<R> {
    rng: R,
    cfg: Config,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, cfg: Config) -> Self {
        Self { rng, cfg }
    }

    pub fn generate(&mut self, sources: &Sources) -> Result<Dataset> {
        info!("generating {} artists...", self.cfg.number_of_artists);
        let artists = generate_artists(
            &mut self.rng,
            self.cfg.number_of_artists,
            self.cfg.artist_name_formats,
            &sources.words,
            &sources.names,
        )?;

        info!("generating {} venues...", self.cfg.number_of_venues);
        let venues = generate_venues(
            &mut self.rng,
            self.cfg.number_of_venues,
            self.cfg.venue_name_formats,
            &sources.words,
            &sources.names,
            &sources.cities,
            &self.cfg.venue_state,
        )?;

        info!(
            "generating shows from {} to {}...",
            self.cfg.shows.from, self.cfg.shows.to
        );
        let shows = generate_shows(&mut self.rng, self.cfg.shows.clone(), &artists, &venues)?;
        info!("{} show(s) generated", shows.len());

        Ok(Dataset {
            artists,
            venues,
            shows,
        })
    }
}
