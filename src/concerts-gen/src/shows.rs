use std::ops::RangeInclusive;

use chrono::DateTime;
use chrono::Duration;
use chrono::FixedOffset;
use rand::prelude::*;
use tracing::debug;

use crate::artists::Artist;
use crate::error::ConcertsGenError;
use crate::error::Result;
use crate::venues::Venue;

pub const CONCERT_HOURS: RangeInclusive<u32> = 13..=23;
pub const CONCERT_MINUTES: [u32; 4] = [0, 15, 30, 45];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: u64,
    pub artist_id: u64,
    pub venue_id: u64,
    // unix seconds
    pub date: i64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
    /// Zone in which concert hours are applied.
    pub timezone: FixedOffset,
    pub another_show_chance: u32,
    pub max_days_between_shows: i64,
    pub max_shows_per_artist: Option<usize>,
}

/// Schedules tours artist by artist. Show ids keep growing across artists.
pub struct Scheduler {
    timezone: FixedOffset,
    // unix seconds
    from_timestamp: i64,
    to_timestamp: i64,
    another_show_chance: u32,
    max_gap_seconds: i64,
    max_shows_per_artist: Option<usize>,
    next_id: u64,
}

impl Scheduler {
    pub fn try_new(cfg: Config) -> Result<Self> {
        if cfg.from >= cfg.to {
            return Err(ConcertsGenError::Internal(format!(
                "empty touring window: {} - {}",
                cfg.from, cfg.to
            )));
        }
        if cfg.max_days_between_shows < 1 {
            return Err(ConcertsGenError::Internal(format!(
                "max days between shows should be positive, got {}",
                cfg.max_days_between_shows
            )));
        }
        // chance 0 always draws another show
        if cfg.another_show_chance == 0 && cfg.max_shows_per_artist.is_none() {
            return Err(ConcertsGenError::Internal(
                "another show chance 0 needs a max shows per artist".to_string(),
            ));
        }

        Ok(Self {
            timezone: cfg.timezone,
            from_timestamp: cfg.from.timestamp(),
            to_timestamp: cfg.to.timestamp(),
            another_show_chance: cfg.another_show_chance,
            max_gap_seconds: Duration::days(cfg.max_days_between_shows).num_seconds(),
            max_shows_per_artist: cfg.max_shows_per_artist,
            next_id: 1,
        })
    }

    /// Appends the artist's tour to `shows`. A tour may be empty.
    pub fn tour<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        artist: &Artist,
        venues: &[Venue],
        shows: &mut Vec<Show>,
    ) -> Result<usize> {
        let from = rng.gen_range(self.from_timestamp..self.to_timestamp);
        let mut show_date = self.concert_time(rng, from, None)?;

        let mut played = 0;
        loop {
            if let Some(max) = self.max_shows_per_artist {
                if played >= max {
                    break;
                }
            }
            if !self.is_touring(rng) {
                break;
            }

            let venue = venues
                .choose(rng)
                .ok_or_else(|| ConcertsGenError::EmptySource("venue list is empty".to_string()))?;
            let show = Show {
                id: self.next_id,
                artist_id: artist.id,
                venue_id: venue.id,
                date: show_date,
            };
            debug!(
                "show {}: {} at {} on {}",
                show.id,
                artist.name,
                venue.name,
                self.to_datetime(show_date)?
            );
            shows.push(show);
            self.next_id += 1;
            played += 1;

            let next = rng.gen_range(show_date..show_date + self.max_gap_seconds);
            show_date = self.concert_time(rng, next, Some(show_date))?;
        }

        Ok(played)
    }

    fn is_touring<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_range(0..=self.another_show_chance) == 0
    }

    fn to_datetime(&self, timestamp: i64) -> Result<DateTime<FixedOffset>> {
        DateTime::from_timestamp(timestamp, 0)
            .map(|dt| dt.with_timezone(&self.timezone))
            .ok_or_else(|| ConcertsGenError::Internal(format!("invalid timestamp {timestamp}")))
    }

    /// Moves the timestamp to a random concert slot of the same calendar day. Slots
    /// before `not_before` are skipped.
    fn concert_time<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        timestamp: i64,
        not_before: Option<i64>,
    ) -> Result<i64> {
        let day = self.to_datetime(timestamp)?.date_naive();
        let slots: Vec<i64> = CONCERT_HOURS
            .flat_map(|hour| CONCERT_MINUTES.into_iter().map(move |minute| (hour, minute)))
            .filter_map(|(hour, minute)| day.and_hms_opt(hour, minute, 0))
            .filter_map(|dt| dt.and_local_timezone(self.timezone).single())
            .map(|dt| dt.timestamp())
            .filter(|ts| not_before.map_or(true, |nb| *ts >= nb))
            .collect();

        slots.choose(rng).copied().ok_or_else(|| {
            ConcertsGenError::Internal(format!("no concert slot left on {day}"))
        })
    }
}

pub fn generate_shows<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: Config,
    artists: &[Artist],
    venues: &[Venue],
) -> Result<Vec<Show>> {
    let mut scheduler = Scheduler::try_new(cfg)?;
    let mut shows = Vec::new();
    for artist in artists.iter() {
        scheduler.tour(rng, artist, venues, &mut shows)?;
    }

    Ok(shows)
}
