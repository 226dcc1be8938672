use rand::distributions::WeightedError;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use tracing::debug;

use crate::error::ConcertsGenError;
use crate::error::Result;
use crate::sources::City;
use crate::template::parse_formats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: u64,
    pub name: String,
    pub city: String,
    pub state: String,
}

/// Samples city names with probability proportional to population.
pub struct CityProvider<'a> {
    cities: &'a [City],
    weight_idx: WeightedIndex<u64>,
}

impl<'a> CityProvider<'a> {
    pub fn try_new(cities: &'a [City]) -> Result<Self> {
        let weight_idx = WeightedIndex::new(cities.iter().map(|c| c.population)).map_err(
            |err| match err {
                WeightedError::NoItem => {
                    ConcertsGenError::EmptySource("city list is empty".to_string())
                }
                err => ConcertsGenError::Internal(format!("city populations: {err}")),
            },
        )?;

        Ok(Self { cities, weight_idx })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a City {
        &self.cities[self.weight_idx.sample(rng)]
    }
}

pub fn generate_venues<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    name_formats: &[&str],
    words: &[String],
    names: &[String],
    cities: &[City],
    state: &str,
) -> Result<Vec<Venue>> {
    let templates = parse_formats(name_formats, "venue")?;
    let city_provider = CityProvider::try_new(cities)?;

    let mut venues = Vec::with_capacity(count);
    for idx in 0..count {
        let city = city_provider.sample(rng);
        let tpl = templates
            .choose(rng)
            .ok_or_else(|| ConcertsGenError::Internal("no venue template".to_string()))?;
        let venue = Venue {
            id: idx as u64 + 1,
            name: tpl.expand(rng, words, names, Some(city.city.as_str()))?,
            city: city.city.clone(),
            state: state.to_string(),
        };
        debug!("venue {}: {} ({})", venue.id, venue.name, venue.city);
        venues.push(venue);
    }

    Ok(venues)
}
