use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::ConcertsGenError;
use crate::error::Result;
use crate::template::parse_formats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: u64,
    pub name: String,
}

/// Names may repeat across artists.
pub fn generate_artists<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    name_formats: &[&str],
    words: &[String],
    names: &[String],
) -> Result<Vec<Artist>> {
    let templates = parse_formats(name_formats, "artist")?;

    let mut artists = Vec::with_capacity(count);
    for idx in 0..count {
        let tpl = templates
            .choose(rng)
            .ok_or_else(|| ConcertsGenError::Internal("no artist template".to_string()))?;
        let artist = Artist {
            id: idx as u64 + 1,
            name: tpl.expand(rng, words, names, None)?,
        };
        debug!("artist {}: {}", artist.id, artist.name);
        artists.push(artist);
    }

    Ok(artists)
}
