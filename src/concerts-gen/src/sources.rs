use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::defaults::CITIES_FILE;
use crate::defaults::NAMES_FILE;
use crate::defaults::WORDS_FILE;
use crate::error::ConcertsGenError;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct City {
    pub city: String,
    pub population: u64,
}

/// Reads a newline-delimited list, skipping blank lines. Every call hits the disk.
pub fn load_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConcertsGenError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<City>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConcertsGenError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub struct Sources {
    pub names: Vec<String>,
    pub words: Vec<String>,
    pub cities: Vec<City>,
}

impl Sources {
    pub fn load(data_path: &Path) -> Result<Self> {
        info!("loading names...");
        let names = load_list(data_path.join(NAMES_FILE))?;
        info!("loading words...");
        let words = load_list(data_path.join(WORDS_FILE))?;
        info!("loading cities...");
        let cities = load_cities(data_path.join(CITIES_FILE))?;
        info!(
            "loaded {} names, {} words, {} cities",
            names.len(),
            words.len(),
            cities.len()
        );

        Ok(Self {
            names,
            words,
            cities,
        })
    }
}
