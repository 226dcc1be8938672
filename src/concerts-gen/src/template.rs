use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConcertsGenError;
use crate::error::Result;

pub const WORD_MARKER: char = '_';
pub const NAME_MARKER: char = '*';
pub const CITY_MARKER: char = '^';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Word,
    Name,
    City,
}

/// Name format split into literal segments and markers. Substituted text is never
/// scanned for markers again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    pub fn parse(format: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        for c in format.chars() {
            let marker = match c {
                WORD_MARKER => Token::Word,
                NAME_MARKER => Token::Name,
                CITY_MARKER => Token::City,
                _ => {
                    literal.push(c);
                    continue;
                }
            };

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(marker);
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self { tokens }
    }

    pub fn has_city(&self) -> bool {
        self.tokens.contains(&Token::City)
    }

    /// Resolves every marker with an independent draw (words and names may repeat)
    /// and title-cases the result.
    pub fn expand<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        words: &[String],
        names: &[String],
        city: Option<&str>,
    ) -> Result<String> {
        let mut out = String::new();
        for token in self.tokens.iter() {
            match token {
                Token::Literal(s) => out.push_str(s),
                Token::Word => out.push_str(choose(rng, words, "words")?),
                Token::Name => out.push_str(choose(rng, names, "names")?),
                Token::City => out.push_str(city.ok_or_else(|| {
                    ConcertsGenError::EmptySource("no city for venue name".to_string())
                })?),
            }
        }

        Ok(title_case(&out))
    }
}

pub fn parse_formats(formats: &[&str], what: &str) -> Result<Vec<Template>> {
    if formats.is_empty() {
        return Err(ConcertsGenError::EmptySource(format!(
            "{what} name formats are empty"
        )));
    }

    Ok(formats.iter().map(|f| Template::parse(f)).collect())
}

fn choose<'a, R: Rng + ?Sized>(rng: &mut R, list: &'a [String], what: &str) -> Result<&'a str> {
    list.choose(rng)
        .map(String::as_str)
        .ok_or_else(|| ConcertsGenError::EmptySource(format!("{what} list is empty")))
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest, so
/// "o'brien hip-hop" becomes "O'Brien Hip-Hop".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if !c.is_alphabetic() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
