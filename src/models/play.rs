//! Play catalog model and the genre enum.
//!
//! Plays carry their genre as the raw string supplied by the catalog. The
//! string is only interpreted as a [`Genre`] when a statement is computed, so
//! a catalog holding an unsupported genre still loads and only the invoices
//! that reference such a play fail.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};

/// The recognized play genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Tragedy, billed from a flat base with a large-audience surcharge.
    Tragedy,
    /// Comedy, billed per head with an additional large-audience surcharge.
    Comedy,
    /// History, billed from a small base plus a per-head rate.
    History,
}

impl Genre {
    /// Returns the catalog tag for this genre.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::History => "history",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = BillingError;

    /// Parses a catalog genre tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use theater_billing::models::Genre;
    ///
    /// assert_eq!("comedy".parse::<Genre>().unwrap(), Genre::Comedy);
    /// assert!("farce".parse::<Genre>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            "history" => Ok(Genre::History),
            other => Err(BillingError::UnknownGenre {
                genre: other.to_string(),
            }),
        }
    }
}

/// A play as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name of the play.
    pub name: String,
    /// Genre tag as supplied by the catalog (e.g., "tragedy").
    #[serde(rename = "type")]
    pub play_type: String,
}

impl Play {
    /// Resolves the play's genre tag.
    ///
    /// Returns `UnknownGenre` when the tag is not one of the recognized genres.
    pub fn genre(&self) -> BillingResult<Genre> {
        self.play_type.parse()
    }
}

/// Lookup table from play identifier to play.
///
/// Serialized as a plain JSON object keyed by play identifier, matching the
/// catalog files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a play under the given identifier.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) -> Option<Play> {
        self.plays.insert(play_id.into(), play)
    }

    /// Looks up a play by identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use theater_billing::models::{Play, PlayCatalog};
    ///
    /// let mut catalog = PlayCatalog::new();
    /// catalog.insert("hamlet", Play { name: "Hamlet".into(), play_type: "tragedy".into() });
    ///
    /// assert_eq!(catalog.get("hamlet").unwrap().name, "Hamlet");
    /// assert!(catalog.get("macbeth").is_err());
    /// ```
    pub fn get(&self, play_id: &str) -> BillingResult<&Play> {
        self.plays
            .get(play_id)
            .ok_or_else(|| BillingError::PlayNotFound {
                play_id: play_id.to_string(),
            })
    }

    /// Returns the number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns true if the catalog holds no plays.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}
