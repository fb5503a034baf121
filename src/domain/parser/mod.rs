//! Natural-language trip request parser.
//!
//! Turns text such as "visit a museum, then lunch, avoid hotels" into an
//! [`Itinerary`]: a detected region, an ordered list of venue requests tagged
//! with an optional time of day, and the venue types the user excluded.
//!
//! # Algorithm
//!
//! 1. Lowercase the input and look for a known region anywhere in it.
//! 2. Split into clauses on `. , ! ?` and on the connectives "then",
//!    "after that" and "and".
//! 3. Per clause, take the first keyword of each venue type. A keyword within
//!    [`keywords::NEGATION_SCOPE`] words after a negation word becomes an
//!    exclusion, otherwise a request.
//! 4. Concatenate clause results and collapse consecutive requests of the
//!    same type. Exclusions are kept as found.
//!
//! Parsing never fails; unrecognised text yields an empty itinerary.

pub mod keywords;

use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::{Exclusion, Itinerary, RegionCatalog, TimeOfDay, VenueRequest};
use keywords::{NEGATION_SCOPE, TIME_KEYWORDS, VENUE_KEYWORDS, is_negation, matches_keyword};

static CLAUSE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,!?]|\bthen\b|\bafter that\b|\band\b").unwrap());

/// Stateless parser over a shared region catalog.
#[derive(Debug, Clone)]
pub struct ItineraryParser {
    regions: Arc<RegionCatalog>,
}

impl ItineraryParser {
    pub fn new(regions: Arc<RegionCatalog>) -> Self {
        Self { regions }
    }

    /// Parses a trip request into an [`Itinerary`].
    pub fn parse(&self, input: &str) -> Itinerary {
        let lowercase = input.to_lowercase();

        let mut venue_requests = Vec::new();
        let mut exclusions = Vec::new();

        for clause in split_into_clauses(&lowercase) {
            let (requests, excluded) = extract_venues(clause);
            venue_requests.extend(requests);
            exclusions.extend(excluded);
        }

        collapse_consecutive(&mut venue_requests);

        let itinerary = Itinerary {
            region: self.regions.find_in(&lowercase).map(str::to_string),
            venue_requests,
            exclusions,
            original_text: input.to_string(),
        };

        tracing::debug!(
            region = itinerary.region.as_deref().unwrap_or("-"),
            requests = itinerary.venue_requests.len(),
            exclusions = itinerary.exclusions.len(),
            "Parsed trip request"
        );

        itinerary
    }
}

/// Splits lowercase text into trimmed, non-empty clauses.
fn split_into_clauses(text: &str) -> Vec<&str> {
    CLAUSE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}

/// Splits a clause into words, dropping surrounding punctuation.
fn tokenize(clause: &str) -> Vec<String> {
    clause
        .split_whitespace()
        .map(|word| {
            word.replace('\u{2019}', "'")
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_string()
        })
        .collect()
}

/// Extracts at most one request or exclusion per venue type from a clause.
fn extract_venues(clause: &str) -> (Vec<VenueRequest>, Vec<Exclusion>) {
    let words = tokenize(clause);

    let negations: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| is_negation(word))
        .map(|(index, _)| index)
        .collect();

    let time_of_day = time_of_day(clause);
    let mut requests = Vec::new();
    let mut exclusions = Vec::new();

    for (venue_type, venue_keywords) in VENUE_KEYWORDS.iter() {
        let Some(position) = venue_keywords.iter().find_map(|keyword| {
            words
                .iter()
                .position(|word| matches_keyword(word, keyword))
        }) else {
            continue;
        };

        let entry = VenueRequest::new(*venue_type, time_of_day, clause);

        if is_negated(position, &negations) {
            exclusions.push(entry);
        } else {
            requests.push(entry);
        }
    }

    (requests, exclusions)
}

/// A word is negated when it falls within the scope window after any negation.
fn is_negated(position: usize, negations: &[usize]) -> bool {
    negations
        .iter()
        .any(|&negation| position > negation && position - negation <= NEGATION_SCOPE)
}

/// First period whose indicator occurs anywhere in the clause text.
fn time_of_day(clause: &str) -> Option<TimeOfDay> {
    TIME_KEYWORDS
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|word| clause.contains(word)))
        .map(|(period, _)| *period)
}

fn collapse_consecutive(requests: &mut Vec<VenueRequest>) {
    requests.dedup_by(|current, previous| current.venue_type == previous.venue_type);
}
