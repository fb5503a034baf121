//! Fixed vocabulary used by the itinerary parser.
//!
//! All tables are immutable and shared process-wide.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::entities::{TimeOfDay, VenueType};

/// Number of words after a negation word that it still applies to.
pub const NEGATION_SCOPE: usize = 5;

/// Keywords per venue type, in lookup priority order.
pub static VENUE_KEYWORDS: [(VenueType, &[&str]); 3] = [
    (
        VenueType::Lodging,
        &["hotel", "motel", "inn", "resort", "lodge"],
    ),
    (
        VenueType::Dining,
        &[
            "restaurant",
            "cafe",
            "diner",
            "eatery",
            "bistro",
            "lunch",
            "dinner",
            "breakfast",
        ],
    ),
    (
        VenueType::Attraction,
        &[
            "attraction",
            "museum",
            "park",
            "gallery",
            "monument",
            "theater",
            "zoo",
            "garden",
            "visit",
        ],
    ),
];

/// Time-of-day indicators, first matching period wins.
pub static TIME_KEYWORDS: [(TimeOfDay, &[&str]); 3] = [
    (TimeOfDay::Morning, &["morning", "breakfast", "early"]),
    (TimeOfDay::Afternoon, &["afternoon", "lunch"]),
    (TimeOfDay::Evening, &["evening", "dinner", "night"]),
];

pub static NEGATION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "not", "no", "don't", "dont", "doesn't", "doesnt", "never", "without", "except",
        "exclude", "avoiding", "avoid",
    ])
});

/// Returns true if `token` is `keyword` or a simple plural of it.
pub fn matches_keyword(token: &str, keyword: &str) -> bool {
    token == keyword
        || token.strip_suffix('s') == Some(keyword)
        || token.strip_suffix("es") == Some(keyword)
}

pub fn is_negation(token: &str) -> bool {
    NEGATION_WORDS.contains(token)
}
