//! Static franchise reference data and filter thresholds.
//!
//! Lookup tables are compile-time constants, never user input; eligibility
//! rules elsewhere consult these and nothing else.

mod actors;
mod titles;

pub use actors::{EON_ACTORS, is_eon_actor};
pub use titles::{CANONICAL_TITLES, is_canonical_title};

/// GeneralSearch mode: minimum films an actor must have in the full dataset.
pub const GENERAL_SEARCH_MIN_FILMS: usize = 5;

/// GeneralSearch mode: minimum summed votes across an actor's films.
pub const GENERAL_SEARCH_MIN_VOTES: u64 = 1000;

/// Rows with fewer votes than this are dropped during preprocessing.
pub const MIN_VOTE_FLOOR: u64 = 500;

/// Rating-band cut points for the timeline chart, right-closed bins:
/// (0, 6] "Below 6", (6, 7] "6-7", (7, 8] "7-8", above that "8+".
pub const RATING_BAND_CUTS: [f64; 3] = [6.0, 7.0, 8.0];

pub const RATING_BAND_LABELS: [&str; 4] = ["Below 6", "6-7", "7-8", "8+"];

/// Band label for a rating, per `RATING_BAND_CUTS`.
pub fn rating_band(rating: f64) -> &'static str {
    for (cut, label) in RATING_BAND_CUTS.iter().zip(RATING_BAND_LABELS) {
        if rating <= *cut {
            return label;
        }
    }
    RATING_BAND_LABELS[3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eon_actor_lookup() {
        assert!(is_eon_actor("Sean Connery"));
        assert!(is_eon_actor("Daniel Craig"));
        assert!(!is_eon_actor("David Niven"));
    }

    #[test]
    fn canonical_title_lookup() {
        assert!(is_canonical_title("Dr. No"));
        assert!(is_canonical_title("No Time to Die"));
        assert!(!is_canonical_title("Casino Royale (1967)"));
    }

    #[test]
    fn rating_bands_are_right_closed() {
        assert_eq!(rating_band(5.9), "Below 6");
        assert_eq!(rating_band(6.0), "Below 6");
        assert_eq!(rating_band(6.1), "6-7");
        assert_eq!(rating_band(7.0), "6-7");
        assert_eq!(rating_band(7.5), "7-8");
        assert_eq!(rating_band(8.0), "7-8");
        assert_eq!(rating_band(8.1), "8+");
        assert_eq!(rating_band(9.9), "8+");
    }
}
