use super::*;

fn film(title: &str, actor: &str, year: i32, rating: f64, votes: u64) -> FilmRecord {
    FilmRecord {
        title: title.to_string(),
        lead_actor: actor.to_string(),
        release_year: year,
        rating,
        runtime_minutes: 110,
        vote_count: votes,
        genres: vec!["Action".to_string()],
        decade: FilmRecord::decade_of(year),
    }
}

/// Mixed dataset: three core franchise films, one prolific generic actor
/// (6 films, plenty of votes), one actor below the film threshold, and one
/// prolific actor below the vote threshold.
fn mixed_dataset() -> Dataset {
    let mut films = vec![
        film("Dr. No", "Sean Connery", 1962, 7.2, 180_000),
        film("Goldfinger", "Sean Connery", 1964, 7.7, 200_000),
        film("GoldenEye", "Pierce Brosnan", 1995, 7.2, 280_000),
        // EON actor but not a canonical title: outside the core subset
        film("The Untouchables", "Sean Connery", 1987, 7.8, 320_000),
        // canonical title but a non-EON lead: also outside
        film("Casino Royale", "David Niven", 1967, 5.0, 32_000),
        // below the 5-film threshold in GeneralSearch
        film("One Hit", "Rare Actor", 1990, 8.0, 90_000),
    ];
    for i in 0..6 {
        films.push(film(
            &format!("Prolific {i}"),
            "Prolific Actor",
            1980 + i,
            6.0 + i as f64 * 0.1,
            10_000,
        ));
    }
    for i in 0..6 {
        films.push(film(
            &format!("Unseen {i}"),
            "Unpopular Actor",
            1980 + i,
            6.0,
            100,
        ));
    }
    Dataset::new(films)
}

fn selection(mode: FilterMode, actors: &[&str], years: (i32, i32)) -> FilterSelection {
    let mut sel = FilterSelection::new(mode, years);
    for actor in actors {
        sel.select_actor(*actor);
    }
    sel
}

// is_core_film

#[test]
fn core_film_requires_both_actor_and_title() {
    assert!(is_core_film(&film("Dr. No", "Sean Connery", 1962, 7.2, 1000)));
    assert!(!is_core_film(&film(
        "The Untouchables",
        "Sean Connery",
        1987,
        7.8,
        1000
    )));
    assert!(!is_core_film(&film(
        "Casino Royale",
        "David Niven",
        1967,
        5.0,
        1000
    )));
}

// eligible_actors

#[test]
fn core_mode_offers_eon_actors_present_in_core_rows() {
    let dataset = mixed_dataset();
    let eligible = eligible_actors(&dataset, FilterMode::CoreFranchise);
    let expected: Vec<&str> = vec!["Pierce Brosnan", "Sean Connery"];
    assert_eq!(eligible.iter().map(String::as_str).collect::<Vec<_>>(), expected);
}

#[test]
fn general_mode_applies_both_thresholds() {
    let dataset = mixed_dataset();
    let eligible = eligible_actors(&dataset, FilterMode::GeneralSearch);
    // Sean Connery: 3 rows only. Rare Actor: 1 row. Unpopular Actor: 6 rows
    // but 600 votes total. Only Prolific Actor clears both bars.
    assert_eq!(
        eligible.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["Prolific Actor"]
    );
}

#[test]
fn eligibility_ignores_year_and_actor_narrowing() {
    let dataset = mixed_dataset();
    let baseline = eligible_actors(&dataset, FilterMode::GeneralSearch);
    // Eligibility is a function of the dataset alone; recomputing it while
    // different selections are in play must give the same answer.
    for years in [(1980, 1981), (1800, 1801), (1962, 2021)] {
        let _ = apply_filter(&dataset, &selection(FilterMode::GeneralSearch, &["Prolific Actor"], years));
        assert_eq!(eligible_actors(&dataset, FilterMode::GeneralSearch), baseline);
    }
}

// apply_filter

#[test]
fn empty_actor_selection_yields_empty_view() {
    let dataset = mixed_dataset();
    let view = apply_filter(
        &dataset,
        &selection(FilterMode::CoreFranchise, &[], (1900, 2100)),
    );
    assert!(view.is_empty());
}

#[test]
fn year_range_is_inclusive_on_both_ends() {
    let dataset = mixed_dataset();
    let view = apply_filter(
        &dataset,
        &selection(FilterMode::CoreFranchise, &["Sean Connery"], (1962, 1964)),
    );
    let titles: Vec<_> = view.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["Dr. No", "Goldfinger"]);

    let narrow = apply_filter(
        &dataset,
        &selection(FilterMode::CoreFranchise, &["Sean Connery"], (1963, 1964)),
    );
    assert_eq!(narrow.len(), 1);
    assert_eq!(narrow.films()[0].title, "Goldfinger");
}

#[test]
fn core_mode_excludes_non_core_rows_for_selected_actor() {
    let dataset = mixed_dataset();
    // The Untouchables is a Connery film but not a canonical title.
    let view = apply_filter(
        &dataset,
        &selection(FilterMode::CoreFranchise, &["Sean Connery"], (1900, 2100)),
    );
    assert!(view.iter().all(|f| f.title != "The Untouchables"));
    assert_eq!(view.len(), 2);
}

#[test]
fn stale_selection_from_other_mode_is_ignored() {
    let dataset = mixed_dataset();
    // Sean Connery is selectable in core mode but ineligible in general
    // search (only 3 rows); carrying the selection over must not leak rows.
    let view = apply_filter(
        &dataset,
        &selection(
            FilterMode::GeneralSearch,
            &["Sean Connery", "Prolific Actor"],
            (1900, 2100),
        ),
    );
    assert!(view.iter().all(|f| f.lead_actor == "Prolific Actor"));
    assert_eq!(view.len(), 6);
}

#[test]
fn view_preserves_dataset_order() {
    let dataset = mixed_dataset();
    let view = apply_filter(
        &dataset,
        &selection(
            FilterMode::CoreFranchise,
            &["Sean Connery", "Pierce Brosnan"],
            (1900, 2100),
        ),
    );
    let years: Vec<_> = view.iter().map(|f| f.release_year).collect();
    assert_eq!(years, vec![1962, 1964, 1995]);
}

#[test]
fn distinct_actors_in_view_order() {
    let dataset = mixed_dataset();
    let view = apply_filter(
        &dataset,
        &selection(
            FilterMode::CoreFranchise,
            &["Sean Connery", "Pierce Brosnan"],
            (1900, 2100),
        ),
    );
    assert_eq!(view.actors(), vec!["Sean Connery", "Pierce Brosnan"]);
}

/// End-to-end scenario from the dashboard contract: with only three films,
/// nobody clears the 5-film bar, so GeneralSearch offers no actors and the
/// view stays empty regardless of what the user ticks.
#[test]
fn tiny_dataset_has_no_eligible_general_search_actors() {
    let dataset = Dataset::new(vec![
        film("TitleA", "ActorX", 1962, 7.9, 50_000),
        film("TitleB", "ActorX", 1964, 7.5, 40_000),
        film("TitleC", "ActorY", 1995, 6.5, 30_000),
    ]);
    assert!(eligible_actors(&dataset, FilterMode::GeneralSearch).is_empty());

    let view = apply_filter(
        &dataset,
        &selection(FilterMode::GeneralSearch, &["ActorX", "ActorY"], (1900, 2100)),
    );
    assert!(view.is_empty());

    let kpis = crate::metrics::summarize(&view);
    assert_eq!(kpis, dossier_types::KpiSummary::empty());
}
