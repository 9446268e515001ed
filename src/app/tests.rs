use super::*;
use crate::track::Track;

fn t(id: &str) -> Track {
    Track {
        id: id.into(),
        image: "/fallback.jpg".into(),
        title: format!("Song {id}"),
        subtitle: "Artist".into(),
        audio: Some(format!("https://cdn.example/{id}.mp3")),
    }
}

#[test]
fn stale_search_results_are_dropped() {
    let mut app = App::new();

    let old = app.next_search_generation();
    let newer = app.next_search_generation();

    // The slow old response lands after the newer request was issued.
    assert!(!app.apply_results(old, vec![t("stale")]));
    assert!(app.results.is_empty());

    assert!(app.apply_results(newer, vec![t("fresh")]));
    assert_eq!(app.results[0].id, "fresh");
}

#[test]
fn applying_results_clamps_the_selection() {
    let mut app = App::new();
    app.selected = 7;

    let generation = app.next_search_generation();
    app.apply_results(generation, vec![t("1"), t("2")]);

    assert_eq!(app.selected, 1);
}

#[test]
fn applying_results_marks_playlist_dirty() {
    let mut app = App::new();
    let generation = app.next_search_generation();
    app.apply_results(generation, vec![t("1")]);
    assert!(app.playlist_dirty);
}

#[test]
fn query_edits_mark_search_dirty() {
    let mut app = App::new();
    assert!(!app.search_dirty);

    app.push_query_char('a');
    assert!(app.search_dirty);
    assert_eq!(app.query, "a");

    app.search_dirty = false;
    app.pop_query_char();
    assert!(app.search_dirty);
    assert!(app.query.is_empty());
}

#[test]
fn selection_wraps_both_ways() {
    let mut app = App::new();

    app.select_next(3);
    app.select_next(3);
    app.select_next(3);
    assert_eq!(app.selected, 0);

    app.select_prev(3);
    assert_eq!(app.selected, 2);
}

#[test]
fn selection_is_a_noop_on_empty_lists() {
    let mut app = App::new();
    app.select_next(0);
    app.select_prev(0);
    assert_eq!(app.selected, 0);
}

#[test]
fn toggling_pane_resets_the_cursor() {
    let mut app = App::new();
    app.selected = 4;

    app.toggle_pane();
    assert_eq!(app.pane, Pane::Recent);
    assert_eq!(app.selected, 0);

    app.toggle_pane();
    assert_eq!(app.pane, Pane::Results);
}
