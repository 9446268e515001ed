use super::api::{SearchResponse, normalize};

fn parse(body: &str) -> SearchResponse {
    serde_json::from_str(body).unwrap()
}

#[test]
fn normalizes_a_full_result() {
    let body = r#"{
        "success": true,
        "data": { "results": [{
            "id": "abc123",
            "name": "Some Song",
            "image": [
                {"url": "small.jpg"},
                {"url": "medium.jpg"},
                {"url": "large.jpg"}
            ],
            "primaryArtists": "First Artist, Second Artist",
            "downloadUrl": [
                {"url": "96.mp4"},
                {"url": "160.mp4"},
                {"url": "320.mp4"}
            ]
        }] }
    }"#;

    let tracks = normalize(parse(body), 20);
    assert_eq!(tracks.len(), 1);
    let t = &tracks[0];
    assert_eq!(t.id, "abc123");
    assert_eq!(t.title, "Some Song");
    assert_eq!(t.subtitle, "First Artist, Second Artist");
    assert_eq!(t.image, "large.jpg");
    assert_eq!(t.audio.as_deref(), Some("320.mp4"));
}

#[test]
fn image_and_stream_variants_fall_back_in_order() {
    let body = r#"{
        "success": true,
        "data": { "results": [{
            "id": 42,
            "title": "Titled Differently",
            "image": [{"url": "only.jpg"}],
            "downloadUrl": [{"url": "96.mp4"}, {"url": "160.mp4"}]
        }] }
    }"#;

    let tracks = normalize(parse(body), 20);
    let t = &tracks[0];
    // Numeric id is stringified.
    assert_eq!(t.id, "42");
    // `name` absent, `title` used.
    assert_eq!(t.title, "Titled Differently");
    // index 2 and 1 missing -> index 0.
    assert_eq!(t.image, "only.jpg");
    // index 2 missing -> index 1.
    assert_eq!(t.audio.as_deref(), Some("160.mp4"));
}

#[test]
fn artist_list_joins_when_primary_artists_missing() {
    let body = r#"{
        "success": true,
        "data": { "results": [{
            "id": "x",
            "name": "Song",
            "artists": { "primary": [{"name": "One"}, {"name": "Two"}] }
        }] }
    }"#;

    let tracks = normalize(parse(body), 20);
    assert_eq!(tracks[0].subtitle, "One, Two");
}

#[test]
fn missing_fields_get_fallbacks_and_no_audio() {
    let body = r#"{
        "success": true,
        "data": { "results": [{}] }
    }"#;

    let tracks = normalize(parse(body), 20);
    let t = &tracks[0];
    assert_eq!(t.title, "Unknown Title");
    assert_eq!(t.subtitle, "Unknown Artist");
    assert_eq!(t.image, "/fallback.jpg");
    assert_eq!(t.audio, None);
    assert!(!t.is_playable());
}

#[test]
fn unsuccessful_response_yields_no_tracks() {
    let body = r#"{ "success": false, "data": { "results": [{"id": "x"}] } }"#;
    assert!(normalize(parse(body), 20).is_empty());
}

#[test]
fn results_are_capped() {
    let results: Vec<String> = (0..30)
        .map(|i| format!(r#"{{"id": "{i}", "name": "Song {i}"}}"#))
        .collect();
    let body = format!(
        r#"{{ "success": true, "data": {{ "results": [{}] }} }}"#,
        results.join(",")
    );

    let tracks = normalize(parse(&body), 20);
    assert_eq!(tracks.len(), 20);
    assert_eq!(tracks[0].id, "0");
    assert_eq!(tracks[19].id, "19");
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{
        "success": true,
        "data": { "results": [{
            "id": "x",
            "name": "Song",
            "type": "song",
            "year": "2020",
            "playCount": 12345,
            "explicitContent": false
        }] }
    }"#;

    let tracks = normalize(parse(body), 20);
    assert_eq!(tracks[0].id, "x");
}
