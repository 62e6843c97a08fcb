//! Integration tests for the search pipeline: decode a provider payload,
//! aggregate it into day cards, and drive the carousel over them.

use std::time::Duration;

use skycast_core::carousel::CardGeometry;
use skycast_core::{Carousel, MAX_FORECAST_DAYS, Phase, daily_representatives};

const GEOMETRY: CardGeometry = CardGeometry {
    card_width: 28.0,
    gap: 2.0,
};

/// A full provider forecast payload: 40 samples at 3-hour intervals starting
/// at midnight UTC, alternating conditions.
fn forecast_body() -> String {
    let start = 1_764_633_600i64; // 2025-12-02 00:00:00 UTC
    let entries: Vec<String> = (0..40)
        .map(|i| {
            let (code, description) = if i % 2 == 0 {
                (800, "clear sky")
            } else {
                (500, "light rain")
            };
            format!(
                r#"{{"dt": {}, "main": {{"temp": {}.0, "feels_like": 9.0, "humidity": {}}},
                    "weather": [{{"id": {code}, "description": "{description}"}}]}}"#,
                start + i * 3 * 3600,
                10 + i % 5,
                50 + i % 20,
            )
        })
        .collect();
    format!(
        r#"{{"cod": "200", "message": 0, "city": {{"name": "Reykjavik", "timezone": 0}},
            "list": [{}]}}"#,
        entries.join(",")
    )
}

const CURRENT_BODY: &str = r#"{
    "cod": 200,
    "name": "Reykjavik",
    "dt": 1764669600,
    "weather": [{"id": 801, "description": "few clouds"}],
    "main": {"temp": 3.2, "feels_like": -0.8, "humidity": 76},
    "wind": {"speed": 9.3}
}"#;

/// Tick until the carousel finishes animating.
fn settle(carousel: &mut Carousel) {
    for _ in 0..100 {
        if carousel.phase() == Phase::Idle {
            return;
        }
        carousel.tick(Duration::from_millis(50));
    }
    panic!("carousel did not settle");
}

#[test]
fn search_pipeline_produces_five_noon_cards() {
    let bundle = skycast_core::client::decode_bundle(CURRENT_BODY, &forecast_body()).expect("bundle");
    assert_eq!(bundle.current.city, "Reykjavik");
    assert_eq!(bundle.samples.len(), 40);

    let days = daily_representatives(&bundle.samples, MAX_FORECAST_DAYS, bundle.utc_offset);
    assert_eq!(days.len(), 5);
    for pair in days.windows(2) {
        assert!(pair[0].timestamp.date() < pair[1].timestamp.date());
    }
    for day in &days {
        assert_eq!(day.timestamp.to_offset(bundle.utc_offset).hour(), 12);
    }
}

#[test]
fn carousel_pages_across_the_aggregated_days() {
    let bundle = skycast_core::client::decode_bundle(CURRENT_BODY, &forecast_body()).expect("bundle");
    let days = daily_representatives(&bundle.samples, MAX_FORECAST_DAYS, bundle.utc_offset);

    let mut carousel = Carousel::new(days.len(), GEOMETRY);

    // Page to the last card.
    for _ in 1..days.len() {
        carousel.next();
        settle(&mut carousel);
    }
    assert_eq!(carousel.current_index(), Some(days.len() - 1));
    assert_eq!(
        carousel.offset(),
        carousel.rest_offset(days.len() - 1),
        "rest offset must be exact"
    );

    // One more next bounces instead of paging.
    carousel.next();
    assert!(matches!(carousel.phase(), Phase::Bouncing { .. }));
    settle(&mut carousel);
    assert_eq!(carousel.current_index(), Some(days.len() - 1));

    // A drag-back retreats one card.
    carousel.pointer_down(100.0);
    carousel.pointer_move(120.0);
    carousel.pointer_up();
    settle(&mut carousel);
    assert_eq!(carousel.current_index(), Some(days.len() - 2));
}

#[test]
fn provider_failure_surfaces_its_message() {
    let not_found = r#"{"cod": "404", "message": "city not found"}"#;
    let err = skycast_core::client::decode_bundle(not_found, not_found).unwrap_err();
    assert!(err.is_provider());
    assert_eq!(err.to_string(), "city not found");
}
