use super::*;

const SCROLL: &str = r#"{
  "grid": { "width": 84, "height": 28 },
  "fps": { "num": 20, "den": 1 },
  "duration": 200,
  "animation": { "kind": "text_scroll", "text": "NEXT TRAIN 4 MIN" }
}"#;

#[test]
fn parses_and_validates_a_minimal_show() {
    let show = Show::from_json(SCROLL).unwrap();
    assert_eq!(show.grid, Grid::LARGE);
    assert_eq!(show.duration, 200);
    assert_eq!(show.preview, PreviewStyle::default());
    show.validate().unwrap();
}

#[test]
fn json_round_trip() {
    let show = Show::from_json(SCROLL).unwrap();
    let again = Show::from_json(&show.to_json_pretty().unwrap()).unwrap();
    assert_eq!(show, again);
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        Show::from_json("{ not json"),
        Err(FlipdotError::Serde(_))
    ));
}

#[test]
fn validation_catches_bad_fields() {
    let mut show = Show::from_json(SCROLL).unwrap();
    show.duration = 0;
    assert!(show.validate().is_err());

    let mut show = Show::from_json(SCROLL).unwrap();
    show.fps.den = 0;
    assert!(show.validate().is_err());

    let mut show = Show::from_json(SCROLL).unwrap();
    show.animation = AnimationSpec::TextScroll(Default::default());
    if let AnimationSpec::TextScroll(p) = &mut show.animation {
        p.text.clear();
    }
    assert!(show.validate().is_err());
}

#[test]
fn missing_file_reports_the_path() {
    let err = Show::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
