use canvas_illustrator::canvas::{decode, Canvas, CanvasFormat, Drawing};
use canvas_illustrator::error::Error;
use canvas_illustrator::render::{render_canvas, RenderOptions};
use canvas_illustrator::validation::Validator;

#[test]
fn test_json_with_code_points() {
    let json = r#"{
        "name": "square",
        "width": 15,
        "height": 7,
        "drawings": [
            {"coordinates": [3, 5], "width": 4, "height": 4, "fill": 42, "outline": 64}
        ]
    }"#;

    let canvas = Canvas::from_json(json).expect("decode");
    assert_eq!(canvas.name, "square");
    assert_eq!(
        canvas.drawings,
        vec![Drawing::new(3, 5, 4, 4).with_fill('*').with_outline('@')]
    );
}

#[test]
fn test_json_with_strings_and_null() {
    let json = r#"{
        "width": 4,
        "height": 3,
        "drawings": [
            {"coordinates": [0, 0], "width": 4, "height": 3, "fill": "o", "outline": null}
        ]
    }"#;

    let canvas = Canvas::from_json(json).expect("decode");
    assert_eq!(canvas.name, "");
    assert_eq!(canvas.drawings[0].fill, Some('o'));
    assert_eq!(canvas.drawings[0].outline, None);

    let rendered = render_canvas(
        &canvas,
        &RenderOptions::text().with_filler('-'),
        Some(&Validator::default()),
    )
    .expect("render");
    assert_eq!(rendered, "----\n-oo-\n----");
}

#[test]
fn test_json_out_of_range_code_point_is_still_decoded() {
    // 138 is a valid scalar value; rejecting it is the validator's job
    let json = r#"{"width": 5, "height": 5, "drawings": [
        {"coordinates": [0, 0], "width": 1, "height": 1, "fill": 138}
    ]}"#;

    let canvas = Canvas::from_json(json).expect("decode");
    assert_eq!(canvas.drawings[0].fill.map(|c| c as u32), Some(138));
    assert!(!Validator::default().validate(&canvas).is_valid());
}

#[test]
fn test_json_rejects_bad_characters() {
    for fill in ["-1", "1114112", "55296", "\"ab\"", "\"\"", "true"] {
        let json = format!(
            r#"{{"width": 5, "height": 5, "drawings": [
                {{"coordinates": [0, 0], "width": 1, "height": 1, "fill": {}}}
            ]}}"#,
            fill
        );
        let err = Canvas::from_json(&json).expect_err("bad fill should not decode");
        assert!(matches!(err, Error::Json(_)), "fill {}: {:?}", fill, err);
    }
}

#[test]
fn test_missing_coordinates_surface_as_violation() {
    let json = r##"{"width": 5, "height": 5, "drawings": [
        {"width": 1, "height": 1, "outline": "#"}
    ]}"##;

    let canvas = Canvas::from_json(json).expect("decode");
    assert!(canvas.drawings[0].coordinates.is_empty());

    let result = Validator::default().validate(&canvas);
    assert!(result.by_field().contains_key("Drawings[0].Coordinates"));
}

#[test]
fn test_toml_canvas() {
    let toml = r##"
name = "boxes"
width = 6
height = 3

[[drawings]]
coordinates = [0, 0]
width = 3
height = 3
outline = "#"

[[drawings]]
coordinates = [0, 3]
width = 3
height = 3
fill = 43
outline = 35
"##;

    let canvas = decode(toml, CanvasFormat::Toml).expect("decode");
    assert_eq!(canvas.drawings.len(), 2);
    assert_eq!(canvas.drawings[0].fill, None);
    assert_eq!(canvas.drawings[1].fill, Some('+'));

    let rendered = render_canvas(&canvas, &RenderOptions::text().with_filler('.'), None)
        .expect("render");
    assert_eq!(rendered, "######\n#.##+#\n######");
}

#[test]
fn test_toml_syntax_error() {
    let err = Canvas::from_toml("width = ").expect_err("invalid toml");
    assert!(matches!(err, Error::Toml(_)));
}
