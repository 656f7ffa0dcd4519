use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::value::ValueKind;

#[rstest]
fn map_replaces_known_key() {
    let map = MapTransform::new([("ola", "voila")]);
    assert_eq!(map.resolve(&json!("ola")), Ok(json!("voila")));
}

#[rstest]
#[case(json!("hello"), TransformError::MapKeyNotFound { key: "hello".to_owned() })]
#[case(json!(5), TransformError::MapTypeNotSupported { kind: ValueKind::Int })]
#[case(json!(["ola"]), TransformError::MapTypeNotSupported { kind: ValueKind::Array })]
fn map_rejects(#[case] input: Value, #[case] expected: TransformError) {
    let map = MapTransform::new([("ola", "voila")]);
    assert_eq!(map.resolve(&input), Err(expected));
}

#[rstest]
#[case(MathTransform::multiply(2), json!(3), Ok(json!(6)))]
#[case(MathTransform::multiply(-4), json!(5), Ok(json!(-20)))]
#[case(MathTransform::default(), json!(3), Err(TransformError::MathNoMultiplier))]
#[case(
    MathTransform::multiply(2),
    json!("3"),
    Err(TransformError::MathInputNotNumber { kind: ValueKind::String })
)]
#[case(
    MathTransform::multiply(2),
    json!(1.5),
    Err(TransformError::MathInputNotNumber { kind: ValueKind::Float })
)]
fn math_cases(
    #[case] math: MathTransform,
    #[case] input: Value,
    #[case] expected: Result<Value, TransformError>,
) {
    assert_eq!(math.resolve(&input), expected);
}

#[rstest]
#[case(json!(i64::MAX))]
#[case(json!(u64::MAX))]
fn math_reports_overflow(#[case] input: Value) {
    let err = MathTransform::multiply(2)
        .resolve(&input)
        .expect_err("product should overflow");
    assert!(matches!(err, TransformError::MathOverflow { multiplier: 2, .. }));
}

#[rstest]
#[case("verycool%s", json!("thing"), "verycoolthing")]
#[case("the largest %d", json!(8), "the largest 8")]
#[case("%d", json!("eight"), "%!d(string=eight)")]
fn string_formats(#[case] template: &str, #[case] input: Value, #[case] expected: &str) {
    assert_eq!(
        StringTransform::new(template).resolve(&input),
        Ok(json!(expected))
    );
}

#[rstest]
#[case("bool", json!("true"), json!(true))]
#[case("bool", json!("F"), json!(false))]
#[case("bool", json!(true), json!(true))]
#[case("bool", json!(1), json!(true))]
#[case("int", json!(1), json!(1))]
#[case("int", json!("42"), json!(42))]
#[case("int", json!(true), json!(1))]
#[case("int", json!(2.9), json!(2))]
#[case("int", json!(-2.9), json!(-2))]
#[case("string", json!(64), json!("64"))]
#[case("string", json!(false), json!("false"))]
#[case("string", json!(1.5), json!("1.5"))]
#[case("float64", json!("1.25"), json!(1.25))]
#[case("float", json!(3), json!(3.0))]
#[case("float64", json!(0.5), json!(0.5))]
fn convert_succeeds(#[case] to: &str, #[case] input: Value, #[case] expected: Value) {
    assert_eq!(ConvertTransform::new(to).resolve(&input), Ok(expected));
}

#[rstest]
#[case("string", json!([64]), TransformError::ConvertInputTypeNotSupported { kind: ValueKind::Array })]
#[case("string", json!({"a": 1}), TransformError::ConvertInputTypeNotSupported { kind: ValueKind::Object })]
#[case("string", Value::Null, TransformError::ConvertInputTypeNotSupported { kind: ValueKind::Null })]
#[case(
    "[]int",
    json!("[64]"),
    TransformError::ConversionPairNotSupported { from: ValueKind::String, to: "[]int".to_owned() }
)]
#[case(
    "float64",
    json!(true),
    TransformError::ConversionPairNotSupported { from: ValueKind::Bool, to: "float64".to_owned() }
)]
#[case(
    "bool",
    json!(0.5),
    TransformError::ConversionPairNotSupported { from: ValueKind::Float, to: "bool".to_owned() }
)]
fn convert_rejects(#[case] to: &str, #[case] input: Value, #[case] expected: TransformError) {
    assert_eq!(ConvertTransform::new(to).resolve(&input), Err(expected));
}

#[rstest]
#[case("int", json!("abc"))]
#[case("bool", json!("yes"))]
#[case("bool", json!(2))]
#[case("float64", json!("NaN"))]
#[case("int", json!(1e300))]
#[case("int", json!(u64::MAX))]
fn convert_reports_failed_conversion(#[case] to: &str, #[case] input: Value) {
    let err = ConvertTransform::new(to)
        .resolve(&input)
        .expect_err("conversion should fail");
    assert!(
        matches!(err, TransformError::ConversionFailed { .. }),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn missing_config_and_unknown_type_fail() {
    assert_eq!(
        Transform::MissingConfig(TransformType::Math).resolve(&json!(1)),
        Err(TransformError::ConfigMissing(TransformType::Math))
    );
    assert_eq!(
        Transform::Unsupported("rot13".to_owned()).resolve(&json!("a")),
        Err(TransformError::TypeNotSupported("rot13".to_owned()))
    );
}

#[rstest]
fn empty_pipeline_is_identity() {
    let input = json!({"a": [1, 2]});
    assert_eq!(
        apply_transforms(&[], input.clone()).expect("identity"),
        input
    );
}

#[rstest]
fn pipeline_runs_in_order() {
    let pipeline = [
        Transform::Map(MapTransform::new([("small", "2")])),
        Transform::Convert(ConvertTransform::new("int")),
        Transform::Math(MathTransform::multiply(8)),
        Transform::String(StringTransform::new("%dGi")),
    ];
    assert_eq!(
        apply_transforms(&pipeline, json!("small")).expect("pipeline"),
        json!("16Gi")
    );
}

#[rstest]
fn pipeline_reports_failing_index() {
    let pipeline = [
        Transform::String(StringTransform::new("%s")),
        Transform::Math(MathTransform::multiply(2)),
    ];
    let err = apply_transforms(&pipeline, json!("x")).expect_err("math should fail");
    match err {
        ComposeError::Transform {
            index,
            transform_type,
            source,
        } => {
            assert_eq!(index, 1);
            assert_eq!(transform_type, "math");
            assert_eq!(
                source,
                TransformError::MathInputNotNumber {
                    kind: ValueKind::String
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case(json!({"type": "map", "map": {"ola": "voila"}}), Transform::Map(MapTransform::new([("ola", "voila")])))]
#[case(json!({"type": "math", "math": {"multiply": 2}}), Transform::Math(MathTransform::multiply(2)))]
#[case(json!({"type": "string", "string": {"fmt": "%s!"}}), Transform::String(StringTransform::new("%s!")))]
#[case(json!({"type": "convert", "convert": {"toType": "int"}}), Transform::Convert(ConvertTransform::new("int")))]
#[case(json!({"type": "math"}), Transform::MissingConfig(TransformType::Math))]
#[case(json!({"type": "rot13"}), Transform::Unsupported("rot13".to_owned()))]
fn deserialises_tagged_documents(#[case] doc: Value, #[case] expected: Transform) {
    let transform: Transform = serde_json::from_value(doc).expect("transform document");
    assert_eq!(transform, expected);
}

#[rstest]
fn serialises_back_to_tagged_document() {
    let doc = serde_json::to_value(Transform::Math(MathTransform::multiply(3))).expect("serialise");
    assert_eq!(doc, json!({"type": "math", "math": {"multiply": 3}}));
}
