use camino::Utf8Path;
use figment::Jail;
use rstest::rstest;
use serde_json::json;
use test_helpers::documents::{COMPOSITION_JSON, COMPOSITION_TOML, COMPOSITION_YAML};

use super::*;
use crate::constant::ConstantValue;
use crate::patch::{ConstantPatch, Patch, PatchPolicy};
use crate::transform::{MathTransform, Transform};

fn assert_sample(spec: &CompositionSpec) {
    let names: Vec<&str> = spec.patch_sets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["metadata"]);
    let [bucket] = spec.resources.as_slice() else {
        panic!("expected a single resource, got {}", spec.resources.len());
    };
    assert_eq!(bucket.name.as_deref(), Some("bucket"));
    assert_eq!(bucket.base["spec"], json!({"forProvider": {"acl": "private"}}));
    assert_eq!(bucket.patches.len(), 5);
    assert_eq!(bucket.patches.first(), Some(&Patch::patch_set("metadata")));

    let Some(Patch::FromCompositeFieldPath(size)) = bucket.patches.get(2) else {
        panic!("expected a field-path patch at index 2");
    };
    assert_eq!(size.policy, Some(PatchPolicy::required()));
    assert_eq!(
        size.transforms,
        vec![Transform::Math(MathTransform::multiply(1024))]
    );
    assert_eq!(
        bucket.patches.get(3),
        Some(&Patch::FromConstantValue(ConstantPatch::new(
            "spec.forProvider.tier",
            ConstantValue::string("standard"),
        )))
    );
}

#[rstest]
#[case("composition.yaml", COMPOSITION_YAML)]
#[case("composition.yml", COMPOSITION_YAML)]
#[case("composition.json", COMPOSITION_JSON)]
#[case("composition.JSON", COMPOSITION_JSON)]
#[case("composition.toml", COMPOSITION_TOML)]
fn parses_every_format(#[case] name: &str, #[case] data: &str) {
    let spec = parse_composition(Utf8Path::new(name), data).expect("composition parses");
    assert_sample(&spec);
}

#[rstest]
fn loads_from_disk() {
    Jail::expect_with(|jail| {
        jail.create_file("composition.yaml", COMPOSITION_YAML)?;
        let spec = load_composition(Utf8Path::new("composition.yaml"))
            .map_err(|e| figment::Error::from(e.to_string()))?;
        assert_sample(&spec);
        Ok(())
    });
}

#[rstest]
fn missing_file_is_a_file_error() {
    Jail::expect_with(|_| {
        let err = load_composition(Utf8Path::new("absent.yaml")).expect_err("file is absent");
        assert!(matches!(err, ComposeError::File { .. }));
        assert!(err.to_string().contains("absent.yaml"), "{err}");
        Ok(())
    });
}

#[rstest]
#[case("broken.toml", "resources = [")]
#[case("broken.json", "{\"resources\": ")]
#[case("broken.yaml", "resources: [")]
#[case("scalar.yaml", "just a string")]
#[case("wrong.json", r#"{"resources": [{"patches": "not a list"}]}"#)]
fn malformed_documents_are_file_errors(#[case] name: &str, #[case] data: &str) {
    let err = parse_composition(Utf8Path::new(name), data).expect_err("document is malformed");
    assert!(
        matches!(&err, ComposeError::File { path, .. } if path.ends_with(name)),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn yaml_booleans_are_strict() {
    let spec = parse_composition(
        Utf8Path::new("c.yaml"),
        "resources:\n  - base:\n      enabled: yes\n      ready: true\n",
    )
    .expect("composition parses");
    let base = spec.resources.first().map(|r| r.base.clone());
    assert_eq!(base, Some(json!({"enabled": "yes", "ready": true})));
}

#[cfg(feature = "yaml")]
#[rstest]
#[case("resources: []\nresources: []", "duplicate mapping key")]
#[case("resources: [", "while parsing")]
fn yaml_provider_surfaces_errors(
    #[case] contents: &str,
    #[case] expected: &str,
) -> anyhow::Result<()> {
    let figment = Figment::from(SaphyrYaml::string("composition.yaml", contents));
    let err = figment
        .extract::<serde_json::Value>()
        .expect_err("expected YAML parsing failure");
    anyhow::ensure!(
        err.to_string().contains(expected),
        "expected error to mention '{expected}', got: {err}"
    );
    Ok(())
}
