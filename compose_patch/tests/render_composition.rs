//! End-to-end coverage: load a composition, inline its patch sets, render
//! the composed documents and propagate observed state back.

use anyhow::{Context, Result, anyhow, ensure};
use camino::Utf8Path;
use compose_patch::file::parse_composition;
use compose_patch::{CompositionSpec, PatchType, ResolveSettings};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::documents::{COMPOSITION_JSON, COMPOSITION_TOML, COMPOSITION_YAML};
use test_helpers::objects::composite;

fn inlined(name: &str, data: &str) -> Result<CompositionSpec> {
    let mut spec = parse_composition(Utf8Path::new(name), data)?;
    spec.inline_patch_sets()?;
    Ok(spec)
}

#[fixture]
fn bucket_composition() -> CompositionSpec {
    inlined("composition.yaml", COMPOSITION_YAML).expect("sample composition loads")
}

#[rstest]
#[case("composition.yaml", COMPOSITION_YAML)]
#[case("composition.json", COMPOSITION_JSON)]
#[case("composition.toml", COMPOSITION_TOML)]
fn renders_sample_composition(#[case] name: &str, #[case] data: &str) -> Result<()> {
    let spec = inlined(name, data)?;
    let cp = composite();
    let rendered = spec.render_all(&cp)?;
    ensure!(
        rendered
            == vec![json!({
                "apiVersion": "storage.example.org/v1",
                "kind": "Bucket",
                "metadata": {
                    "labels": {"team": "storage"},
                    "annotations": {"example.org/owner": "my-db"}
                },
                "spec": {"forProvider": {
                    "acl": "private",
                    "location": "us-east-1",
                    "sizeMB": 20480,
                    "tier": "standard"
                }}
            })],
        "unexpected render from {name}: {rendered:?}"
    );
    ensure!(cp == composite(), "rendering must not modify the composite");
    Ok(())
}

#[rstest]
fn inlined_patch_sets_precede_template_patches(bucket_composition: CompositionSpec) -> Result<()> {
    let bucket = bucket_composition
        .resources
        .first()
        .context("sample defines a resource")?;
    let types: Vec<Option<PatchType>> = bucket.patches.iter().map(|p| p.patch_type()).collect();
    ensure!(
        types
            == [
                Some(PatchType::FromCompositeFieldPath),
                Some(PatchType::FromCompositeFieldPath),
                Some(PatchType::FromCompositeFieldPath),
                Some(PatchType::FromCompositeFieldPath),
                Some(PatchType::FromConstantValue),
                Some(PatchType::ToCompositeFieldPath),
            ],
        "unexpected patch order: {types:?}"
    );
    Ok(())
}

#[rstest]
fn observe_round_trip(bucket_composition: CompositionSpec) -> Result<()> {
    let mut cp = composite();
    let mut rendered = bucket_composition.render_all(&cp)?;
    let bucket = rendered.first_mut().context("one document is rendered")?;
    bucket["status"] = json!({"atProvider": {"arn": "arn:example:bucket/my-db"}});

    bucket_composition.apply_all(&mut cp, &mut rendered, PatchType::TO_COMPOSITE)?;
    ensure!(
        cp["status"] == json!({"bucketArn": "arn:example:bucket/my-db"}),
        "status not propagated: {cp}"
    );
    Ok(())
}

#[rstest]
fn required_source_failure_names_resource_and_patch(
    bucket_composition: CompositionSpec,
) -> Result<()> {
    let cp = json!({"metadata": {"name": "my-db"}, "spec": {"parameters": {"region": "eu-west"}}});
    let err = bucket_composition
        .render_all(&cp)
        .err()
        .ok_or_else(|| anyhow!("storageGB is required"))?;
    ensure!(
        err.to_string()
            == "cannot compose resource at index 0: cannot apply the patch at index 3: \
                spec.parameters.storageGB: no such field",
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn settings_drive_the_patch_filter() -> Result<()> {
    figment::Jail::try_with(|jail| {
        jail.clear_env();
        jail.create_file("composition.json", COMPOSITION_JSON)?;
        jail.create_file(
            "settings.toml",
            "composition = \"composition.json\"\nonly = [\"FromConstantValue\"]",
        )?;
        let settings = ResolveSettings::load(Some(Utf8Path::new("settings.toml")))
            .map_err(|e| figment::Error::from(e.to_string()))?;
        let spec = settings
            .load_composition()
            .map_err(|e| figment::Error::from(e.to_string()))?
            .ok_or_else(|| figment::Error::from("composition is configured"))?;

        let mut cp = composite();
        let mut composed = vec![json!({})];
        spec.apply_all(&mut cp, &mut composed, &settings.only)
            .map_err(|e| figment::Error::from(e.to_string()))?;
        if composed != vec![json!({"spec": {"forProvider": {"tier": "standard"}}})] {
            return Err(figment::Error::from(format!(
                "only the constant patch should apply: {composed:?}"
            )));
        }
        Ok(())
    })
    .map_err(|e| anyhow!(e.to_string()))
}
