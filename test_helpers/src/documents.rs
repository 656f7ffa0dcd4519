//! Sample composition sources in every supported format.
//!
//! All three describe the same composition: a `metadata` patch set shared
//! by a single `bucket` template that also maps the region, scales the
//! storage size, stamps a constant and reports a status field back.

/// The sample composition written as YAML.
pub const COMPOSITION_YAML: &str = r#"
patchSets:
  - name: metadata
    patches:
      - fromFieldPath: metadata.labels
      - type: FromCompositeFieldPath
        fromFieldPath: metadata.name
        toFieldPath: metadata.annotations[example.org/owner]
resources:
  - name: bucket
    base:
      apiVersion: storage.example.org/v1
      kind: Bucket
      spec:
        forProvider:
          acl: private
    patches:
      - type: PatchSet
        patchSetName: metadata
      - type: FromCompositeFieldPath
        fromFieldPath: spec.parameters.region
        toFieldPath: spec.forProvider.location
        transforms:
          - type: map
            map:
              us-east: us-east-1
              eu-west: eu-west-1
      - type: FromCompositeFieldPath
        fromFieldPath: spec.parameters.storageGB
        toFieldPath: spec.forProvider.sizeMB
        policy:
          fromFieldPath: Required
        transforms:
          - type: math
            math:
              multiply: 1024
      - type: FromConstantValue
        toFieldPath: spec.forProvider.tier
        constantValue:
          type: string
          string: standard
      - type: ToCompositeFieldPath
        fromFieldPath: status.atProvider.arn
        toFieldPath: status.bucketArn
"#;

/// The sample composition written as JSON.
pub const COMPOSITION_JSON: &str = r#"{
  "patchSets": [
    {
      "name": "metadata",
      "patches": [
        {"fromFieldPath": "metadata.labels"},
        {
          "type": "FromCompositeFieldPath",
          "fromFieldPath": "metadata.name",
          "toFieldPath": "metadata.annotations[example.org/owner]"
        }
      ]
    }
  ],
  "resources": [
    {
      "name": "bucket",
      "base": {
        "apiVersion": "storage.example.org/v1",
        "kind": "Bucket",
        "spec": {"forProvider": {"acl": "private"}}
      },
      "patches": [
        {"type": "PatchSet", "patchSetName": "metadata"},
        {
          "type": "FromCompositeFieldPath",
          "fromFieldPath": "spec.parameters.region",
          "toFieldPath": "spec.forProvider.location",
          "transforms": [
            {"type": "map", "map": {"us-east": "us-east-1", "eu-west": "eu-west-1"}}
          ]
        },
        {
          "type": "FromCompositeFieldPath",
          "fromFieldPath": "spec.parameters.storageGB",
          "toFieldPath": "spec.forProvider.sizeMB",
          "policy": {"fromFieldPath": "Required"},
          "transforms": [{"type": "math", "math": {"multiply": 1024}}]
        },
        {
          "type": "FromConstantValue",
          "toFieldPath": "spec.forProvider.tier",
          "constantValue": {"type": "string", "string": "standard"}
        },
        {
          "type": "ToCompositeFieldPath",
          "fromFieldPath": "status.atProvider.arn",
          "toFieldPath": "status.bucketArn"
        }
      ]
    }
  ]
}"#;

/// The sample composition written as TOML.
pub const COMPOSITION_TOML: &str = r#"
[[patchSets]]
name = "metadata"

[[patchSets.patches]]
fromFieldPath = "metadata.labels"

[[patchSets.patches]]
type = "FromCompositeFieldPath"
fromFieldPath = "metadata.name"
toFieldPath = "metadata.annotations[example.org/owner]"

[[resources]]
name = "bucket"

[resources.base]
apiVersion = "storage.example.org/v1"
kind = "Bucket"

[resources.base.spec.forProvider]
acl = "private"

[[resources.patches]]
type = "PatchSet"
patchSetName = "metadata"

[[resources.patches]]
type = "FromCompositeFieldPath"
fromFieldPath = "spec.parameters.region"
toFieldPath = "spec.forProvider.location"

[[resources.patches.transforms]]
type = "map"
map = { "us-east" = "us-east-1", "eu-west" = "eu-west-1" }

[[resources.patches]]
type = "FromCompositeFieldPath"
fromFieldPath = "spec.parameters.storageGB"
toFieldPath = "spec.forProvider.sizeMB"
policy = { fromFieldPath = "Required" }

[[resources.patches.transforms]]
type = "math"
math = { multiply = 1024 }

[[resources.patches]]
type = "FromConstantValue"
toFieldPath = "spec.forProvider.tier"
constantValue = { type = "string", string = "standard" }

[[resources.patches]]
type = "ToCompositeFieldPath"
fromFieldPath = "status.atProvider.arn"
toFieldPath = "status.bucketArn"
"#;
