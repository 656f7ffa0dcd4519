//! Unit tests for error classification and wrapping.

use rstest::rstest;

use super::{ComposeError, ErrorCategory};
use crate::constant::ConstantError;
use crate::fieldpath::FieldPathError;
use crate::patch::PatchType;
use crate::transform::TransformError;
use crate::value::ValueKind;

#[rstest]
#[case(ComposeError::UndefinedPatchSet { name: "base".into() })]
#[case(ComposeError::required_field("fromFieldPath", PatchType::FromCompositeFieldPath))]
#[case(ComposeError::ConstantValueRequired { patch_type: PatchType::FromConstantValue })]
#[case(ComposeError::invalid_patch_type("invalid-patchtype"))]
#[case(ComposeError::Constant(ConstantError::TypeNotDefined))]
#[case(ComposeError::FieldPath(FieldPathError::invalid("a..b", "empty field name")))]
#[case(ComposeError::Transform {
    index: 0,
    transform_type: "convert".into(),
    source: TransformError::ConversionPairNotSupported {
        from: ValueKind::String,
        to: "[]int".into(),
    },
})]
fn configuration_failures_are_classified(#[case] err: ComposeError) {
    assert_eq!(err.category(), ErrorCategory::Configuration, "{err}");
}

#[rstest]
#[case(ComposeError::FieldPath(FieldPathError::not_found("wat")))]
#[case(ComposeError::Transform {
    index: 1,
    transform_type: "math".into(),
    source: TransformError::MathInputNotNumber { kind: ValueKind::String },
})]
#[case(ComposeError::Transform {
    index: 0,
    transform_type: "map".into(),
    source: TransformError::MapKeyNotFound { key: "ola".into() },
})]
fn data_failures_are_classified(#[case] err: ComposeError) {
    assert_eq!(err.category(), ErrorCategory::Data, "{err}");
}

#[rstest]
fn wrapped_errors_report_their_root() {
    let err = ComposeError::FieldPath(FieldPathError::not_found("spec.size"))
        .at_patch(2)
        .at_resource(1);

    assert_eq!(err.category(), ErrorCategory::Data);
    assert!(matches!(err.root(), ComposeError::FieldPath(inner) if inner.is_not_found()));
    assert_eq!(
        err.to_string(),
        "cannot compose resource at index 1: cannot apply the patch at index 2: spec.size: no such field"
    );
}

#[rstest]
fn figment_errors_become_settings_errors() {
    let err = ComposeError::from(figment::Error::from("boom"));
    assert!(matches!(err, ComposeError::Settings(_)));
    assert_eq!(err.category(), ErrorCategory::Configuration);
}
