//! Flat document representation of a transform.

use serde::{Deserialize, Serialize};

use super::{
    ConvertTransform, MapTransform, MathTransform, StringTransform, Transform, TransformType,
};

/// A transform as written in a composition document: a `type` tag plus one
/// configuration block per transform kind.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(super) struct TransformDocument {
    #[serde(rename = "type", default)]
    transform_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    map: Option<MapTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    math: Option<MathTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    string: Option<StringTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    convert: Option<ConvertTransform>,
}

impl From<TransformDocument> for Transform {
    fn from(doc: TransformDocument) -> Self {
        let Some(transform_type) = TransformType::parse(&doc.transform_type) else {
            return Self::Unsupported(doc.transform_type);
        };
        let configured = match transform_type {
            TransformType::Map => doc.map.map(Self::Map),
            TransformType::Math => doc.math.map(Self::Math),
            TransformType::String => doc.string.map(Self::String),
            TransformType::Convert => doc.convert.map(Self::Convert),
        };
        configured.unwrap_or(Self::MissingConfig(transform_type))
    }
}

impl From<Transform> for TransformDocument {
    fn from(transform: Transform) -> Self {
        let transform_type = transform.type_name().to_owned();
        match transform {
            Transform::Map(map) => Self {
                transform_type,
                map: Some(map),
                ..Self::default()
            },
            Transform::Math(math) => Self {
                transform_type,
                math: Some(math),
                ..Self::default()
            },
            Transform::String(string) => Self {
                transform_type,
                string: Some(string),
                ..Self::default()
            },
            Transform::Convert(convert) => Self {
                transform_type,
                convert: Some(convert),
                ..Self::default()
            },
            Transform::MissingConfig(_) | Transform::Unsupported(_) => Self {
                transform_type,
                ..Self::default()
            },
        }
    }
}
