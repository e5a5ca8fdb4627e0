//! JSON schemas for records and documents, looked up by shape name.

use lexmodel_types::model::{
    CreateBotVersionRequest, CreateBotVersionResult, GetBotRequest, GetBotResult,
    LogSettingsRequest, PutBotRequest, PutBotResult, PutIntentRequest, PutIntentResult,
    PutSlotTypeRequest, PutSlotTypeResult,
};
use schemars::{JsonSchema, Schema, schema_for};

use crate::document::{RequestDocument, ResultDocument};
use crate::error::CoreError;

fn schema<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

const SHAPES: &[(&str, fn() -> Schema)] = &[
    ("RequestDocument", schema::<RequestDocument>),
    ("ResultDocument", schema::<ResultDocument>),
    ("PutBotRequest", schema::<PutBotRequest>),
    ("PutBotResult", schema::<PutBotResult>),
    ("GetBotRequest", schema::<GetBotRequest>),
    ("GetBotResult", schema::<GetBotResult>),
    ("CreateBotVersionRequest", schema::<CreateBotVersionRequest>),
    ("CreateBotVersionResult", schema::<CreateBotVersionResult>),
    ("PutIntentRequest", schema::<PutIntentRequest>),
    ("PutIntentResult", schema::<PutIntentResult>),
    ("PutSlotTypeRequest", schema::<PutSlotTypeRequest>),
    ("PutSlotTypeResult", schema::<PutSlotTypeResult>),
    ("LogSettingsRequest", schema::<LogSettingsRequest>),
];

/// Names accepted by [`schema_for_shape`].
pub fn shape_names() -> impl Iterator<Item = &'static str> {
    SHAPES.iter().map(|(name, _)| *name)
}

/// Schema of the named record or document. Matching ignores ASCII case.
pub fn schema_for_shape(name: &str) -> Result<Schema, CoreError> {
    SHAPES
        .iter()
        .find(|(shape, _)| shape.eq_ignore_ascii_case(name))
        .map(|(_, build)| build())
        .ok_or_else(|| CoreError::UnknownShape(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_resolves() {
        for name in shape_names() {
            assert!(schema_for_shape(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_record_schema_uses_wire_names() {
        let schema = schema_for_shape("putbotrequest").unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        let properties = json["properties"].as_object().unwrap();
        assert!(properties.contains_key("idleSessionTTLInSeconds"));
        assert!(properties.contains_key("childDirected"));
        assert!(!properties.contains_key("child_directed"));
    }

    #[test]
    fn test_unknown_shape() {
        assert_eq!(
            schema_for_shape("DeleteBotRequest").unwrap_err(),
            CoreError::UnknownShape("DeleteBotRequest".to_string())
        );
    }
}
