//! Operation documents.
//!
//! A document pairs a record with the operation it belongs to, so a file on
//! disk is self-describing:
//!
//! ```json
//! {"operation": "PutBot", "input": {"name": "PizzaBot", "locale": "en-US"}}
//! ```
//!
//! Results use the same envelope with `output` in place of `input`.

use std::fmt;
use std::str::FromStr;

use lexmodel_types::model::{
    CreateBotVersionRequest, CreateBotVersionResult, GetBotRequest, GetBotResult, PutBotRequest,
    PutBotResult, PutIntentRequest, PutIntentResult, PutSlotTypeRequest, PutSlotTypeResult,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validate::{Validate, ValidationOptions, ValidationReport};

/// The model operations a document can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Operation {
    PutBot,
    GetBot,
    CreateBotVersion,
    PutIntent,
    PutSlotType,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::PutBot,
        Operation::GetBot,
        Operation::CreateBotVersion,
        Operation::PutIntent,
        Operation::PutSlotType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::PutBot => "PutBot",
            Operation::GetBot => "GetBot",
            Operation::CreateBotVersion => "CreateBotVersion",
            Operation::PutIntent => "PutIntent",
            Operation::PutSlotType => "PutSlotType",
        }
    }

    /// Exact-match lookup of an operation name.
    pub fn from_value(value: &str) -> Result<Self, CoreError> {
        if value.is_empty() {
            return Err(CoreError::EmptyOperation);
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == value)
            .ok_or_else(|| CoreError::UnknownOperation(value.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_value(s)
    }
}

/// Declares a document enum over the five operations.
macro_rules! operation_document {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (content = $content:literal) {
            $($variant:ident($record:ident)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
        #[serde(tag = "operation", content = $content)]
        pub enum $name {
            $($variant($record),)*
        }

        impl $name {
            pub fn operation(&self) -> Operation {
                match self {
                    $($name::$variant(_) => Operation::$variant,)*
                }
            }

            /// Type name of the wrapped record, e.g. `PutBotRequest`.
            pub fn record_name(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => stringify!($record),)*
                }
            }

            pub fn validate(&self) -> ValidationReport {
                self.validate_with(&ValidationOptions::default())
            }

            pub fn validate_with(&self, options: &ValidationOptions) -> ValidationReport {
                match self {
                    $($name::$variant(record) => record.validate_with(options),)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant(record) => fmt::Display::fmt(record, f),)*
                }
            }
        }

        $(
            impl From<$record> for $name {
                fn from(record: $record) -> Self {
                    $name::$variant(record)
                }
            }
        )*
    };
}

operation_document! {
    /// A request record tagged with its operation.
    pub enum RequestDocument (content = "input") {
        PutBot(PutBotRequest),
        GetBot(GetBotRequest),
        CreateBotVersion(CreateBotVersionRequest),
        PutIntent(PutIntentRequest),
        PutSlotType(PutSlotTypeRequest),
    }
}

operation_document! {
    /// A result record tagged with its operation.
    pub enum ResultDocument (content = "output") {
        PutBot(PutBotResult),
        GetBot(GetBotResult),
        CreateBotVersion(CreateBotVersionResult),
        PutIntent(PutIntentResult),
        PutSlotType(PutSlotTypeResult),
    }
}

/// Either kind of document, told apart by its `input` or `output` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Request(RequestDocument),
    Result(ResultDocument),
}

impl Document {
    pub fn operation(&self) -> Operation {
        match self {
            Document::Request(doc) => doc.operation(),
            Document::Result(doc) => doc.operation(),
        }
    }

    pub fn record_name(&self) -> &'static str {
        match self {
            Document::Request(doc) => doc.record_name(),
            Document::Result(doc) => doc.record_name(),
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, Document::Request(_))
    }

    pub fn validate_with(&self, options: &ValidationOptions) -> ValidationReport {
        match self {
            Document::Request(doc) => doc.validate_with(options),
            Document::Result(doc) => doc.validate_with(options),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Request(doc) => fmt::Display::fmt(doc, f),
            Document::Result(doc) => fmt::Display::fmt(doc, f),
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let is_result = value
            .as_object()
            .is_some_and(|map| map.contains_key("output"));
        if is_result {
            serde_json::from_value(value).map(Document::Result).map_err(D::Error::custom)
        } else {
            serde_json::from_value(value).map(Document::Request).map_err(D::Error::custom)
        }
    }
}

impl From<RequestDocument> for Document {
    fn from(doc: RequestDocument) -> Self {
        Document::Request(doc)
    }
}

impl From<ResultDocument> for Document {
    fn from(doc: ResultDocument) -> Self {
        Document::Result(doc)
    }
}

#[cfg(test)]
mod tests {
    use lexmodel_types::enums::{Locale, Status};

    use super::*;

    fn pizza_bot() -> RequestDocument {
        PutBotRequest::new()
            .with_name("PizzaBot")
            .with_locale(Locale::EnUs)
            .with_child_directed(false)
            .into()
    }

    #[test]
    fn test_operation_round_trips_through_str() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
        assert_eq!(
            "putbot".parse::<Operation>(),
            Err(CoreError::UnknownOperation("putbot".to_string()))
        );
        assert_eq!("".parse::<Operation>(), Err(CoreError::EmptyOperation));
    }

    #[test]
    fn test_operation_from_value() {
        assert_eq!(Operation::from_value("GetBot"), Ok(Operation::GetBot));
        assert_eq!(Operation::from_value(""), Err(CoreError::EmptyOperation));
        assert_eq!(
            Operation::from_value("DeleteBot"),
            Err(CoreError::UnknownOperation("DeleteBot".to_string()))
        );
        assert!(Operation::from_value(" GetBot").is_err());
    }

    #[test]
    fn test_request_json_envelope() {
        let json = serde_json::to_value(pizza_bot()).unwrap();
        assert_eq!(json["operation"], "PutBot");
        assert_eq!(json["input"]["name"], "PizzaBot");
        assert_eq!(json["input"]["locale"], "en-US");
        assert_eq!(json["input"]["childDirected"], false);
    }

    #[test]
    fn test_result_json_envelope() {
        let doc: ResultDocument = serde_json::from_str(
            r#"{"operation": "GetBot", "output": {"name": "PizzaBot", "status": "READY", "version": "$LATEST"}}"#,
        )
        .unwrap();
        assert_eq!(doc.operation(), Operation::GetBot);
        assert_eq!(doc.record_name(), "GetBotResult");
        let ResultDocument::GetBot(result) = &doc else {
            panic!("expected GetBot, got {doc:?}");
        };
        assert_eq!(result.status(), Some(Status::Ready));
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let err = serde_json::from_str::<RequestDocument>(
            r#"{"operation": "DeleteBot", "input": {"name": "PizzaBot"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("DeleteBot"), "{err}");
    }

    #[test]
    fn test_toml_envelope() {
        let text = r#"
operation = "PutIntent"

[input]
name = "OrderPizza"
sampleUtterances = ["I want a pizza", "Order a pizza"]
"#;
        let doc: RequestDocument = toml::from_str(text).unwrap();
        let RequestDocument::PutIntent(intent) = &doc else {
            panic!("expected PutIntent, got {doc:?}");
        };
        assert_eq!(intent.sample_utterances().map(<[String]>::len), Some(2));
        assert!(doc.validate().is_valid());
    }

    #[test]
    fn test_yaml_envelope() {
        let text = "operation: PutSlotType\ninput:\n  name: Crust\n  enumerationValues:\n    - value: thin\n      synonyms: [skinny]\n";
        let doc: RequestDocument = serde_yaml_ng::from_str(text).unwrap();
        assert_eq!(doc.operation(), Operation::PutSlotType);
        assert_eq!(doc.record_name(), "PutSlotTypeRequest");
        let back = serde_yaml_ng::to_string(&doc).unwrap();
        assert!(back.starts_with("operation: PutSlotType"), "{back}");
    }

    #[test]
    fn test_display_delegates_to_record() {
        assert_eq!(
            pizza_bot().to_string(),
            "{name: PizzaBot,locale: en-US,childDirected: false,}"
        );
    }

    #[test]
    fn test_either_document_by_key() {
        let doc: Document = serde_json::from_str(
            r#"{"operation": "CreateBotVersion", "output": {"name": "PizzaBot", "version": "2"}}"#,
        )
        .unwrap();
        assert!(!doc.is_request());
        assert_eq!(doc.record_name(), "CreateBotVersionResult");

        let doc: Document =
            toml::from_str("operation = \"GetBot\"\n\n[input]\nname = \"PizzaBot\"\n").unwrap();
        assert!(doc.is_request());
        assert_eq!(doc.operation(), Operation::GetBot);
    }

    #[test]
    fn test_either_document_serializes_envelope() {
        let doc = Document::from(pizza_bot());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["operation"], "PutBot");
        assert!(json.get("input").is_some());
    }

    #[test]
    fn test_document_validation() {
        let doc = RequestDocument::from(GetBotRequest::new().with_name("PizzaBot"));
        let report = doc.validate();
        assert!(report.has_violation_at("versionOrAlias"));

        let lenient = ValidationOptions {
            enforce_required: false,
        };
        assert!(doc.validate_with(&lenient).is_valid());
    }
}
