//! Slot type operation: `PutSlotType`.

use chrono::{DateTime, Utc};

use crate::enums::SlotValueSelectionStrategy;
use crate::model::slot::{EnumerationValue, SlotTypeConfiguration};
use crate::record::api_record;

api_record! {
    /// Creates a custom slot type or replaces the `$LATEST` version of one.
    pub struct PutSlotTypeRequest {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        /// Values the slot type can take, each with optional synonyms.
        enumeration_values: Vec<EnumerationValue> =
            "enumerationValues" => list<EnumerationValue>(set_enumeration_values, with_enumeration_values),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        value_selection_strategy: SlotValueSelectionStrategy =
            "valueSelectionStrategy" => copy(set_value_selection_strategy, with_value_selection_strategy),
        create_version: bool = "createVersion" => copy(set_create_version, with_create_version),
        /// Built-in slot type used as the parent. Only `AMAZON.AlphaNumeric` is supported.
        parent_slot_type_signature: String =
            "parentSlotTypeSignature" => text(set_parent_slot_type_signature, with_parent_slot_type_signature),
        slot_type_configurations: Vec<SlotTypeConfiguration> = "slotTypeConfigurations"
            => list<SlotTypeConfiguration>(set_slot_type_configurations, with_slot_type_configurations),
    }
}

api_record! {
    pub struct PutSlotTypeResult {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        enumeration_values: Vec<EnumerationValue> =
            "enumerationValues" => list<EnumerationValue>(set_enumeration_values, with_enumeration_values),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated_date: DateTime<Utc> =
            "lastUpdatedDate" => copy(set_last_updated_date, with_last_updated_date),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_date: DateTime<Utc> = "createdDate" => copy(set_created_date, with_created_date),
        version: String = "version" => text(set_version, with_version),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        value_selection_strategy: SlotValueSelectionStrategy =
            "valueSelectionStrategy" => copy(set_value_selection_strategy, with_value_selection_strategy),
        create_version: bool = "createVersion" => copy(set_create_version, with_create_version),
        parent_slot_type_signature: String =
            "parentSlotTypeSignature" => text(set_parent_slot_type_signature, with_parent_slot_type_signature),
        slot_type_configurations: Vec<SlotTypeConfiguration> = "slotTypeConfigurations"
            => list<SlotTypeConfiguration>(set_slot_type_configurations, with_slot_type_configurations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::slot::SlotTypeRegexConfiguration;

    fn crust(value: &str) -> EnumerationValue {
        EnumerationValue::new().with_value(value)
    }

    #[test]
    fn test_enumeration_values_accumulate() {
        let request = PutSlotTypeRequest::new()
            .with_enumeration_values([crust("thin"), crust("thick")])
            .with_enumeration_values([crust("stuffed")]);
        let values: Vec<_> = request
            .enumeration_values()
            .unwrap()
            .iter()
            .map(|v| v.value().unwrap())
            .collect();
        assert_eq!(values, vec!["thin", "thick", "stuffed"]);
    }

    #[test]
    fn test_typed_selection_strategy_wire_value() {
        let request = PutSlotTypeRequest::new()
            .with_name("Crust")
            .with_value_selection_strategy(SlotValueSelectionStrategy::TopResolution);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["valueSelectionStrategy"], "TOP_RESOLUTION");
        assert_eq!(
            request.to_string(),
            "{name: Crust,valueSelectionStrategy: TOP_RESOLUTION,}"
        );
    }

    #[test]
    fn test_regex_configuration_roundtrip() {
        let request = PutSlotTypeRequest::new()
            .with_name("AccountNumber")
            .with_parent_slot_type_signature("AMAZON.AlphaNumeric")
            .with_slot_type_configurations([SlotTypeConfiguration::new().with_regex_configuration(
                SlotTypeRegexConfiguration::new().with_pattern("[0-9]{8}"),
            )]);
        let json = serde_json::to_string(&request).unwrap();
        let parsed: PutSlotTypeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
        assert_eq!(
            parsed.slot_type_configurations().unwrap()[0]
                .regex_configuration()
                .unwrap()
                .pattern(),
            Some("[0-9]{8}")
        );
    }

    #[test]
    fn test_result_version() {
        let result: PutSlotTypeResult =
            serde_json::from_str(r#"{"name":"Crust","version":"4","createVersion":true}"#).unwrap();
        assert_eq!(result.version(), Some("4"));
        assert_eq!(result.create_version(), Some(true));
    }
}
