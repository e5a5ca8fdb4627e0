//! Slots and slot type values.

use crate::enums::{ObfuscationSetting, SlotConstraint};
use crate::model::common::Prompt;
use crate::record::api_record;

api_record! {
    /// A piece of information an intent needs from the user.
    pub struct Slot {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        slot_constraint: SlotConstraint =
            "slotConstraint" => copy(set_slot_constraint, with_slot_constraint),
        /// Built-in (`AMAZON.*`) or custom slot type name.
        slot_type: String = "slotType" => text(set_slot_type, with_slot_type),
        slot_type_version: String =
            "slotTypeVersion" => text(set_slot_type_version, with_slot_type_version),
        value_elicitation_prompt: Prompt =
            "valueElicitationPrompt" => nested(set_value_elicitation_prompt, with_value_elicitation_prompt),
        /// Order in which slots are elicited; lower first. Ties are elicited in arbitrary order.
        priority: i32 = "priority" => copy(set_priority, with_priority),
        sample_utterances: Vec<String> =
            "sampleUtterances" => list<String>(set_sample_utterances, with_sample_utterances),
        response_card: String = "responseCard" => text(set_response_card, with_response_card),
        obfuscation_setting: ObfuscationSetting =
            "obfuscationSetting" => copy(set_obfuscation_setting, with_obfuscation_setting),
        default_value_spec: SlotDefaultValueSpec =
            "defaultValueSpec" => nested(set_default_value_spec, with_default_value_spec),
    }
}

api_record! {
    /// A default slot value: a literal, `#context-name.slot-name` or `{attribute}`.
    pub struct SlotDefaultValue {
        default_value: String = "defaultValue" => text(set_default_value, with_default_value),
    }
}

api_record! {
    /// Default values for a slot, tried in list order.
    pub struct SlotDefaultValueSpec {
        default_value_list: Vec<SlotDefaultValue> =
            "defaultValueList" => list<SlotDefaultValue>(set_default_value_list, with_default_value_list),
    }
}

api_record! {
    /// One value of a custom slot type, with the synonyms that resolve to it.
    pub struct EnumerationValue {
        value: String = "value" => text(set_value, with_value),
        synonyms: Vec<String> = "synonyms" => list<String>(set_synonyms, with_synonyms),
    }
}

api_record! {
    pub struct SlotTypeRegexConfiguration {
        pattern: String = "pattern" => text(set_pattern, with_pattern),
    }
}

api_record! {
    /// Extends a parent built-in slot type.
    pub struct SlotTypeConfiguration {
        regex_configuration: SlotTypeRegexConfiguration =
            "regexConfiguration" => nested(set_regex_configuration, with_regex_configuration),
    }
}
