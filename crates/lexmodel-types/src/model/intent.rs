//! Intent operation: `PutIntent`.

use chrono::{DateTime, Utc};

use crate::model::common::{
    CodeHook, FollowUpPrompt, FulfillmentActivity, KendraConfiguration, Prompt, Statement,
};
use crate::model::slot::Slot;
use crate::record::api_record;

api_record! {
    /// Creates an intent or replaces the `$LATEST` version of an existing one.
    ///
    /// `confirmationPrompt` and `rejectionStatement` must be set together.
    /// `followUpPrompt` and `conclusionStatement` are mutually exclusive.
    pub struct PutIntentRequest {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        /// Slots the intent elicits, in `priority` order.
        slots: Vec<Slot> = "slots" => list<Slot>(set_slots, with_slots),
        /// Phrases such as "I want {PizzaSize} pizza". Slot names go in braces.
        sample_utterances: Vec<String> =
            "sampleUtterances" => list<String>(set_sample_utterances, with_sample_utterances),
        confirmation_prompt: Prompt =
            "confirmationPrompt" => nested(set_confirmation_prompt, with_confirmation_prompt),
        rejection_statement: Statement =
            "rejectionStatement" => nested(set_rejection_statement, with_rejection_statement),
        follow_up_prompt: FollowUpPrompt =
            "followUpPrompt" => nested(set_follow_up_prompt, with_follow_up_prompt),
        /// Sent once the Lambda fulfillment succeeds.
        conclusion_statement: Statement =
            "conclusionStatement" => nested(set_conclusion_statement, with_conclusion_statement),
        /// Invoked on each user input for initialization and validation.
        dialog_code_hook: CodeHook =
            "dialogCodeHook" => nested(set_dialog_code_hook, with_dialog_code_hook),
        fulfillment_activity: FulfillmentActivity =
            "fulfillmentActivity" => nested(set_fulfillment_activity, with_fulfillment_activity),
        /// Identifier of the built-in intent this intent extends.
        parent_intent_signature: String =
            "parentIntentSignature" => text(set_parent_intent_signature, with_parent_intent_signature),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        create_version: bool = "createVersion" => copy(set_create_version, with_create_version),
        kendra_configuration: KendraConfiguration =
            "kendraConfiguration" => nested(set_kendra_configuration, with_kendra_configuration),
    }
}

api_record! {
    pub struct PutIntentResult {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        slots: Vec<Slot> = "slots" => list<Slot>(set_slots, with_slots),
        sample_utterances: Vec<String> =
            "sampleUtterances" => list<String>(set_sample_utterances, with_sample_utterances),
        confirmation_prompt: Prompt =
            "confirmationPrompt" => nested(set_confirmation_prompt, with_confirmation_prompt),
        rejection_statement: Statement =
            "rejectionStatement" => nested(set_rejection_statement, with_rejection_statement),
        follow_up_prompt: FollowUpPrompt =
            "followUpPrompt" => nested(set_follow_up_prompt, with_follow_up_prompt),
        conclusion_statement: Statement =
            "conclusionStatement" => nested(set_conclusion_statement, with_conclusion_statement),
        dialog_code_hook: CodeHook =
            "dialogCodeHook" => nested(set_dialog_code_hook, with_dialog_code_hook),
        fulfillment_activity: FulfillmentActivity =
            "fulfillmentActivity" => nested(set_fulfillment_activity, with_fulfillment_activity),
        parent_intent_signature: String =
            "parentIntentSignature" => text(set_parent_intent_signature, with_parent_intent_signature),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated_date: DateTime<Utc> =
            "lastUpdatedDate" => copy(set_last_updated_date, with_last_updated_date),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_date: DateTime<Utc> = "createdDate" => copy(set_created_date, with_created_date),
        version: String = "version" => text(set_version, with_version),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        create_version: bool = "createVersion" => copy(set_create_version, with_create_version),
        kendra_configuration: KendraConfiguration =
            "kendraConfiguration" => nested(set_kendra_configuration, with_kendra_configuration),
    }
}
