//! [`Validate`] implementations for every record.
//!
//! Paths use wire names. Required-field rules apply to requests only; results
//! are checked against the per-field rules.

use lexmodel_types::enums::{Destination, FulfillmentActivityType, LogType};
use lexmodel_types::model::{
    CodeHook, CreateBotVersionRequest, CreateBotVersionResult, EnumerationValue, FollowUpPrompt,
    FulfillmentActivity, GetBotRequest, GetBotResult, Intent, KendraConfiguration,
    LogSettingsRequest, Message, Prompt, PutBotRequest, PutBotResult, PutIntentRequest,
    PutIntentResult, PutSlotTypeRequest, PutSlotTypeResult, Slot, SlotDefaultValue,
    SlotDefaultValueSpec, SlotTypeConfiguration, SlotTypeRegexConfiguration, Statement, Tag,
};

use super::rules;
use super::{Checker, Validate};

impl Validate for Intent {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("intentName", self.intent_name().is_some());
        c.text("intentName", self.intent_name(), &rules::RESOURCE_NAME);
        c.require("intentVersion", self.intent_version().is_some());
        c.text("intentVersion", self.intent_version(), &rules::VERSION);
    }
}

impl Validate for Message {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("contentType", self.content_type().is_some());
        c.require("content", self.content().is_some());
        c.text("content", self.content(), &rules::MESSAGE_CONTENT);
        c.range("groupNumber", self.group_number(), rules::GROUP_NUMBER);
    }
}

impl Validate for Prompt {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("messages", self.messages().is_some());
        c.count("messages", self.messages(), rules::MESSAGES);
        c.each("messages", self.messages());
        c.require("maxAttempts", self.max_attempts().is_some());
        c.range("maxAttempts", self.max_attempts(), rules::MAX_ATTEMPTS);
        c.text("responseCard", self.response_card(), &rules::RESPONSE_CARD);
    }
}

impl Validate for Statement {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("messages", self.messages().is_some());
        c.count("messages", self.messages(), rules::MESSAGES);
        c.each("messages", self.messages());
        c.text("responseCard", self.response_card(), &rules::RESPONSE_CARD);
    }
}

impl Validate for FollowUpPrompt {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("prompt", self.prompt().is_some());
        c.nested("prompt", self.prompt());
        c.require("rejectionStatement", self.rejection_statement().is_some());
        c.nested("rejectionStatement", self.rejection_statement());
    }
}

impl Validate for CodeHook {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("uri", self.uri().is_some());
        c.text("uri", self.uri(), &rules::CODE_HOOK_URI);
        c.require("messageVersion", self.message_version().is_some());
        c.text("messageVersion", self.message_version(), &rules::MESSAGE_VERSION);
    }
}

impl Validate for FulfillmentActivity {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("type", self.activity_type().is_some());
        if self.activity_type() == Some(FulfillmentActivityType::CodeHook) && self.code_hook().is_none() {
            c.conflict("codeHook", "is required when type is CodeHook");
        }
        c.nested("codeHook", self.code_hook());
    }
}

impl Validate for KendraConfiguration {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("kendraIndex", self.kendra_index().is_some());
        c.text("kendraIndex", self.kendra_index(), &rules::KENDRA_INDEX);
        c.require("role", self.role().is_some());
        c.text("role", self.role(), &rules::IAM_ROLE);
    }
}

impl Validate for Tag {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("key", self.key().is_some());
        c.text("key", self.key(), &rules::TAG_KEY);
        c.require("value", self.value().is_some());
        c.text("value", self.value(), &rules::TAG_VALUE);
    }
}

impl Validate for Slot {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("name", self.name().is_some());
        c.text("name", self.name(), &rules::SLOT_NAME);
        c.text("description", self.description(), &rules::DESCRIPTION);
        c.require("slotConstraint", self.slot_constraint().is_some());
        c.text("slotType", self.slot_type(), &rules::SLOT_TYPE);
        c.text("slotTypeVersion", self.slot_type_version(), &rules::VERSION);
        c.nested("valueElicitationPrompt", self.value_elicitation_prompt());
        c.range("priority", self.priority(), rules::SLOT_PRIORITY);
        c.count("sampleUtterances", self.sample_utterances(), rules::SAMPLE_UTTERANCES);
        c.each_text("sampleUtterances", self.sample_utterances(), &rules::UTTERANCE);
        c.text("responseCard", self.response_card(), &rules::RESPONSE_CARD);
        c.nested("defaultValueSpec", self.default_value_spec());
    }
}

impl Validate for SlotDefaultValue {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("defaultValue", self.default_value().is_some());
        c.text("defaultValue", self.default_value(), &rules::DEFAULT_VALUE);
    }
}

impl Validate for SlotDefaultValueSpec {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("defaultValueList", self.default_value_list().is_some());
        c.count("defaultValueList", self.default_value_list(), rules::DEFAULT_VALUES);
        c.each("defaultValueList", self.default_value_list());
    }
}

impl Validate for EnumerationValue {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("value", self.value().is_some());
        c.text("value", self.value(), &rules::ENUMERATION_VALUE);
        c.each_text("synonyms", self.synonyms(), &rules::SYNONYM);
    }
}

impl Validate for SlotTypeRegexConfiguration {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("pattern", self.pattern().is_some());
        c.text("pattern", self.pattern(), &rules::REGEX_PATTERN);
    }
}

impl Validate for SlotTypeConfiguration {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.nested("regexConfiguration", self.regex_configuration());
    }
}

impl Validate for LogSettingsRequest {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("logType", self.log_type().is_some());
        c.require("destination", self.destination().is_some());
        if self.log_type() == Some(LogType::Audio)
            && self.destination().is_some_and(|d| d != Destination::S3)
        {
            c.conflict("destination", "audio logs can only be delivered to S3");
        }
        c.text("kmsKeyArn", self.kms_key_arn(), &rules::KMS_KEY_ARN);
        c.require("resourceArn", self.resource_arn().is_some());
        c.text("resourceArn", self.resource_arn(), &rules::RESOURCE_ARN);
    }
}

/// Fields shared by every bot record.
struct BotFields<'r> {
    name: Option<&'r str>,
    description: Option<&'r str>,
    intents: Option<&'r [Intent]>,
    clarification_prompt: Option<&'r Prompt>,
    abort_statement: Option<&'r Statement>,
    idle_session_ttl_in_seconds: Option<i32>,
    version: Option<&'r str>,
}

impl BotFields<'_> {
    fn check(&self, c: &mut Checker<'_>) {
        c.text("name", self.name, &rules::BOT_NAME);
        c.text("description", self.description, &rules::DESCRIPTION);
        c.each("intents", self.intents);
        c.nested("clarificationPrompt", self.clarification_prompt);
        c.nested("abortStatement", self.abort_statement);
        c.range(
            "idleSessionTTLInSeconds",
            self.idle_session_ttl_in_seconds,
            rules::IDLE_SESSION_TTL,
        );
        c.text("version", self.version, &rules::VERSION);
    }
}

fn check_tags(c: &mut Checker<'_>, tags: Option<&[Tag]>) {
    c.count("tags", tags, rules::TAGS);
    c.each("tags", tags);
}

impl Validate for PutBotRequest {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("name", self.name().is_some());
        c.require("locale", self.locale().is_some());
        c.require("childDirected", self.child_directed().is_some());
        BotFields {
            name: self.name(),
            description: self.description(),
            intents: self.intents(),
            clarification_prompt: self.clarification_prompt(),
            abort_statement: self.abort_statement(),
            idle_session_ttl_in_seconds: self.idle_session_ttl_in_seconds(),
            version: None,
        }
        .check(c);
        check_tags(c, self.tags());
    }
}

impl Validate for PutBotResult {
    fn check_fields(&self, c: &mut Checker<'_>) {
        let c = &mut c.without_required();
        BotFields {
            name: self.name(),
            description: self.description(),
            intents: self.intents(),
            clarification_prompt: self.clarification_prompt(),
            abort_statement: self.abort_statement(),
            idle_session_ttl_in_seconds: self.idle_session_ttl_in_seconds(),
            version: self.version(),
        }
        .check(c);
        check_tags(c, self.tags());
    }
}

impl Validate for GetBotRequest {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("name", self.name().is_some());
        c.text("name", self.name(), &rules::BOT_NAME);
        c.require("versionOrAlias", self.version_or_alias().is_some());
        c.text("versionOrAlias", self.version_or_alias(), &rules::VERSION_OR_ALIAS);
    }
}

impl Validate for GetBotResult {
    fn check_fields(&self, c: &mut Checker<'_>) {
        let c = &mut c.without_required();
        BotFields {
            name: self.name(),
            description: self.description(),
            intents: self.intents(),
            clarification_prompt: self.clarification_prompt(),
            abort_statement: self.abort_statement(),
            idle_session_ttl_in_seconds: self.idle_session_ttl_in_seconds(),
            version: self.version(),
        }
        .check(c);
    }
}

impl Validate for CreateBotVersionRequest {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("name", self.name().is_some());
        c.text("name", self.name(), &rules::BOT_NAME);
    }
}

impl Validate for CreateBotVersionResult {
    fn check_fields(&self, c: &mut Checker<'_>) {
        let c = &mut c.without_required();
        BotFields {
            name: self.name(),
            description: self.description(),
            intents: self.intents(),
            clarification_prompt: self.clarification_prompt(),
            abort_statement: self.abort_statement(),
            idle_session_ttl_in_seconds: self.idle_session_ttl_in_seconds(),
            version: self.version(),
        }
        .check(c);
    }
}

/// Fields shared by intent requests and results.
struct IntentFields<'r> {
    name: Option<&'r str>,
    description: Option<&'r str>,
    slots: Option<&'r [Slot]>,
    sample_utterances: Option<&'r [String]>,
    confirmation_prompt: Option<&'r Prompt>,
    rejection_statement: Option<&'r Statement>,
    follow_up_prompt: Option<&'r FollowUpPrompt>,
    conclusion_statement: Option<&'r Statement>,
    dialog_code_hook: Option<&'r CodeHook>,
    fulfillment_activity: Option<&'r FulfillmentActivity>,
    kendra_configuration: Option<&'r KendraConfiguration>,
}

impl IntentFields<'_> {
    fn check(&self, c: &mut Checker<'_>) {
        c.text("name", self.name, &rules::RESOURCE_NAME);
        c.text("description", self.description, &rules::DESCRIPTION);
        c.each("slots", self.slots);
        c.each_text("sampleUtterances", self.sample_utterances, &rules::UTTERANCE);
        c.nested("confirmationPrompt", self.confirmation_prompt);
        c.nested("rejectionStatement", self.rejection_statement);
        if self.confirmation_prompt.is_some() != self.rejection_statement.is_some() {
            c.conflict(
                "rejectionStatement",
                "confirmationPrompt and rejectionStatement must be set together",
            );
        }
        c.nested("followUpPrompt", self.follow_up_prompt);
        c.nested("conclusionStatement", self.conclusion_statement);
        if self.follow_up_prompt.is_some() && self.conclusion_statement.is_some() {
            c.conflict(
                "conclusionStatement",
                "followUpPrompt and conclusionStatement are mutually exclusive",
            );
        }
        c.nested("dialogCodeHook", self.dialog_code_hook);
        c.nested("fulfillmentActivity", self.fulfillment_activity);
        c.nested("kendraConfiguration", self.kendra_configuration);
    }
}

impl Validate for PutIntentRequest {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("name", self.name().is_some());
        IntentFields {
            name: self.name(),
            description: self.description(),
            slots: self.slots(),
            sample_utterances: self.sample_utterances(),
            confirmation_prompt: self.confirmation_prompt(),
            rejection_statement: self.rejection_statement(),
            follow_up_prompt: self.follow_up_prompt(),
            conclusion_statement: self.conclusion_statement(),
            dialog_code_hook: self.dialog_code_hook(),
            fulfillment_activity: self.fulfillment_activity(),
            kendra_configuration: self.kendra_configuration(),
        }
        .check(c);
    }
}

impl Validate for PutIntentResult {
    fn check_fields(&self, c: &mut Checker<'_>) {
        let c = &mut c.without_required();
        IntentFields {
            name: self.name(),
            description: self.description(),
            slots: self.slots(),
            sample_utterances: self.sample_utterances(),
            confirmation_prompt: self.confirmation_prompt(),
            rejection_statement: self.rejection_statement(),
            follow_up_prompt: self.follow_up_prompt(),
            conclusion_statement: self.conclusion_statement(),
            dialog_code_hook: self.dialog_code_hook(),
            fulfillment_activity: self.fulfillment_activity(),
            kendra_configuration: self.kendra_configuration(),
        }
        .check(c);
        c.text("version", self.version(), &rules::VERSION);
    }
}

fn check_slot_type(
    c: &mut Checker<'_>,
    name: Option<&str>,
    description: Option<&str>,
    values: Option<&[EnumerationValue]>,
    configurations: Option<&[SlotTypeConfiguration]>,
) {
    c.text("name", name, &rules::RESOURCE_NAME);
    c.text("description", description, &rules::DESCRIPTION);
    c.count("enumerationValues", values, rules::ENUMERATION_VALUES);
    c.each("enumerationValues", values);
    c.count("slotTypeConfigurations", configurations, rules::SLOT_TYPE_CONFIGURATIONS);
    c.each("slotTypeConfigurations", configurations);
}

impl Validate for PutSlotTypeRequest {
    fn check_fields(&self, c: &mut Checker<'_>) {
        c.require("name", self.name().is_some());
        check_slot_type(
            c,
            self.name(),
            self.description(),
            self.enumeration_values(),
            self.slot_type_configurations(),
        );
    }
}

impl Validate for PutSlotTypeResult {
    fn check_fields(&self, c: &mut Checker<'_>) {
        let c = &mut c.without_required();
        check_slot_type(
            c,
            self.name(),
            self.description(),
            self.enumeration_values(),
            self.slot_type_configurations(),
        );
        c.text("version", self.version(), &rules::VERSION);
    }
}
