//! Bot operations: `PutBot`, `GetBot` and `CreateBotVersion`.
//!
//! A bot is created or replaced with [`PutBotRequest`]. Supplying the name of
//! an existing bot replaces the `$LATEST` version; fields left unset are
//! removed, except `idleSessionTTLInSeconds` and privacy settings which fall
//! back to their defaults. Only `name`, `locale` and `childDirected` are
//! required by the service.

use chrono::{DateTime, Utc};

use crate::enums::{Locale, ProcessBehavior, Status};
use crate::model::common::{Intent, Prompt, Statement, Tag};
use crate::record::api_record;

api_record! {
    /// Creates a bot or replaces the `$LATEST` version of an existing one.
    pub struct PutBotRequest {
        /// Bot name; not case sensitive.
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        /// Intents the bot recognizes, each pinned to a version.
        intents: Vec<Intent> = "intents" => list<Intent>(set_intents, with_intents),
        /// Sent when the user's intent is not understood. Without one, the
        /// service answers follow-up prompts without an intent with a 400.
        clarification_prompt: Prompt =
            "clarificationPrompt" => nested(set_clarification_prompt, with_clarification_prompt),
        /// Sent after the clarification prompt has been repeated `maxAttempts` times.
        abort_statement: Statement =
            "abortStatement" => nested(set_abort_statement, with_abort_statement),
        /// Seconds the service retains conversation data. Defaults to 300.
        idle_session_ttl_in_seconds: i32 = "idleSessionTTLInSeconds"
            => copy(set_idle_session_ttl_in_seconds, with_idle_session_ttl_in_seconds),
        /// Polly voice used for speech interaction.
        voice_id: String = "voiceId" => text(set_voice_id, with_voice_id),
        /// Must match the checksum of `$LATEST` when updating an existing bot;
        /// must be unset when creating one.
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        process_behavior: ProcessBehavior =
            "processBehavior" => copy(set_process_behavior, with_process_behavior),
        locale: Locale = "locale" => copy(set_locale, with_locale),
        /// Whether the bot is directed at children under 13 (COPPA).
        child_directed: bool = "childDirected" => copy(set_child_directed, with_child_directed),
        detect_sentiment: bool =
            "detectSentiment" => copy(set_detect_sentiment, with_detect_sentiment),
        /// Also publish a numbered version after saving `$LATEST`.
        create_version: bool = "createVersion" => copy(set_create_version, with_create_version),
        /// Tags are only applied when the bot is created.
        tags: Vec<Tag> = "tags" => list<Tag>(set_tags, with_tags),
    }
}

api_record! {
    pub struct PutBotResult {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        intents: Vec<Intent> = "intents" => list<Intent>(set_intents, with_intents),
        clarification_prompt: Prompt =
            "clarificationPrompt" => nested(set_clarification_prompt, with_clarification_prompt),
        abort_statement: Statement =
            "abortStatement" => nested(set_abort_statement, with_abort_statement),
        /// `FAILED` when the bot was saved without intents; see `failureReason`.
        status: Status = "status" => copy(set_status, with_status),
        failure_reason: String = "failureReason" => text(set_failure_reason, with_failure_reason),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated_date: DateTime<Utc> =
            "lastUpdatedDate" => copy(set_last_updated_date, with_last_updated_date),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_date: DateTime<Utc> = "createdDate" => copy(set_created_date, with_created_date),
        idle_session_ttl_in_seconds: i32 = "idleSessionTTLInSeconds"
            => copy(set_idle_session_ttl_in_seconds, with_idle_session_ttl_in_seconds),
        voice_id: String = "voiceId" => text(set_voice_id, with_voice_id),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        /// Always `$LATEST` for a put.
        version: String = "version" => text(set_version, with_version),
        locale: Locale = "locale" => copy(set_locale, with_locale),
        child_directed: bool = "childDirected" => copy(set_child_directed, with_child_directed),
        create_version: bool = "createVersion" => copy(set_create_version, with_create_version),
        detect_sentiment: bool =
            "detectSentiment" => copy(set_detect_sentiment, with_detect_sentiment),
        tags: Vec<Tag> = "tags" => list<Tag>(set_tags, with_tags),
    }
}

api_record! {
    /// Fetches one version (or alias) of a bot.
    pub struct GetBotRequest {
        name: String = "name" => text(set_name, with_name),
        /// A version number, `$LATEST`, or an alias name.
        version_or_alias: String =
            "versionOrAlias" => text(set_version_or_alias, with_version_or_alias),
    }
}

api_record! {
    pub struct GetBotResult {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        intents: Vec<Intent> = "intents" => list<Intent>(set_intents, with_intents),
        clarification_prompt: Prompt =
            "clarificationPrompt" => nested(set_clarification_prompt, with_clarification_prompt),
        abort_statement: Statement =
            "abortStatement" => nested(set_abort_statement, with_abort_statement),
        status: Status = "status" => copy(set_status, with_status),
        failure_reason: String = "failureReason" => text(set_failure_reason, with_failure_reason),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated_date: DateTime<Utc> =
            "lastUpdatedDate" => copy(set_last_updated_date, with_last_updated_date),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_date: DateTime<Utc> = "createdDate" => copy(set_created_date, with_created_date),
        idle_session_ttl_in_seconds: i32 = "idleSessionTTLInSeconds"
            => copy(set_idle_session_ttl_in_seconds, with_idle_session_ttl_in_seconds),
        voice_id: String = "voiceId" => text(set_voice_id, with_voice_id),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        version: String = "version" => text(set_version, with_version),
        locale: Locale = "locale" => copy(set_locale, with_locale),
        child_directed: bool = "childDirected" => copy(set_child_directed, with_child_directed),
        detect_sentiment: bool =
            "detectSentiment" => copy(set_detect_sentiment, with_detect_sentiment),
    }
}

api_record! {
    /// Publishes a new numbered version from `$LATEST`.
    pub struct CreateBotVersionRequest {
        name: String = "name" => text(set_name, with_name),
        /// When set, must match the checksum of `$LATEST` or the call fails.
        checksum: String = "checksum" => text(set_checksum, with_checksum),
    }
}

api_record! {
    pub struct CreateBotVersionResult {
        name: String = "name" => text(set_name, with_name),
        description: String = "description" => text(set_description, with_description),
        intents: Vec<Intent> = "intents" => list<Intent>(set_intents, with_intents),
        clarification_prompt: Prompt =
            "clarificationPrompt" => nested(set_clarification_prompt, with_clarification_prompt),
        abort_statement: Statement =
            "abortStatement" => nested(set_abort_statement, with_abort_statement),
        status: Status = "status" => copy(set_status, with_status),
        failure_reason: String = "failureReason" => text(set_failure_reason, with_failure_reason),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        last_updated_date: DateTime<Utc> =
            "lastUpdatedDate" => copy(set_last_updated_date, with_last_updated_date),
        #[serde(with = "crate::timestamp::epoch_seconds")]
        #[schemars(with = "Option<f64>")]
        created_date: DateTime<Utc> = "createdDate" => copy(set_created_date, with_created_date),
        idle_session_ttl_in_seconds: i32 = "idleSessionTTLInSeconds"
            => copy(set_idle_session_ttl_in_seconds, with_idle_session_ttl_in_seconds),
        voice_id: String = "voiceId" => text(set_voice_id, with_voice_id),
        checksum: String = "checksum" => text(set_checksum, with_checksum),
        /// The newly created version number.
        version: String = "version" => text(set_version, with_version),
        locale: Locale = "locale" => copy(set_locale, with_locale),
        child_directed: bool = "childDirected" => copy(set_child_directed, with_child_directed),
        detect_sentiment: bool =
            "detectSentiment" => copy(set_detect_sentiment, with_detect_sentiment),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn intent(name: &str) -> Intent {
        Intent::new().with_intent_name(name).with_intent_version("1")
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_set_then_get_scalars() {
        let mut request = PutBotRequest::new();
        request.set_name(Some("PizzaBot".to_string()));
        request.set_idle_session_ttl_in_seconds(Some(300));
        request.set_locale(Some(Locale::EnUs));
        request.set_child_directed(Some(false));

        assert_eq!(request.name(), Some("PizzaBot"));
        assert_eq!(request.idle_session_ttl_in_seconds(), Some(300));
        assert_eq!(request.locale(), Some(Locale::EnUs));
        assert_eq!(request.child_directed(), Some(false));
        assert_eq!(request.voice_id(), None);
    }

    #[test]
    fn test_with_matches_set() {
        let mut by_setter = PutBotRequest::new();
        by_setter.set_name(Some("PizzaBot".to_string()));
        by_setter.set_process_behavior(Some(ProcessBehavior::Save));

        let by_builder = PutBotRequest::new()
            .with_name("PizzaBot")
            .with_process_behavior(ProcessBehavior::Save);

        assert_eq!(by_setter, by_builder);
    }

    #[test]
    fn test_with_intents_appends_across_calls() {
        let request = PutBotRequest::new()
            .with_intents([intent("A"), intent("B"), intent("C")])
            .with_intents([intent("D"), intent("E")]);

        let names: Vec<_> = request
            .intents()
            .unwrap()
            .iter()
            .map(|i| i.intent_name().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_with_intents_on_empty_list_appends() {
        let mut request = PutBotRequest::new();
        request.set_intents(Some(Vec::new()));
        let request = request.with_intents([intent("A")]);
        assert_eq!(request.intents().unwrap().len(), 1);
    }

    #[test]
    fn test_with_intents_empty_input_allocates() {
        let request = PutBotRequest::new().with_intents(Vec::new());
        assert_eq!(request.intents(), Some(&[][..]));
    }

    #[test]
    fn test_set_intents_copy_independence() {
        let mut source = vec![intent("A")];
        let mut request = PutBotRequest::new();
        request.set_intents(Some(source.clone()));
        source.push(intent("B"));

        assert_eq!(request.intents().unwrap().len(), 1);
    }

    #[test]
    fn test_defaults_are_equal() {
        assert_eq!(PutBotRequest::new(), PutBotRequest::default());
        assert_eq!(hash_of(&GetBotResult::new()), hash_of(&GetBotResult::new()));
    }

    #[test]
    fn test_single_field_breaks_equality() {
        let base = PutBotRequest::new();
        assert_ne!(base, PutBotRequest::new().with_name("PizzaBot"));
        assert_ne!(base, PutBotRequest::new().with_child_directed(false));
        assert_ne!(base, PutBotRequest::new().with_tags(Vec::new()));
    }

    #[test]
    fn test_equal_records_hash_equal() {
        let a = PutBotRequest::new()
            .with_name("PizzaBot")
            .with_intents([intent("OrderPizza")])
            .with_locale(Locale::DeDe);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_display_name_only() {
        let request = PutBotRequest::new().with_name("Foo");
        assert_eq!(request.to_string(), "{name: Foo,}");
    }

    #[test]
    fn test_display_last_declared_field_has_no_comma() {
        let request = PutBotRequest::new().with_tags([Tag::new().with_key("team").with_value("bots")]);
        assert_eq!(request.to_string(), "{tags: [{key: team,value: bots}]}");
    }

    #[test]
    fn test_display_omits_unset_fields() {
        let request = PutBotRequest::new()
            .with_name("PizzaBot")
            .with_locale(Locale::EnUs)
            .with_child_directed(false);
        assert_eq!(
            request.to_string(),
            "{name: PizzaBot,locale: en-US,childDirected: false,}"
        );
    }

    #[test]
    fn test_put_bot_request_wire_format() {
        let request = PutBotRequest::new()
            .with_name("PizzaBot")
            .with_idle_session_ttl_in_seconds(600)
            .with_process_behavior(ProcessBehavior::Build)
            .with_locale(Locale::EnGb)
            .with_child_directed(true);

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"name":"PizzaBot","idleSessionTTLInSeconds":600,"processBehavior":"BUILD","locale":"en-GB","childDirected":true}"#
        );
    }

    #[test]
    fn test_get_bot_result_decodes_service_payload() {
        let payload = r#"{
            "name": "PizzaBot",
            "intents": [{"intentName": "OrderPizza", "intentVersion": "3"}],
            "status": "READY",
            "lastUpdatedDate": 1600000000.5,
            "createdDate": 1590000000,
            "idleSessionTTLInSeconds": 300,
            "checksum": "f7a3",
            "version": "$LATEST",
            "locale": "en-US",
            "childDirected": false,
            "detectSentiment": false
        }"#;

        let result: GetBotResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.status(), Some(Status::Ready));
        assert_eq!(result.created_date().unwrap().timestamp(), 1_590_000_000);
        assert_eq!(
            result.last_updated_date().unwrap().timestamp_millis(),
            1_600_000_000_500
        );
        assert_eq!(result.intents().unwrap()[0].intent_version(), Some("3"));
        assert!(result.failure_reason().is_none());
    }

    #[test]
    fn test_unknown_status_fails_decoding() {
        let payload = r#"{"name": "PizzaBot", "status": "EXPLODED"}"#;
        assert!(serde_json::from_str::<PutBotResult>(payload).is_err());
    }

    #[test]
    fn test_field_names_in_declaration_order() {
        assert_eq!(PutBotRequest::FIELD_NAMES.len(), 14);
        assert_eq!(PutBotRequest::FIELD_NAMES[5], "idleSessionTTLInSeconds");
        assert_eq!(GetBotRequest::FIELD_NAMES, &["name", "versionOrAlias"]);
    }
}
