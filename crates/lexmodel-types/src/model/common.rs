//! Records shared by bots and intents.

use crate::enums::{ContentType, FulfillmentActivityType};
use crate::record::api_record;

api_record! {
    /// Reference to a specific version of an intent, as listed by a bot.
    pub struct Intent {
        intent_name: String = "intentName" => text(set_intent_name, with_intent_name),
        intent_version: String = "intentVersion" => text(set_intent_version, with_intent_version),
    }
}

api_record! {
    /// A single message sent to the user as part of a prompt or statement.
    pub struct Message {
        content_type: ContentType = "contentType" => copy(set_content_type, with_content_type),
        content: String = "content" => text(set_content, with_content),
        /// Messages sharing a group number are alternatives; one per group is sent.
        group_number: i32 = "groupNumber" => copy(set_group_number, with_group_number),
    }
}

api_record! {
    /// Elicits information from the user.
    pub struct Prompt {
        messages: Vec<Message> = "messages" => list<Message>(set_messages, with_messages),
        /// Number of times to prompt before giving up.
        max_attempts: i32 = "maxAttempts" => copy(set_max_attempts, with_max_attempts),
        /// Response card. Substituted at runtime with session attributes and slot values.
        response_card: String = "responseCard" => text(set_response_card, with_response_card),
    }
}

api_record! {
    /// Messages sent to the user without expecting a reply.
    pub struct Statement {
        messages: Vec<Message> = "messages" => list<Message>(set_messages, with_messages),
        response_card: String = "responseCard" => text(set_response_card, with_response_card),
    }
}

api_record! {
    /// Prompt issued after an intent is fulfilled, asking for further activity.
    pub struct FollowUpPrompt {
        prompt: Prompt = "prompt" => nested(set_prompt, with_prompt),
        /// Sent when the user answers the follow-up prompt negatively.
        rejection_statement: Statement =
            "rejectionStatement" => nested(set_rejection_statement, with_rejection_statement),
    }
}

api_record! {
    /// A Lambda function invoked for dialog management or fulfillment.
    pub struct CodeHook {
        /// Lambda function ARN.
        uri: String = "uri" => text(set_uri, with_uri),
        /// Version of the request-response protocol the function expects.
        message_version: String = "messageVersion" => text(set_message_version, with_message_version),
    }
}

api_record! {
    /// How an intent is fulfilled once the user has provided all slot values.
    pub struct FulfillmentActivity {
        activity_type: FulfillmentActivityType =
            "type" => copy(set_activity_type, with_activity_type),
        code_hook: CodeHook = "codeHook" => nested(set_code_hook, with_code_hook),
    }
}

api_record! {
    /// Connects an intent to a Kendra index for `AMAZON.KendraSearchIntent`.
    pub struct KendraConfiguration {
        kendra_index: String = "kendraIndex" => text(set_kendra_index, with_kendra_index),
        query_filter_string: String =
            "queryFilterString" => text(set_query_filter_string, with_query_filter_string),
        role: String = "role" => text(set_role, with_role),
    }
}

api_record! {
    pub struct Tag {
        key: String = "key" => text(set_key, with_key),
        value: String = "value" => text(set_value, with_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(content: &str, group: i32) -> Message {
        Message::new()
            .with_content_type(ContentType::PlainText)
            .with_content(content)
            .with_group_number(group)
    }

    #[test]
    fn test_intent_display_all_fields() {
        let intent = Intent::new()
            .with_intent_name("OrderPizza")
            .with_intent_version("$LATEST");
        assert_eq!(
            intent.to_string(),
            "{intentName: OrderPizza,intentVersion: $LATEST}"
        );
    }

    #[test]
    fn test_display_keeps_dangling_comma() {
        let intent = Intent::new().with_intent_name("OrderPizza");
        assert_eq!(intent.to_string(), "{intentName: OrderPizza,}");
    }

    #[test]
    fn test_display_last_field_only() {
        let intent = Intent::new().with_intent_version("2");
        assert_eq!(intent.to_string(), "{intentVersion: 2}");
    }

    #[test]
    fn test_display_empty_record() {
        assert_eq!(Tag::new().to_string(), "{}");
    }

    #[test]
    fn test_prompt_display_nested_list() {
        let prompt = Prompt::new()
            .with_messages([plain("Which size?", 1), plain("Small or large?", 1)])
            .with_max_attempts(2);
        assert_eq!(
            prompt.to_string(),
            "{messages: [{contentType: PlainText,content: Which size?,groupNumber: 1}, \
             {contentType: PlainText,content: Small or large?,groupNumber: 1}],maxAttempts: 2,}"
        );
    }

    #[test]
    fn test_fulfillment_activity_wire_name() {
        let activity = FulfillmentActivity::new()
            .with_activity_type(FulfillmentActivityType::CodeHook)
            .with_code_hook(
                CodeHook::new()
                    .with_uri("arn:aws:lambda:us-east-1:123456789012:function:Fulfil")
                    .with_message_version("1.0"),
            );
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "CodeHook");
        assert_eq!(json["codeHook"]["messageVersion"], "1.0");

        let parsed: FulfillmentActivity = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, activity);
    }

    #[test]
    fn test_with_messages_appends() {
        let statement = Statement::new()
            .with_messages([plain("a", 1)])
            .with_messages([plain("b", 2), plain("c", 3)]);
        let contents: Vec<_> = statement
            .messages()
            .unwrap()
            .iter()
            .map(|m| m.content().unwrap())
            .collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_follow_up_prompt_accessors() {
        let mut follow_up = FollowUpPrompt::new();
        assert!(follow_up.prompt().is_none());

        follow_up.set_prompt(Some(Prompt::new().with_max_attempts(1)));
        assert_eq!(follow_up.prompt().unwrap().max_attempts(), Some(1));

        follow_up.set_prompt(None);
        assert!(follow_up.prompt().is_none());
    }
}
