//! Prompt builders for sentiment analysis requests.
//!
//! Both builders are pure: identical input always yields identical prompt
//! text, so analysis requests stay reproducible.

use crate::domain::chat::ChatMessage;

/// Builds the analysis prompt for a single message.
///
/// The prompt pins the exact JSON shape the model must emit, spells out
/// the score scale, and forbids surrounding prose.
pub fn single_message_prompt(text: &str) -> String {
    format!(
        r#"Analyze the sentiment of the following text and respond ONLY with a JSON object in this exact format:
{{"sentiment": "positive/negative/neutral", "score": 0.0-1.0, "explanation": "brief explanation"}}

Text: "{text}"

Remember:
- sentiment must be exactly one of: positive, negative, or neutral
- score is 0.0 (very negative) to 1.0 (very positive), with 0.5 being neutral
- Keep explanation brief (one sentence)"#
    )
}

/// Builds the analysis prompt for a whole conversation.
///
/// Only user messages enter the transcript; assistant replies do not
/// influence the overall sentiment. Order is preserved.
pub fn conversation_prompt(messages: &[ChatMessage]) -> String {
    let transcript = messages
        .iter()
        .filter(|m| m.is_user())
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze the OVERALL sentiment of this entire conversation based on the user's messages. Consider the emotional trajectory throughout the conversation.

Respond ONLY with a JSON object in this exact format:
{{"sentiment": "positive/negative/neutral", "score": 0.0-1.0, "summary": "brief summary of emotional direction"}}

Conversation:
{transcript}

Remember:
- sentiment must be exactly one of: positive, negative, or neutral
- score is 0.0 (very negative) to 1.0 (very positive), with 0.5 being neutral
- summary should describe the overall emotional direction (one sentence)"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::Role;

    mod single_message {
        use super::*;

        #[test]
        fn embeds_the_literal_text() {
            let prompt = single_message_prompt("I love this product!");
            assert!(prompt.contains("Text: \"I love this product!\""));
        }

        #[test]
        fn states_the_required_json_shape() {
            let prompt = single_message_prompt("anything");
            assert!(prompt.contains(
                r#"{"sentiment": "positive/negative/neutral", "score": 0.0-1.0, "explanation": "brief explanation"}"#
            ));
        }

        #[test]
        fn explains_the_score_scale() {
            let prompt = single_message_prompt("anything");
            assert!(prompt.contains("0.0 (very negative) to 1.0 (very positive)"));
            assert!(prompt.contains("0.5 being neutral"));
        }

        #[test]
        fn forbids_surrounding_prose() {
            let prompt = single_message_prompt("anything");
            assert!(prompt.contains("respond ONLY with a JSON object"));
        }

        #[test]
        fn is_deterministic() {
            assert_eq!(
                single_message_prompt("same input"),
                single_message_prompt("same input")
            );
        }
    }

    mod conversation {
        use super::*;

        #[test]
        fn includes_only_user_messages() {
            let messages = vec![
                ChatMessage::user("I'm having a rough day"),
                ChatMessage::assistant("Sorry to hear that!"),
                ChatMessage::user("Thanks, feeling a bit better now"),
            ];

            let prompt = conversation_prompt(&messages);

            assert!(prompt.contains("user: I'm having a rough day"));
            assert!(prompt.contains("user: Thanks, feeling a bit better now"));
            assert!(!prompt.contains("Sorry to hear that!"));
        }

        #[test]
        fn preserves_message_order() {
            let messages = vec![
                ChatMessage::user("first"),
                ChatMessage::user("second"),
                ChatMessage::user("third"),
            ];

            let prompt = conversation_prompt(&messages);
            let first = prompt.find("user: first").unwrap();
            let second = prompt.find("user: second").unwrap();
            let third = prompt.find("user: third").unwrap();

            assert!(first < second);
            assert!(second < third);
        }

        #[test]
        fn joins_messages_one_per_line() {
            let messages = vec![ChatMessage::user("one"), ChatMessage::user("two")];
            let prompt = conversation_prompt(&messages);
            assert!(prompt.contains("user: one\nuser: two"));
        }

        #[test]
        fn asks_for_trajectory_and_summary() {
            let messages = vec![ChatMessage::user("hello")];
            let prompt = conversation_prompt(&messages);

            assert!(prompt.contains("emotional trajectory"));
            assert!(prompt.contains("\"summary\""));
            assert!(!prompt.contains("\"explanation\""));
        }

        #[test]
        fn formats_roles_as_prefix() {
            let messages = vec![ChatMessage::new(Role::User, "content here")];
            let prompt = conversation_prompt(&messages);
            assert!(prompt.contains("user: content here"));
        }

        #[test]
        fn is_deterministic() {
            let messages = vec![ChatMessage::user("stable")];
            assert_eq!(
                conversation_prompt(&messages),
                conversation_prompt(&messages)
            );
        }
    }
}
