//! Chat prompt

use super::chat::ChatContext;

const CHAT_PERSONA: &str = "You are the virtual assistant of Brother's Fitness, a neighbourhood gym. \
Answer questions about training, nutrition, memberships and gym timings. \
Be friendly, brief and motivating. Do not give medical diagnoses; suggest seeing a doctor for injuries or health conditions.";

/// System prompt with the page context and a language directive
pub fn build_chat_system_prompt(context: &ChatContext) -> String {
    let mut prompt = String::from(CHAT_PERSONA);

    if !context.extra.is_empty() {
        let rendered = serde_json::to_string(&context.extra).unwrap_or_default();
        prompt.push_str("\n\nContext from the website: ");
        prompt.push_str(&rendered);
    }

    prompt.push_str("\n\n");
    prompt.push_str(context.language.directive());
    prompt
}
