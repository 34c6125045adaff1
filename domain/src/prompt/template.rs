//! Prompt templates for persona derivation

/// Templates for turning a document into a persona prompt
pub struct PersonaPromptTemplate;

impl PersonaPromptTemplate {
    /// System prompt for the derivation call
    pub fn derivation_system() -> &'static str {
        r#"You are an expert character writer.
Given source material about a person or entity, you write a second-person persona description
that another language model can adopt to speak as that character.
Capture their worldview, expertise, tone of voice, typical phrases and the topics they care about.
Only use what the material supports. Do not add commentary before or after the persona."#
    }

    /// User prompt carrying the agent name and the extracted document text
    pub fn derivation_request(agent_name: &str, document_text: &str) -> String {
        format!(
            r#"Write a persona prompt for an agent named "{name}".

Start with "You are {name}" and describe, in the second person:
1. Who they are and their background
2. Their beliefs, opinions and values
3. How they speak (vocabulary, sentence length, tone)
4. How they behave in a conversation or debate

Stay in character rules: the agent must always answer as {name}, never mention being an AI,
and keep replies conversational.

Source material:
---
{text}
---"#,
            name = agent_name,
            text = document_text.trim()
        )
    }
}
