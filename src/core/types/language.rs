use serde::{Deserialize, Serialize};

/// Reply language for generated text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Instruction appended to system prompts
    pub fn directive(&self) -> &'static str {
        match self {
            Language::En => "Respond in English.",
            Language::Hi => {
                "Respond in Hindi (Devanagari script). Keep exercise and food names recognizable."
            }
        }
    }
}
