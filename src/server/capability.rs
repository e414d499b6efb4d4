use super::fields::{FieldSpec, Fields, OPTION_MAX_LEN};
use crate::{config::ModelTier, llm::GenerationConfig};

pub const SHORT_PROMPT_MAX_LEN: usize = 2000;
pub const TEXT_MAX_LEN: usize = 5000;
pub const SUMMARY_INPUT_MAX_LEN: usize = 10000;

pub const DEFAULT_TONE: &str = "neutral";
pub const DEFAULT_SUMMARY_LENGTH: &str = "medium";
pub const DEFAULT_CODE_LANGUAGE: &str = "python";
pub const DEFAULT_TARGET_LANGUAGE: &str = "Tamil";

const CODE_TEMPERATURE: f32 = 0.5;
const CODE_MAX_OUTPUT_TOKENS: u32 = 800;

/// One writing task exposed as a POST route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    GenerateText,
    Rewrite,
    Summarize,
    GenerateCode,
    Translate,
    AdjustTone,
    GenerateImageDescription,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Self::GenerateText,
        Self::Rewrite,
        Self::Summarize,
        Self::GenerateCode,
        Self::Translate,
        Self::AdjustTone,
        Self::GenerateImageDescription,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Self::GenerateText => "/generate_text",
            Self::Rewrite => "/rewrite",
            Self::Summarize => "/summarize",
            Self::GenerateCode => "/generate_code",
            Self::Translate => "/translate",
            Self::AdjustTone => "/adjust_tone",
            Self::GenerateImageDescription => "/generate_image_description",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        const GENERATE_TEXT: &[FieldSpec] =
            &[FieldSpec::required("prompt", TEXT_MAX_LEN, "No prompt provided")];
        const REWRITE: &[FieldSpec] = &[
            FieldSpec::required("text", TEXT_MAX_LEN, "No text provided for rewriting"),
            FieldSpec::optional("tone", DEFAULT_TONE),
        ];
        const SUMMARIZE: &[FieldSpec] = &[
            FieldSpec::required(
                "text",
                SUMMARY_INPUT_MAX_LEN,
                "No text provided for summarizing",
            ),
            FieldSpec::optional("length", DEFAULT_SUMMARY_LENGTH),
        ];
        const GENERATE_CODE: &[FieldSpec] = &[
            FieldSpec::required("prompt", SHORT_PROMPT_MAX_LEN, "No code prompt provided"),
            FieldSpec::optional("language", DEFAULT_CODE_LANGUAGE),
        ];
        const TRANSLATE: &[FieldSpec] = &[
            FieldSpec::required("text", TEXT_MAX_LEN, "No text provided for translation"),
            FieldSpec::optional("target_lang", DEFAULT_TARGET_LANGUAGE),
        ];
        const ADJUST_TONE: &[FieldSpec] = &[
            FieldSpec::required("text", TEXT_MAX_LEN, "Text and tone are required"),
            FieldSpec::required("tone", OPTION_MAX_LEN, "Text and tone are required"),
        ];
        const IMAGE_DESCRIPTION: &[FieldSpec] =
            &[FieldSpec::required("prompt", SHORT_PROMPT_MAX_LEN, "No prompt provided")];

        match self {
            Self::GenerateText => GENERATE_TEXT,
            Self::Rewrite => REWRITE,
            Self::Summarize => SUMMARIZE,
            Self::GenerateCode => GENERATE_CODE,
            Self::Translate => TRANSLATE,
            Self::AdjustTone => ADJUST_TONE,
            Self::GenerateImageDescription => IMAGE_DESCRIPTION,
        }
    }

    pub fn model_tier(self) -> ModelTier {
        match self {
            Self::GenerateText | Self::GenerateImageDescription => ModelTier::Base,
            Self::Rewrite | Self::Summarize | Self::GenerateCode | Self::AdjustTone => {
                ModelTier::Pro
            }
            Self::Translate => ModelTier::Fast,
        }
    }

    /// Code generation runs cooler and shorter to keep answers terse.
    pub fn generation_config(self) -> Option<GenerationConfig> {
        match self {
            Self::GenerateCode => Some(GenerationConfig {
                temperature: CODE_TEMPERATURE,
                max_output_tokens: CODE_MAX_OUTPUT_TOKENS,
            }),
            _ => None,
        }
    }

    pub fn build_prompt(self, fields: &Fields) -> String {
        match self {
            Self::GenerateText => fields.get("prompt").to_string(),
            Self::Rewrite => format!(
                "Rewrite the following text in a {} tone:\n\n{}",
                fields.get("tone"),
                fields.get("text")
            ),
            Self::Summarize => format!(
                "Summarize the following text to a {} length:\n\n{}",
                fields.get("length"),
                fields.get("text")
            ),
            Self::GenerateCode => format!(
                "Generate {} code for: {}\nProvide only the code block, no extra text.",
                fields.get("language"),
                fields.get("prompt")
            ),
            Self::Translate => format!(
                "Translate the following text to {}:\n\n{}",
                fields.get("target_lang"),
                fields.get("text")
            ),
            Self::AdjustTone => format!(
                "Adjust the tone of the following text to be more {}:\n\n{}",
                fields.get("tone"),
                fields.get("text")
            ),
            Self::GenerateImageDescription => format!(
                "Generate a detailed image generation prompt for an AI, based on the following idea: {}",
                fields.get("prompt")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::fields::extract_fields;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn prompt_for(capability: Capability, body: Value) -> String {
        let Value::Object(map) = body else {
            unreachable!()
        };
        let fields = extract_fields(&map, capability.fields()).unwrap();
        capability.build_prompt(&fields)
    }

    #[test]
    fn rewrite_defaults_to_neutral_tone() {
        assert_eq!(
            prompt_for(Capability::Rewrite, json!({"text": "hey there"})),
            "Rewrite the following text in a neutral tone:\n\nhey there"
        );
    }

    #[test]
    fn generate_code_defaults_language_and_uses_code_config() {
        assert_eq!(
            prompt_for(Capability::GenerateCode, json!({"prompt": "reverse a list"})),
            "Generate python code for: reverse a list\nProvide only the code block, no extra text."
        );

        let config = Capability::GenerateCode.generation_config().unwrap();
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_output_tokens, 800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn translate_uses_supplied_language() {
        assert_eq!(
            prompt_for(
                Capability::Translate,
                json!({"text": "Hello", "target_lang": "Spanish"})
            ),
            "Translate the following text to Spanish:\n\nHello"
        );
        assert_eq!(
            prompt_for(Capability::Translate, json!({"text": "Hello"})),
            "Translate the following text to Tamil:\n\nHello"
        );
    }

    #[test]
    fn summarize_and_adjust_tone_templates() {
        assert_eq!(
            prompt_for(Capability::Summarize, json!({"text": "long text"})),
            "Summarize the following text to a medium length:\n\nlong text"
        );
        assert_eq!(
            prompt_for(
                Capability::AdjustTone,
                json!({"text": "send it now", "tone": "polite"})
            ),
            "Adjust the tone of the following text to be more polite:\n\nsend it now"
        );
    }

    #[test]
    fn image_description_wraps_idea() {
        assert_eq!(
            prompt_for(
                Capability::GenerateImageDescription,
                json!({"prompt": "a fox in snow"})
            ),
            "Generate a detailed image generation prompt for an AI, based on the following idea: a fox in snow"
        );
    }

    #[test]
    fn tiers_and_configs_per_capability() {
        assert_eq!(Capability::GenerateText.model_tier(), ModelTier::Base);
        assert_eq!(Capability::Translate.model_tier(), ModelTier::Fast);
        assert_eq!(Capability::Summarize.model_tier(), ModelTier::Pro);
        for capability in Capability::ALL {
            if capability != Capability::GenerateCode {
                assert!(capability.generation_config().is_none());
            }
        }
    }

    #[test]
    fn routes_are_unique() {
        let mut routes: Vec<_> = Capability::ALL.iter().map(|c| c.route()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), Capability::ALL.len());
    }
}
