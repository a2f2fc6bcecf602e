use juce_docs_core::prompt::{explore_prompt, EXPLORE_PROMPT};
use serde::{Deserialize, Serialize};

use super::tools::Content;
use super::{parse_params, to_result, JsonRpcError};

#[derive(Debug, Serialize)]
pub struct Prompt {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Serialize)]
pub struct PromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: Content,
}

#[derive(Debug, Serialize)]
struct PromptsList {
    prompts: Vec<Prompt>,
}

#[derive(Debug, Serialize)]
struct GetPromptResult {
    description: String,
    messages: Vec<PromptMessage>,
}

const EXPLORE_DESCRIPTION: &str = "Explore the JUCE framework, optionally focused on one topic";

pub fn handle_prompts_list() -> Result<serde_json::Value, JsonRpcError> {
    to_result(PromptsList {
        prompts: vec![Prompt {
            name: EXPLORE_PROMPT.to_string(),
            description: EXPLORE_DESCRIPTION.to_string(),
            arguments: vec![PromptArgument {
                name: "topic".to_string(),
                description: "Area of JUCE to focus on (e.g., 'audio processing')".to_string(),
                required: false,
            }],
        }],
    })
}

pub fn handle_prompts_get(
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetPromptArgs {
        name: String,
        #[serde(default)]
        arguments: Option<ExploreArgs>,
    }

    #[derive(Deserialize)]
    struct ExploreArgs {
        #[serde(default)]
        topic: Option<String>,
    }

    let args: GetPromptArgs = parse_params(params)?;

    if args.name != EXPLORE_PROMPT {
        return Err(JsonRpcError::invalid_params(format!(
            "Unknown prompt: {}",
            args.name
        )));
    }

    let topic = args.arguments.and_then(|a| a.topic);

    to_result(GetPromptResult {
        description: EXPLORE_DESCRIPTION.to_string(),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: Content::Text {
                text: explore_prompt(topic.as_deref()),
            },
        }],
    })
}
