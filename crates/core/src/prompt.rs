/// Name of the exploration prompt
pub const EXPLORE_PROMPT: &str = "explore-juce";

/// Build the text of the exploration prompt, optionally narrowed to a topic
pub fn explore_prompt(topic: Option<&str>) -> String {
    match topic.map(str::trim).filter(|topic| !topic.is_empty()) {
        Some(topic) => format!(
            "Please help me understand the JUCE {topic} functionality. What classes should I look at?"
        ),
        None => "Please help me explore the JUCE framework. What are the main components and classes I should know about?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explore_prompt_with_topic() {
        assert_eq!(
            explore_prompt(Some("audio processing")),
            "Please help me understand the JUCE audio processing functionality. What classes should I look at?"
        );
    }

    #[test]
    fn test_explore_prompt_without_topic() {
        assert!(explore_prompt(None).starts_with("Please help me explore the JUCE framework."));
    }

    #[test]
    fn test_explore_prompt_blank_topic() {
        assert_eq!(explore_prompt(Some("  ")), explore_prompt(None));
    }
}
