// Assistant conversation data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversation step, as reported by the assistant backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChatStep {
    ListProjects,
    SelectProject,
    ChooseAction,
    Finished,
}

impl std::fmt::Display for ChatStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatStep::ListProjects => write!(f, "list-projects"),
            ChatStep::SelectProject => write!(f, "select-project"),
            ChatStep::ChooseAction => write!(f, "choose-action"),
            ChatStep::Finished => write!(f, "finished"),
        }
    }
}

impl std::str::FromStr for ChatStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list-projects" => Ok(ChatStep::ListProjects),
            "select-project" => Ok(ChatStep::SelectProject),
            "choose-action" => Ok(ChatStep::ChooseAction),
            "finished" => Ok(ChatStep::Finished),
            _ => Err(format!("Invalid chat step: {}", s)),
        }
    }
}

/// Message author role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the assistant panel's message log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier (UUID v4)
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Result card produced by an assistant turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub description: String,
}

/// Request body for one assistant turn
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub step: ChatStep,
    pub selected_project: Option<String>,
    pub message: String,
}

/// Decoded assistant reply: the next step, optional assistant text, and
/// any result cards the turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub step: ChatStep,
    pub message: Option<String>,
    pub items: Vec<ResultItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_chat_step_wire_names() {
        assert_eq!(
            serde_json::to_string(&ChatStep::ListProjects).unwrap(),
            r#""list-projects""#
        );
        assert_eq!(
            serde_json::from_str::<ChatStep>(r#""choose-action""#).unwrap(),
            ChatStep::ChooseAction
        );
    }

    #[test]
    fn test_chat_step_display_roundtrip() {
        for step in [
            ChatStep::ListProjects,
            ChatStep::SelectProject,
            ChatStep::ChooseAction,
            ChatStep::Finished,
        ] {
            assert_eq!(ChatStep::from_str(&step.to_string()).unwrap(), step);
        }
        assert!(ChatStep::from_str("list_projects").is_err());
    }

    #[test]
    fn test_assistant_request_shape() {
        let request = AssistantRequest {
            step: ChatStep::ChooseAction,
            selected_project: Some("Foo".to_string()),
            message: "ideas".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["step"], "choose-action");
        assert_eq!(json["selectedProject"], "Foo");
        assert_eq!(json["message"], "ideas");
    }
}
