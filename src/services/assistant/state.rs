// Assistant conversation state machine
//
// Pure core of the assistant panel: `ChatState::apply` folds one event into
// the next state and performs no I/O. The driver in the parent module owns
// the network call and applies events around it.

use crate::models::assistant::{AssistantReply, ChatMessage, ChatStep, ResultItem};

/// Greeting seeded into the log when the panel opens.
pub const GREETING: &str = "Hi! Pick one of your projects and I'll help you show it off.";

/// Assistant text when a turn produced result cards but no message.
pub const RESULTS_FALLBACK: &str = "Here's what I came up with.";

/// Assistant text when a turn produced neither message nor results.
pub const EMPTY_FALLBACK: &str = "I couldn't come up with anything for that. Try rephrasing.";

/// In-memory state of one assistant panel instance. Discarded when the
/// panel closes; nothing persists across opens.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub step: ChatStep,
    /// `None` only while `step` is `ListProjects`
    pub selected_project: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// Cleared whenever the user navigates back to the project list
    pub last_result_items: Vec<ResultItem>,
    pub is_loading: bool,
}

/// Events that drive the machine. Applying one is pure; the driver decides
/// which events to emit and when.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    Opened,
    ProjectSelected(String),
    MessageSent(String),
    ReplyReceived(AssistantReply),
    ReplyFailed,
    WentBack,
}

impl ChatState {
    /// Freshly opened panel: project list step, one assistant greeting.
    pub fn new() -> Self {
        Self {
            step: ChatStep::ListProjects,
            selected_project: None,
            messages: vec![ChatMessage::assistant(GREETING)],
            last_result_items: Vec::new(),
            is_loading: false,
        }
    }

    /// Fold one event into the next state.
    pub fn apply(mut self, event: ChatEvent) -> ChatState {
        match event {
            ChatEvent::Opened => ChatState::new(),

            ChatEvent::ProjectSelected(name) => {
                if self.step != ChatStep::ListProjects {
                    return self;
                }
                self.messages.push(ChatMessage::user(name.clone()));
                self.messages.push(ChatMessage::assistant(format!(
                    "Great choice! What would you like to do with \"{}\"?",
                    name
                )));
                self.selected_project = Some(name);
                self.step = ChatStep::ChooseAction;
                self
            }

            ChatEvent::MessageSent(text) => {
                self.messages.push(ChatMessage::user(text));
                self.is_loading = true;
                self
            }

            ChatEvent::ReplyReceived(reply) => {
                let text = reply.message.unwrap_or_else(|| {
                    if reply.items.is_empty() {
                        EMPTY_FALLBACK.to_string()
                    } else {
                        RESULTS_FALLBACK.to_string()
                    }
                });
                self.messages.push(ChatMessage::assistant(text));
                self.last_result_items = reply.items;
                self.step = reply.step;
                self.is_loading = false;
                self
            }

            // The failed turn already surfaced a notification; the machine
            // stays on its prior step.
            ChatEvent::ReplyFailed => {
                self.is_loading = false;
                self
            }

            ChatEvent::WentBack => {
                self.last_result_items.clear();
                self.selected_project = None;
                self.step = ChatStep::ListProjects;
                self.is_loading = false;
                self
            }
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assistant::ChatRole;

    fn reply(step: ChatStep, items: Vec<ResultItem>) -> AssistantReply {
        AssistantReply {
            step,
            message: None,
            items,
        }
    }

    #[test]
    fn test_opened_state() {
        let state = ChatState::new();
        assert_eq!(state.step, ChatStep::ListProjects);
        assert!(state.selected_project.is_none());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, ChatRole::Assistant);
        assert_eq!(state.messages[0].text, GREETING);
    }

    #[test]
    fn test_full_conversation_walkthrough() {
        let state = ChatState::new().apply(ChatEvent::ProjectSelected("Foo".to_string()));
        assert_eq!(state.step, ChatStep::ChooseAction);
        assert_eq!(state.selected_project.as_deref(), Some("Foo"));
        assert_eq!(state.messages.len(), 3);

        let item = ResultItem {
            title: "T".to_string(),
            description: "D".to_string(),
        };
        let state = state
            .apply(ChatEvent::MessageSent("ideas".to_string()))
            .apply(ChatEvent::ReplyReceived(reply(
                ChatStep::Finished,
                vec![item.clone()],
            )));
        assert_eq!(state.step, ChatStep::Finished);
        assert_eq!(state.last_result_items, vec![item]);
        assert!(!state.is_loading);

        let state = state.apply(ChatEvent::WentBack);
        assert_eq!(state.step, ChatStep::ListProjects);
        assert!(state.last_result_items.is_empty());
        assert!(state.selected_project.is_none());
    }

    #[test]
    fn test_select_ignored_outside_project_list() {
        let state = ChatState::new()
            .apply(ChatEvent::ProjectSelected("Foo".to_string()))
            .apply(ChatEvent::ProjectSelected("Bar".to_string()));
        assert_eq!(state.selected_project.as_deref(), Some("Foo"));
        assert_eq!(state.messages.len(), 3);
    }

    #[test]
    fn test_failed_reply_keeps_prior_step() {
        let state = ChatState::new()
            .apply(ChatEvent::ProjectSelected("Foo".to_string()))
            .apply(ChatEvent::MessageSent("ideas".to_string()))
            .apply(ChatEvent::ReplyFailed);
        assert_eq!(state.step, ChatStep::ChooseAction);
        assert!(!state.is_loading);
        assert!(state.last_result_items.is_empty());
    }

    #[test]
    fn test_reply_fallback_text_tracks_results() {
        let with_items = ChatState::new().apply(ChatEvent::ReplyReceived(reply(
            ChatStep::Finished,
            vec![ResultItem {
                title: "T".to_string(),
                description: "D".to_string(),
            }],
        )));
        assert_eq!(with_items.messages.last().unwrap().text, RESULTS_FALLBACK);

        let without_items =
            ChatState::new().apply(ChatEvent::ReplyReceived(reply(ChatStep::Finished, vec![])));
        assert_eq!(without_items.messages.last().unwrap().text, EMPTY_FALLBACK);
    }

    #[test]
    fn test_server_text_wins_over_fallback() {
        let state = ChatState::new().apply(ChatEvent::ReplyReceived(AssistantReply {
            step: ChatStep::Finished,
            message: Some("Done!".to_string()),
            items: vec![],
        }));
        assert_eq!(state.messages.last().unwrap().text, "Done!");
    }

    #[test]
    fn test_reopen_discards_everything() {
        let state = ChatState::new()
            .apply(ChatEvent::ProjectSelected("Foo".to_string()))
            .apply(ChatEvent::Opened);
        assert_eq!(state.step, ChatStep::ListProjects);
        assert!(state.selected_project.is_none());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, GREETING);
    }
}
