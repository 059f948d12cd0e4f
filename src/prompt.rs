//! Request/response text input.
//!
//! The core never blocks on the user. When an action needs a value it hands
//! back a [`PromptRequest`]; the UI collects the answer however it likes and
//! resumes the action with a [`PromptResponse`].

/// What the pending value is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    ProjectName,
    ElementText,
    ExportFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub kind: PromptKind,
    pub message: String,
}

impl PromptRequest {
    pub fn new(kind: PromptKind) -> Self {
        let message = match kind {
            PromptKind::ProjectName => "Enter project name:",
            PromptKind::ElementText => "Enter text:",
            PromptKind::ExportFormat => "Export as: PDF / PNG / Print ?",
        };
        Self {
            kind,
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    Cancelled,
}

impl PromptResponse {
    /// The entered value; empty input counts as a cancellation.
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Value(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

impl From<Option<String>> for PromptResponse {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Cancelled, Self::Value)
    }
}

/// Answers prompts synchronously, e.g. a script or a test.
pub trait Prompter {
    fn prompt(&mut self, request: &PromptRequest) -> PromptResponse;
}

/// Replays a fixed list of answers, then cancels everything.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<PromptResponse>,
    asked: Vec<PromptRequest>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers
                .into_iter()
                .map(|a| PromptResponse::Value(a.into()))
                .collect(),
            asked: Vec::new(),
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }

    /// Every request seen so far, in order.
    pub fn asked(&self) -> &[PromptRequest] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, request: &PromptRequest) -> PromptResponse {
        self.asked.push(request.clone());
        self.answers.pop_front().unwrap_or(PromptResponse::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_cancellation() {
        assert_eq!(PromptResponse::Value(String::new()).into_value(), None);
        assert_eq!(PromptResponse::Cancelled.into_value(), None);
        assert_eq!(PromptResponse::Value("x".into()).into_value(), Some("x".into()));
    }

    #[test]
    fn test_scripted_prompter_runs_dry() {
        let mut prompter = ScriptedPrompter::new(["Demo"]);
        let request = PromptRequest::new(PromptKind::ProjectName);
        assert_eq!(prompter.prompt(&request), PromptResponse::Value("Demo".into()));
        assert_eq!(prompter.prompt(&request), PromptResponse::Cancelled);
        assert_eq!(prompter.asked().len(), 2);
    }
}
