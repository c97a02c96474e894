use serde::Serialize;

use super::common::{Badge, Tip};

/// Envelope every scriptable command prints: `{badge?, content, tips?}`
#[derive(Debug, Serialize)]
pub struct CommandOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<Tip>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            tips: Vec::new(),
        }
    }

    pub fn with_badge(self, badge: Badge) -> Self {
        Self {
            badge: Some(badge),
            ..self
        }
    }

    pub fn with_tip(mut self, tip: Tip) -> Self {
        self.tips.push(tip);
        self
    }
}
