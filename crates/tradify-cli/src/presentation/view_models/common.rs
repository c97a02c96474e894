use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✓",
            StatusLevel::Info => "ℹ",
            StatusLevel::Warning => "⚠",
        }
    }
}

/// One-line outcome shown above the content
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub level: StatusLevel,
    pub label: String,
}

impl Badge {
    fn at(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::at(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::at(StatusLevel::Info, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::at(StatusLevel::Warning, label)
    }
}

/// Follow-up hint printed under the content, optionally with a command line
#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Tip {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(self, command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..self
        }
    }
}
