//! UI state owned by the storefront controllers.
//!
//! These are plain data holders. Transitions live in `tradify-runtime`.

use serde::{Deserialize, Serialize};

use crate::domain::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPhase {
    #[default]
    Closed,
    Active,
}

/// Search overlay state. `results` borrows from the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState<'c> {
    pub phase: OverlayPhase,
    pub query: String,
    pub results: Vec<&'c Product>,
}

impl<'c> SearchState<'c> {
    pub fn is_active(&self) -> bool {
        self.phase == OverlayPhase::Active
    }

    /// True when nothing but whitespace has been typed
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridFilterState {
    pub query: String,
    pub rating_filter: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FullName => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FullName => "John Doe",
            ContactField::Email => "you@example.com",
            ContactField::Message => "Your message here...",
        }
    }

    /// Next field in tab order, wrapping around
    pub fn next(&self) -> ContactField {
        match self {
            ContactField::FullName => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::FullName,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub submitted: bool,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Fields left empty (after trimming), in form order
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_state_defaults_closed() {
        let state = SearchState::default();
        assert!(!state.is_active());
        assert!(state.is_blank());
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_contact_missing_fields() {
        let draft = ContactDraft {
            full_name: "Jane".to_string(),
            email: "   ".to_string(),
            message: String::new(),
            submitted: false,
        };

        assert_eq!(
            draft.missing_fields(),
            vec![ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_field_mut_targets_the_right_field() {
        let mut draft = ContactDraft::default();
        draft.field_mut(ContactField::Email).push_str("jane@x.com");

        assert_eq!(draft.email, "jane@x.com");
        assert!(draft.full_name.is_empty());
    }

    #[test]
    fn test_field_tab_order_wraps() {
        assert_eq!(ContactField::Message.next(), ContactField::FullName);
    }
}
