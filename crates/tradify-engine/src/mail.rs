use tradify_types::ContactDraft;

const SITE_NAME: &str = "Tradify";

/// Subject and body of a contact-form email, before URL encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
}

/// Fill the fixed contact template with the draft's fields, verbatim.
pub fn compose_contact_message(draft: &ContactDraft) -> MailMessage {
    let subject = format!("New Message from {} via {}", draft.full_name, SITE_NAME);
    let body = format!(
        "You have received a new message from your website contact form.\n\n\
         Here are the details:\n\n\
         Full Name: {}\n\
         Email Address: {}\n\n\
         Message:\n{}",
        draft.full_name, draft.email, draft.message
    );

    MailMessage { subject, body }
}

/// `mailto:` URI for the default mail client, with encoded subject and body
pub fn mailto_uri(recipient: &str, message: &MailMessage) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&message.subject),
        urlencoding::encode(&message.body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactDraft {
        ContactDraft {
            full_name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
            submitted: false,
        }
    }

    #[test]
    fn test_body_has_labeled_lines() {
        let message = compose_contact_message(&jane());
        let lines: Vec<&str> = message.body.lines().collect();

        assert!(lines.contains(&"Full Name: Jane"));
        assert!(lines.contains(&"Email Address: jane@x.com"));
        let idx = lines.iter().position(|l| *l == "Message:").unwrap();
        assert_eq!(lines[idx + 1], "Hi");
    }

    #[test]
    fn test_subject_names_sender() {
        let message = compose_contact_message(&jane());
        assert_eq!(message.subject, "New Message from Jane via Tradify");
    }

    #[test]
    fn test_mailto_encodes_components() {
        let message = compose_contact_message(&jane());
        let uri = mailto_uri("hello@tradify.shop", &message);

        assert!(uri.starts_with("mailto:hello@tradify.shop?subject="));
        assert!(uri.contains("subject=New%20Message%20from%20Jane%20via%20Tradify"));
        assert!(uri.contains("Full%20Name%3A%20Jane%0AEmail%20Address%3A%20jane%40x.com"));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn test_field_values_are_not_interpreted() {
        let draft = ContactDraft {
            full_name: "A&B".to_string(),
            email: "a@b.c".to_string(),
            message: "line one\nsubject=x&body=y".to_string(),
            submitted: false,
        };
        let message = compose_contact_message(&draft);
        assert!(message.body.ends_with("Message:\nline one\nsubject=x&body=y"));

        let uri = mailto_uri("r@x.com", &message);
        assert_eq!(uri.matches("&body=").count(), 1);
        assert!(uri.contains("A%26B"));
    }
}
