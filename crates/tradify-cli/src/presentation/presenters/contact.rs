use crate::presentation::view_models::{Badge, CommandOutput, ContactResultViewModel};
use tradify_runtime::{ACKNOWLEDGMENT, ACKNOWLEDGMENT_DETAIL, ContactSubmission};

pub fn present_contact_result(
    recipient: &str,
    submission: ContactSubmission,
    launched: bool,
) -> CommandOutput<ContactResultViewModel> {
    let badge = if launched {
        Badge::success("Message handed to your mail client")
    } else {
        Badge::info("Message prepared")
    };

    CommandOutput::new(ContactResultViewModel {
        recipient: recipient.to_string(),
        subject: submission.message.subject,
        body: submission.message.body,
        mailto: submission.uri,
        launched,
        acknowledgment: ACKNOWLEDGMENT.to_string(),
        detail: ACKNOWLEDGMENT_DETAIL.to_string(),
    })
    .with_badge(badge)
}
