use crate::context::ExecutionContext;
use crate::host::SystemHost;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use tradify_runtime::ContactForm;
use tradify_types::ContactField;

pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

pub fn handle(ctx: &ExecutionContext, input: ContactInput, print_only: bool) -> Result<()> {
    let recipient = ctx.config()?.contact.recipient.clone();
    let mut form = ContactForm::new(recipient);

    for field in ContactField::ALL {
        let value = input.value(field);
        if value.trim().is_empty() {
            bail!("{} is required", field.label());
        }
        form.set_field(field, value);
    }

    let mut host = if print_only {
        SystemHost::dry_run()
    } else {
        SystemHost::new()
    };
    let submission = form.submit(&mut host);

    let result =
        presenters::present_contact_result(form.recipient(), submission, host.launched_any());
    ctx.renderer().render(result)
}
