use crate::foundation::error::{SetaliaError, SetaliaResult};

/// Fixed delay of the simulated submission.
pub const SUBMIT_DELAY_MS: f64 = 1000.0;

/// Editable fields of the enquiry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryField {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Free text.
    Message,
}

/// Current field values.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnquiryFields {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Free text.
    pub message: String,
}

impl EnquiryFields {
    fn validate(&self) -> SetaliaResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SetaliaError::enquiry(format!("{field} is required")));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SetaliaError::enquiry("email is not a valid address"));
        }
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Toast shown once a submission completes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    /// Heading.
    pub title: String,
    /// Body text.
    pub description: String,
}

impl Notification {
    fn thanks() -> Self {
        Self {
            title: "Thank you".to_owned(),
            description: "Our team will contact you shortly.".to_owned(),
        }
    }
}

/// Form state. Nothing is sent anywhere: submission completes after [`SUBMIT_DELAY_MS`].
#[derive(Clone, Debug, Default)]
pub struct EnquiryForm {
    fields: EnquiryFields,
    submitting_since: Option<f64>,
}

impl EnquiryForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values.
    pub fn fields(&self) -> &EnquiryFields {
        &self.fields
    }

    /// Replace one field's value. Ignored while a submission is in flight.
    pub fn set(&mut self, field: EnquiryField, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        let slot = match field {
            EnquiryField::Name => &mut self.fields.name,
            EnquiryField::Email => &mut self.fields.email,
            EnquiryField::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    /// Busy flag.
    pub fn is_submitting(&self) -> bool {
        self.submitting_since.is_some()
    }

    /// Start a submission at `now_ms`. Rejected while busy or when a field is invalid.
    pub fn submit(&mut self, now_ms: f64) -> SetaliaResult<()> {
        if self.is_submitting() {
            return Err(SetaliaError::enquiry("a submission is already in progress"));
        }
        self.fields.validate()?;
        self.submitting_since = Some(now_ms);
        tracing::debug!("enquiry submission started");
        Ok(())
    }

    /// Complete the submission once the delay has elapsed: clears the fields, releases the
    /// busy flag, and returns the confirmation.
    pub fn poll(&mut self, now_ms: f64) -> Option<Notification> {
        let since = self.submitting_since?;
        if now_ms - since < SUBMIT_DELAY_MS {
            return None;
        }
        self.fields = EnquiryFields::default();
        self.submitting_since = None;
        tracing::debug!("enquiry submission completed");
        Some(Notification::thanks())
    }
}

/// Modal wrapper around the form.
#[derive(Clone, Debug, Default)]
pub struct EnquiryDialog {
    open: bool,
    form: EnquiryForm,
}

impl EnquiryDialog {
    /// Closed dialog with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog. Field values are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Borrow the form.
    pub fn form(&self) -> &EnquiryForm {
        &self.form
    }

    /// Mutably borrow the form.
    pub fn form_mut(&mut self) -> &mut EnquiryForm {
        &mut self.form
    }

    /// Submit from the open dialog.
    pub fn submit(&mut self, now_ms: f64) -> SetaliaResult<()> {
        if !self.open {
            return Err(SetaliaError::enquiry("dialog is closed"));
        }
        self.form.submit(now_ms)
    }

    /// Drive the pending submission; on completion the dialog closes.
    pub fn poll(&mut self, now_ms: f64) -> Option<Notification> {
        let note = self.form.poll(now_ms)?;
        self.open = false;
        Some(note)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/enquiry/form.rs"]
mod tests;
