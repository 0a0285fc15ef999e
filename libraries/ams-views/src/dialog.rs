//! Add/edit form dialog shared by artists and songs.

use ams_core::Result;
use std::future::Future;
use tracing::{debug, error};

/// A form's editable working copy.
pub trait Form: Default + Clone {
    type Output;

    /// Check required fields and convert to the value handed to the save
    /// callback.
    fn validate(&self) -> Result<Self::Output>;
}

/// Dialog state; whether it is shown is decided by the owning view.
#[derive(Debug, Clone, Default)]
pub struct FormDialog<F: Form> {
    visible: bool,
    submitting: bool,
    form: F,
}

impl<F: Form> FormDialog<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with an empty working copy.
    pub fn open_add(&mut self) {
        self.open_edit(F::default());
    }

    /// Open with a working copy taken from an existing entity.
    pub fn open_edit(&mut self, form: F) {
        self.form = form;
        self.submitting = false;
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.submitting = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True while the save callback is in flight; the submit control is
    /// disabled meanwhile.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Validate, run `save`, and close on success.
    ///
    /// On failure the dialog stays open with its working copy intact; the
    /// error is logged and returned for the caller to decide on.
    pub async fn submit<T, S, Fut>(&mut self, save: S) -> Result<T>
    where
        S: FnOnce(F::Output) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let output = self.form.validate().map_err(|e| {
            error!(error = %e, "Form is incomplete");
            e
        })?;

        self.submitting = true;
        let result = save(output).await;
        self.submitting = false;

        match result {
            Ok(value) => {
                debug!("Form saved");
                self.visible = false;
                Ok(value)
            }
            Err(e) => {
                error!(error = %e, "Failed to save form");
                Err(e)
            }
        }
    }
}

/// Required-field check shared by the forms.
pub(crate) fn required<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ams_core::AmsError::validation(format!("{field} is required")))
    } else {
        Ok(trimmed)
    }
}

/// Like [`required`], but hands back the value exactly as typed. Used for
/// passwords, where surrounding whitespace is significant.
pub(crate) fn required_raw<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    required(value, field).map(|_| value)
}
