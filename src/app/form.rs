//! Comment submission form - draft input and per-field validation

use std::collections::BTreeMap;

use crate::constants::{BODY_REQUIRED, EMAIL_REQUIRED, NAME_REQUIRED};
use crate::messages::ui_events::FormField;
use crate::models::CommentDraft;

/// Form state for a new comment.
///
/// Validation errors are kept per field; a field with no entry is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentForm {
    pub draft: CommentDraft,
    pub errors: BTreeMap<FormField, &'static str>,
    pub active_field: FormField,
    pub submitting: bool,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Email => &self.draft.email,
            FormField::Body => &self.draft.body,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.draft.name,
            FormField::Email => &mut self.draft.email,
            FormField::Body => &mut self.draft.body,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Replace a field's value. Editing a field clears its error.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.active_field;
        self.value_mut(field).push(c);
        self.errors.remove(&field);
    }

    pub fn backspace(&mut self) {
        let field = self.active_field;
        self.value_mut(field).pop();
        self.errors.remove(&field);
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Validate every field and record the errors found.
    ///
    /// Returns the draft to submit when all fields are filled in; returns
    /// `None` (and issues nothing) while a submission is already pending.
    pub fn validate(&mut self) -> Option<CommentDraft> {
        if self.submitting {
            return None;
        }

        self.errors.clear();
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                self.errors.insert(field, required_message(field));
            }
        }

        if self.has_errors() {
            None
        } else {
            Some(self.draft.clone())
        }
    }

    /// Creation succeeded: keep the author details for the next comment
    pub fn submitted(&mut self) {
        self.submitting = false;
        self.draft.body.clear();
    }

    /// Creation failed: keep everything as it was
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    /// Clear all fields and all errors
    pub fn reset(&mut self) {
        self.draft = CommentDraft::default();
        self.errors.clear();
    }
}

fn required_message(field: FormField) -> &'static str {
    match field {
        FormField::Name => NAME_REQUIRED,
        FormField::Email => EMAIL_REQUIRED,
        FormField::Body => BODY_REQUIRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_reports_every_field() {
        let mut form = CommentForm::new();
        assert!(form.validate().is_none());
        assert_eq!(form.error(FormField::Name), Some(NAME_REQUIRED));
        assert_eq!(form.error(FormField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.error(FormField::Body), Some(BODY_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let mut form = CommentForm::new();
        form.set(FormField::Name, "Bob");
        form.set(FormField::Email, "   ");
        form.set(FormField::Body, "\t\n");
        assert!(form.validate().is_none());
        assert_eq!(form.error(FormField::Name), None);
        assert_eq!(form.error(FormField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.error(FormField::Body), Some(BODY_REQUIRED));
    }

    #[test]
    fn test_editing_clears_only_that_field_error() {
        let mut form = CommentForm::new();
        form.validate();
        form.active_field = FormField::Email;
        form.push_char('b');
        assert_eq!(form.error(FormField::Email), None);
        assert_eq!(form.error(FormField::Name), Some(NAME_REQUIRED));
        assert_eq!(form.error(FormField::Body), Some(BODY_REQUIRED));
    }

    #[test]
    fn test_valid_form_returns_draft() {
        let mut form = CommentForm::new();
        form.set(FormField::Name, "Bob");
        form.set(FormField::Email, "b@x.com");
        form.set(FormField::Body, "Hi");
        let draft = form.validate().unwrap();
        assert_eq!(draft, CommentDraft::new("Bob", "b@x.com", "Hi"));
        assert!(!form.has_errors());
    }

    #[test]
    fn test_pending_submission_blocks_validation() {
        let mut form = CommentForm::new();
        form.set(FormField::Name, "Bob");
        form.set(FormField::Email, "b@x.com");
        form.set(FormField::Body, "Hi");
        form.submitting = true;
        assert!(form.validate().is_none());
    }

    #[test]
    fn test_success_clears_body_only() {
        let mut form = CommentForm::new();
        form.set(FormField::Name, "Bob");
        form.set(FormField::Email, "b@x.com");
        form.set(FormField::Body, "Hi");
        form.submitting = true;
        form.submitted();
        assert!(!form.submitting);
        assert_eq!(form.draft, CommentDraft::new("Bob", "b@x.com", ""));
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let mut form = CommentForm::new();
        form.set(FormField::Name, "Bob");
        form.validate();
        form.reset();
        assert_eq!(form.draft, CommentDraft::default());
        assert!(!form.has_errors());
    }
}
