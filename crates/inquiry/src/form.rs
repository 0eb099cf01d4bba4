//! Client-side state for one inquiry form.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::{InquiryField, InquiryRequest};

/// Lifecycle of a single form interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Form can only be reset after a submission completes (currently {0:?})")]
    NotFinished(SubmissionState),
}

/// Network side of the form: posts the inquiry, returns the HTTP status.
#[async_trait::async_trait]
pub trait InquiryClient: Send + Sync {
    async fn post_inquiry(&self, request: &InquiryRequest) -> anyhow::Result<u16>;
}

#[derive(Default)]
struct FormInner {
    request: InquiryRequest,
    state: SubmissionState,
}

/// Collects field edits and drives at most one submission at a time.
pub struct InquiryForm<C> {
    client: C,
    preset_property: Option<String>,
    inner: Mutex<FormInner>,
}

impl<C: InquiryClient> InquiryForm<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            preset_property: None,
            inner: Mutex::default(),
        }
    }

    /// Form opened from a property view: the property label survives clears.
    pub fn for_property(client: C, property: impl Into<String>) -> Self {
        let property = property.into();
        let form = Self {
            client,
            preset_property: Some(property),
            inner: Mutex::default(),
        };
        form.lock().request = form.blank();

        form
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn blank(&self) -> InquiryRequest {
        match &self.preset_property {
            Some(property) => {
                InquiryRequest::default().with(InquiryField::PropertyInterest, property)
            }
            None => InquiryRequest::default(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    /// Snapshot of the in-progress request.
    pub fn request(&self) -> InquiryRequest {
        self.lock().request.clone()
    }

    pub fn on_field_change(&self, field: InquiryField, value: impl Into<String>) {
        tracing::debug!(%field, "Inquiry field changed");
        self.lock().request.set(field, value);
    }

    /// Sends the current fields. Fields are cleared on success and kept on
    /// failure so the user can retry by hand. Dropping the returned future
    /// before it completes leaves the form `Failed`.
    pub async fn submit(&self) -> Result<SubmissionState, FormError> {
        let request = {
            let mut inner = self.lock();
            if inner.state == SubmissionState::Submitting {
                return Err(FormError::AlreadySubmitting);
            }
            inner.state = SubmissionState::Submitting;
            inner.request.clone()
        };
        let _in_flight = InFlight { form: &self.inner };

        let state = match self.client.post_inquiry(&request).await {
            Ok(status) if (200..300).contains(&status) => SubmissionState::Succeeded,
            Ok(status) => {
                tracing::warn!(status, "Inquiry rejected by server");
                SubmissionState::Failed
            }
            Err(err) => {
                tracing::error!(error = %err, "Error submitting inquiry");
                SubmissionState::Failed
            }
        };

        let blank = self.blank();
        let mut inner = self.lock();
        inner.state = state;
        if state == SubmissionState::Succeeded {
            inner.request = blank;
        }

        Ok(state)
    }

    pub fn reset(&self) -> Result<(), FormError> {
        let blank = self.blank();
        let mut inner = self.lock();
        match inner.state {
            SubmissionState::Succeeded | SubmissionState::Failed => {
                inner.state = SubmissionState::Idle;
                inner.request = blank;
                Ok(())
            }
            state => Err(FormError::NotFinished(state)),
        }
    }
}

/// Marks the form `Failed` if a submission is abandoned mid-request.
struct InFlight<'a> {
    form: &'a Mutex<FormInner>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut inner = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.state == SubmissionState::Submitting {
            tracing::warn!("Inquiry submission abandoned before completion");
            inner.state = SubmissionState::Failed;
        }
    }
}
