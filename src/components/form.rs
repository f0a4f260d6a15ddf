//! Contact form validation and simulated submission.

use super::Component;
use crate::config::FormConfig;
use crate::dom::{Dom, Event, Propagation, TimerHandle};
use crate::markup::ids;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Why a submission was rejected. The `Display` text is shown to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<String>),
    #[error("Please enter a valid email address.")]
    InvalidEmail(String),
}

/// Check a submission: every required field present and non-empty, then a
/// plausible `email`. Stops at the first failing rule.
pub fn validate_submission(
    data: &BTreeMap<String, String>,
    required: &[String],
) -> Result<(), SubmitError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| data.get(*field).is_none_or(|v| v.is_empty()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(SubmitError::MissingFields(missing));
    }

    let email = data.get("email").map(String::as_str).unwrap_or_default();
    if !EMAIL.is_match(email) {
        return Err(SubmitError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validates `#contact-form` and fakes a successful send.
///
/// After a successful submit the form is hidden behind `#form-success` until
/// the reset timer fires. Submitting again before then restarts the timer.
#[derive(Debug, Clone)]
pub struct FormHandler<N> {
    form: N,
    success: Option<N>,
    required_fields: Vec<String>,
    reset_delay_ms: u32,
    pending: Option<TimerHandle>,
}

impl<N: Clone + PartialEq> FormHandler<N> {
    pub fn init<D: Dom<Node = N>>(dom: &mut D, config: &FormConfig) -> Option<Self> {
        let Some(form) = dom.element_by_id(ids::CONTACT_FORM) else {
            log::debug!("form: no #{}", ids::CONTACT_FORM);
            return None;
        };
        Some(Self {
            form,
            success: dom.element_by_id(ids::FORM_SUCCESS),
            required_fields: config.required_fields.clone(),
            reset_delay_ms: config.reset_delay_ms,
            pending: None,
        })
    }

    /// Timer that will bring the form back, if a submission is on display.
    pub fn pending_reset(&self) -> Option<TimerHandle> {
        self.pending
    }

    fn on_submit<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        // Later fields with the same name overwrite earlier ones.
        let data: BTreeMap<String, String> = dom.form_data(&self.form).into_iter().collect();

        if let Err(err) = validate_submission(&data, &self.required_fields) {
            log::debug!("form: rejected: {err:?}");
            dom.alert(&err.to_string());
            return;
        }

        match serde_json::to_string(&data) {
            Ok(json) => log::info!("Form submitted: {json}"),
            Err(err) => log::warn!("form: could not serialize submission: {err}"),
        }

        if let Some(previous) = self.pending.take() {
            dom.clear_timeout(previous);
        }
        dom.set_style(&self.form, "display", "none");
        if let Some(success) = &self.success {
            dom.set_style(success, "display", "block");
        }
        self.pending = Some(dom.set_timeout(self.reset_delay_ms));
    }

    fn on_timer<D: Dom<Node = N>>(&mut self, dom: &mut D, handle: TimerHandle) {
        if self.pending != Some(handle) {
            return;
        }
        self.pending = None;
        dom.reset_form(&self.form);
        dom.set_style(&self.form, "display", "block");
        if let Some(success) = &self.success {
            dom.set_style(success, "display", "none");
        }
    }
}

impl<D: Dom> Component<D> for FormHandler<D::Node> {
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation {
        match event {
            Event::Submit { form } if *form == self.form => {
                self.on_submit(dom);
                Propagation::prevent_default()
            }
            Event::Timer(handle) => {
                self.on_timer(dom, *handle);
                Propagation::default()
            }
            _ => Propagation::default(),
        }
    }
}
