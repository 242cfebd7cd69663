//! Interactive session: the single state record behind the UI.
//!
//! Every user event (resume selection, job-description edit, submit, next) and
//! the completion of the one outstanding request is a discrete transition on
//! [`Session`]. Nothing else mutates it.
//!
//! Submission flow: `begin_submission` → one `AnalysisService::analyze` call →
//! `settle`. [`submit`] drives all three for callers that simply await.

use tracing::{error, info, warn};

use crate::analysis_client::{AnalysisRequest, AnalysisResponse, AnalysisService};
use crate::errors::{ServiceError, GENERIC_ALERT};
use crate::resume::ResumeFile;
use crate::revealer::{QuestionRevealer, QuestionSet};
use crate::validation::{validate, ValidationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Progress of the most recent submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    InFlight,
    Settled(Outcome),
}

/// Why a submit action did not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Input failed validation; field errors are on the session.
    Invalid(ValidationState),
    /// A request is already outstanding.
    InFlight,
}

/// Result of a complete submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Settled(Outcome),
}

#[derive(Debug, Default)]
pub struct Session {
    resume: Option<ResumeFile>,
    job_description: String,
    validation: ValidationState,
    lifecycle: Lifecycle,
    revealer: QuestionRevealer,
    alert: Option<&'static str>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ────────────────────────────────────────────────────────────────────
    // Input events
    // ────────────────────────────────────────────────────────────────────

    /// Replaces the selected resume. There is no way to unset it.
    pub fn select_resume(&mut self, resume: ResumeFile) {
        info!(file = %resume.file_name, size = resume.len(), "resume selected");
        self.resume = Some(resume);
    }

    pub fn edit_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    // ────────────────────────────────────────────────────────────────────
    // Submission
    // ────────────────────────────────────────────────────────────────────

    /// Validates the current input and, if it passes, enters `InFlight` and
    /// returns the request to send.
    ///
    /// Field errors are reset and recomputed on every attempt, so a corrected
    /// field loses its error as soon as the user submits again.
    pub fn begin_submission(&mut self) -> Result<AnalysisRequest, SubmitRejected> {
        if self.lifecycle == Lifecycle::InFlight {
            warn!("submission ignored: a request is already in flight");
            return Err(SubmitRejected::InFlight);
        }

        self.validation = validate(self.resume.is_some(), &self.job_description);

        let resume = match (&self.resume, self.validation.may_proceed()) {
            (Some(resume), true) => resume.clone(),
            _ => return Err(SubmitRejected::Invalid(self.validation)),
        };

        self.alert = None;
        self.lifecycle = Lifecycle::InFlight;

        Ok(AnalysisRequest {
            resume,
            job_desc_text: self.job_description.clone(),
        })
    }

    /// Applies the result of the outstanding request and leaves `InFlight`.
    ///
    /// Success replaces the question set and rewinds the cursor. Any failure
    /// keeps the previous question set and raises the generic alert.
    pub fn settle(&mut self, result: Result<AnalysisResponse, ServiceError>) -> Outcome {
        let outcome = match result {
            Ok(response) => {
                let questions = QuestionSet::from_raw(&response.generated_questions);
                info!(count = questions.len(), "questions received");
                self.revealer.replace(questions);
                Outcome::Success
            }
            Err(e) => {
                error!("Error generating questions: {e}");
                self.alert = Some(GENERIC_ALERT);
                Outcome::Failure
            }
        };

        self.lifecycle = Lifecycle::Settled(outcome);
        outcome
    }

    // ────────────────────────────────────────────────────────────────────
    // Reveal
    // ────────────────────────────────────────────────────────────────────

    /// The "next" action. Returns `false` when no further entry exists.
    pub fn next_question(&mut self) -> bool {
        self.revealer.advance()
    }

    /// Hands the pending alert to the presentation layer exactly once.
    pub fn take_alert(&mut self) -> Option<&'static str> {
        self.alert.take()
    }

    // ────────────────────────────────────────────────────────────────────
    // Accessors
    // ────────────────────────────────────────────────────────────────────

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::InFlight
    }

    pub fn revealer(&self) -> &QuestionRevealer {
        &self.revealer
    }

    pub fn pending_alert(&self) -> Option<&'static str> {
        self.alert
    }
}

/// Runs one full submit action: validate, send exactly once, settle.
pub async fn submit<S>(session: &mut Session, service: &S) -> SubmitOutcome
where
    S: AnalysisService + ?Sized,
{
    let request = match session.begin_submission() {
        Ok(request) => request,
        Err(rejected) => return SubmitOutcome::Rejected(rejected),
    };

    let result = service.analyze(&request).await;
    SubmitOutcome::Settled(session.settle(result))
}
