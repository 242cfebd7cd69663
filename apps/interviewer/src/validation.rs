//! Input Validator: gates a submission on the presence and shape of the two inputs.
//!
//! Rules are evaluated in order and the first one that fires decides the outcome:
//! 1. no resume and no job description → both fields flagged
//! 2. no resume → resume flagged
//! 3. no job description → job description flagged
//! 4. job description too short or without letters → job description flagged
//! 5. otherwise both fields are valid

/// Minimum job-description length, counted over the untrimmed text.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 20;

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    ResumeMissing,
    JobDescriptionMissing,
    JobDescriptionMalformed,
}

impl FieldError {
    /// The inline message rendered under the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::ResumeMissing => "Please upload your resume.",
            FieldError::JobDescriptionMissing => "Please enter the job description.",
            FieldError::JobDescriptionMalformed => {
                "Please enter a valid job description (at least 20 characters and contain letters)."
            }
        }
    }
}

/// Per-field validity. `None` means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub resume: Option<FieldError>,
    pub job_description: Option<FieldError>,
}

impl ValidationState {
    pub fn resume_invalid(&self) -> bool {
        self.resume.is_some()
    }

    pub fn job_description_invalid(&self) -> bool {
        self.job_description.is_some()
    }

    pub fn may_proceed(&self) -> bool {
        !self.resume_invalid() && !self.job_description_invalid()
    }
}

/// Computes a fresh `ValidationState` for one submission attempt.
pub fn validate(resume_present: bool, job_description: &str) -> ValidationState {
    let job_description_blank = job_description.trim().is_empty();

    match (resume_present, job_description_blank) {
        (false, true) => ValidationState {
            resume: Some(FieldError::ResumeMissing),
            job_description: Some(FieldError::JobDescriptionMissing),
        },
        (false, false) => ValidationState {
            resume: Some(FieldError::ResumeMissing),
            job_description: None,
        },
        (true, true) => ValidationState {
            resume: None,
            job_description: Some(FieldError::JobDescriptionMissing),
        },
        (true, false) if !is_well_formed(job_description) => ValidationState {
            resume: None,
            job_description: Some(FieldError::JobDescriptionMalformed),
        },
        (true, false) => ValidationState::default(),
    }
}

fn is_well_formed(job_description: &str) -> bool {
    job_description.chars().count() >= MIN_JOB_DESCRIPTION_CHARS
        && job_description.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JD: &str = "Senior Rust engineer building distributed storage systems.";

    #[test]
    fn test_both_missing_flags_both_fields() {
        let state = validate(false, "");
        assert_eq!(state.resume, Some(FieldError::ResumeMissing));
        assert_eq!(state.job_description, Some(FieldError::JobDescriptionMissing));
        assert!(!state.may_proceed());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let state = validate(false, "  \n\t  ");
        assert!(state.resume_invalid());
        assert_eq!(state.job_description, Some(FieldError::JobDescriptionMissing));
    }

    #[test]
    fn test_missing_resume_only() {
        let state = validate(false, VALID_JD);
        assert_eq!(state.resume, Some(FieldError::ResumeMissing));
        assert!(!state.job_description_invalid());
    }

    #[test]
    fn test_missing_resume_skips_shape_check() {
        // Rule 2 fires before the shape rule even when the text is malformed.
        let state = validate(false, "short");
        assert_eq!(state.resume, Some(FieldError::ResumeMissing));
        assert_eq!(state.job_description, None);
    }

    #[test]
    fn test_missing_job_description_only() {
        let state = validate(true, "");
        assert!(!state.resume_invalid());
        assert_eq!(state.job_description, Some(FieldError::JobDescriptionMissing));
    }

    #[test]
    fn test_short_job_description_is_malformed() {
        let state = validate(true, "Rust developer");
        assert_eq!(
            state.job_description,
            Some(FieldError::JobDescriptionMalformed)
        );
        assert!(!state.resume_invalid());
    }

    #[test]
    fn test_job_description_without_letters_is_malformed() {
        let state = validate(true, "1234567890 !@#$%^&*() 0987654321");
        assert_eq!(
            state.job_description,
            Some(FieldError::JobDescriptionMalformed)
        );
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let state = validate(true, "ééééééééééééééééééééééé");
        assert_eq!(
            state.job_description,
            Some(FieldError::JobDescriptionMalformed)
        );
    }

    #[test]
    fn test_length_boundary() {
        assert!(validate(true, "abcdefghijklmnopqrst").may_proceed());
        assert!(!validate(true, "abcdefghijklmnopqrs").may_proceed());
    }

    #[test]
    fn test_length_counts_untrimmed_text() {
        // 15 letters padded with spaces to 20 characters.
        assert!(validate(true, "  abcdefghijklmno   ").may_proceed());
    }

    #[test]
    fn test_valid_inputs_proceed() {
        let state = validate(true, VALID_JD);
        assert_eq!(state, ValidationState::default());
        assert!(state.may_proceed());
    }

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(FieldError::ResumeMissing.message(), "Please upload your resume.");
        assert_eq!(
            FieldError::JobDescriptionMissing.message(),
            "Please enter the job description."
        );
        assert_eq!(
            FieldError::JobDescriptionMalformed.message(),
            "Please enter a valid job description (at least 20 characters and contain letters)."
        );
    }
}
