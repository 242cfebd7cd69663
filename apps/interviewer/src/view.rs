use crate::session::Session;

pub const QUESTION_HEADING: &str = "Generated Question:";
pub const LOADING_TEXT: &str = "Generating questions...";
pub const COMPLETION_TEXT: &str = "🎉 End of questions!";

/// Everything the presentation layer needs to draw one frame of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView<'a> {
    pub resume_name: Option<&'a str>,
    pub resume_error: Option<&'static str>,
    pub job_description_error: Option<&'static str>,
    pub loading: bool,
    /// Entry on screen; `None` hides the question panel entirely.
    pub current_question: Option<&'a str>,
    /// Label of the "next" button; `None` when the button is not shown.
    pub next_label: Option<&'static str>,
    pub show_completion: bool,
}

impl<'a> SessionView<'a> {
    pub fn of(session: &'a Session) -> Self {
        let validation = session.validation();
        let revealer = session.revealer();

        SessionView {
            resume_name: session.resume().map(|r| r.file_name.as_str()),
            resume_error: validation.resume.map(|e| e.message()),
            job_description_error: validation.job_description.map(|e| e.message()),
            loading: session.is_loading(),
            current_question: revealer.current(),
            next_label: revealer.next_label(),
            show_completion: revealer.is_complete(),
        }
    }

    pub fn shows_questions(&self) -> bool {
        self.current_question.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_client::AnalysisResponse;
    use crate::resume::ResumeFile;

    fn loaded_session(raw: &str) -> Session {
        let mut session = Session::new();
        session.select_resume(ResumeFile::from_bytes("cv.txt", "Jane Doe".to_string()).unwrap());
        session.edit_job_description("Platform engineer for a payments company.");
        session.begin_submission().unwrap();
        session.settle(Ok(AnalysisResponse {
            generated_questions: raw.to_string(),
        }));
        session
    }

    #[test]
    fn test_fresh_session_view() {
        let session = Session::new();
        let view = SessionView::of(&session);
        assert_eq!(view.resume_name, None);
        assert_eq!(view.resume_error, None);
        assert!(!view.loading);
        assert!(!view.shows_questions());
        assert_eq!(view.next_label, None);
        assert!(!view.show_completion);
    }

    #[test]
    fn test_validation_messages_exposed() {
        let mut session = Session::new();
        let _ = session.begin_submission();
        let view = SessionView::of(&session);
        assert_eq!(view.resume_error, Some("Please upload your resume."));
        assert_eq!(
            view.job_description_error,
            Some("Please enter the job description.")
        );
    }

    #[test]
    fn test_loading_while_in_flight() {
        let mut session = Session::new();
        session.select_resume(ResumeFile::from_bytes("cv.pdf", Vec::new()).unwrap());
        session.edit_job_description("Platform engineer for a payments company.");
        session.begin_submission().unwrap();
        let view = SessionView::of(&session);
        assert!(view.loading);
        assert_eq!(view.resume_name, Some("cv.pdf"));
    }

    #[test]
    fn test_header_then_question_then_completion() {
        let mut session = loaded_session("Behavioral Questions:\nWhy this team?");
        let view = SessionView::of(&session);
        assert_eq!(view.current_question, Some("Behavioral Questions:"));
        assert_eq!(view.next_label, Some("Let's Begin →"));
        assert!(!view.show_completion);

        session.next_question();
        let view = SessionView::of(&session);
        assert_eq!(view.current_question, Some("Why this team?"));
        assert_eq!(view.next_label, None);
        assert!(view.show_completion);
    }
}
