//! Line-oriented presentation layer: command parsing and plain-text rendering.

use std::path::PathBuf;

use crate::view::{SessionView, COMPLETION_TEXT, LOADING_TEXT, QUESTION_HEADING};

/// Line that terminates multi-line job-description entry.
pub const END_OF_TEXT: &str = ".";

pub const HELP: &str = "\
Commands:
  resume <path>   select a resume (.pdf or .txt)
  jd              paste a job description; finish with a line containing only '.'
  jd <text>       set a one-line job description
  submit          generate interview questions
  next            reveal the next question
  show            redraw the current screen
  help            show this help
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectResume(PathBuf),
    /// Start multi-line job-description entry.
    BeginJobDescription,
    SetJobDescription(String),
    Submit,
    Next,
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "resume" if !rest.is_empty() => Command::SelectResume(PathBuf::from(rest)),
        "jd" if rest.is_empty() => Command::BeginJobDescription,
        "jd" => Command::SetJobDescription(rest.to_string()),
        "submit" => Command::Submit,
        "next" | "n" => Command::Next,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Accumulates pasted lines until the terminator line arrives.
#[derive(Debug, Default)]
pub struct TextEntry {
    lines: Vec<String>,
}

impl TextEntry {
    /// Feeds one line. Returns the finished text once the terminator is seen.
    pub fn push(&mut self, line: &str) -> Option<String> {
        if line.trim_end() == END_OF_TEXT {
            return Some(std::mem::take(&mut self.lines).join("\n"));
        }
        self.lines.push(line.trim_end_matches(['\r', '\n']).to_string());
        None
    }
}

/// Renders one frame of the session as plain text.
pub fn render(view: &SessionView<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Resume: {}\n",
        view.resume_name.unwrap_or("(none selected)")
    ));
    if let Some(message) = view.resume_error {
        out.push_str(&format!("  ! {message}\n"));
    }
    if let Some(message) = view.job_description_error {
        out.push_str(&format!("Job description:\n  ! {message}\n"));
    }

    if view.loading {
        out.push_str(&format!("{LOADING_TEXT}\n"));
    }

    if let Some(question) = view.current_question {
        out.push_str(&format!("\n{QUESTION_HEADING}\n  {question}\n"));
        if let Some(label) = view.next_label {
            out.push_str(&format!("[next] {label}\n"));
        } else if view.show_completion {
            out.push_str(&format!("{COMPLETION_TEXT}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resume_keeps_spaces_in_path() {
        assert_eq!(
            parse_command("resume  /home/jane/My Resume.pdf "),
            Command::SelectResume(PathBuf::from("/home/jane/My Resume.pdf"))
        );
    }

    #[test]
    fn test_parse_resume_without_path_is_unknown() {
        assert_eq!(parse_command("resume"), Command::Unknown("resume".into()));
    }

    #[test]
    fn test_parse_jd_forms() {
        assert_eq!(parse_command("jd"), Command::BeginJobDescription);
        assert_eq!(
            parse_command("jd Senior Rust engineer, remote"),
            Command::SetJobDescription("Senior Rust engineer, remote".into())
        );
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse_command("SUBMIT"), Command::Submit);
        assert_eq!(parse_command("n"), Command::Next);
        assert_eq!(parse_command("next"), Command::Next);
        assert_eq!(parse_command("show"), Command::Show);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("dance"), Command::Unknown("dance".into()));
    }

    #[test]
    fn test_text_entry_collects_until_terminator() {
        let mut entry = TextEntry::default();
        assert_eq!(entry.push("Senior engineer\r"), None);
        assert_eq!(entry.push(""), None);
        assert_eq!(entry.push("Must know Rust"), None);
        assert_eq!(
            entry.push(".").as_deref(),
            Some("Senior engineer\n\nMust know Rust")
        );
        // Entry is reusable after completion.
        assert_eq!(entry.push(". "), Some(String::new()));
    }

    #[test]
    fn test_render_errors_and_loading() {
        let view = SessionView {
            resume_name: None,
            resume_error: Some("Please upload your resume."),
            job_description_error: Some("Please enter the job description."),
            loading: true,
            current_question: None,
            next_label: None,
            show_completion: false,
        };
        let text = render(&view);
        assert!(text.contains("(none selected)"));
        assert!(text.contains("! Please upload your resume."));
        assert!(text.contains("! Please enter the job description."));
        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains(QUESTION_HEADING));
    }

    #[test]
    fn test_render_question_with_label() {
        let view = SessionView {
            resume_name: Some("cv.pdf"),
            resume_error: None,
            job_description_error: None,
            loading: false,
            current_question: Some("Technical Questions:"),
            next_label: Some("Let's Begin →"),
            show_completion: false,
        };
        let text = render(&view);
        assert!(text.contains("Resume: cv.pdf"));
        assert!(text.contains("Technical Questions:"));
        assert!(text.contains("[next] Let's Begin →"));
        assert!(!text.contains(COMPLETION_TEXT));
    }

    #[test]
    fn test_render_completion_banner() {
        let view = SessionView {
            resume_name: Some("cv.pdf"),
            resume_error: None,
            job_description_error: None,
            loading: false,
            current_question: Some("Explain X"),
            next_label: None,
            show_completion: true,
        };
        let text = render(&view);
        assert!(text.contains(COMPLETION_TEXT));
        assert!(!text.contains("[next]"));
    }

    #[test]
    fn test_render_exact_frame() {
        let view = SessionView {
            resume_name: Some("cv.txt"),
            resume_error: None,
            job_description_error: Some("Please enter the job description."),
            loading: false,
            current_question: Some("Why Rust?"),
            next_label: Some("Next Question →"),
            show_completion: false,
        };
        assert_eq!(
            render(&view),
            format!(
                "Resume: cv.txt\nJob description:\n  ! Please enter the job description.\n\n{QUESTION_HEADING}\n  Why Rust?\n[next] Next Question →\n"
            )
        );
    }
}
