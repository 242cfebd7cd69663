//! Question Revealer: forward-only, one-at-a-time walk through generated questions.
//!
//! The analysis service embeds section boundaries as pseudo-questions
//! ("Behavioral Questions:", "Technical Questions:"). They are matched literally.

/// Entries the analysis service uses to open a group of questions.
pub const SECTION_HEADERS: [&str; 2] = ["Behavioral Questions:", "Technical Questions:"];

pub const BEGIN_LABEL: &str = "Let's Begin →";
pub const NEXT_LABEL: &str = "Next Question →";

/// Whether an entry opens a section or is a question to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    SectionHeader,
    Question,
}

pub fn classify(entry: &str) -> EntryKind {
    if SECTION_HEADERS.contains(&entry) {
        EntryKind::SectionHeader
    } else {
        EntryKind::Question
    }
}

/// Ordered, non-empty entries parsed from one service response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    entries: Vec<String>,
}

impl QuestionSet {
    /// Splits a raw multi-line response, trimming entries and dropping blank lines.
    pub fn from_raw(raw: &str) -> Self {
        let entries = raw
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        QuestionSet { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// No questions loaded.
    Empty,
    /// More entries remain after the current one.
    Presenting,
    /// The last entry is displayed.
    Final,
}

/// Cursor over a `QuestionSet`. The cursor only moves forward and stops at the last entry.
#[derive(Debug, Clone, Default)]
pub struct QuestionRevealer {
    questions: QuestionSet,
    cursor: usize,
}

impl QuestionRevealer {
    pub fn new(questions: QuestionSet) -> Self {
        QuestionRevealer {
            questions,
            cursor: 0,
        }
    }

    /// Swaps in a new set and discards all reveal progress.
    pub fn replace(&mut self, questions: QuestionSet) {
        self.questions = questions;
        self.cursor = 0;
    }

    pub fn state(&self) -> RevealState {
        match self.questions.len() {
            0 => RevealState::Empty,
            n if self.cursor + 1 >= n => RevealState::Final,
            _ => RevealState::Presenting,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Index of the displayed entry.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&str> {
        self.questions.get(self.cursor)
    }

    /// Moves to the next entry. Returns `false` when there is nowhere to go.
    pub fn advance(&mut self) -> bool {
        if self.state() != RevealState::Presenting {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Label of the "next" action, or `None` when the action is not offered.
    pub fn next_label(&self) -> Option<&'static str> {
        if self.state() != RevealState::Presenting {
            return None;
        }
        self.current().map(|entry| match classify(entry) {
            EntryKind::SectionHeader => BEGIN_LABEL,
            EntryKind::Question => NEXT_LABEL,
        })
    }

    /// True once the last entry is on screen.
    pub fn is_complete(&self) -> bool {
        self.state() == RevealState::Final
    }
}
