// Prompt constants for interview question generation.

/// System prompt for the interview generator.
pub const INTERVIEW_SYSTEM: &str = "You are an intelligent interview generator AI. \
    You write concise, realistic interview questions tailored to a candidate and a role.";

/// Section headers the client recognises. They must appear verbatim on their own lines.
pub const BEHAVIORAL_HEADER: &str = "Behavioral Questions:";
pub const TECHNICAL_HEADER: &str = "Technical Questions:";

/// Instructions that precede the candidate material in every prompt.
pub const INTERVIEW_INSTRUCTIONS: &str = "\
Based on the following resume and job description, generate 5 behavioral and 5 technical questions.

Format the output as plain text, one entry per line:
Behavioral Questions:
<five behavioral questions, one per line>
Technical Questions:
<five technical questions, one per line>

Write the two headers exactly as shown. Do not use markdown.";

/// Builds the user prompt from the extracted resume text and the job description.
pub fn build_interview_prompt(resume_text: &str, job_desc_text: &str) -> String {
    format!(
        "{INTERVIEW_INSTRUCTIONS}\n\nResume:\n{resume_text}\n\nJob Description:\n{job_desc_text}\n"
    )
}
