/// Replace `{resume}`, `{job_description}`, `{no_fabrication}`.
pub const OPTIMIZE_RESUME_PROMPT: &str = r#"You are an expert resume writer. Rewrite the resume below so it is
tailored to the job description, maximising keyword alignment and relevance while
keeping it truthful.

Rules:
- Keep the candidate's real employers, titles, dates and education.
- Reorder and reword bullets to lead with the most relevant achievements.
- Mirror the job description's terminology where the resume supports it.
- Quantify impact where the resume already gives the numbers.
- {no_fabrication}
- Return only the complete rewritten resume as plain text, no commentary.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}"#;
