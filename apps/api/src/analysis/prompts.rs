// All LLM prompt templates for the analysis flow.
// Placeholders in `{braces}` are filled with `str::replace` before sending.
// Scoring templates end with `{score_instruction}` (llm_client::prompts::SCORE_LINE_INSTRUCTION).

/// Replace `{markup}`.
pub const JOB_EXTRACTION_PROMPT: &str = r#"The following is the raw HTML of a job posting page.
Extract the complete job description: title, company, responsibilities, requirements,
qualifications, and benefits. Return only the job description as plain text, with no
commentary and no HTML.

PAGE MARKUP:
{markup}"#;

/// Replace `{resume}`, `{job_description}`, `{score_instruction}`.
pub const MATCH_PROMPT: &str = r#"You are an applicant tracking system and senior technical recruiter.
Compare the resume against the job description.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

Report:
1. Keyword match (0-100): required keywords present vs missing.
2. Skills match (0-100): technical and soft skills coverage.
3. Experience match (0-100): relevance of past roles.
4. Overall resume-to-job match (0-100), with a short justification.

{score_instruction}"#;

/// Replace `{resume}`, `{job_description}`, `{score_instruction}`.
pub const ROLE_FIT_PROMPT: &str = r#"You are a hiring manager evaluating whether a candidate's experience fits the
responsibilities of this role.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

Focus on the day-to-day responsibilities. Report:
1. Years of experience fit (0-100).
2. Tech stack fit (0-100).
3. Domain / industry fit (0-100).
4. Responsibilities fit (0-100): has the candidate done this work before?
5. Overall experience-to-role fit (0-100), with a short justification.

{score_instruction}"#;

/// Replace `{resume}`, `{job_description}`, `{match_score}`, `{score_instruction}`.
pub const OPTIMIZATION_POTENTIAL_PROMPT: &str = r#"You are a resume optimization expert.
The resume currently scores {match_score}/100 against the job description below.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

List the concrete improvements that would raise the match (missing keywords, reworded
bullets, reordered sections, quantified achievements). For each, estimate its impact in
points. Then give the projected match score (0-100) after all improvements are applied.
{no_fabrication}

{score_instruction}"#;

/// Replace `{job_description}` (already truncated).
pub const COMPANY_NAME_PROMPT: &str = r#"What is the name of the hiring company in this job posting?
Reply with the company name only, nothing else. If it is not stated, reply "Unknown Company".

JOB POSTING:
{job_description}"#;

/// Replace `{resume}`, `{job_description}`, `{company_name}`, `{hiring_results}`,
/// `{growth_results}`, `{openings_results}`, `{match_score}`, `{role_fit_score}`,
/// `{optimization_score}`, `{score_instruction}`.
pub const SELECTION_PROBABILITY_PROMPT: &str = r#"You are a hiring market analyst estimating the probability that this candidate
is selected for an interview at {company_name}.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

PRIOR ASSESSMENTS:
- Resume-to-job match: {match_score}/100
- Experience-to-role fit: {role_fit_score}/100
- Post-optimization potential: {optimization_score}/100

RECENT HIRING ACTIVITY AT {company_name}:
{hiring_results}

COMPANY GROWTH SIGNALS:
{growth_results}

CURRENT JOB OPENINGS:
{openings_results}

Report:
1. Hiring activity (0-100).
2. Candidate strength relative to likely applicants (0-100).
3. Market demand for this profile (0-100).
4. Competition level (0-100, higher means less competition).
5. Overall selection probability (0-100), with a short justification.

{score_instruction}"#;
