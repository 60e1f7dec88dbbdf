// Shared prompt fragments. Each module that needs LLM calls keeps its own
// prompts.rs alongside it; this file holds only cross-cutting pieces.

/// Appended to every scoring prompt. `analysis::extraction` depends on the
/// exact `SCORE: <n>` shape this asks for.
pub const SCORE_LINE_INSTRUCTION: &str = "\
    End your response with the overall score on its own line, in exactly this format:\n\
    SCORE: <number between 0 and 100>\n\
    Do not add any text after the SCORE line.";

/// Keeps the model from inventing employers, titles, or dates.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Never invent experience, employers, job titles, dates, or credentials that are not \
    present in the resume.";
