// Resume optimization: rewrites the master resume for one job description.
// Shares acquisition, key rotation and validation with the analysis flow.

pub mod handlers;
pub mod optimizer;
pub mod prompts;
