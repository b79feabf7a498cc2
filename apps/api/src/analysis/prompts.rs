// Fixed instruction strings for the two resume actions. One is selected by
// the button pressed; neither is user-editable.

/// Instruction for the "Analyze Resume" action.
pub const ANALYZE_PROMPT: &str = "\
You are an experienced HR Manager. Review the provided resume against the job description. \
Share insights on alignment, strengths, and weaknesses.";

/// Instruction for the "Percentage Match" action.
pub const MATCH_PROMPT: &str = "\
You are an ATS scanner. Analyze the resume against the job description. \
Provide a match percentage, missing keywords, and final thoughts.";
