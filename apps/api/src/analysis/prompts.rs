// Resume analysis prompt template.
// Inputs are embedded verbatim; nothing is escaped.

/// Replace `{resume_text}` and `{job_description}` before sending.
pub const RESUME_MATCH_PROMPT_TEMPLATE: &str = r#"You are an AI Resume Analyzer for a job portal.
Compare the following resume with the job description.

--- Resume ---
{resume_text}

--- Job Description ---
{job_description}

Respond ONLY in valid JSON with the following keys:
{
    "score": <int from 0 to 100>,
    "matched_skills": [list of matched skills],
    "missing_skills": [list of missing skills],
    "recommendation": "short summary recommendation"
}"#;

/// Builds the analysis prompt. Pure: identical inputs give an identical string.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    // Single pass so placeholder text inside the resume is never re-substituted.
    let (head, rest) = RESUME_MATCH_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((RESUME_MATCH_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{job_description}").unwrap_or((rest, ""));

    let mut prompt = String::with_capacity(
        RESUME_MATCH_PROMPT_TEMPLATE.len() + resume_text.len() + job_description.len(),
    );
    prompt.push_str(head);
    prompt.push_str(resume_text);
    prompt.push_str(middle);
    prompt.push_str(job_description);
    prompt.push_str(tail);
    prompt
}
