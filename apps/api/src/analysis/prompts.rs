// All LLM prompt constants for the analysis relay.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt: scoring rubric and the exact JSON shape expected back.
pub const ANALYSIS_SYSTEM: &str = r#"You are an expert career advisor and job readiness analyzer. Your task is to:
1. Extract key skills, tools, and requirements from the job description
2. Extract skills, experience, and qualifications from the resume
3. Calculate a readiness score (0-10) based on:
   - Skills Match: 50%
   - Tools/Technologies Match: 30%
   - Experience Match: 20%
4. Identify specific skill gaps
5. Provide ONE actionable recommendation

Score interpretation:
- 8-10: Strong Match
- 5-7: Moderate Match
- 0-4: Weak Match

Return ONLY valid JSON in this exact format:
{
  "score": number,
  "label": "Strong Match" | "Moderate Match" | "Weak Match",
  "explanation": "Brief explanation of the score",
  "skillGaps": ["skill1", "skill2"],
  "recommendation": "One specific actionable tip"
}"#;

/// Closing instruction of the user prompt, after both documents.
pub const ANALYSIS_INSTRUCTION: &str = "Analyze the match between this job and resume.";
