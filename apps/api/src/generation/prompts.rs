// All LLM prompt constants for the cover letter pipeline.
// Structuring prompts carry the full record schema in the system turn; the
// document itself is always sent as the user turn, untemplated.

/// System prompt for resume structuring — enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str = "You are a resume parser. \
    Extract structured information from raw resume text. \
    Return ONLY a JSON object with this EXACT structure (no extra fields): \
    { \
      \"experience\": [\"list of work experiences\"], \
      \"skills\": [\"list of technical and soft skills\"], \
      \"education\": [\"list of education details\"], \
      \"contact_info\": \"full contact information\" \
    } \
    All four fields are required; use empty lists where the resume has no entries. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for job posting structuring — enforces JSON-only output.
pub const JOB_PARSE_SYSTEM: &str = "You are a job posting parser. \
    Extract structured information from scraped job posting content. \
    Return ONLY a JSON object with this EXACT structure (no extra fields): \
    { \
      \"title\": \"exact job title\", \
      \"company\": \"company name\", \
      \"requirements\": [\"list of key requirements\"], \
      \"description\": \"brief job description\" \
    } \
    All four fields are required. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for cover letter generation. Tone and structure are fixed
/// here; the 300-400 word target is advisory and never validated.
pub const LETTER_SYSTEM: &str = "Write a compelling cover letter. \
    Put less weight on past experiences — those are already in the resume. \
    Focus on the actual role and the company's vision, and connect the key \
    responsibilities with the candidate's knowledge and skills as closely as possible. \
    The candidate is genuinely interested in this role as the next career step, \
    so be thoughtful and empathetic. \
    Follow these guidelines: \
    1. Start with a strong hook about the company and role \
    2. Focus on relevant achievements matching the job requirements \
    3. Use specific metrics from past experience \
    4. Keep it concise (300-400 words) \
    5. End with a confident call to action";
