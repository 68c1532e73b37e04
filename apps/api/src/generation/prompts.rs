// Prompt constants for job-description generation.

/// JD generation prompt. Replace every `{field}` placeholder before sending.
pub const JD_PROMPT_TEMPLATE: &str = "Create a professional job description for the following position:

Job Title: {job_title}
Years of Experience: {years_experience}
Must-have Skills: {must_have_skills}
Company: {company_name}
Employment Type: {employment_type}
Industry: {industry}
Location: {location}

Please include:
1. Job summary
2. Key responsibilities
3. Required qualifications and skills
4. Preferred qualifications
5. What we offer

Make it professional and engaging.";
