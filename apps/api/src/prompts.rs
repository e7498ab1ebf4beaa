//! LLM prompt templates for both flows.
//!
//! Rendering is literal `{slot}` replacement. User input is not escaped for
//! YAML or Markdown: the output is LLM-mediated and never guaranteed to be
//! syntactically valid, and the pages that display it escape for HTML.

use serde::Deserialize;

/// The eleven builder form fields, all optional and passed through as-is
/// (empty included — the original imposed no validation and neither do we).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BuilderInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
    pub interests: String,
    pub languages: String,
}

pub const RESUME_ANALYZER_PROMPT: &str = r#"
You are a senior business analyst and career coach. Your task is to analyze the following resume for a business analyst or data analyst role.

Based on the provided resume text below, perform the following three tasks and present the output in a clear, easy-to-read Markdown format. Use bold headings and bullet points.

1.  **Resume Score & Justification**
    - Give a score from 1 to 100 based on the resume's effectiveness.
    - Provide a brief, bulleted justification for this score.

2.  **Tips for Improvement**
    - Provide 3-5 concrete, actionable tips to improve the resume's clarity and impact.
    - Focus on areas like structure, grammar, professional tone, and missing sections.

3.  **Keyword and Quantifiable Impact Suggestions**
    - **Missing Keywords:** Identify 3-5 crucial industry keywords (e.g., SQL, Tableau, Power BI, Python, R, predictive modeling, A/B testing, ETL, dashboarding) that are missing or underutilized.
    - **Quantifiable Impact:** For each project or experience bullet point, suggest how to rephrase it to include quantifiable results or metrics. Provide specific, numbered examples for each section of the resume.

**Resume Text:**
{resume_text}

"#;

pub const RESUME_BUILDER_PROMPT: &str = r#"
You are a professional YAML code agent specializing in generating a single, complete RenderCV configuration file for the 'sb2nov' theme.

Based on the provided user information, you must generate a well-structured YAML code block. The code should start with `cv:` and end correctly, with no extra conversational text or code fences (like ```yaml).

**YAML Code Generation Instructions:**
- **Professional Summary:** Generate a concise, 2-3 sentence professional summary based on the provided user details, focusing on business/data analyst skills. This should be the very first section in `cv.sections`.
- **Order of Sections:** The sections in the generated YAML must be in this exact order: `professional_summary`, `experience`, `education`, `projects`, `skills`, `interests`, `languages`.
- **Formatting:** Use 2-space indentation. Ensure all lists (`-`) and key-value pairs are formatted correctly.
- **Single Page Fit:** Include the provided `design` block with the reduced margins to ensure the CV fits on a single page.

**User Information to convert to YAML:**
Name: {name}
Email: {email}
Phone: {phone}
LinkedIn: {linkedin}
GitHub: {github}
Education: {education}
Experience: {experience}
Projects: {projects}
Skills: {skills}
Interests: {interests}
Languages: {languages}

**Output the complete YAML code block, and nothing else.**

cv:
  name: {name}
  location: Location
  email: {email}
  phone: {phone}
  social_networks:
    - network: LinkedIn
      username: {linkedin}
    - network: GitHub
      username: {github}
  sections:
    professional_summary:
      - '[Generate a 2-3 sentence professional summary based on the user data above. Start with "I am a..."]'
    experience:
      {experience}
    education:
      {education}
    projects:
      {projects}
    skills:
      {skills}
    interests:
      - bullet: {interests}
    languages:
      - bullet: {languages}
design:
  theme: sb2nov
  page:
    size: us-letter
    top_margin: 1cm
    bottom_margin: 1cm
    left_margin: 1cm
    right_margin: 1cm
    show_page_numbering: false
    show_last_updated_date: false
  header:
    name_font_size: 20pt
    vertical_space_between_name_and_connections: 0.4cm
    vertical_space_between_connections_and_first_section: 0.4cm
    alignment: center
  section_titles:
    font_size: 1.2em
    line_thickness: 0.5pt
    vertical_space_above: 0.3cm
    vertical_space_below: 0.2cm
  entries:
    vertical_space_between_entries: 0.6em
    short_second_row: true
  highlights:
    top_margin: 0.15cm
    left_margin: 0.4cm
    vertical_space_between_highlights: 0.2cm
    horizontal_space_between_bullet_and_highlight: 0.5em
  text:
    font_size: 9pt
    leading: 0.5em
    "#;

/// Renders the analyzer prompt with the extracted résumé text.
pub fn render_analyzer_prompt(resume_text: &str) -> String {
    RESUME_ANALYZER_PROMPT.replace("{resume_text}", resume_text)
}

/// Renders the builder prompt. Each `{slot}` is replaced everywhere it
/// appears, both in the user-information block and in the YAML skeleton.
pub fn render_builder_prompt(input: &BuilderInput) -> String {
    RESUME_BUILDER_PROMPT
        .replace("{name}", &input.name)
        .replace("{email}", &input.email)
        .replace("{phone}", &input.phone)
        .replace("{linkedin}", &input.linkedin)
        .replace("{github}", &input.github)
        .replace("{education}", &input.education)
        .replace("{experience}", &input.experience)
        .replace("{projects}", &input.projects)
        .replace("{skills}", &input.skills)
        .replace("{interests}", &input.interests)
        .replace("{languages}", &input.languages)
}
