//! Static word lists driving the parser and the scoring rules.
//!
//! Each table is matched case-insensitively; the casing stored here is the
//! casing reported back to callers.

/// Skills recognised in raw resume text, in canonical display casing.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "HTML",
    "CSS",
    "TypeScript",
    "Angular",
    "Vue",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Git",
    "Agile",
    "Scrum",
    "Project Management",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Teamwork",
    "Excel",
    "PowerPoint",
    "Word",
    "Photoshop",
    "Figma",
    "Sketch",
    "Adobe",
    "SEO",
    "Marketing",
    "Sales",
    "Analysis",
];

/// Words that make a summary read as professional.
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "years",
    "experience",
    "professional",
    "skilled",
    "expertise",
    "developed",
    "managed",
    "led",
];

/// Verbs expected at the heart of experience bullet points.
pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "designed",
    "achieved",
    "increased",
    "decreased",
    "improved",
    "analyzed",
    "coordinated",
    "supervised",
    "trained",
    "negotiated",
    "launched",
    "executed",
    "delivered",
];

/// Units that turn a bare number into a quantified result ("5 years", "12 people").
pub const QUANTITY_UNITS: &[&str] = &["years", "months", "people", "team", "projects"];

pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem-solving",
    "time management",
    "critical thinking",
];

pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "project",
    "management",
    "development",
    "analysis",
    "strategy",
    "implementation",
    "optimization",
    "collaboration",
    "innovation",
    "customer",
    "client",
    "stakeholder",
    "budget",
    "deadline",
    "technical",
    "software",
    "data",
    "process",
    "solution",
];

/// Header words that open the summary section.
pub const SUMMARY_HEADERS: &[&str] = &["summary", "objective", "about", "profile"];
/// Header words that open the experience section.
pub const EXPERIENCE_HEADERS: &[&str] = &["experience", "work", "employment"];
/// Header words that open the education section.
pub const EDUCATION_HEADERS: &[&str] = &["education", "qualifications", "academic"];

/// Month abbreviations treated as the start of a dated experience entry.
pub const MONTH_ABBREVIATIONS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tokens treated as the start of a new education entry.
pub const DEGREE_MARKERS: &[&str] = &["Bachelor", "Master", "PhD", "B.", "M.", "Doctor"];
