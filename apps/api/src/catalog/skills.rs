//! Skill suggestions grouped by career category.

pub const SOFTWARE_SKILLS: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "TypeScript", "React", "Node.js", "Angular",
    "Vue.js", "SQL", "MongoDB", "PostgreSQL", "AWS", "Docker", "Kubernetes", "Git",
    "REST APIs", "GraphQL", "HTML", "CSS", "SASS", "Redux", "Next.js", "Express.js",
    "Django", "Flask", "Spring Boot",
];

pub const MARKETING_SKILLS: &[&str] = &[
    "SEO", "SEM", "Google Analytics", "Social Media Marketing", "Content Marketing",
    "Email Marketing", "PPC", "Facebook Ads", "Google Ads", "Copywriting",
    "Brand Management", "Market Research", "CRM", "HubSpot", "Mailchimp", "A/B Testing",
];

pub const FINANCE_SKILLS: &[&str] = &[
    "Financial Analysis", "Excel", "Financial Modeling", "Budgeting", "Forecasting",
    "Accounting", "QuickBooks", "SAP", "Bloomberg Terminal", "Risk Management",
    "Investment Analysis", "Valuation", "M&A", "Portfolio Management", "Tax Planning",
];

pub const DESIGN_SKILLS: &[&str] = &[
    "Figma", "Adobe Photoshop", "Adobe Illustrator", "Adobe XD", "Sketch", "UI/UX Design",
    "Wireframing", "Prototyping", "User Research", "Design Systems", "Typography",
    "Color Theory", "Responsive Design", "InVision", "Canva",
];

pub const MANAGEMENT_SKILLS: &[&str] = &[
    "Project Management", "Agile", "Scrum", "JIRA", "Team Leadership", "Strategic Planning",
    "Budgeting", "Stakeholder Management", "Risk Management", "Change Management",
    "Process Improvement", "KPI Tracking", "MS Project", "Trello",
];

pub const SOFT_SKILL_SUGGESTIONS: &[&str] = &[
    "Communication", "Leadership", "Problem Solving", "Critical Thinking", "Teamwork",
    "Time Management", "Adaptability", "Creativity", "Attention to Detail", "Negotiation",
    "Conflict Resolution", "Emotional Intelligence", "Decision Making", "Presentation Skills",
];

/// Suggestions for a category, ignoring case; unknown categories get soft skills.
pub fn skills_for_category(category: &str) -> &'static [&'static str] {
    match category.to_lowercase().as_str() {
        "software" => SOFTWARE_SKILLS,
        "marketing" => MARKETING_SKILLS,
        "finance" => FINANCE_SKILLS,
        "design" => DESIGN_SKILLS,
        "management" => MANAGEMENT_SKILLS,
        _ => SOFT_SKILL_SUGGESTIONS,
    }
}
