use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The five fixed career archetypes. Variant order is the canonical
/// enumeration order used for tie-breaking and stable output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Category {
    Analyst,
    Marketing,
    Creative,
    Social,
    Management,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Analyst,
        Category::Marketing,
        Category::Creative,
        Category::Social,
        Category::Management,
    ];

    pub fn profile(self) -> &'static CategoryProfile {
        &PROFILES[self as usize]
    }
}

/// Static reference data for one category. Loaded once, never mutated.
#[derive(Debug)]
pub struct CategoryProfile {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub jobs: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub traits: &'static [&'static str],
    pub risk_profile: &'static str,
}

// Indexed by Category discriminant; keep in Category::ALL order.
static PROFILES: [CategoryProfile; 5] = [
    CategoryProfile {
        category: Category::Analyst,
        title: "Data & Analysis",
        description: "You work best with facts, figures, and structured problems. \
                      Careers that reward careful, systematic thinking suit you.",
        jobs: &[
            "Data Analyst",
            "Financial Analyst",
            "Accountant",
            "Research Assistant",
            "Quality Auditor",
        ],
        skills: &[
            "Spreadsheets",
            "Statistics",
            "Report Writing",
            "Critical Thinking",
            "Attention to Detail",
        ],
        traits: &["analytical", "structured", "independent"],
        risk_profile: "Prefers calculated risk backed by stable income",
    },
    CategoryProfile {
        category: Category::Marketing,
        title: "Sales & Marketing",
        description: "You are driven by concrete results and enjoy persuading \
                      people. Growth-oriented commercial roles fit your energy.",
        jobs: &[
            "Digital Marketer",
            "Sales Representative",
            "Online Shop Owner",
            "Brand Promoter",
            "Business Development Officer",
        ],
        skills: &[
            "Communication",
            "Negotiation",
            "Social Media",
            "Customer Insight",
            "Target Planning",
        ],
        traits: &["persuasive", "goal-driven", "outgoing"],
        risk_profile: "Comfortable with higher risk for higher growth",
    },
    CategoryProfile {
        category: Category::Creative,
        title: "Creative & Design",
        description: "You thrive on new ideas and original work. Flexible \
                      creative careers let you turn imagination into value.",
        jobs: &[
            "Graphic Designer",
            "Content Creator",
            "Photographer",
            "Craft Entrepreneur",
            "Video Editor",
        ],
        skills: &[
            "Design Tools",
            "Storytelling",
            "Visual Composition",
            "Idea Generation",
            "Portfolio Building",
        ],
        traits: &["imaginative", "flexible", "expressive"],
        risk_profile: "Accepts irregular income while building an audience",
    },
    CategoryProfile {
        category: Category::Social,
        title: "Community & Service",
        description: "You gain energy from helping people directly. Service and \
                      community-facing careers give your work meaning.",
        jobs: &[
            "Community Organizer",
            "Teacher",
            "Health Cadre",
            "Customer Service Officer",
            "Cooperative Staff",
        ],
        skills: &[
            "Empathy",
            "Public Speaking",
            "Conflict Resolution",
            "Teamwork",
            "Local Networking",
        ],
        traits: &["empathetic", "collaborative", "patient"],
        risk_profile: "Values a steady, dependable livelihood",
    },
    CategoryProfile {
        category: Category::Management,
        title: "Management & Enterprise",
        description: "You like taking responsibility and making decisions. \
                      Coordinating people and running an operation suit you.",
        jobs: &[
            "Small Business Owner",
            "Operations Supervisor",
            "Project Coordinator",
            "Village Enterprise Manager",
            "Logistics Planner",
        ],
        skills: &[
            "Planning",
            "Delegation",
            "Budgeting",
            "Decision Making",
            "People Management",
        ],
        traits: &["decisive", "responsible", "organized"],
        risk_profile: "Balances stability with measured expansion",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn profiles_align_with_enumeration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(PROFILES[i].category, *category);
            assert_eq!(category.profile().category, *category);
        }
    }

    #[test]
    fn profiles_carry_complete_reference_data() {
        for category in Category::ALL {
            let profile = category.profile();
            assert!(!profile.title.is_empty());
            assert!(!profile.description.is_empty());
            assert!(!profile.jobs.is_empty());
            assert!(!profile.skills.is_empty());
            assert!(!profile.traits.is_empty());
            assert!(!profile.risk_profile.is_empty());
        }
    }

    #[test]
    fn parses_category_names() {
        assert_eq!(Category::from_str("Analyst").unwrap(), Category::Analyst);
        assert!(Category::from_str("Astronaut").is_err());
    }
}
