//! Skill cards and their detail popup content.

/// One skill card with the detail text shown in its popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Stable identifier (also the config/lookup key).
    pub id: &'static str,
    /// Card label.
    pub name: &'static str,
    /// Opening paragraph of the detail view.
    pub intro: &'static str,
    /// Heading over the bullet list.
    pub heading: &'static str,
    /// Bullet points under the heading.
    pub bullets: &'static [&'static str],
    /// Optional trailing heading and paragraph.
    pub outro: Option<(&'static str, &'static str)>,
}

/// All skills in card-grid order.
pub const SKILLS: [Skill; 10] = [
    Skill {
        id: "tech-support",
        name: "Technical Support",
        intro: "Comprehensive technical support across all major platforms and technologies.",
        heading: "Core Competencies",
        bullets: &[
            "Hardware diagnostics and troubleshooting",
            "Software installation and configuration",
            "Network connectivity issues",
            "System optimization and maintenance",
        ],
        outro: Some((
            "Support Approach",
            "Patient, methodical problem-solving with clear communication. Experienced in \
             both remote and on-site support scenarios.",
        )),
    },
    Skill {
        id: "customer-service",
        name: "Customer Service",
        intro: "Excellence in customer interaction with focus on satisfaction and problem \
                resolution.",
        heading: "Key Strengths",
        bullets: &[
            "Clear and patient communication",
            "Conflict resolution",
            "Technical translation for non-technical users",
            "Follow-up and relationship building",
        ],
        outro: None,
    },
    Skill {
        id: "windows",
        name: "Windows Systems",
        intro: "Expert-level knowledge of Windows operating systems from Windows 7 through \
                Windows 11.",
        heading: "Specializations",
        bullets: &[
            "Registry editing and system optimization",
            "PowerShell scripting",
            "Active Directory basics",
            "Security and antivirus management",
        ],
        outro: None,
    },
    Skill {
        id: "macos",
        name: "macOS",
        intro: "Proficient in macOS support and troubleshooting.",
        heading: "Experience",
        bullets: &[
            "System preferences and configuration",
            "Time Machine and backup solutions",
            "Application management",
            "Terminal usage and scripting",
        ],
        outro: None,
    },
    Skill {
        id: "linux",
        name: "Linux",
        intro: "Strong foundation in Linux systems and command-line operations.",
        heading: "Distributions",
        bullets: &[
            "Ubuntu/Debian-based systems",
            "CentOS/RHEL basics",
            "Package management (apt, yum)",
            "Shell scripting and automation",
        ],
        outro: None,
    },
    Skill {
        id: "python",
        name: "Python",
        intro: "Python development for automation and problem-solving.",
        heading: "Applications",
        bullets: &[
            "Automation scripts for repetitive tasks",
            "Data processing and analysis",
            "Web scraping and API integration",
            "System administration tools",
        ],
        outro: None,
    },
    Skill {
        id: "javascript",
        name: "JavaScript",
        intro: "Modern JavaScript for web development and scripting.",
        heading: "Experience",
        bullets: &[
            "DOM manipulation and interactivity",
            "Async programming and APIs",
            "Basic Node.js scripting",
            "Browser automation",
        ],
        outro: None,
    },
    Skill {
        id: "git",
        name: "Git",
        intro: "Version control for code management and collaboration.",
        heading: "Proficiencies",
        bullets: &[
            "Repository management",
            "Branching and merging strategies",
            "GitHub collaboration",
            "Conflict resolution",
        ],
        outro: None,
    },
    Skill {
        id: "problem-solving",
        name: "Problem Solving",
        intro: "Systematic approach to identifying and resolving complex technical issues.",
        heading: "Methodology",
        bullets: &[
            "Root cause analysis",
            "Logical troubleshooting steps",
            "Documentation and knowledge sharing",
            "Creative solution development",
        ],
        outro: None,
    },
    Skill {
        id: "remote",
        name: "Remote Collaboration",
        intro: "Effective remote work and team collaboration skills.",
        heading: "Tools & Practices",
        bullets: &[
            "Video conferencing platforms",
            "Asynchronous communication",
            "Time management and self-direction",
            "Documentation and knowledge sharing",
        ],
        outro: None,
    },
];

/// Look up a skill by its identifier.
pub fn find_skill(id: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.id == id)
}
