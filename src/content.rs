//! Static page content.

use crate::assets::Institution;

pub const OWNER: &str = "Benyamin Plaksienko";
pub const LOCATION: &str = "Fair Lawn, NJ, USA";
pub const EMAIL: &str = "benplaksienko@hotmail.com";
pub const PHONE: &str = "+1 (347) 279-7732";
pub const PHONE_URI: &str = "tel:+13472797732";
pub const GITHUB_URL: &str = "https://github.com/Benyaminwasnthere";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ben-plaksienko/";

pub const BIO: &[&str] = &[
    "Hey! I’m Benyamin Plaksienko, a developer from Fair Lawn, NJ. I’ve always loved building things \
     and solving problems with code. I also played hockey my whole life, including D3 at Rutgers, \
     which taught me a lot about teamwork and perseverance.",
    "I enjoy creating websites that are easy to use and look good. I'm always learning and love \
     turning ideas into something real.",
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

// ─── PROJECTS ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_demo_url: Option<&'static str>,
    pub features: &'static [&'static str],
    pub award: Option<&'static str>,
    pub test_plan: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tetris Confetti",
        description: "Creative Tetris game with confetti effects and sand physics",
        technologies: &["JavaScript", "React", "Firebase", "p5.js"],
        github_url: Some("https://github.com/Benyaminwasnthere/Confetti-Tetris"),
        live_demo_url: Some("https://confetti-3b50f.web.app/game"),
        features: &[
            "Real-time score tracking with Firebase",
            "Custom BFS algorithm for chain detection",
            "Responsive design for all devices",
        ],
        award: None,
        test_plan: None,
    },
    Project {
        title: "Dementia Detection AI",
        description: "AI-powered dementia detection through text analysis",
        technologies: &["Python", "XGBoost", "React Native", "FastAPI", "Scikit-learn"],
        github_url: Some("https://github.com/OX-S/early-trace"),
        live_demo_url: None,
        features: &[
            "Achieved 0.95 F1-score with XGBoost",
            "Processed 1.4M tokens of text data",
            "Built with BGE-large-en-v1.5 transformer",
        ],
        award: Some("2nd Place - Social Good Category (HackRU 2025)"),
        test_plan: None,
    },
    Project {
        title: "JavaFX Photo Gallery App",
        description: "A full-featured desktop photo management app built with JavaFX and Scene Builder.",
        technologies: &["Java", "JavaFX", "FXML", "Scene Builder"],
        github_url: Some("https://github.com/Benyaminwasnthere/android-photo-gallery"),
        live_demo_url: None,
        features: &[
            "Secure login and single-user account system",
            "Album creation, photo tagging, and advanced search",
            "Admin panel for user creation, deletion, and listing",
            "Data persistence through Java object serialization",
        ],
        award: None,
        test_plan: None,
    },
    Project {
        title: "Tic-Tac-Toe ( Multi-Player / Multi-Session )",
        description: "A multithreaded Tic-Tac-Toe game server with support for multiple concurrent game sessions.",
        technologies: &["C", "Multithreading", "Sockets"],
        github_url: Some("https://github.com/Benyaminwasnthere/TIKTACTOE"),
        live_demo_url: None,
        features: &[
            "Multithreading support for concurrent games",
            "Multiple game sessions for users to join and play",
            "Tic-Tac-Toe basic rule set",
        ],
        award: None,
        test_plan: Some("Tested using multiple terminal instances for concurrent gameplay testing."),
    },
];

// ─── EDUCATION ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub coursework: &'static [&'static str],
    pub logo: Institution,
    /// Rendered logo height in logical pixels.
    pub logo_height: f32,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Science in Artificial Intelligence",
        institution: "NJIT Ying Wu College of Computing",
        location: "Newark, NJ",
        period: "Dec 2024 – Jan 2027",
        coursework: &["Data Mining"],
        logo: Institution::Njit,
        logo_height: 48.0,
    },
    Education {
        degree: "Bachelor of Science in Computer Science",
        institution: "Rutgers University",
        location: "New Brunswick, NJ",
        period: "Sept 2020 – May 2024",
        coursework: &[
            "Artificial Intelligence",
            "Machine Learning Principles",
            "Brain Inspired Computing",
            "Computational Robotics",
            "Operating Systems",
            "Software Methodology",
            "Data Management",
            "Systems Programming",
            "Data Structures",
            "Algorithms Design & Analysis",
        ],
        logo: Institution::Rutgers,
        logo_height: 40.0,
    },
];

// ─── EXPERIENCE ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Data Engineer Research",
    company: "Clearcut Software LLC",
    location: "Paramus, NJ",
    period: "Mar 2024 – Aug 2024",
    description: "Researched the DuckDB database and developed, built, and deployed functions for clients",
    achievements: &[
        "Crafted tailored aggregation functions in C++ for DuckDB, aligning precisely with client \
         specifications & conducting thorough unit tests to ensure robustness while significantly \
         enhancing resource efficiency",
        "Streamlined SQL query creation by developing Python scripts, resulting in a substantial \
         increase in team productivity & efficiency, leveraging NumPy & Pandas for seamless integration",
        "Utilized advanced programming techniques to enhance performance & ensure smooth integration \
         with existing data analytics pipelines, facilitating clients in efficiently extracting \
         actionable insights from vast datasets",
        "Resolved technical challenges by debugging and troubleshooting issues using GitHub tickets, \
         ensuring smooth project development and deployment",
    ],
    skills: &["C++", "Python", "SQL", "DuckDB", "NumPy", "Pandas"],
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_links_somewhere() {
        assert_eq!(PROJECTS.len(), 4);
        assert!(PROJECTS.iter().all(|p| p.github_url.is_some()));
        assert_eq!(PROJECTS.iter().filter(|p| p.live_demo_url.is_some()).count(), 1);
    }

    #[test]
    fn test_education_logos() {
        let logos: Vec<_> = EDUCATION.iter().map(|e| e.logo).collect();
        assert_eq!(logos, vec![Institution::Njit, Institution::Rutgers]);
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(), "mailto:benplaksienko@hotmail.com");
    }
}
