//! Fixed site content: owner details, projects, skills and links.

mod tech_icons;

pub use tech_icons::{tech_icon, FALLBACK_ICON, TECH_ICONS};

pub const OWNER_NAME: &str = "Navindu Abhishek";
pub const OWNER_SHORT: &str = "Abhishek";
pub const OWNER_INITIALS: &str = "NA";
/// Letter spun in by the loading screen.
pub const LOADER_GLYPH: &str = "A";
pub const ROLE: &str = "Software Engineering Student";
pub const CV_PATH: &str = "/Navindu Abhishek CV.pdf";
pub const GITHUB_PROFILE: &str = "https://github.com/NavvAbhishek";
pub const SITE_DESCRIPTION: &str = "Portfolio of Abhishek - A passionate Software Engineering Student crafting digital experiences with code and creativity.";

/// Accent colour used by a project card or skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Amber,
    Orange,
    Teal,
    Cyan,
}

/// Tailwind class sets for one accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentClasses {
    pub bg: &'static str,
    pub border: &'static str,
    pub border_hover: &'static str,
    pub text: &'static str,
    pub glow: &'static str,
    pub gradient: &'static str,
    pub tag: &'static str,
}

impl Accent {
    pub fn classes(self) -> AccentClasses {
        match self {
            Accent::Amber => AccentClasses {
                bg: "bg-amber/10",
                border: "border-amber/30",
                border_hover: "hover:border-amber",
                text: "text-amber",
                glow: "shadow-glow-amber",
                gradient: "from-amber via-amber/5 to-transparent",
                tag: "text-amber border-amber/30",
            },
            Accent::Orange => AccentClasses {
                bg: "bg-orange/10",
                border: "border-orange/30",
                border_hover: "hover:border-orange",
                text: "text-orange",
                glow: "shadow-glow-orange",
                gradient: "from-orange via-orange/5 to-transparent",
                tag: "text-orange border-orange/30",
            },
            Accent::Teal => AccentClasses {
                bg: "bg-accent-teal/10",
                border: "border-accent-teal/30",
                border_hover: "hover:border-accent-teal",
                text: "text-accent-teal",
                glow: "shadow-glow-cyan",
                gradient: "from-accent-teal via-accent-teal/5 to-transparent",
                tag: "text-accent-teal border-accent-teal/30",
            },
            Accent::Cyan => AccentClasses {
                bg: "bg-accent-cyan/10",
                border: "border-accent-cyan/30",
                border_hover: "hover:border-accent-cyan",
                text: "text-accent-cyan",
                glow: "shadow-glow-cyan",
                gradient: "from-accent-cyan via-accent-cyan/5 to-transparent",
                tag: "text-accent-cyan border-accent-cyan/30",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    /// `None` until the project has a public deployment.
    pub live_url: Option<&'static str>,
    pub repo_url: &'static str,
    pub featured: bool,
    pub accent: Accent,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Fridge Chef",
        description: "FridgeChef is an AI-powered app Helping home cooks, helping reduce food waste by turning existing ingredients into delicious recipes with sustainability tracking.",
        image: "/projects/FridgeChef.png",
        tags: &["React", "Express Js", "MongoDB", "Gemini/Groq API", "Tailwind CSS"],
        live_url: None,
        repo_url: "https://github.com/NavvAbhishek/FridgeChef",
        featured: true,
        accent: Accent::Amber,
    },
    Project {
        id: 2,
        title: "BookSwap",
        description: "A community-driven web app that enables users to list books for exchange along with their location. Nearby users can discover and request listed books.",
        image: "/projects/bookswap.png",
        tags: &["SpringBoot", "React", "PostgreSQL", "GoogleMap API", "Tailwind CSS"],
        live_url: None,
        repo_url: "https://github.com/NavvAbhishek/bookswap",
        featured: true,
        accent: Accent::Orange,
    },
    Project {
        id: 3,
        title: "Gift Muse",
        description: "Gift Muse helps anyone find personalized gifts by using AI to analyze descriptions and recommend real products for loved ones online.",
        image: "/projects/GiftMuse.png",
        tags: &["React Js", "Express Js", "MongoDB", "Gemini/Groq/Unsplash API", "Tailwind CSS"],
        live_url: None,
        repo_url: "https://github.com/NavvAbhishek/Gift-Muse",
        featured: false,
        accent: Accent::Teal,
    },
    Project {
        id: 4,
        title: "Mood Sync",
        description: "Users can easily track their daily moods with simple note. A beautiful, eye-catching user interface with a modern and intuitive design to enhance user engagement.",
        image: "/projects/MoodSync.png",
        tags: &["Next js", "Firebase", "TailwindCSS"],
        live_url: None,
        repo_url: "https://github.com/NavvAbhishek/MoodSync",
        featured: false,
        accent: Accent::Cyan,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub accent: Accent,
    pub technologies: &'static [&'static str],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "frontend",
        title: "Frontend & UI/UX",
        accent: Accent::Amber,
        technologies: &[
            "React",
            "Next.js",
            "JavaScript",
            "TypeScript",
            "Redux",
            "Tailwind CSS",
            "HTML",
            "CSS",
            "Figma",
        ],
    },
    SkillCategory {
        id: "backend",
        title: "Backend",
        accent: Accent::Orange,
        technologies: &["Node.js", "Java", "Spring Boot", "Python", "Express"],
    },
    SkillCategory {
        id: "database",
        title: "Database",
        accent: Accent::Teal,
        technologies: &["My SQL", "MongoDB", "PostgreSQL", "Prisma", "Firestore"],
    },
    SkillCategory {
        id: "devops",
        title: "DevOps & Other Tools",
        accent: Accent::Cyan,
        technologies: &["Docker", "Git", "Github", "Firebase", "Photoshop", "Illustrator"],
    },
];

/// Either a devicon font class or a plain text glyph for things devicon has no logo for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Devicon(&'static str),
    Glyph(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

impl SocialKind {
    pub fn icon(self) -> Icon {
        match self {
            SocialKind::GitHub => Icon::Devicon("devicon-github-plain"),
            SocialKind::LinkedIn => Icon::Devicon("devicon-linkedin-plain"),
            SocialKind::Twitter => Icon::Devicon("devicon-twitter-original"),
            SocialKind::Email => Icon::Glyph("✉"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
    pub hover_bg: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: GITHUB_PROFILE,
        hover_bg: "hover:bg-white/10",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/navabhishek/",
        hover_bg: "hover:bg-[#0A66C2]/10",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        label: "X",
        href: "https://x.com/NavAbhishek",
        hover_bg: "hover:bg-[#1DA1F2]/10",
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:abi2000navi@gmail.com",
        hover_bg: "hover:bg-amber/10",
    },
];

/// Social links shown in the hero: everything but email.
pub fn profile_links() -> impl Iterator<Item = &'static SocialLink> {
    SOCIAL_LINKS
        .iter()
        .filter(|l| l.kind != SocialKind::Email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub static CONTACT_DETAILS: &[InfoItem] = &[
    InfoItem {
        icon: Icon::Glyph("✉"),
        label: "Email",
        value: "abi2000navi@gmail.com",
    },
    InfoItem {
        icon: Icon::Glyph("⌖"),
        label: "Location",
        value: "Colombo, Sri Lanka",
    },
    InfoItem {
        icon: Icon::Glyph("☏"),
        label: "Phone",
        value: "+(94)71-1604788",
    },
];

pub static ABOUT_CARDS: &[InfoItem] = &[
    InfoItem {
        icon: Icon::Glyph("⌖"),
        label: "Location",
        value: "Colombo, Sri Lanka",
    },
    InfoItem {
        icon: Icon::Glyph("◷"),
        label: "Experience",
        value: "2+ Years Coding",
    },
    InfoItem {
        icon: Icon::Glyph("🎓"),
        label: "Education",
        value: "B.Sc in Software Engineering",
    },
    InfoItem {
        icon: Icon::Glyph("✦"),
        label: "Focus",
        value: "Full-Stack Development with AI/ML",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_unique() {
        for (i, p) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[i + 1..].iter().all(|o| o.id != p.id));
        }
    }

    #[test]
    fn test_featured_projects_come_first() {
        let first_regular = PROJECTS.iter().position(|p| !p.featured);
        if let Some(i) = first_regular {
            assert!(PROJECTS[i..].iter().all(|p| !p.featured));
        }
    }

    #[test]
    fn test_every_skill_has_an_icon() {
        for category in SKILL_CATEGORIES {
            for tech in category.technologies {
                assert!(
                    TECH_ICONS.iter().any(|(name, _)| name == tech),
                    "{tech} in {} has no icon",
                    category.id
                );
            }
        }
    }

    #[test]
    fn test_icons_are_devicon_classes_or_glyphs() {
        let icons = SOCIAL_LINKS
            .iter()
            .map(|l| l.kind.icon())
            .chain(CONTACT_DETAILS.iter().chain(ABOUT_CARDS).map(|i| i.icon));
        for icon in icons {
            match icon {
                Icon::Devicon(class) => assert!(class.starts_with("devicon-"), "{class}"),
                Icon::Glyph(glyph) => assert!(!glyph.trim().is_empty()),
            }
        }
    }

    #[test]
    fn test_loader_glyph_is_one_letter() {
        assert_eq!(LOADER_GLYPH.chars().count(), 1);
        assert!(OWNER_INITIALS.contains(LOADER_GLYPH));
    }

    #[test]
    fn test_profile_links_skip_email() {
        let labels: Vec<_> = profile_links().map(|l| l.label).collect();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "X"]);
    }
}
