/// Icon shown for any technology missing from [`TECH_ICONS`].
pub const FALLBACK_ICON: &str = "/tech-icons/reactlogo.png";

pub static TECH_ICONS: &[(&str, &str)] = &[
    // Frontend
    ("React", "/tech-icons/reactlogo.png"),
    ("Next.js", "/tech-icons/nextlogo.png"),
    ("JavaScript", "/tech-icons/jslogo.png"),
    ("TypeScript", "/tech-icons/tslogo.png"),
    ("Redux", "/tech-icons/redux.png"),
    ("Tailwind CSS", "/tech-icons/tailwind.png"),
    ("HTML", "/tech-icons/htmllogo.png"),
    ("CSS", "/tech-icons/csslogo.png"),
    ("Figma", "/tech-icons/figmalogo.png"),
    // Backend
    ("Node.js", "/tech-icons/node.png"),
    ("Java", "/tech-icons/java.png"),
    ("Spring Boot", "/tech-icons/spring-boot-logo.png"),
    ("Python", "/tech-icons/pylogo.png"),
    ("Express", "/tech-icons/express-js-white.png"),
    // Database
    ("PostgreSQL", "/tech-icons/postgresql.png"),
    ("MongoDB", "/tech-icons/mongodb_logo.png"),
    ("My SQL", "/tech-icons/mysql.png"),
    ("Prisma", "/tech-icons/prisma-orm.png"),
    ("Firestore", "/tech-icons/firestorelogo.png"),
    // DevOps & tools
    ("Docker", "/tech-icons/docker.png"),
    ("Git", "/tech-icons/gitlogo.png"),
    ("Github", "/tech-icons/githublogo.png"),
    ("Firebase", "/tech-icons/firebase.png"),
    ("Photoshop", "/tech-icons/pslogo.png"),
    ("Illustrator", "/tech-icons/ailogo.png"),
];

/// Icon path for a technology's display name. Names match exactly.
pub fn tech_icon(name: &str) -> &'static str {
    TECH_ICONS
        .iter()
        .find_map(|(n, path)| (*n == name).then_some(*path))
        .unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mapped_name_resolves() {
        for (name, path) in TECH_ICONS {
            assert_eq!(tech_icon(name), *path, "{name}");
        }
    }

    #[test]
    fn test_unmapped_names_fall_back() {
        for name in ["", "AWS", "react", "Rust", "Next.js "] {
            assert_eq!(tech_icon(name), FALLBACK_ICON, "{name:?}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, (name, _)) in TECH_ICONS.iter().enumerate() {
            assert!(
                TECH_ICONS[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate entry for {name}"
            );
        }
    }
}
