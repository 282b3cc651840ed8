/// Distance from the top of the viewport (px) a section must reach to become active.
pub const ACTIVE_OFFSET: f64 = 100.0;
/// Window scroll (px) past which the navigation bar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// The in-page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Section header tag, e.g. `01 // ABOUT ME`. Home has none.
    pub fn eyebrow(self) -> Option<&'static str> {
        match self {
            Section::Home => None,
            Section::About => Some("01 // ABOUT ME"),
            Section::Skills => Some("02 // SKILLS"),
            Section::Projects => Some("03 // PROJECTS"),
            Section::Contact => Some("04 // CONTACT"),
        }
    }
}

/// Picks the last section (in document order) whose top edge has scrolled to
/// within [`ACTIVE_OFFSET`] of the viewport top.
///
/// `tops` yields each section's current bounding-rect top; sections missing
/// from the document are simply absent. Returns `None` when no section has
/// reached the offset yet, in which case the caller keeps its previous value.
pub fn active_section<I>(tops: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, f64)>,
{
    tops.into_iter()
        .filter(|(_, top)| *top <= ACTIVE_OFFSET)
        .max_by_key(|(section, _)| Section::ALL.iter().position(|s| s == section))
        .map(|(section, _)| section)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors() {
        for s in Section::ALL {
            assert_eq!(s.anchor(), format!("#{}", s.id()));
        }
    }

    #[test]
    fn test_active_section_at_top() {
        let tops = [
            (Section::Home, 0.0),
            (Section::About, 900.0),
            (Section::Skills, 1800.0),
        ];
        assert_eq!(active_section(tops), Some(Section::Home));
    }

    #[test]
    fn test_active_section_picks_deepest_passed() {
        let tops = [
            (Section::Home, -2000.0),
            (Section::About, -1100.0),
            (Section::Skills, 100.0),
            (Section::Projects, 700.0),
            (Section::Contact, 1500.0),
        ];
        assert_eq!(active_section(tops), Some(Section::Skills));
    }

    #[test]
    fn test_active_section_ignores_input_order() {
        let tops = [
            (Section::Contact, 40.0),
            (Section::Home, -3000.0),
            (Section::Projects, -600.0),
        ];
        assert_eq!(active_section(tops), Some(Section::Contact));
    }

    #[test]
    fn test_active_section_none_reached() {
        assert_eq!(active_section([(Section::Home, 101.0)]), None);
        assert_eq!(active_section(std::iter::empty()), None);
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
