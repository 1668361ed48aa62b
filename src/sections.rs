/// Identifier of one mutually exclusive content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Education,
    Experience,
    Photography,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    /// Stable string identifier.
    pub key: &'static str,
    pub label: &'static str,
}

/// Menu order and swipe order.
pub const SECTIONS: &[Section] = &[
    Section { id: SectionId::About, key: "about", label: "About" },
    Section { id: SectionId::Projects, key: "projects", label: "Projects" },
    Section { id: SectionId::Education, key: "education", label: "Education" },
    Section { id: SectionId::Experience, key: "experience", label: "Work Experience" },
    Section { id: SectionId::Photography, key: "photography", label: "Photography" },
    Section { id: SectionId::Contact, key: "contact", label: "Contact" },
];

impl SectionId {
    pub fn from_key(key: &str) -> Option<SectionId> {
        SECTIONS.iter().find(|s| s.key == key).map(|s| s.id)
    }

    pub fn index(self) -> usize {
        // Every variant is registered.
        SECTIONS.iter().position(|s| s.id == self).unwrap_or(0)
    }

    pub fn section(self) -> &'static Section {
        &SECTIONS[self.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Holds the currently displayed section.
#[derive(Debug, Clone)]
pub struct Navigator {
    active: SectionId,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { active: SECTIONS[0].id }
    }
}

impl Navigator {
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Returns true if the active section changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }

    /// Unknown keys leave the active section untouched.
    pub fn select_key(&mut self, key: &str) -> bool {
        match SectionId::from_key(key) {
            Some(id) => {
                self.select(id);
                true
            }
            None => {
                tracing::debug!("Ignoring unknown section key {key:?}");
                false
            }
        }
    }

    /// Move one step in registry order. Does not wrap.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let next = self.active.index() as isize + direction.step();
        if next < 0 || next >= SECTIONS.len() as isize {
            return false;
        }
        self.select(SECTIONS[next as usize].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_about() {
        assert_eq!(Navigator::default().active(), SectionId::About);
    }

    #[test]
    fn test_select_every_section() {
        let mut nav = Navigator::default();
        for s in SECTIONS {
            nav.select(s.id);
            assert_eq!(nav.active(), s.id);
            assert!(nav.select_key(s.key));
            assert_eq!(nav.active(), s.id);
        }
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut nav = Navigator::default();
        nav.select(SectionId::Education);
        assert!(!nav.select_key("blog"));
        assert_eq!(nav.active(), SectionId::Education);
    }

    #[test]
    fn test_navigate_does_not_wrap() {
        let mut nav = Navigator::default();
        assert!(!nav.navigate(Direction::Previous));
        assert_eq!(nav.active(), SectionId::About);

        nav.select(SectionId::Contact);
        assert!(!nav.navigate(Direction::Next));
        assert_eq!(nav.active(), SectionId::Contact);
    }

    #[test]
    fn test_navigate_walks_registry_order() {
        let mut nav = Navigator::default();
        let mut seen = vec![nav.active()];
        while nav.navigate(Direction::Next) {
            seen.push(nav.active());
        }
        let expected: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(seen, expected);

        assert!(nav.navigate(Direction::Previous));
        assert_eq!(nav.active(), SectionId::Photography);
    }

    #[test]
    fn test_keys_and_labels() {
        assert_eq!(SectionId::Experience.section().label, "Work Experience");
        assert_eq!(SectionId::from_key("photography"), Some(SectionId::Photography));
        assert_eq!(SectionId::from_key("About"), None);
    }
}
