/// Height of the navigation bar that scroll targets must clear.
pub const NAV_OFFSET: f64 = 80.0;
/// How far below the top of the viewport the scroll-spy probe sits.
pub const SPY_OFFSET: f64 = 100.0;

/// The navigation bar: `p-6` around a `text-2xl` line is [`NAV_OFFSET`] tall.
pub const NAV_CLASS: &str = "sticky top-0 z-20 p-6 backdrop-blur-md bg-gray-900/30";

/// The page wrapper the nav sits in. It must not become a scroll container
/// (`overflow-hidden`, `-auto`, `-scroll`), or the nav sticks to the wrapper
/// and scrolls away with the window.
pub const PAGE_CLASS: &str = "min-h-screen bg-gradient-to-br from-gray-900 via-blue-900 to-purple-900 text-white overflow-clip relative";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section containing the scroll-spy probe, if any.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let probe = scroll_y + SPY_OFFSET;
    sections.iter().find(|s| s.contains(probe)).map(|s| s.id)
}

/// Document offset to scroll to so an element whose viewport top is
/// `element_top` ends up just below the navigation bar.
pub fn scroll_target(element_top: f64, page_y: f64) -> f64 {
    (element_top + page_y - NAV_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: "about",
                top: 900.0,
                height: 700.0,
            },
            SectionBounds {
                id: "projects",
                top: 1600.0,
                height: 1200.0,
            },
            SectionBounds {
                id: "contact",
                top: 2800.0,
                height: 600.0,
            },
        ]
    }

    #[test]
    fn test_active_section() {
        let sections = sections();
        // hero is not a tracked section
        assert_eq!(active_section(0.0, &sections), None);
        assert_eq!(active_section(800.0, &sections), Some("about"));
        assert_eq!(active_section(1499.0, &sections), Some("about"));
        assert_eq!(active_section(1500.0, &sections), Some("projects"));
        assert_eq!(active_section(3299.0, &sections), Some("contact"));
        assert_eq!(active_section(3300.0, &sections), None);
    }

    #[test]
    fn test_nav_sticks_to_viewport() {
        let nav: Vec<_> = NAV_CLASS.split_whitespace().collect();
        assert!(nav.contains(&"sticky") && nav.contains(&"top-0"));

        for class in PAGE_CLASS.split_whitespace() {
            if let Some(overflow) = class.strip_prefix("overflow-") {
                let value = overflow.rsplit('-').next().unwrap_or(overflow);
                assert!(
                    matches!(value, "clip" | "visible"),
                    "page wrapper scrolls on its own: {class}"
                );
            }
        }
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(500.0, 1000.0), 1420.0);
        assert_eq!(scroll_target(20.0, 0.0), 0.0);
    }
}
