//! Scroll-position helpers for the fixed navigation bar.

/// Page offset after which the bar gets its solid background.
pub const SCROLLED_AFTER: f64 = 50.0;
/// Viewport line used to decide which section is "in view".
pub const PROBE_LINE: f64 = 100.0;

/// Client rectangle of a section, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionProbe<'a> {
    /// Element id
    pub id: &'a str,
    /// Rect top relative to the viewport
    pub top: f64,
    /// Rect bottom relative to the viewport
    pub bottom: f64,
}

/// Whether the page has scrolled far enough to restyle the bar.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// First section whose rectangle straddles `line`.
pub fn active_section<'a>(probes: &[SectionProbe<'a>], line: f64) -> Option<&'a str> {
    probes
        .iter()
        .find(|p| p.top <= line && p.bottom >= line)
        .map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_section_under_probe_line() {
        let probes = [
            SectionProbe {
                id: "home",
                top: -900.0,
                bottom: 20.0,
            },
            SectionProbe {
                id: "about",
                top: 20.0,
                bottom: 900.0,
            },
            SectionProbe {
                id: "projects",
                top: 900.0,
                bottom: 1800.0,
            },
        ];
        assert_eq!(active_section(&probes, PROBE_LINE), Some("about"));
        assert_eq!(active_section(&probes, 5000.0), None);
    }

    #[test]
    fn scrolled_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
