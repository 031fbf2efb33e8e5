//! One-section-at-a-time navigation with 3D depth placement.
//!
//! [`SectionNavigator`] is the state machine; the landing crate feeds it
//! wheel, swipe, key and programmatic inputs and renders every section with
//! the [`SectionDepth`] it reports.

use serde::Serialize;
use tracing::debug;

use crate::config::NavigatorConfig;

/// Keys that move the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowDown, PageDown or Space
    Forward,
    /// ArrowUp or PageUp
    Back,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" | " " => Some(Self::Forward),
            "ArrowUp" | "PageUp" => Some(Self::Back),
            _ => None,
        }
    }
}

/// A navigation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavInput {
    /// Mouse wheel with vertical delta (positive = down)
    Wheel {
        /// `WheelEvent.deltaY`
        delta_y: f64,
    },
    /// Touch swipe between start and end client Y
    Swipe {
        /// Y at touchstart
        start_y: f64,
        /// Y at touchend
        end_y: f64,
    },
    /// Keyboard
    Key(NavKey),
    /// Jump from an indicator dot or nav link
    GoTo(usize),
}

/// Section navigator.
#[derive(Clone, Debug)]
pub struct SectionNavigator {
    total: usize,
    current: usize,
    busy_until: Option<f64>,
    config: NavigatorConfig,
}

impl SectionNavigator {
    /// Navigator over `total` sections, starting at the first.
    pub fn new(total: usize, config: NavigatorConfig) -> Self {
        Self {
            total,
            current: 0,
            busy_until: None,
            config,
        }
    }

    /// Number of sections.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Active section index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether a transition is still cooling down at `now_ms`.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.busy_until.is_some_and(|until| now_ms < until)
    }

    /// Resolve an input to a target index without applying it.
    fn target(&self, input: NavInput) -> Option<usize> {
        let forward = || self.current.checked_add(1);
        let back = || self.current.checked_sub(1);

        match input {
            NavInput::Wheel { delta_y } if delta_y >= self.config.wheel_threshold => forward(),
            NavInput::Wheel { delta_y } if delta_y <= -self.config.wheel_threshold => back(),
            NavInput::Wheel { .. } => None,
            NavInput::Swipe { start_y, end_y } => {
                let diff = start_y - end_y;
                if diff > self.config.swipe_threshold {
                    forward()
                } else if diff < -self.config.swipe_threshold {
                    back()
                } else {
                    None
                }
            }
            NavInput::Key(NavKey::Forward) => forward(),
            NavInput::Key(NavKey::Back) => back(),
            NavInput::GoTo(index) if index != self.current => Some(index),
            NavInput::GoTo(_) => None,
        }
    }

    /// Apply an input at time `now_ms`.
    ///
    /// Returns the new index when a transition starts. Inputs during the
    /// cooldown, below threshold, or pointing outside `[0, total - 1]` are
    /// no-ops.
    pub fn handle(&mut self, input: NavInput, now_ms: f64) -> Option<usize> {
        if self.is_animating(now_ms) {
            return None;
        }
        let target = self.target(input).filter(|&t| t < self.total)?;

        debug!(from = self.current, to = target, "section transition");
        self.current = target;
        self.busy_until = Some(now_ms + self.config.cooldown_ms);
        Some(target)
    }

    /// Depth placement of section `index` relative to the active one.
    pub fn depth(&self, index: usize) -> SectionDepth {
        SectionDepth::for_offset(index as i64 - self.current as i64, self.total)
    }
}

/// Where a section sits in the 3D stack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SectionDepth {
    /// translateZ in pixels
    pub z: f64,
    /// Uniform scale
    pub scale: f64,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Blur radius in pixels
    pub blur: f64,
    /// Stacking order
    pub z_index: i64,
    /// Only the active section receives pointer events
    pub interactive: bool,
}

impl SectionDepth {
    /// Placement for a section `offset` positions away from the active one.
    pub fn for_offset(offset: i64, total: usize) -> Self {
        let z_index = total as i64 - offset.abs();
        let o = offset as f64;
        match offset {
            o_ if o_ < 0 => Self {
                z: o * 2000.0,
                scale: 2.0,
                opacity: 0.0,
                blur: 0.0,
                z_index,
                interactive: false,
            },
            0 => Self {
                z: 0.0,
                scale: 1.0,
                opacity: 1.0,
                blur: 0.0,
                z_index,
                interactive: true,
            },
            _ => Self {
                z: o * -800.0,
                scale: (1.0 - o * 0.15).max(0.5),
                opacity: (1.0 - o * 0.5).max(0.0),
                blur: o * 2.0,
                z_index,
                interactive: false,
            },
        }
    }

    /// CSS `transform` value.
    pub fn transform(&self) -> String {
        format!("translateZ({}px) scale({})", self.z, self.scale)
    }

    /// CSS `filter` value.
    pub fn filter(&self) -> String {
        if self.blur > 0.0 {
            format!("blur({}px)", self.blur)
        } else {
            "none".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nav(total: usize) -> SectionNavigator {
        SectionNavigator::new(total, NavigatorConfig::default())
    }

    #[test]
    fn key_mapping() {
        assert_eq!(NavKey::from_key("PageDown"), Some(NavKey::Forward));
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Forward));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Back));
        assert_eq!(NavKey::from_key("Enter"), None);
    }

    #[test]
    fn moves_one_section_per_input() {
        let mut n = nav(4);
        assert_eq!(n.handle(NavInput::Wheel { delta_y: 120.0 }, 0.0), Some(1));
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 1000.0), Some(2));
        assert_eq!(
            n.handle(
                NavInput::Swipe {
                    start_y: 100.0,
                    end_y: 300.0
                },
                2000.0
            ),
            Some(1)
        );
    }

    #[test]
    fn cooldown_swallows_rapid_input() {
        let mut n = nav(5);
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 0.0), Some(1));
        assert!(n.is_animating(799.0));
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 799.0), None);
        assert_eq!(n.handle(NavInput::GoTo(4), 500.0), None);
        assert_eq!(n.current(), 1);
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 800.0), Some(2));
    }

    #[test]
    fn edges_are_no_ops() {
        let mut n = nav(2);
        assert_eq!(n.handle(NavInput::Key(NavKey::Back), 0.0), None);
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 0.0), Some(1));
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 5000.0), None);
        assert_eq!(n.handle(NavInput::GoTo(7), 5000.0), None);
        assert_eq!(n.current(), 1);
    }

    #[test]
    fn small_gestures_are_ignored() {
        let mut n = nav(3);
        assert_eq!(n.handle(NavInput::Wheel { delta_y: 1.0 }, 0.0), None);
        assert_eq!(
            n.handle(
                NavInput::Swipe {
                    start_y: 100.0,
                    end_y: 80.0
                },
                0.0
            ),
            None
        );
        assert!(!n.is_animating(0.0));
    }

    #[test]
    fn goto_jumps_and_ignores_current() {
        let mut n = nav(5);
        assert_eq!(n.handle(NavInput::GoTo(0), 0.0), None);
        assert_eq!(n.handle(NavInput::GoTo(3), 0.0), Some(3));
    }

    #[test]
    fn empty_navigator_never_moves() {
        let mut n = nav(0);
        assert_eq!(n.handle(NavInput::Key(NavKey::Forward), 0.0), None);
        assert_eq!(n.handle(NavInput::GoTo(0), 0.0), None);
    }

    #[test]
    fn depth_placement() {
        let mut n = nav(4);
        n.handle(NavInput::GoTo(1), 0.0);

        let behind = n.depth(0);
        assert_eq!((behind.z, behind.opacity, behind.scale), (-2000.0, 0.0, 2.0));

        let active = n.depth(1);
        assert!(active.interactive);
        assert_eq!(active.transform(), "translateZ(0px) scale(1)");
        assert_eq!(active.filter(), "none");
        assert_eq!(active.z_index, 4);

        let next = n.depth(2);
        assert_eq!(next.z, -800.0);
        assert_eq!(next.opacity, 0.5);
        assert!((next.scale - 0.85).abs() < 1e-12);
        assert_eq!(next.filter(), "blur(2px)");

        let far = SectionDepth::for_offset(6, 8);
        assert_eq!(far.opacity, 0.0);
        assert_eq!(far.scale, 0.5);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Wheel(f64),
        Swipe(f64, f64),
        Key(bool),
        GoTo(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-300.0f64..300.0).prop_map(Op::Wheel),
            (0.0f64..900.0, 0.0f64..900.0).prop_map(|(a, b)| Op::Swipe(a, b)),
            any::<bool>().prop_map(Op::Key),
            (0usize..20).prop_map(Op::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_range(
            total in 1usize..12,
            ops in prop::collection::vec((op(), 0.0f64..2000.0), 0..80),
        ) {
            let mut n = nav(total);
            let mut now = 0.0;
            for (op, dt) in ops {
                now += dt;
                let before = n.current();
                let busy = n.is_animating(now);
                let input = match op {
                    Op::Wheel(d) => NavInput::Wheel { delta_y: d },
                    Op::Swipe(a, b) => NavInput::Swipe { start_y: a, end_y: b },
                    Op::Key(fwd) => NavInput::Key(if fwd { NavKey::Forward } else { NavKey::Back }),
                    Op::GoTo(i) => NavInput::GoTo(i),
                };
                let moved = n.handle(input, now);
                prop_assert!(n.current() < total);
                if busy {
                    prop_assert_eq!(moved, None);
                    prop_assert_eq!(n.current(), before);
                }
                if !matches!(input, NavInput::GoTo(_)) {
                    prop_assert!(n.current().abs_diff(before) <= 1);
                }
            }
        }
    }
}
