//! Pure pagination state machine behind the full-page scroller.
//!
//! Five input sources (wheel, touch, keyboard, hash changes, nav commands)
//! funnel into one `current` index. Incremental steps are debounced by a
//! cooldown window measured from the last *accepted* step; rejected requests
//! are dropped, never queued. Absolute jumps and viewport observations are
//! not rate-limited. The clock is injected so none of this touches the
//! browser.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

pub struct PageController {
    page_count: usize,
    current: usize,
    last_accepted_ms: Option<f64>,
    cooldown_ms: f64,
}

impl PageController {
    pub fn new(page_count: usize, initial: usize) -> Self {
        let mut controller = Self {
            page_count,
            current: 0,
            last_accepted_ms: None,
            cooldown_ms: config::PAGE_COOLDOWN_MS,
        };
        controller.current = controller.clamp(initial);
        controller
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    fn clamp(&self, index: usize) -> usize {
        if self.page_count == 0 {
            0
        } else {
            index.min(self.page_count - 1)
        }
    }

    /// Incremental step from a gesture. Returns the new page when the step
    /// is accepted, `None` when it is gated (suspension, cooldown) or
    /// absorbed at a boundary. Boundary no-ops do not restart the cooldown.
    pub fn request_step(
        &mut self,
        direction: Direction,
        now_ms: f64,
        suspended: bool,
    ) -> Option<usize> {
        if suspended || self.page_count == 0 {
            return None;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.cooldown_ms {
                return None;
            }
        }
        let target = match direction {
            Direction::Next => {
                if self.current + 1 >= self.page_count {
                    return None;
                }
                self.current + 1
            }
            Direction::Previous => {
                if self.current == 0 {
                    return None;
                }
                self.current - 1
            }
        };
        self.current = target;
        self.last_accepted_ms = Some(now_ms);
        Some(target)
    }

    /// Absolute jump (nav bar, dots, hash change). Clamped, never
    /// rate-limited, and leaves the cooldown window untouched.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.current = self.clamp(index);
        self.current
    }

    /// Native-mode viewport observation. Observations are not gestures, so
    /// they bypass the cooldown the same way jumps do.
    pub fn observe_active(&mut self, index: usize) -> usize {
        self.jump_to(index)
    }

    /// Re-sync from the owning component when the rendered page state moved
    /// through a path the controller did not see.
    pub fn set_current(&mut self, index: usize) {
        self.current = self.clamp(index);
    }
}

/// A wheel event only counts as navigation intent past the jitter threshold.
pub fn wheel_direction(delta_y: f64) -> Option<Direction> {
    if delta_y.abs() <= config::WHEEL_DELTA_THRESHOLD {
        return None;
    }
    Some(if delta_y > 0.0 {
        Direction::Next
    } else {
        Direction::Previous
    })
}

/// Measured at touch-end: positive `start - end` means the finger moved up,
/// pulling the next page into view.
pub fn swipe_direction(start_y: f64, end_y: f64) -> Option<Direction> {
    let travel = start_y - end_y;
    if travel.abs() <= config::TOUCH_SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if travel > 0.0 {
        Direction::Next
    } else {
        Direction::Previous
    })
}

pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" => Some(Direction::Next),
        "ArrowUp" => Some(Direction::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_clamping() {
        let mut c = PageController::new(5, 0);
        assert_eq!(c.request_step(Direction::Previous, 0.0, false), None);
        assert_eq!(c.current_page(), 0);

        let mut c = PageController::new(5, 4);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), None);
        assert_eq!(c.current_page(), 4);
    }

    #[test]
    fn cooldown_drops_rapid_steps() {
        let mut c = PageController::new(5, 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), Some(1));
        assert_eq!(c.request_step(Direction::Next, 100.0, false), None);
        assert_eq!(c.current_page(), 1);

        let mut c = PageController::new(5, 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), Some(1));
        assert_eq!(c.request_step(Direction::Next, 900.0, false), Some(2));
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn boundary_noop_does_not_restart_cooldown() {
        let mut c = PageController::new(2, 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), Some(1));
        // Absorbed at the last page, 900 ms later.
        assert_eq!(c.request_step(Direction::Next, 900.0, false), None);
        // A step back 100 ms after the no-op is still past the cooldown of
        // the last accepted step, so it goes through.
        assert_eq!(c.request_step(Direction::Previous, 1000.0, false), Some(0));
    }

    #[test]
    fn suspension_gates_steps() {
        let mut c = PageController::new(5, 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, true), None);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), Some(1));
    }

    #[test]
    fn jump_ignores_suspension_and_cooldown() {
        let mut c = PageController::new(5, 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), Some(1));
        // Within the cooldown window, and with a modal notionally open,
        // absolute navigation still lands.
        assert_eq!(c.jump_to(4), 4);
        assert_eq!(c.jump_to(4), 4);
        assert_eq!(c.current_page(), 4);
    }

    #[test]
    fn jump_clamps_out_of_range() {
        let mut c = PageController::new(5, 0);
        assert_eq!(c.jump_to(99), 4);
        assert_eq!(c.jump_to(0), 0);
    }

    #[test]
    fn zero_pages_is_inert() {
        let mut c = PageController::new(0, 3);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.request_step(Direction::Next, 0.0, false), None);
        assert_eq!(c.jump_to(7), 0);
    }

    #[test]
    fn wheel_noise_is_filtered() {
        assert_eq!(wheel_direction(5.0), None);
        assert_eq!(wheel_direction(-5.0), None);
        assert_eq!(wheel_direction(25.0), Some(Direction::Next));
        assert_eq!(wheel_direction(-25.0), Some(Direction::Previous));
    }

    #[test]
    fn swipe_threshold_and_sign() {
        assert_eq!(swipe_direction(300.0, 250.0), None);
        assert_eq!(swipe_direction(300.0, 150.0), Some(Direction::Next));
        assert_eq!(swipe_direction(150.0, 300.0), Some(Direction::Previous));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(key_direction("ArrowDown"), Some(Direction::Next));
        assert_eq!(key_direction("ArrowUp"), Some(Direction::Previous));
        assert_eq!(key_direction("PageDown"), None);
        assert_eq!(key_direction("a"), None);
    }

    #[test]
    fn end_to_end_scenario() {
        // Start at page 0, N=5, paged mode, no suspension.
        let mut c = PageController::new(5, 0);

        // wheel(deltaY=30) -> page 1
        let dir = wheel_direction(30.0).unwrap();
        assert_eq!(c.request_step(dir, 0.0, false), Some(1));

        // wait 900ms; touch-swipe of 150px -> page 2
        let dir = swipe_direction(500.0, 350.0).unwrap();
        assert_eq!(c.request_step(dir, 900.0, false), Some(2));

        // nav command {index: 4} -> page 4, regardless of elapsed time
        assert_eq!(c.jump_to(4), 4);

        // browser back to "#hero" -> page 0
        assert_eq!(c.jump_to(0), 0);
        assert_eq!(c.current_page(), 0);
    }
}
