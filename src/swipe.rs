use iced::Point;

use crate::sections::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// |dx| must exceed `ratio * |dy|`.
    pub ratio: f32,
    /// |dx| must exceed this many logical pixels at release.
    pub min_distance: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self { ratio: 1.5, min_distance: 50.0 }
    }
}

/// What the host should do with the move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The drag is horizontal; scrolling and selection should not react.
    SuppressDefault,
    Passthrough,
}

/// Turns one touch sequence into at most one navigation command.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    start: Option<Point>,
    is_swiping: bool,
    thresholds: SwipeThresholds,
}

impl SwipeRecognizer {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self { start: None, is_swiping: false, thresholds }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    #[cfg(test)]
    pub fn is_swiping(&self) -> bool {
        self.is_swiping
    }

    pub fn touch_start(&mut self, at: Point) {
        self.start = Some(at);
        self.is_swiping = false;
    }

    pub fn touch_move(&mut self, at: Point) -> MoveOutcome {
        let Some((dx, dy)) = self.delta(at) else {
            return MoveOutcome::Passthrough;
        };
        if dx.abs() > dy.abs() * self.thresholds.ratio {
            self.is_swiping = true;
            MoveOutcome::SuppressDefault
        } else {
            MoveOutcome::Passthrough
        }
    }

    /// Ends the sequence. The state is cleared whether or not a swipe fired.
    pub fn touch_end(&mut self, at: Point) -> Option<Direction> {
        let (dx, dy) = self.delta(at)?;
        // dy == 0 yields +inf and passes; 0/0 is NaN and fails.
        let horizontal_ratio = dx.abs() / dy.abs();
        let fired = self.is_swiping
            && horizontal_ratio > self.thresholds.ratio
            && dx.abs() > self.thresholds.min_distance;

        self.cancel();

        if !fired {
            return None;
        }
        // Positive dx: finger moved left, content advances.
        Some(if dx > 0.0 { Direction::Next } else { Direction::Previous })
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.is_swiping = false;
    }

    /// (start - current) on both axes.
    fn delta(&self, at: Point) -> Option<(f32, f32)> {
        self.start.map(|s| (s.x - at.x, s.y - at.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> SwipeRecognizer {
        SwipeRecognizer::new(SwipeThresholds::default())
    }

    #[test]
    fn test_left_swipe_goes_next() {
        let mut r = recognizer();
        r.touch_start(Point::new(100.0, 100.0));
        assert_eq!(r.touch_move(Point::new(40.0, 102.0)), MoveOutcome::SuppressDefault);
        assert!(r.is_swiping());
        assert_eq!(r.touch_end(Point::new(40.0, 102.0)), Some(Direction::Next));
        assert!(!r.is_active());
        assert!(!r.is_swiping());
    }

    #[test]
    fn test_right_swipe_goes_previous() {
        let mut r = recognizer();
        r.touch_start(Point::new(40.0, 100.0));
        r.touch_move(Point::new(120.0, 100.0));
        assert_eq!(r.touch_end(Point::new(120.0, 100.0)), Some(Direction::Previous));
    }

    #[test]
    fn test_vertical_drag_is_ignored() {
        let mut r = recognizer();
        r.touch_start(Point::new(100.0, 100.0));
        assert_eq!(r.touch_move(Point::new(100.0, 130.0)), MoveOutcome::Passthrough);
        assert_eq!(r.touch_end(Point::new(100.0, 130.0)), None);
        assert!(!r.is_active());
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut r = recognizer();
        r.touch_start(Point::new(100.0, 100.0));
        r.touch_move(Point::new(70.0, 100.0));
        assert!(r.is_swiping());
        assert_eq!(r.touch_end(Point::new(70.0, 100.0)), None);
    }

    #[test]
    fn test_end_without_horizontal_move_is_ignored() {
        // Long horizontal release, but no move ever qualified.
        let mut r = recognizer();
        r.touch_start(Point::new(100.0, 100.0));
        assert_eq!(r.touch_end(Point::new(20.0, 100.0)), None);
    }

    #[test]
    fn test_no_sequence_is_noop() {
        let mut r = recognizer();
        assert_eq!(r.touch_move(Point::new(0.0, 0.0)), MoveOutcome::Passthrough);
        assert!(!r.is_swiping());
        assert_eq!(r.touch_end(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_touch_start_resets_swiping() {
        let mut r = recognizer();
        r.touch_start(Point::new(100.0, 100.0));
        r.touch_move(Point::new(0.0, 100.0));
        assert!(r.is_swiping());
        r.touch_start(Point::new(50.0, 50.0));
        assert!(!r.is_swiping());
        assert!(r.is_active());
    }

    #[test]
    fn test_start_on_window_edge_still_counts() {
        let mut r = recognizer();
        r.touch_start(Point::new(0.0, 100.0));
        assert_eq!(r.touch_move(Point::new(70.0, 102.0)), MoveOutcome::SuppressDefault);
        assert_eq!(r.touch_end(Point::new(70.0, 102.0)), Some(Direction::Previous));

        r.touch_start(Point::new(100.0, 0.0));
        r.touch_move(Point::new(30.0, 1.0));
        assert_eq!(r.touch_end(Point::new(30.0, 1.0)), Some(Direction::Next));
    }

    #[test]
    fn test_zero_delta_release() {
        let mut r = recognizer();
        r.touch_start(Point::new(10.0, 10.0));
        assert_eq!(r.touch_end(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut r = SwipeRecognizer::new(SwipeThresholds { ratio: 3.0, min_distance: 20.0 });
        r.touch_start(Point::new(100.0, 100.0));
        // 30 / 12 = 2.5, below the ratio
        assert_eq!(r.touch_move(Point::new(70.0, 112.0)), MoveOutcome::Passthrough);
        assert_eq!(r.touch_end(Point::new(70.0, 112.0)), None);

        r.touch_start(Point::new(100.0, 100.0));
        r.touch_move(Point::new(70.0, 105.0));
        assert_eq!(r.touch_end(Point::new(70.0, 105.0)), Some(Direction::Next));
    }
}
