/// Identifies one arming of a [`TimerSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// A single cancelable one-shot timer, tracked by generation.
///
/// The delay itself runs elsewhere (an abortable sleep task). When it fires it
/// hands its token back; only the token of the latest arming is honoured, so
/// a timer that was canceled or re-armed can never act on stale state.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        self.armed = true;
        TimerToken(self.generation)
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consume the firing. Returns false for stale or canceled tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed && token.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_once() {
        let mut slot = TimerSlot::default();
        let t = slot.arm();
        assert!(slot.is_armed());
        assert!(slot.fire(t));
        assert!(!slot.fire(t));
        assert!(!slot.is_armed());
    }

    #[test]
    fn test_rearm_invalidates_previous() {
        let mut slot = TimerSlot::default();
        let old = slot.arm();
        let new = slot.arm();
        assert!(!slot.fire(old));
        assert!(slot.fire(new));
    }

    #[test]
    fn test_cancel() {
        let mut slot = TimerSlot::default();
        let t = slot.arm();
        slot.cancel();
        assert!(!slot.fire(t));
    }
}
