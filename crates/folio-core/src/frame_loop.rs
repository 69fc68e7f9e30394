//! Scheduling state for a self-rescheduling animation-frame callback.
//!
//! The callback itself lives in the web crate; this type decides whether it
//! runs and whether a new frame must be requested, so it can be driven from
//! tests without a frame clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    /// Do the frame's work and request the next one.
    Run,
    /// Skip the work and do not reschedule.
    Suspend,
}

#[derive(Clone, Debug)]
pub struct LoopGate {
    scheduled: bool,
    visible: bool,
    stopped: bool,
}

impl Default for LoopGate {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LoopGate {
    pub fn new(visible: bool) -> Self {
        Self {
            scheduled: false,
            visible,
            stopped: false,
        }
    }

    /// Returns true when the caller must request the first frame.
    pub fn start(&mut self) -> bool {
        self.stopped = false;
        if self.scheduled || !self.visible {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Stop until the next `start`; the pending frame (if any) suspends.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Checked at the top of every frame.
    pub fn on_frame(&mut self) -> FrameAction {
        if self.stopped || !self.visible {
            self.scheduled = false;
            return FrameAction::Suspend;
        }
        FrameAction::Run
    }

    /// Record a visibility change. Returns true exactly when a suspended loop
    /// must be resumed by requesting one frame.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.visible = visible;
        if !visible || self.stopped || self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }
}
