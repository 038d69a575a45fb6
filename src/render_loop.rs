/// Outcome of one animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePlan {
    pub draw: bool,
    pub schedule_next: bool,
}

/// Coalesces redraw requests into at most one scheduled frame. Any number of
/// `request_render` calls between frames collapse into a single redraw;
/// continuous mode re-arms every frame unconditionally for animation
/// playback.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderScheduler {
    dirty: bool,
    frame_pending: bool,
    continuous: bool,
}

impl RenderScheduler {
    pub fn new(continuous: bool) -> Self {
        Self { dirty: false, frame_pending: false, continuous }
    }

    /// Returns whether the host must schedule a frame callback now. False
    /// while one is already pending.
    pub fn request_render(&mut self) -> bool {
        self.dirty = true;
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    /// Called at the top of the host's frame callback.
    pub fn begin_frame(&mut self) -> FramePlan {
        let draw = self.dirty || self.continuous;
        self.dirty = false;
        self.frame_pending = self.continuous;
        FramePlan { draw, schedule_next: self.continuous }
    }

    /// Returns whether the host must schedule a frame to start the
    /// continuous loop.
    pub fn set_continuous(&mut self, continuous: bool) -> bool {
        self.continuous = continuous;
        if continuous && !self.frame_pending {
            self.frame_pending = true;
            true
        } else {
            false
        }
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
