//! Animation state machine.

/// Animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Idle - no run in progress, particles are not mutated
    #[default]
    Idle,
    /// Running - particles advance on every tick
    Running,
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationState::Running)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AnimationState::Idle)
    }
}

/// Notification returned by a tick that changed the render state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderNotification {
    /// Particles moved, the overlay must be repainted
    Redraw,
    /// The run reached its duration, the overlay should be hidden and ticking stopped
    Finished,
}
