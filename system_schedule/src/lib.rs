use bevy::prelude::*;

/// Per-frame ordering for the bar. Chained in `Update` by the core plugin.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum BarSchedule {
    /// Resolve what the viewer is aiming at.
    Targeting,
    /// Turn player input into requests.
    ReadInput,
    /// Pour, shake, drink and hold transitions.
    Mixing,
    /// Time-driven follow-ups: drink animation and thrown bodies.
    Animation,
    /// Held-object pose, HUD text and notifications.
    Presentation,
}
