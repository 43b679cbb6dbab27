use bevy::prelude::*;

#[derive(Component)]
pub struct HudRoot;

/// Crosshair hint line at the bottom centre.
#[derive(Component)]
pub struct HintText;

/// Contents of the held or targeted container.
#[derive(Component)]
pub struct ReadoutText;

#[derive(Component)]
pub struct NotificationText;
