//! Gameplay tunables loaded from `.tuning.ron` files.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
};

pub struct TuningAssetsPlugin;

impl Plugin for TuningAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<BarTuning>::new(&["tuning.ron"]))
            .register_type::<BarTuning>()
            .init_resource::<BarTuning>();
    }
}

/// Every number the mixing and interaction engines are tuned by.
///
/// Missing fields in the ron file fall back to [`BarTuning::default`].
#[derive(Asset, Resource, Reflect, Debug, Clone, PartialEq, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct BarTuning {
    /// Bottle and shaker pour speed in ml per second
    pub pour_rate: f32,
    /// Max bottle-to-container distance for a pour
    pub pour_distance: f32,
    /// Max distance for container-to-container (shaker) pours
    pub cross_pour_distance: f32,
    /// Minimum cosine between view forward and the direction to the target (~31.8°)
    pub aim_cosine: f32,
    /// Targeting ray length
    pub interact_distance: f32,
    pub glass_capacity: f32,
    pub shaker_capacity: f32,
    /// Seconds of shaking before each tick re-blends the color
    pub shake_mix_threshold: f32,
    /// Seconds the animated drink takes
    pub drink_duration: f32,
    pub throw_force: f32,
    /// Held object offset in viewer space (x right, y up, -z forward)
    pub hold_offset: [f32; 3],
    /// Per-frame slerp factor toward the viewer's facing
    pub hold_slerp: f32,
    /// Default distance for `are_near` proximity checks
    pub near_distance: f32,
}

impl Default for BarTuning {
    fn default() -> Self {
        Self {
            pour_rate: 50.0,
            pour_distance: 1.5,
            cross_pour_distance: 2.5,
            aim_cosine: 0.85,
            interact_distance: 3.0,
            glass_capacity: 300.0,
            shaker_capacity: 500.0,
            shake_mix_threshold: 2.0,
            drink_duration: 1.0,
            throw_force: 5.0,
            hold_offset: [0.3, -0.3, -0.8],
            hold_slerp: 0.2,
            near_distance: 0.5,
        }
    }
}

impl BarTuning {
    pub fn hold_offset(&self) -> Vec3 {
        Vec3::from_array(self.hold_offset)
    }
}
