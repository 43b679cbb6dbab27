use {
    bevy::prelude::*,
    cocktail_events::ShakeOutcome,
    cocktail_resources::ContainerRegistry,
    std::collections::HashMap,
};

/// Rotation offsets for the shaker mesh at shake time `t`.
pub fn wobble_at(t: f32) -> (f32, f32) {
    let z = (t * 20.0).sin() * 0.05;
    let x = (t * 15.0).sin() * 0.03;
    (x, z)
}

/// Accumulated shake time per shaker.
#[derive(Resource, Debug)]
pub struct ShakeEngine {
    /// Seconds after which every tick re-blends the color
    pub mix_threshold: f32,
    shake_times: HashMap<Entity, f32>,
}

impl Default for ShakeEngine {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl ShakeEngine {
    pub fn new(mix_threshold: f32) -> Self {
        Self {
            mix_threshold,
            shake_times: HashMap::new(),
        }
    }

    pub fn shake_time(&self, shaker: Entity) -> f32 {
        self.shake_times.get(&shaker).copied().unwrap_or(0.0)
    }

    pub fn is_shaking(&self, shaker: Entity) -> bool {
        self.shake_times.contains_key(&shaker)
    }

    /// Advances the shake by `dt`. Empty or unknown shakers report `Empty`
    /// and do not accumulate time.
    ///
    /// Past the threshold the color is recomputed each tick. Composition
    /// never changes.
    pub fn shake(&mut self, registry: &mut ContainerRegistry, shaker: Entity, dt: f32) -> ShakeOutcome {
        let Some(contents) = registry.get_mut(shaker) else {
            return ShakeOutcome::Empty;
        };
        if contents.is_empty() {
            return ShakeOutcome::Empty;
        }

        let time = self.shake_times.entry(shaker).or_insert(0.0);
        *time += dt;
        let (wobble_x, wobble_z) = wobble_at(*time);

        let enhanced = *time > self.mix_threshold;
        if enhanced {
            contents.recompute_color();
        }
        ShakeOutcome::Shaking {
            wobble_x,
            wobble_z,
            enhanced,
        }
    }

    /// Resets the shake time. Returns whether the shaker had been shaking.
    pub fn stop_shaking(&mut self, shaker: Entity) -> bool {
        self.shake_times.remove(&shaker).is_some()
    }
}
