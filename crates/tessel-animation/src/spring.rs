//! Damped spring driven by frame timestamps.

const NANOS_PER_SECOND: f32 = 1_000_000_000.0;
/// Integration step; long frames are split into steps of at most this size.
const TIMESTEP_SECONDS: f32 = 0.016;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 is critically damped; lower values bounce.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold (units per second) to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold (units) to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Spring used to snap a header fully open or closed.
    pub fn header_snap() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 228.0,
            velocity_threshold: 1.0,
            position_threshold: 0.5,
        }
    }
}

/// A one-dimensional spring from a start value to a target value.
///
/// Position and velocity are integrated with semi-implicit Euler over fixed
/// sub-steps. The spring is finished once both velocity and displacement are
/// under the `SpringSpec` thresholds; at that point the value snaps to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimation {
    spec: SpringSpec,
    value: f32,
    target: f32,
    velocity: f32,
    last_frame_nanos: Option<u64>,
    finished: bool,
}

impl SpringAnimation {
    pub fn new(start: f32, target: f32, spec: SpringSpec) -> Self {
        Self::with_velocity(start, target, 0.0, spec)
    }

    pub fn with_velocity(start: f32, target: f32, velocity: f32, spec: SpringSpec) -> Self {
        let mut animation = Self {
            spec,
            value: start,
            target,
            velocity,
            last_frame_nanos: None,
            finished: false,
        };
        animation.check_finished();
        animation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the spring to `frame_time_nanos` and returns the new value.
    ///
    /// The first call only records the start time.
    pub fn advance(&mut self, frame_time_nanos: u64) -> f32 {
        if self.finished {
            return self.value;
        }
        let Some(last) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return self.value;
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / NANOS_PER_SECOND;
        self.step(dt);
        self.value
    }

    /// Integrates the spring over `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if self.finished || dt <= 0.0 {
            return;
        }
        let stiffness = self.spec.stiffness;
        let damping = 2.0 * self.spec.damping_ratio * stiffness.sqrt();

        let mut elapsed = 0.0f32;
        while elapsed < dt {
            let step = TIMESTEP_SECONDS.min(dt - elapsed);
            // F = -k * displacement - c * velocity
            let displacement = self.value - self.target;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.value += self.velocity * step;
            elapsed += step;
        }
        self.check_finished();
    }

    fn check_finished(&mut self) {
        let at_rest = self.velocity.abs() < self.spec.velocity_threshold;
        let near_target = (self.value - self.target).abs() < self.spec.position_threshold;
        if at_rest && near_target {
            log::trace!("spring settled at {}", self.target);
            self.value = self.target;
            self.velocity = 0.0;
            self.finished = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
