//! Damped spring integrator for the card's entry motion
//!
//! Two independent channels are advanced with the same linear oscillator:
//! the vertical offset of the card root and its yaw rotation. Integration is
//! semi-implicit Euler (velocity first, then position).
//!
//! Constants are tuned offline. Near-zero mass or very large frame deltas can
//! make the integration diverge instead of converge; frames are expected to
//! stay within a plausible per-frame bound.

use std::f64::consts::PI;

/// Spring tuning, fixed at construction time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConstants {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub target_y: f64,
    pub target_rotation: f64,
    /// Threshold on both position error and velocity, per channel
    pub epsilon: f64,
}

impl Default for SpringConstants {
    fn default() -> Self {
        Self {
            mass: 2.5,
            stiffness: 90.0,
            damping: 22.0,
            target_y: 30.0,
            target_rotation: PI,
            epsilon: 0.01,
        }
    }
}

impl SpringConstants {
    /// Builder pattern: Set the oscillator mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Builder pattern: Set the spring stiffness
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Builder pattern: Set the damping coefficient
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder pattern: Set the resting vertical offset
    pub fn with_target_y(mut self, target_y: f64) -> Self {
        self.target_y = target_y;
        self
    }

    /// Builder pattern: Set the resting yaw in radians
    pub fn with_target_rotation(mut self, target_rotation: f64) -> Self {
        self.target_rotation = target_rotation;
        self
    }

    /// Builder pattern: Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Live state of both spring channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position_y: f64,
    pub velocity_y: f64,
    pub rotation_y: f64,
    pub velocity_rot: f64,
}

impl Default for SpringState {
    /// The card starts below its resting height, facing forward, at rest.
    fn default() -> Self {
        Self {
            position_y: -10.0,
            velocity_y: 0.0,
            rotation_y: 0.0,
            velocity_rot: 0.0,
        }
    }
}

impl SpringState {
    /// State pinned exactly onto the targets with zero velocity
    pub fn settled(constants: &SpringConstants) -> Self {
        Self {
            position_y: constants.target_y,
            velocity_y: 0.0,
            rotation_y: constants.target_rotation,
            velocity_rot: 0.0,
        }
    }

    /// Returns true once both channels are within `epsilon` of rest
    pub fn is_converged(&self, constants: &SpringConstants) -> bool {
        let eps = constants.epsilon;
        (self.position_y - constants.target_y).abs() < eps
            && (self.rotation_y - constants.target_rotation).abs() < eps
            && self.velocity_y.abs() < eps
            && self.velocity_rot.abs() < eps
    }
}

/// Advances one channel by `delta` seconds, returning `(position, velocity)`
fn step_channel(
    position: f64,
    velocity: f64,
    target: f64,
    constants: &SpringConstants,
    delta: f64,
) -> (f64, f64) {
    let displacement = position - target;
    let acceleration =
        (-constants.stiffness * displacement - constants.damping * velocity) / constants.mass;
    let velocity = velocity + acceleration * delta;
    (position + velocity * delta, velocity)
}

/// Advances both channels by `delta` seconds
pub fn step(state: SpringState, constants: &SpringConstants, delta: f64) -> SpringState {
    let (position_y, velocity_y) = step_channel(
        state.position_y,
        state.velocity_y,
        constants.target_y,
        constants,
        delta,
    );
    let (rotation_y, velocity_rot) = step_channel(
        state.rotation_y,
        state.velocity_rot,
        constants.target_rotation,
        constants,
        delta,
    );

    SpringState {
        position_y,
        velocity_y,
        rotation_y,
        velocity_rot,
    }
}
