//! Scene-wide constants
//!
//! Single source of truth for the numbers shared by the particle pools,
//! the emitter presets and the scene animation.

/// Particle pool sizing and lifecycle
pub mod particles {
    /// Slots per emitter pool
    pub const MAX_PARTICLES: usize = 100_000;

    /// Camera distance written into dead slots. Below every valid squared
    /// distance, so dead particles sort last in a descending sort.
    pub const DEAD_DISTANCE_SENTINEL: f32 = -1.0;

    /// Remaining life written into freshly allocated (never used) slots
    pub const DEAD_LIFE: f32 = -1.0;

    /// Spawn budget is capped at this many seconds per frame (60 fps)
    pub const MAX_FRAME_DELTA: f32 = 0.016;
}

/// Physics constants
pub mod physics {
    /// Gravity acceleration in world units per second squared
    pub const GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

    /// Half-step factor applied to gravity during velocity integration
    pub const GRAVITY_HALF_STEP: f32 = 0.5;
}

/// Smoke emitter defaults
pub mod smoke {
    pub const ORIGIN: [f32; 3] = [0.0, 0.0, -20.0];
    pub const DIRECTION: [f32; 3] = [0.0, 10.0, 0.0];
    pub const SPREAD: f32 = 1.5;
    /// Ten particles per millisecond
    pub const RATE_PER_SECOND: f32 = 10_000.0;
    pub const LIFETIME: f32 = 5.0;
    pub const ALPHA_MAX: u8 = 85;
    pub const SIZE_MIN: f32 = 0.1;
    pub const SIZE_MAX: f32 = 0.6;
}

/// Rain emitter defaults
pub mod rain {
    pub const ORIGIN: [f32; 3] = [0.0, 6.0, 0.0];
    pub const DIRECTION: [f32; 3] = [0.0, -4.0, 0.0];
    pub const SPREAD: f32 = 1.2;
    pub const RATE_PER_SECOND: f32 = 2_000.0;
    pub const LIFETIME: f32 = 2.0;
    pub const SIZE_MIN: f32 = 0.02;
    pub const SIZE_MAX: f32 = 0.06;

    /// Car roof collision volume, spanning (-0.8, 0.3, -0.5)..(0.8, 0.6, 0.5)
    pub const ROOF_CENTER: [f32; 3] = [0.0, 0.45, 0.0];
    pub const ROOF_HALF_EXTENTS: [f32; 3] = [0.8, 0.15, 0.5];

    /// Lifetime of the splash spawned by a roof hit
    pub const SPLASH_LIFETIME: f32 = 0.25;
}

/// Splash emitter defaults
pub mod splash {
    pub const SIZE_MIN: f32 = 0.03;
    pub const SIZE_MAX: f32 = 0.08;
}

/// Car and sun animation
pub mod animation {
    /// Rotation applied every frame, in degrees
    pub const STEP_DEGREES: f32 = -1.0;

    pub const BACK_WHEEL_PIVOT: [f32; 3] = [-0.6, -0.4, 0.0];
    pub const FRONT_WHEEL_PIVOT: [f32; 3] = [0.6, -0.4, 0.0];
    pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 1.0];
}

/// Camera defaults
pub mod camera {
    pub const POSITION: [f32; 3] = [0.0, 0.0, 5.0];
    pub const HORIZONTAL_ANGLE: f32 = std::f32::consts::PI;
    pub const VERTICAL_ANGLE: f32 = 0.0;
    pub const FOV_DEGREES: f32 = 45.0;
    pub const ASPECT_RATIO: f32 = 4.0 / 3.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 100.0;
    pub const MOVEMENT_SPEED: f32 = 3.0;
    pub const ROTATION_SENSITIVITY: f32 = 0.005;
}
