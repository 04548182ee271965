//! Animation clock and auto-rotation
//!
//! The clock only advances through [`Animation4D::update`]; rotation values
//! are pure functions of the accumulated time.

use std::f32::consts::TAU;

use bitflags::bitflags;
use hyper4d_math::RotationAngles;

bitflags! {
    /// What the animation clock is currently doing
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AnimationFlags: u8 {
        /// Time advances at `speed`
        const PLAYING = 1 << 0;
        /// Time advances at `speed * rotation_speed` and drives the rotation
        const AUTO_ROTATE = 1 << 1;
    }
}

/// Animation state: flags, rates and accumulated time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation4D {
    flags: AnimationFlags,
    speed: f32,
    rotation_speed: f32,
    time: f32,
}

impl Default for Animation4D {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation4D {
    pub const DEFAULT_SPEED: f32 = 1.0;
    pub const DEFAULT_ROTATION_SPEED: f32 = 0.03;

    /// Stopped clock at `t = 0`
    pub fn new() -> Self {
        Self {
            flags: AnimationFlags::empty(),
            speed: Self::DEFAULT_SPEED,
            rotation_speed: Self::DEFAULT_ROTATION_SPEED,
            time: 0.0,
        }
    }

    pub fn start(&mut self) {
        self.flags.insert(AnimationFlags::PLAYING);
    }

    pub fn stop(&mut self) {
        self.flags.remove(AnimationFlags::PLAYING);
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.flags.contains(AnimationFlags::PLAYING)
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.flags.set(AnimationFlags::AUTO_ROTATE, enabled);
    }

    /// Flip auto-rotation, returning the new state
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.flags.toggle(AnimationFlags::AUTO_ROTATE);
        self.is_auto_rotating()
    }

    #[inline]
    pub fn is_auto_rotating(&self) -> bool {
        self.flags.contains(AnimationFlags::AUTO_ROTATE)
    }

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }

    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    #[inline]
    pub fn flags(&self) -> AnimationFlags {
        self.flags
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Rewind the clock without touching flags or rates
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Advance the clock by `dt` seconds
    ///
    /// Both contributions add when playing and auto-rotating at once.
    pub fn update(&mut self, dt: f32) {
        if self.is_playing() {
            self.time += dt * self.speed;
        }
        if self.is_auto_rotating() {
            self.time += dt * self.speed * self.rotation_speed;
        }
    }

    /// Oscillating values in `[-0.5, 0.5]`, one per rotation slider
    pub fn rotation_values(&self) -> RotationAngles {
        let t = self.time;
        RotationAngles::new(
            t.sin() * 0.5,
            (t * 0.8).cos() * 0.5,
            (t * 1.2).sin() * 0.5,
            (t * 0.9).cos() * 0.5,
        )
    }

    /// [`rotation_values`](Self::rotation_values) as radians (`× 2π`)
    pub fn auto_rotation_angles(&self) -> RotationAngles {
        let v = self.rotation_values();
        RotationAngles::new(v.x * TAU, v.y * TAU, v.z * TAU, v.w * TAU)
    }

    /// Rotation values as slider positions in degrees, `[0, 360)`
    pub fn slider_degrees(&self) -> [f32; 4] {
        let v = self.rotation_values();
        [v.x, v.y, v.z, v.w].map(|c| ((c + 0.5) * 360.0).rem_euclid(360.0))
    }
}
