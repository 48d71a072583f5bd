//! Built-in behaviours: first-person movement and pickup spin

use lilypad_math::Vec3;

use crate::component::{Behaviour, UpdateContext};
use crate::input::Key;
use crate::transform::Transform;

const PITCH_LIMIT: f32 = 89.0;

/// WASD + mouse-look controller driving the owning transform
///
/// Movement runs along the transform's basis vectors flattened onto
/// the ground plane; Space and Shift move straight up and down. Mouse
/// delta turns yaw and pitch, with pitch clamped short of vertical.
#[derive(Clone, Debug)]
pub struct FirstPersonController {
    pub move_speed: f32,
    pub look_speed: f32,
    pub vertical_speed: f32,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            look_speed: 0.1,
            vertical_speed: 5.0,
        }
    }
}

impl Behaviour for FirstPersonController {
    fn update(&mut self, transform: &mut Transform, ctx: &mut UpdateContext<'_>) {
        let (dx, dy) = ctx.input.mouse_delta;
        if dx != 0.0 || dy != 0.0 {
            transform.rotate(-dy * self.look_speed, -dx * self.look_speed, 0.0);
            let pitch = transform.rotation.x.clamp(-PITCH_LIMIT, PITCH_LIMIT);
            transform.set_rotation(Some(pitch), None, None);
        }

        let mut direction = Vec3::ZERO;
        let flat = |v: Vec3| Vec3::new(v.x, 0.0, v.z).normalized();
        if ctx.input.is_pressed(Key::W) {
            direction += flat(transform.forward());
        }
        if ctx.input.is_pressed(Key::S) {
            direction -= flat(transform.forward());
        }
        if ctx.input.is_pressed(Key::A) {
            direction += flat(transform.left());
        }
        if ctx.input.is_pressed(Key::D) {
            direction += flat(transform.right());
        }
        let step = direction.normalized() * (self.move_speed * ctx.dt);
        transform.translate(step.x, step.y, step.z);

        if ctx.input.is_pressed(Key::Space) {
            transform.translate(0.0, self.vertical_speed * ctx.dt, 0.0);
        }
        if ctx.input.is_pressed(Key::Shift) {
            transform.translate(0.0, -self.vertical_speed * ctx.dt, 0.0);
        }
    }

    fn boxed_clone(&self) -> Box<dyn Behaviour> {
        Box::new(self.clone())
    }
}

/// Collectible payload with the crown-spin idle animation
#[derive(Clone, Debug)]
pub struct PickupBehaviour {
    pub description: String,
    pub value: i32,
    /// Idle spin around Y in degrees per second
    pub spin_speed: f32,
}

impl PickupBehaviour {
    pub fn new(description: impl Into<String>, value: i32) -> Self {
        Self {
            description: description.into(),
            value,
            spin_speed: 90.0,
        }
    }
}

impl Behaviour for PickupBehaviour {
    fn update(&mut self, transform: &mut Transform, ctx: &mut UpdateContext<'_>) {
        transform.rotate(0.0, self.spin_speed * ctx.dt, 0.0);
    }

    fn boxed_clone(&self) -> Box<dyn Behaviour> {
        Box::new(self.clone())
    }
}
