use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 10.0;
pub const INITIAL_DISTANCE: f32 = 2.0;

/// Perspective camera orbiting a fixed target.
///
/// Yaw 0 / pitch 0 places the eye on +Z looking toward -Z, the initial
/// view at startup.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    pub aspect: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: INITIAL_DISTANCE,
            target: Vec3::ZERO,
            aspect,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + offset * self.distance
    }

    /// Unit vector from the eye toward the orbit target
    pub fn world_direction(&self) -> Vec3 {
        (self.target - self.eye()).normalize()
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            self.aspect,
            NEAR_PLANE,
            FAR_PLANE,
        );
        proj * view
    }
}
