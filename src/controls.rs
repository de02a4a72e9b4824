use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::OrbitCamera;

pub const DAMPING_FACTOR: f32 = 0.03;
pub const MIN_DISTANCE: f32 = 0.3;
pub const MAX_DISTANCE: f32 = 5.0;

const ROTATE_SENSITIVITY: f32 = 0.01;
const ZOOM_SENSITIVITY: f32 = 0.1;
const PIXEL_SCROLL_SCALE: f32 = 1.0 / 40.0;
// Keep pitch short of the poles so the orbit never flips
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

/// Orbit-style pointer controls around the camera target.
///
/// Input moves goal angles/distance; `update` advances the camera a
/// damped fraction of the way each frame. Unhandled input is a no-op.
pub struct OrbitControls {
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
    dragging: bool,
    last_cursor: Option<(f32, f32)>,
}

impl OrbitControls {
    pub fn new(camera: &OrbitCamera) -> Self {
        Self {
            goal_yaw: camera.yaw,
            goal_pitch: camera.pitch,
            goal_distance: camera.distance,
            dragging: false,
            last_cursor: None,
        }
    }

    /// Feed a window event into the controller state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = *state == ElementState::Pressed;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x as f32, position.y as f32);
                if self.dragging {
                    if let Some((lx, ly)) = self.last_cursor {
                        self.rotate(pos.0 - lx, pos.1 - ly);
                    }
                }
                self.last_cursor = Some(pos);
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
                };
                self.zoom(scroll);
            }
            _ => {}
        }
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.goal_yaw += delta_x * ROTATE_SENSITIVITY;
        self.goal_pitch =
            (self.goal_pitch + delta_y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.goal_distance = (self.goal_distance * (1.0 - scroll * ZOOM_SENSITIVITY))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advance the camera a damped fraction toward the goal state.
    /// Called once per rendered frame.
    pub fn update(&mut self, camera: &mut OrbitCamera) {
        camera.yaw += (self.goal_yaw - camera.yaw) * DAMPING_FACTOR;
        camera.pitch += (self.goal_pitch - camera.pitch) * DAMPING_FACTOR;
        camera.distance += (self.goal_distance - camera.distance) * DAMPING_FACTOR;
        camera.distance = camera.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn goal_distance(&self) -> f32 {
        self.goal_distance
    }
}
