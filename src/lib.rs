pub mod camera;
pub mod cli;
pub mod content;
pub mod controls;
pub mod face;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod types;

pub use camera::OrbitCamera;
pub use content::Presenter;
pub use controls::OrbitControls;
pub use face::{classify, facing_faces, Face};
pub use renderer::SceneRenderer;
