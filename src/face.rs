use glam::Vec3;

/// Component magnitude at which a view direction counts as facing an
/// axis. Below it is a dead zone where the previous content persists.
pub const FACE_BAND_LOW: f32 = 0.8;

/// The six canonical viewing directions of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +Y
    Up,
    /// -Y
    Down,
    /// +X
    Right,
    /// -X
    Left,
    /// +Z
    Front,
    /// -Z (initial view)
    Back,
}

/// Fixed evaluation order. Overlapping matches near corners are all
/// applied in this order, so the last matching face wins; content
/// selection depends on this ordering and it must not be rearranged.
pub const SWEEP_ORDER: [Face; 6] = [
    Face::Up,
    Face::Down,
    Face::Right,
    Face::Left,
    Face::Front,
    Face::Back,
];

impl Face {
    /// Signed axis component of `dir` this face watches
    fn component(self, dir: Vec3) -> f32 {
        match self {
            Face::Up | Face::Down => dir.y,
            Face::Right | Face::Left => dir.x,
            Face::Front | Face::Back => dir.z,
        }
    }

    const fn is_positive(self) -> bool {
        matches!(self, Face::Up | Face::Right | Face::Front)
    }

    /// Whether `dir` falls inside this face's band.
    ///
    /// The two bounds are combined with a non-short-circuit `&`,
    /// which has the same truth table as `&&` for bools.
    pub fn is_facing(self, dir: Vec3) -> bool {
        let c = self.component(dir);
        if self.is_positive() {
            (c >= FACE_BAND_LOW) & (c <= 1.0)
        } else {
            (c <= -FACE_BAND_LOW) & (c >= -1.0)
        }
    }
}

/// All faces `dir` is confidently looking toward, in sweep order
pub fn facing_faces(dir: Vec3) -> impl Iterator<Item = Face> {
    SWEEP_ORDER.into_iter().filter(move |face| face.is_facing(dir))
}

/// The face whose content ends up displayed for `dir`, if any.
/// With overlapping bands this is the last match in sweep order.
pub fn classify(dir: Vec3) -> Option<Face> {
    facing_faces(dir).last()
}
