/// Alpha given to every vertex, OBJ vertex colors only carry RGB
pub const OPAQUE: f64 = 1.0;

/// A vertex as read from a colored OBJ file: its position and an RGBA colour
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColoredVertex {
    pub position: [f64; 3],
    pub colour: [f64; 4],
}
impl ColoredVertex {
    /// Builds a vertex from the six values of a `v x y z r g b` record
    pub fn new(position: [f64; 3], rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb;
        Self {
            position,
            colour: [r, g, b, OPAQUE],
        }
    }
}
