use egui::Pos2;

/// The brush shapes a user can paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushShape {
    Circle,
    Square,
    Star,
}

impl BrushShape {
    /// All shapes, in the order they appear in the shape panel.
    pub const ALL: [BrushShape; 3] = [BrushShape::Circle, BrushShape::Square, BrushShape::Star];

    pub fn from_index(index: usize) -> Option<BrushShape> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            BrushShape::Circle => 0,
            BrushShape::Square => 1,
            BrushShape::Star => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BrushShape::Circle => "circle",
            BrushShape::Square => "square",
            BrushShape::Star => "star",
        }
    }
}

/// A fill path produced by the brush geometry. Polygons are filled with
/// nonzero winding, so the self-intersecting star outline comes out solid.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushPath {
    Circle { center: Pos2, radius: f32 },
    Polygon(Vec<Pos2>),
}

/// Build the fill path for `shape` centered at `center` with pixel size `size`.
pub fn brush_path(shape: BrushShape, center: Pos2, size: f32) -> BrushPath {
    match shape {
        BrushShape::Circle => circle_path(center, size),
        BrushShape::Square => square_path(center, size),
        BrushShape::Star => star_path(center, size),
    }
}

/// A closed arc of diameter `size`.
pub fn circle_path(center: Pos2, size: f32) -> BrushPath {
    BrushPath::Circle {
        center,
        radius: size / 2.0,
    }
}

/// An axis-aligned square of side `size`, centered on `center`.
pub fn square_path(center: Pos2, size: f32) -> BrushPath {
    let half = size / 2.0;
    BrushPath::Polygon(vec![
        Pos2::new(center.x - half, center.y - half),
        Pos2::new(center.x + half, center.y - half),
        Pos2::new(center.x + half, center.y + half),
        Pos2::new(center.x - half, center.y + half),
    ])
}

/// A five-pointed star whose point-to-point distance is `size`.
///
/// The five outer vertices are placed by walking fixed 18-degree and
/// 36-degree sin/cos offsets from the top spike, connected in spike order so
/// the outline crosses itself and the inner pentagon fills under nonzero
/// winding.
pub fn star_path(center: Pos2, size: f32) -> BrushPath {
    let sin18 = 18.0_f32.to_radians().sin() * size;
    let cos18 = 18.0_f32.to_radians().cos() * size;
    let sin36 = 36.0_f32.to_radians().sin() * size;
    let cos36 = 36.0_f32.to_radians().cos() * size;

    let p1 = Pos2::new(center.x, center.y - cos18 / 2.0);
    let p2 = Pos2::new(p1.x - sin18, p1.y + cos18);
    let p3 = Pos2::new(p2.x + cos36, p2.y - sin36);
    let p4 = Pos2::new(p3.x - size, p3.y);
    let p5 = Pos2::new(p4.x + cos36, p4.y + sin36);

    BrushPath::Polygon(vec![p1, p2, p3, p4, p5])
}
