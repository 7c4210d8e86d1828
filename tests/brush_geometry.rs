use egui::{Color32, Pos2};
use paintcanvas::geometry::{BrushPath, BrushShape, brush_path, star_path};
use paintcanvas::surface::{DrawTarget, PixelSurface};

#[test]
fn circle_path_keeps_center_and_halves_the_size() {
    let path = brush_path(BrushShape::Circle, Pos2::new(100.0, 50.0), 40.0);
    match path {
        BrushPath::Circle { center, radius } => {
            assert_eq!(center, Pos2::new(100.0, 50.0));
            assert_eq!(radius, 20.0);
        }
        other => panic!("expected a circle, got {other:?}"),
    }
}

#[test]
fn square_path_is_axis_aligned_and_centered() {
    let center = Pos2::new(100.0, 100.0);
    let BrushPath::Polygon(vertices) = brush_path(BrushShape::Square, center, 40.0) else {
        panic!("expected a polygon");
    };

    assert_eq!(vertices.len(), 4);
    for v in &vertices {
        assert_eq!((v.x - center.x).abs(), 20.0);
        assert_eq!((v.y - center.y).abs(), 20.0);
    }
}

#[test]
fn star_has_five_equidistant_outer_vertices() {
    let size = 60.0;
    let BrushPath::Polygon(vertices) = star_path(Pos2::new(200.0, 200.0), size) else {
        panic!("expected a polygon");
    };
    assert_eq!(vertices.len(), 5);

    let centroid = Pos2::new(
        vertices.iter().map(|v| v.x).sum::<f32>() / 5.0,
        vertices.iter().map(|v| v.y).sum::<f32>() / 5.0,
    );

    // All five spikes sit on one circumcircle around the star's center.
    let distances: Vec<f32> = vertices
        .iter()
        .map(|v| ((v.x - centroid.x).powi(2) + (v.y - centroid.y).powi(2)).sqrt())
        .collect();
    for d in &distances {
        assert!(
            (d - distances[0]).abs() < 1e-3,
            "vertex distances differ: {distances:?}"
        );
    }

    // The circumradius of a five-point star with point-to-point distance s.
    let expected = size / (2.0 * 72.0_f32.to_radians().sin());
    assert!((distances[0] - expected).abs() < 1e-3);
}

#[test]
fn star_vertices_step_by_144_degrees() {
    let BrushPath::Polygon(vertices) = star_path(Pos2::new(0.0, 0.0), 10.0) else {
        panic!("expected a polygon");
    };

    let centroid = Pos2::new(
        vertices.iter().map(|v| v.x).sum::<f32>() / 5.0,
        vertices.iter().map(|v| v.y).sum::<f32>() / 5.0,
    );
    let angles: Vec<f32> = vertices
        .iter()
        .map(|v| (v.y - centroid.y).atan2(v.x - centroid.x).to_degrees())
        .collect();

    // Consecutive spikes in draw order are 144 degrees apart: the five-point
    // traversal, not the ten-point outline.
    for i in 0..5 {
        let mut diff = angles[(i + 1) % 5] - angles[i];
        while diff > 180.0 {
            diff -= 360.0;
        }
        while diff <= -180.0 {
            diff += 360.0;
        }
        assert!(
            (diff.abs() - 144.0).abs() < 0.1,
            "step {i} was {diff} degrees"
        );
    }
}

#[test]
fn star_fills_solid_under_nonzero_winding() {
    let mut surface = PixelSurface::new(200, 200).unwrap();
    surface.clear(Color32::WHITE);

    let path = star_path(Pos2::new(100.0, 100.0), 60.0);
    surface.fill_path(&path, Color32::BLACK);

    // The inner pentagon (around the star's centroid) must be filled, not a
    // hole; even-odd filling would leave it white.
    let BrushPath::Polygon(vertices) = &path else {
        panic!("expected a polygon");
    };
    let centroid = Pos2::new(
        vertices.iter().map(|v| v.x).sum::<f32>() / 5.0,
        vertices.iter().map(|v| v.y).sum::<f32>() / 5.0,
    );
    assert_eq!(surface.pixel_at(centroid), Color32::BLACK);

    // Top spike is filled, well outside the star stays white.
    assert_eq!(surface.pixel_at(Pos2::new(100.0, 75.0)), Color32::BLACK);
    assert_eq!(surface.pixel_at(Pos2::new(20.0, 20.0)), Color32::WHITE);
}

#[test]
fn shape_indices_round_trip() {
    for (i, shape) in BrushShape::ALL.iter().enumerate() {
        assert_eq!(shape.index(), i);
        assert_eq!(BrushShape::from_index(i), Some(*shape));
    }
    assert_eq!(BrushShape::from_index(3), None);
}
