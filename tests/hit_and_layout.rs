use egui::{Color32, Pos2};
use paintcanvas::PanelConfig;
use paintcanvas::hit_testing::{click_confirmed, is_inside};
use paintcanvas::layout::{box_position, scaled_brush_size};

fn test_panel() -> PanelConfig {
    PanelConfig {
        anchor_x: 295.0,
        anchor_y: 50.0,
        box_size: 90.0,
        count: 6,
        columns: 3,
        h_spacing: 5.0,
        v_spacing: 4.0,
        box_colour: Color32::GRAY,
        shape_colour: Color32::BLACK,
        border_width: 2.0,
        selected_padding: 5.0,
        selected_colour: Color32::WHITE,
        selected_border_width: 4.0,
        label: "Test Panel",
        label_colour: Color32::WHITE,
        label_size: 24.0,
        label_x_offset: 5.0,
        label_y_offset: 10.0,
    }
}

#[test]
fn is_inside_includes_corners_and_center() {
    let origin = Pos2::new(10.0, 20.0);
    let (w, h) = (30.0, 40.0);

    // All four corners and the center count as inside.
    assert!(is_inside(Pos2::new(10.0, 20.0), origin, w, h));
    assert!(is_inside(Pos2::new(40.0, 20.0), origin, w, h));
    assert!(is_inside(Pos2::new(10.0, 60.0), origin, w, h));
    assert!(is_inside(Pos2::new(40.0, 60.0), origin, w, h));
    assert!(is_inside(Pos2::new(25.0, 40.0), origin, w, h));
}

#[test]
fn is_inside_excludes_points_one_unit_outside() {
    let origin = Pos2::new(10.0, 20.0);
    let (w, h) = (30.0, 40.0);

    assert!(!is_inside(Pos2::new(9.0, 40.0), origin, w, h));
    assert!(!is_inside(Pos2::new(41.0, 40.0), origin, w, h));
    assert!(!is_inside(Pos2::new(25.0, 19.0), origin, w, h));
    assert!(!is_inside(Pos2::new(25.0, 61.0), origin, w, h));
}

#[test]
fn click_confirm_requires_both_points_inside() {
    let origin = Pos2::new(100.0, 100.0);
    let inside = Pos2::new(120.0, 120.0);
    let outside = Pos2::new(50.0, 50.0);

    assert!(click_confirmed(inside, inside, origin, 50.0, 50.0));
    assert!(!click_confirmed(outside, inside, origin, 50.0, 50.0));
    assert!(!click_confirmed(inside, outside, origin, 50.0, 50.0));
    assert!(!click_confirmed(outside, outside, origin, 50.0, 50.0));
}

#[test]
fn row_step_moves_only_the_y_coordinate() {
    let panel = test_panel();
    let a = box_position(1, 1024.0, &panel);
    let b = box_position(1 + panel.columns, 1024.0, &panel);

    assert_eq!(a.x, b.x);
    assert_eq!(b.y - a.y, panel.box_size + panel.v_spacing);
}

#[test]
fn column_step_moves_only_the_x_coordinate() {
    let panel = test_panel();
    let a = box_position(0, 1024.0, &panel);
    let b = box_position(1, 1024.0, &panel);

    assert_eq!(a.y, b.y);
    assert_eq!(b.x - a.x, panel.box_size + panel.h_spacing);
}

#[test]
fn first_column_anchors_to_the_right_edge() {
    let panel = test_panel();

    let at_1024 = box_position(0, 1024.0, &panel);
    assert_eq!(at_1024.x, 1024.0 - panel.anchor_x);
    assert_eq!(at_1024.y, panel.anchor_y);

    // The anchor follows the canvas width.
    let at_800 = box_position(0, 800.0, &panel);
    assert_eq!(at_800.x, 800.0 - panel.anchor_x);
}

#[test]
fn brush_size_is_strictly_increasing_in_range() {
    for i in 0..5 {
        assert!(scaled_brush_size(i, 10.0, 6) < scaled_brush_size(i + 1, 10.0, 6));
    }
    assert_eq!(scaled_brush_size(2, 10.0, 6), 30.0);
}

#[test]
fn out_of_range_tier_falls_back_to_minimum_size() {
    assert_eq!(scaled_brush_size(-1, 10.0, 6), 10.0);
    assert_eq!(scaled_brush_size(6, 10.0, 6), 10.0);
    assert_eq!(scaled_brush_size(100, 10.0, 6), 10.0);
}
