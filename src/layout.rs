use egui::{Color32, Pos2};

/// Declarative configuration for one grid of same-size selectable boxes,
/// anchored to the canvas's right edge (the menu is right-docked).
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Horizontal anchor, measured leftwards from the canvas's right edge.
    pub anchor_x: f32,
    /// Vertical anchor, measured from the canvas's top edge.
    pub anchor_y: f32,
    /// Side length of each selection box.
    pub box_size: f32,
    /// Number of boxes in the grid.
    pub count: usize,
    /// Grid columns; must be at least 1.
    pub columns: usize,
    pub h_spacing: f32,
    pub v_spacing: f32,
    pub box_colour: Color32,
    pub shape_colour: Color32,
    pub border_width: f32,
    pub selected_padding: f32,
    pub selected_colour: Color32,
    pub selected_border_width: f32,
    pub label: &'static str,
    pub label_colour: Color32,
    pub label_size: f32,
    pub label_x_offset: f32,
    pub label_y_offset: f32,
}

/// Top-left pixel position of the selection box at `index`.
///
/// Boxes fill the grid row-major; the panel does not validate that all rows
/// fit inside the canvas, that is the configurer's job.
pub fn box_position(index: usize, canvas_width: f32, panel: &PanelConfig) -> Pos2 {
    debug_assert!(panel.columns >= 1);
    let row = (index / panel.columns) as f32;
    let col = (index % panel.columns) as f32;

    let x = canvas_width - panel.anchor_x + col * (panel.box_size + panel.h_spacing);
    let y = panel.anchor_y + row * panel.box_size + row * panel.v_spacing;

    Pos2::new(x, y)
}

/// Pixel size of the brush at a given size tier: `(index + 1) * scale_factor`.
///
/// Any out-of-range index (negative or >= `count`) returns the minimum size
/// instead of failing; callers rely on this non-failing fallback.
pub fn scaled_brush_size(index: i32, scale_factor: f32, count: usize) -> f32 {
    if index < 0 || index as usize >= count {
        return scale_factor;
    }

    (index + 1) as f32 * scale_factor
}
