use egui::Pos2;

/// Inclusive bounds test: a point exactly on any edge of the region counts
/// as inside.
pub fn is_inside(point: Pos2, origin: Pos2, width: f32, height: f32) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + width
        && point.y >= origin.y
        && point.y <= origin.y + height
}

/// Click-confirm rule: a control is selected only when both the position
/// where the button went down and the current (release) position land inside
/// the same region. A drag that starts inside a control and ends outside, or
/// vice versa, confirms nothing.
pub fn click_confirmed(press: Pos2, current: Pos2, origin: Pos2, width: f32, height: f32) -> bool {
    is_inside(current, origin, width, height) && is_inside(press, origin, width, height)
}
