use egui::{Pos2, Vec2};

/// Converts a raw pointer offset (screen pixels relative to the displayed
/// canvas's top-left corner) into the canvas's fixed logical coordinate
/// space. Downstream hit-testing and drawing never see device coordinates,
/// so resizing the viewport never moves controls relative to the content.
///
/// Ratios are assumed positive; the host must not call this with a
/// zero-sized displayed area.
pub fn normalize(offset: Vec2, logical: Vec2, displayed: Vec2) -> Pos2 {
    Pos2::new(
        offset.x * (logical.x / displayed.x),
        offset.y * (logical.y / displayed.y),
    )
}

/// Pointer-button state owned by the interaction state machine.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Whether the primary button is currently held.
    pub is_down: bool,
    /// Where the current press started. Captured once on press, not updated
    /// while the button is held.
    pub press_pos: Pos2,
    /// One-shot flag, true only for the single orchestrator pass dispatched
    /// by a synthetic click. Confirmed selections fire only while this is set.
    pub is_click: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            is_down: false,
            press_pos: Pos2::ZERO,
            is_click: false,
        }
    }
}

/// The closed set of events the canvas reacts to, each carrying only the
/// fields it needs. Positions are in logical canvas coordinates (already
/// normalized by the host).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button went down.
    Press { pos: Pos2 },
    /// Pointer moved. Only paints while the button is held.
    Move { pos: Pos2 },
    /// Primary button came up.
    Release,
    /// Pointer left the surface; always cancels an in-progress press.
    Leave,
    /// Press and release resolved at one location (synthesized by the host).
    Click { pos: Pos2 },
    /// The container was resized; carries its new inner width in screen
    /// pixels so the displayed max-height can be recomputed.
    Resize { container_width: f32 },
    /// The palette asset became available; repaint the menu chrome.
    Load,
}
