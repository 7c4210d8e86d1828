use egui::{Color32, Pos2, Vec2};
use image::RgbaImage;

use crate::config::CanvasConfig;
use crate::error::PaintError;
use crate::geometry;
use crate::input::{self, CanvasEvent, PointerState};
use crate::menu::{Menu, MenuAction};
use crate::surface::{DrawTarget, PixelSurface};

/// The paint surface orchestrator. Owns the logical canvas, the pointer
/// state machine and the menu; every dispatched event runs to completion
/// before the next one (single-threaded, no suspension).
pub struct PaintCanvas {
    surface: PixelSurface,
    width: f32,
    height: f32,
    aspect_ratio: f32,
    /// Displayed max-height computed from the container width, so the host
    /// can letterbox without distorting the aspect ratio.
    display_max_height: f32,
    background: Color32,
    pointer: PointerState,
    menu: Menu,
}

impl PaintCanvas {
    /// Construct with explicit injected collaborators: the configuration,
    /// the host container's inner width, and the palette strip pixels.
    pub fn new(
        config: CanvasConfig,
        container_width: f32,
        palette: RgbaImage,
    ) -> Result<Self, PaintError> {
        let surface = PixelSurface::new(config.width as u32, config.height as u32)?;
        let aspect_ratio = config.height / config.width;

        let mut canvas = Self {
            surface,
            width: config.width,
            height: config.height,
            aspect_ratio,
            display_max_height: (container_width * aspect_ratio).floor(),
            background: config.background_colour(),
            pointer: PointerState::default(),
            menu: Menu::new(config.scale_factor, palette),
        };
        canvas.repaint_all();
        Ok(canvas)
    }

    /// Dispatch one event through the interaction state machine.
    pub fn handle_event(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::Press { pos } => {
                // The press position is captured once per press, not updated
                // while the button stays down.
                if !self.pointer.is_down {
                    self.pointer.press_pos = pos;
                }
                self.pointer.is_down = true;
            }
            CanvasEvent::Move { pos } => {
                if !self.pointer.is_down {
                    return;
                }
                self.update(pos);
            }
            CanvasEvent::Release => {
                self.pointer.is_down = false;
            }
            CanvasEvent::Leave => {
                // Leaving the surface always cancels an in-progress press, so
                // a drag released outside cannot complete a selection.
                self.pointer.is_down = false;
            }
            CanvasEvent::Click { pos } => {
                self.pointer.is_click = true;
                self.update(pos);
                self.pointer.is_click = false;
            }
            CanvasEvent::Resize { container_width } => {
                self.display_max_height = (container_width * self.aspect_ratio).floor();
            }
            CanvasEvent::Load => {
                // The palette asset can arrive after the first paint; redraw
                // the menu so the strip shows up.
                log::info!("palette asset loaded, repainting menu");
                self.menu.draw(&mut self.surface);
            }
        }
    }

    /// Repaint the frame for one pointer event: brush stroke if eligible,
    /// then selection confirmation plus the full menu chrome.
    fn update(&mut self, pos: Pos2) {
        // Painting is only allowed strictly left of the menu's reserved strip.
        if pos.x < self.width - self.menu.brush_buffer_width {
            let size = self.menu.selected_brush_size();
            let path = geometry::brush_path(self.menu.brush.shape, pos, size);
            self.surface.fill_path(&path, self.menu.brush.colour);
        }

        let action = self.menu.update(&mut self.surface, &self.pointer, pos);
        if action == MenuAction::ClearCanvas {
            log::info!("clear confirmed, repainting background");
            self.repaint_all();
        }
    }

    /// Background fill plus a fresh menu chrome. Painted strokes do not
    /// survive this.
    fn repaint_all(&mut self) {
        self.surface.clear(self.background);
        self.menu.draw(&mut self.surface);
    }

    /// Change the logical resolution. Recomputes the aspect ratio and the
    /// displayed max-height, then forces a full repaint.
    pub fn set_size(
        &mut self,
        width: f32,
        height: f32,
        container_width: f32,
    ) -> Result<(), PaintError> {
        self.surface.resize(width as u32, height as u32)?;
        self.width = width;
        self.height = height;
        self.aspect_ratio = height / width;
        self.display_max_height = (container_width * self.aspect_ratio).floor();
        self.repaint_all();
        Ok(())
    }

    /// Change the background colour and force a full repaint.
    pub fn set_background(&mut self, colour: Color32) {
        self.background = colour;
        self.repaint_all();
    }

    /// Map a raw pointer offset (screen pixels relative to the displayed
    /// surface's top-left) into logical coordinates.
    pub fn normalize(&self, offset: Vec2, displayed: Vec2) -> Pos2 {
        input::normalize(offset, Vec2::new(self.width, self.height), displayed)
    }

    /// Settings snapshot for persistence.
    pub fn config(&self) -> CanvasConfig {
        CanvasConfig {
            width: self.width,
            height: self.height,
            background: [self.background.r(), self.background.g(), self.background.b()],
            scale_factor: self.menu.scale_factor,
        }
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn brush(&self) -> crate::menu::BrushState {
        self.menu.brush
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn display_max_height(&self) -> f32 {
        self.display_max_height
    }
}
