use egui::{Color32, Pos2, Rect, Vec2};
use image::RgbaImage;

use crate::geometry::{self, BrushShape};
use crate::hit_testing::{click_confirmed, is_inside};
use crate::input::PointerState;
use crate::layout::{PanelConfig, box_position, scaled_brush_size};
use crate::surface::DrawTarget;

/// Visual configuration for the selected-colour swatch and the palette strip.
#[derive(Debug, Clone)]
pub struct SwatchConfig {
    /// Horizontal anchor, measured from the canvas's right edge.
    pub anchor_x: f32,
    pub y: f32,
    /// Offset of the selected-colour box, left of the palette strip.
    pub colour_box_x: f32,
    pub colour_box_width: f32,
    pub colour_box_height: f32,
    pub colour_box_border_width: f32,
    pub palette_width: f32,
    pub palette_height: f32,
    pub palette_border_width: f32,
    pub label: &'static str,
    pub label_colour: Color32,
    pub label_size: f32,
    pub label_x_offset: f32,
    pub label_y_offset: f32,
}

/// Visual configuration for the rounded clear button.
#[derive(Debug, Clone)]
pub struct ResetConfig {
    /// Horizontal anchor, measured from the canvas's right edge.
    pub anchor_x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rounded corner radius.
    pub radius: f32,
    pub border_width: f32,
    pub colour: Color32,
    pub label: &'static str,
    pub label_colour: Color32,
    pub label_size: f32,
    pub label_x_offset: f32,
    pub label_y_offset: f32,
}

/// Side effect a menu pass can request from its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    /// The clear button was confirmed; repaint the surface to background.
    ClearCanvas,
}

/// The live brush selection, read on every paint and preview draw.
#[derive(Debug, Clone, Copy)]
pub struct BrushState {
    pub shape: BrushShape,
    /// Index into the size panel's tiers.
    pub size_index: usize,
    pub colour: Color32,
}

/// A piece of text the host should overlay at a logical position. Glyphs are
/// not part of the raster primitive set, so the surface never draws them.
#[derive(Debug, Clone)]
pub struct MenuLabel {
    pub text: &'static str,
    /// Logical position of the text's bottom-left corner.
    pub pos: Pos2,
    pub colour: Color32,
    pub size: f32,
}

/// The right-docked menu: brush size panel, brush shape panel, colour swatch
/// with palette strip, and the clear button. Owns the brush state; all
/// mutation goes through confirmed selections in [`Menu::update`].
pub struct Menu {
    pub frame_colour: Color32,
    pub frame_border_width: f32,
    /// Width of the menu frame at the canvas's right edge.
    pub width: f32,
    /// Painting is only allowed strictly left of this reserved strip.
    pub brush_buffer_width: f32,
    /// Linear factor mapping size tiers to pixel sizes.
    pub scale_factor: f32,

    pub size_panel: PanelConfig,
    pub shape_panel: PanelConfig,
    /// Size tier used for the shape panel's preview glyphs.
    pub shape_preview_index: usize,

    pub swatch: SwatchConfig,
    pub reset: ResetConfig,

    pub brush: BrushState,
    pub palette: RgbaImage,
}

impl Menu {
    pub fn new(scale_factor: f32, palette: RgbaImage) -> Self {
        let width = 310.0;
        let size_panel_y = 50.0;
        let shape_panel_y = size_panel_y + 250.0;
        let swatch_y = shape_panel_y + 160.0;

        Self {
            frame_colour: Color32::from_rgb(90, 90, 90),
            frame_border_width: 2.0,
            width,
            brush_buffer_width: width - 10.0,
            scale_factor,

            size_panel: PanelConfig {
                anchor_x: 295.0,
                anchor_y: size_panel_y,
                box_size: 90.0,
                count: 6,
                columns: 3,
                h_spacing: 5.0,
                v_spacing: 4.0,
                box_colour: Color32::from_rgb(150, 150, 150),
                shape_colour: Color32::BLACK,
                border_width: 2.0,
                selected_padding: 5.0,
                selected_colour: Color32::from_rgb(225, 225, 225),
                selected_border_width: 4.0,
                label: "Brush Size",
                label_colour: Color32::WHITE,
                label_size: 24.0,
                label_x_offset: 5.0,
                label_y_offset: 10.0,
            },
            shape_panel: PanelConfig {
                anchor_x: 295.0,
                anchor_y: shape_panel_y,
                box_size: 90.0,
                count: BrushShape::ALL.len(),
                columns: 3,
                h_spacing: 5.0,
                v_spacing: 4.0,
                box_colour: Color32::from_rgb(150, 150, 150),
                shape_colour: Color32::BLACK,
                border_width: 2.0,
                selected_padding: 5.0,
                selected_colour: Color32::from_rgb(225, 225, 225),
                selected_border_width: 4.0,
                label: "Brush Shape",
                label_colour: Color32::WHITE,
                label_size: 24.0,
                label_x_offset: 5.0,
                label_y_offset: 10.0,
            },
            shape_preview_index: 3,

            swatch: SwatchConfig {
                anchor_x: 255.0,
                y: swatch_y,
                colour_box_x: 40.0,
                colour_box_width: 30.0,
                colour_box_height: 30.0,
                colour_box_border_width: 1.0,
                palette_width: 240.0,
                palette_height: 30.0,
                palette_border_width: 2.0,
                label: "Brush Colour",
                label_colour: Color32::WHITE,
                label_size: 24.0,
                label_x_offset: 40.0,
                label_y_offset: 10.0,
            },
            reset: ResetConfig {
                anchor_x: 200.0,
                y: swatch_y + 70.0,
                width: 90.0,
                height: 50.0,
                radius: 10.0,
                border_width: 4.0,
                colour: Color32::from_rgb(110, 110, 110),
                label: "Clear",
                label_colour: Color32::WHITE,
                label_size: 20.0,
                label_x_offset: 24.0,
                label_y_offset: 31.0,
            },

            brush: BrushState {
                shape: BrushShape::Circle,
                size_index: 3,
                colour: Color32::BLACK,
            },
            palette,
        }
    }

    /// Pixel size of the currently selected brush tier.
    pub fn selected_brush_size(&self) -> f32 {
        scaled_brush_size(
            self.brush.size_index as i32,
            self.scale_factor,
            self.size_panel.count,
        )
    }

    fn palette_origin(&self, canvas_width: f32) -> Pos2 {
        Pos2::new(canvas_width - self.swatch.anchor_x, self.swatch.y)
    }

    fn reset_rect(&self, canvas_width: f32) -> Rect {
        Rect::from_min_size(
            Pos2::new(canvas_width - self.reset.anchor_x, self.reset.y),
            Vec2::new(self.reset.width, self.reset.height),
        )
    }

    /// One menu pass: run selection confirmation for this event's pointer
    /// state, then unconditionally repaint the whole chrome. `pos` is the
    /// current pointer position in logical coordinates.
    pub fn update(
        &mut self,
        surface: &mut dyn DrawTarget,
        pointer: &PointerState,
        pos: Pos2,
    ) -> MenuAction {
        let canvas_width = surface.width();
        let mut action = MenuAction::None;

        // Colour sampling runs on every pass, clicked or not: both the press
        // position and the current position must lie inside the palette strip.
        let palette_origin = self.palette_origin(canvas_width);
        let palette_w = self.swatch.palette_width - 1.0;
        let palette_h = self.swatch.palette_height;
        if is_inside(pos, palette_origin, palette_w, palette_h)
            && is_inside(pointer.press_pos, palette_origin, palette_w, palette_h)
        {
            let sampled = surface.pixel_at(pos);
            self.brush.colour = Color32::from_rgb(sampled.r(), sampled.g(), sampled.b());
            log::debug!("sampled brush colour {:?} at {:?}", self.brush.colour, pos);
        }

        if pointer.is_click {
            for i in 0..self.size_panel.count {
                let box_pos = box_position(i, canvas_width, &self.size_panel);
                if click_confirmed(
                    pointer.press_pos,
                    pos,
                    box_pos,
                    self.size_panel.box_size,
                    self.size_panel.box_size,
                ) {
                    self.brush.size_index = i;
                    log::info!("brush size tier {} selected", i);
                }
            }

            for i in 0..self.shape_panel.count {
                let box_pos = box_position(i, canvas_width, &self.shape_panel);
                if click_confirmed(
                    pointer.press_pos,
                    pos,
                    box_pos,
                    self.shape_panel.box_size,
                    self.shape_panel.box_size,
                ) {
                    if let Some(shape) = BrushShape::from_index(i) {
                        self.brush.shape = shape;
                        log::info!("brush shape {} selected", shape.name());
                    }
                }
            }

            let reset = self.reset_rect(canvas_width);
            if click_confirmed(pointer.press_pos, pos, reset.min, reset.width(), reset.height()) {
                action = MenuAction::ClearCanvas;
            }
        }

        self.draw(surface);
        action
    }

    /// Full chrome repaint: frame, both panels with previews and the current
    /// selection highlighted, swatch + palette, and the clear button.
    pub fn draw(&self, surface: &mut dyn DrawTarget) {
        let canvas_width = surface.width();
        let canvas_height = surface.height();

        surface.draw_box(
            Rect::from_min_size(
                Pos2::new(canvas_width - self.width, 0.0),
                Vec2::new(self.width, canvas_height),
            ),
            self.frame_border_width,
            self.frame_colour,
        );

        self.draw_size_boxes(surface, canvas_width);
        self.draw_shape_boxes(surface, canvas_width);
        self.draw_swatch(surface, canvas_width);
        self.draw_reset_button(surface, canvas_width);
    }

    fn draw_panel_box(
        &self,
        surface: &mut dyn DrawTarget,
        panel: &PanelConfig,
        box_pos: Pos2,
        selected: bool,
    ) {
        surface.draw_box(
            Rect::from_min_size(box_pos, Vec2::splat(panel.box_size)),
            panel.border_width,
            panel.box_colour,
        );

        if selected {
            let pad = panel.selected_padding;
            surface.draw_box(
                Rect::from_min_size(
                    box_pos + Vec2::splat(pad),
                    Vec2::splat(panel.box_size - pad * 2.0),
                ),
                panel.selected_border_width,
                panel.selected_colour,
            );
        }
    }

    fn draw_size_boxes(&self, surface: &mut dyn DrawTarget, canvas_width: f32) {
        for i in 0..self.size_panel.count {
            let box_pos = box_position(i, canvas_width, &self.size_panel);
            self.draw_panel_box(surface, &self.size_panel, box_pos, self.brush.size_index == i);

            // Preview the selected shape at this box's size tier.
            let center = box_pos + Vec2::splat(self.size_panel.box_size / 2.0);
            let size = scaled_brush_size(i as i32, self.scale_factor, self.size_panel.count);
            let path = geometry::brush_path(self.brush.shape, center, size);
            surface.fill_path(&path, self.size_panel.shape_colour);
        }
    }

    fn draw_shape_boxes(&self, surface: &mut dyn DrawTarget, canvas_width: f32) {
        let preview_size = scaled_brush_size(
            self.shape_preview_index as i32,
            self.scale_factor,
            self.size_panel.count,
        );

        for (i, shape) in BrushShape::ALL.iter().enumerate().take(self.shape_panel.count) {
            let box_pos = box_position(i, canvas_width, &self.shape_panel);
            self.draw_panel_box(
                surface,
                &self.shape_panel,
                box_pos,
                self.brush.shape.index() == i,
            );

            let center = box_pos + Vec2::splat(self.shape_panel.box_size / 2.0);
            let path = geometry::brush_path(*shape, center, preview_size);
            surface.fill_path(&path, self.shape_panel.shape_colour);
        }
    }

    fn draw_swatch(&self, surface: &mut dyn DrawTarget, canvas_width: f32) {
        let sw = &self.swatch;

        // Currently selected colour.
        surface.draw_box(
            Rect::from_min_size(
                Pos2::new(canvas_width - (sw.anchor_x + sw.colour_box_x), sw.y),
                Vec2::new(sw.colour_box_width, sw.colour_box_height),
            ),
            sw.colour_box_border_width,
            self.brush.colour,
        );

        // Palette backing box, then the strip itself.
        let palette_rect = Rect::from_min_size(
            self.palette_origin(canvas_width),
            Vec2::new(sw.palette_width, sw.palette_height),
        );
        surface.draw_box(palette_rect, sw.palette_border_width, sw.label_colour);
        surface.draw_image(&self.palette, palette_rect);
    }

    fn draw_reset_button(&self, surface: &mut dyn DrawTarget, canvas_width: f32) {
        surface.fill_round_rect(
            self.reset_rect(canvas_width),
            self.reset.radius,
            self.reset.border_width,
            self.reset.colour,
        );
    }

    /// The text overlays for the current layout. Panel labels hang above the
    /// second box column, offset up and to the left.
    pub fn labels(&self, canvas_width: f32) -> Vec<MenuLabel> {
        let mut labels = Vec::with_capacity(4);

        for panel in [&self.size_panel, &self.shape_panel] {
            let anchor = box_position(1, canvas_width, panel);
            labels.push(MenuLabel {
                text: panel.label,
                pos: Pos2::new(
                    anchor.x - panel.label_x_offset,
                    anchor.y - panel.label_y_offset,
                ),
                colour: panel.label_colour,
                size: panel.label_size,
            });
        }

        let sw = &self.swatch;
        labels.push(MenuLabel {
            text: sw.label,
            pos: Pos2::new(
                canvas_width - sw.anchor_x + sw.label_x_offset,
                sw.y - sw.label_y_offset,
            ),
            colour: sw.label_colour,
            size: sw.label_size,
        });

        let rb = &self.reset;
        labels.push(MenuLabel {
            text: rb.label,
            pos: Pos2::new(
                canvas_width - rb.anchor_x + rb.label_x_offset,
                rb.y + rb.label_y_offset,
            ),
            colour: rb.label_colour,
            size: rb.label_size,
        });

        labels
    }
}
