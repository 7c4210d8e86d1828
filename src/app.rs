use egui::{Color32, Pos2, Rect, Vec2};

use crate::canvas::PaintCanvas;
use crate::config::CanvasConfig;
use crate::input::CanvasEvent;
use crate::palette;

/// Logical size choices offered in the controls bar.
const SIZE_PRESETS: [(&str, f32, f32); 2] = [("1024 × 768", 1024.0, 768.0), ("800 × 600", 800.0, 600.0)];

/// Assumed container width before the first layout pass.
const INITIAL_CONTAINER_WIDTH: f32 = 1024.0;

/// The eframe host: harvests raw pointer input, synthesizes the canvas's
/// event stream, and presents the logical surface as a texture each frame.
pub struct PaintApp {
    canvas: PaintCanvas,
    texture: Option<egui::TextureHandle>,
    last_pointer_pos: Option<Pos2>,
    pointer_was_inside: bool,
    last_container_width: f32,
    palette_announced: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: CanvasConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let strip = palette::hue_strip(240, 30);
        let canvas = match PaintCanvas::new(config, INITIAL_CONTAINER_WIDTH, strip.clone()) {
            Ok(canvas) => canvas,
            Err(err) => {
                log::warn!("stored canvas settings rejected ({err}), falling back to defaults");
                PaintCanvas::new(CanvasConfig::default(), INITIAL_CONTAINER_WIDTH, strip)
                    .expect("default canvas settings are valid")
            }
        };

        Self {
            canvas,
            texture: None,
            last_pointer_pos: None,
            pointer_was_inside: false,
            last_container_width: INITIAL_CONTAINER_WIDTH,
            palette_announced: false,
        }
    }

    /// Translate this frame's raw egui input into canvas events, in the
    /// order press, move, release/leave, click.
    fn gather_events(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        rect: Rect,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let displayed = rect.size();
        let logical = Vec2::new(self.canvas.width(), self.canvas.height());

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let inside = hover.is_some_and(|pos| rect.contains(pos));
            let to_logical =
                |pos: Pos2| crate::input::normalize(pos - rect.min, logical, displayed);

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover {
                    if inside {
                        events.push(CanvasEvent::Press { pos: to_logical(pos) });
                    }
                }
            }

            if let Some(pos) = hover {
                if inside && Some(pos) != self.last_pointer_pos {
                    events.push(CanvasEvent::Move { pos: to_logical(pos) });
                }
            }

            if input.pointer.primary_released() {
                events.push(CanvasEvent::Release);
            }

            if self.pointer_was_inside && !inside {
                events.push(CanvasEvent::Leave);
            }

            self.pointer_was_inside = inside;
            self.last_pointer_pos = hover;
        });

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(CanvasEvent::Click {
                    pos: crate::input::normalize(pos - rect.min, logical, displayed),
                });
            }
        }

        events
    }

    fn controls_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Background:");
            let mut background = self.canvas.background();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut background,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                self.canvas.set_background(background);
            }

            ui.separator();

            for (label, width, height) in SIZE_PRESETS {
                let selected = (self.canvas.width() - width).abs() < f32::EPSILON;
                if ui.selectable_label(selected, label).clicked() && !selected {
                    if let Err(err) =
                        self.canvas.set_size(width, height, self.last_container_width)
                    {
                        log::error!("resize rejected: {err}");
                    }
                }
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.canvas.config());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("canvas_controls").show(ctx, |ui| {
            self.controls_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let container_width = ui.available_width().max(1.0);
            if (container_width - self.last_container_width).abs() > f32::EPSILON {
                self.last_container_width = container_width;
                self.canvas.handle_event(CanvasEvent::Resize { container_width });
            }

            let displayed = Vec2::new(
                container_width,
                self.canvas
                    .display_max_height()
                    .clamp(1.0, ui.available_height().max(1.0)),
            );
            let (response, painter) =
                ui.allocate_painter(displayed, egui::Sense::click_and_drag());
            let rect = response.rect;

            for event in self.gather_events(ctx, &response, rect) {
                self.canvas.handle_event(event);
            }

            // The palette is ready at construction, but the menu still gets
            // its dedicated repaint once the UI is up.
            if !self.palette_announced {
                self.palette_announced = true;
                self.canvas.handle_event(CanvasEvent::Load);
            }

            let frame_image = self.canvas.surface().to_color_image();
            let options = egui::TextureOptions::LINEAR;
            match &mut self.texture {
                Some(texture) => texture.set(frame_image, options),
                None => {
                    self.texture = Some(ctx.load_texture("paint-surface", frame_image, options));
                }
            }

            if let Some(texture) = &self.texture {
                painter.image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            // Labels are drawn over the texture; glyphs are not a surface
            // primitive.
            let scale_x = rect.width() / self.canvas.width();
            let scale_y = rect.height() / self.canvas.height();
            for label in self.canvas.menu().labels(self.canvas.width()) {
                let screen = Pos2::new(
                    rect.min.x + label.pos.x * scale_x,
                    rect.min.y + label.pos.y * scale_y,
                );
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    label.text,
                    egui::FontId::proportional(label.size * scale_y),
                    label.colour,
                );
            }
        });
    }
}
