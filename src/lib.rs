#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hit_testing;
pub mod input;
pub mod layout;
pub mod menu;
pub mod palette;
pub mod surface;

pub use app::PaintApp;
pub use canvas::PaintCanvas;
pub use config::CanvasConfig;
pub use error::PaintError;
pub use geometry::{BrushPath, BrushShape};
pub use input::{CanvasEvent, PointerState};
pub use layout::PanelConfig;
pub use menu::{BrushState, Menu, MenuAction};
pub use surface::{DrawTarget, PixelSurface};
