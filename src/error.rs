use thiserror::Error;

/// Errors from the fallible edges of the crate. The geometry, layout and
/// hit-testing layers are pure and infallible; only surface construction and
/// palette decoding can go wrong.
#[derive(Debug, Error)]
pub enum PaintError {
    /// The palette asset could not be decoded into pixels.
    #[error("failed to decode palette image: {0}")]
    PaletteDecode(#[from] image::ImageError),

    /// A surface (or resize target) with a zero dimension was requested.
    #[error("surface dimensions must be non-zero (got {width}x{height})")]
    ZeroSizedSurface { width: u32, height: u32 },
}
