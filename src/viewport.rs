//! Viewport size accessor.
//!
//! The autocompletion box is the only style that depends on the display
//! surface. It reads the height through this trait once per call, so the
//! window may be resized between calls and tests can supply any height.

/// Provides the current visible height in pixels.
pub trait Viewport {
    fn inner_height(&self) -> f64;
}

/// A viewport with a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f64);

impl Viewport for FixedViewport {
    fn inner_height(&self) -> f64 {
        self.0
    }
}

impl<F> Viewport for F
where
    F: Fn() -> f64,
{
    fn inner_height(&self) -> f64 {
        self()
    }
}
