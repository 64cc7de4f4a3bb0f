// Web front-end constants: DOM hooks, grid sizing and canvas limits.
// Curve, effect and interaction tuning lives in `gallery_core::constants`.

// DOM hooks
pub const GALLERY_ELEMENT_ID: &str = "gallery";
pub const CELL_CLASS: &str = "curve-cell";
pub const CANVAS_CLASS: &str = "curve-canvas";
pub const INFO_CLASS: &str = "curve-info";

// Grid sizing (css pixels per cell edge, cell count bounds)
pub const CELL_CSS_SIZE: f64 = 150.0;
pub const MIN_CELLS: usize = 100;
pub const MAX_CELLS: usize = 500;

// Canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 3.0;
// Used when layout has not sized a canvas yet
pub const FALLBACK_CANVAS_CSS_PX: f64 = 150.0;

// Frames between periodic frame-time debug logs (~10s at 60fps)
pub const FRAME_LOG_INTERVAL: u64 = 600;
