// Shared sampling, rendering and interaction tuning constants.

// Sampling
pub const SAMPLE_STEPS: usize = 420; // segments per frame; the point buffer holds SAMPLE_STEPS + 1
pub const PADDING_RATIO: f64 = 0.12; // padding as a fraction of min(canvas w, canvas h)
pub const MIN_EXTENT: f64 = 1.0; // bounding-box floor used when deriving scale

// Modulation amplitude selection
pub const ANGLE_AMPLITUDE: f64 = std::f64::consts::PI;
pub const DECAY_AMPLITUDE_GAIN: f64 = 5.0;
pub const DECAY_AMPLITUDE_FLOOR: f64 = 0.02;
pub const DEFAULT_AMPLITUDE_FLOOR: f64 = 0.5;

// Positive-role rectification floor: max(amp * A, |base| * B, C)
pub const MIN_VALUE_AMPLITUDE_RATIO: f64 = 0.05;
pub const MIN_VALUE_BASE_RATIO: f64 = 0.35;
pub const MIN_VALUE_FLOOR: f64 = 0.001;

// Randomized modulator coefficient ranges
pub const PRIMARY_INTENSITY: (f64, f64) = (0.12, 0.3);
pub const SECONDARY_INTENSITY: (f64, f64) = (0.04, 0.12);
pub const PRIMARY_SPEED: (f64, f64) = (0.12, 0.45); // rad/s
pub const SECONDARY_SPEED: (f64, f64) = (0.5, 1.3); // rad/s

// Cell style ranges
pub const HUE_SPEED: (f64, f64) = (12.0, 40.0); // degrees per second
pub const LINE_WIDTH_BASE: (f64, f64) = (1.1, 2.0);
pub const LINE_WIDTH_VARIATION: (f64, f64) = (0.2, 0.6);
pub const LINE_WIDTH_SPEED: (f64, f64) = (0.6, 1.8);

// Stroke color response to interaction
pub const BASE_SATURATION: f64 = 70.0;
pub const SATURATION_BOOST: f64 = 25.0;
pub const BASE_LIGHTNESS: f64 = 55.0;
pub const LIGHTNESS_BOOST: f64 = 15.0;
pub const HOLD_WIDTH_BOOST: f64 = 1.6;
pub const GLOW_WIDTH_BOOST: f64 = 0.6;
pub const GLOW_LAYER_WIDTH_SCALE: f64 = 2.5;
pub const GLOW_LAYER_ALPHA: f64 = 0.25;
pub const GLOW_LAYER_MIN_BOOST: f64 = 0.01;

// Background fade; low alpha leaves a trail of previous frames
pub const TRAIL_FILL: (f64, f64, f64, f64) = (230.0, 35.0, 4.0, 0.2); // h, s, l, a

// Effects
pub const EFFECT_CAPACITY: usize = 24;
pub const RIPPLE_DURATION_SEC: f64 = 1.2;
pub const RIPPLE_MIN_RADIUS: f64 = 0.04; // fractions of min(canvas w, canvas h)
pub const RIPPLE_MAX_RADIUS: f64 = 0.45;
pub const RIPPLE_HUE_OFFSET: f64 = 30.0;
pub const BURST_HUE_OFFSET: f64 = 180.0;
pub const BURST_BASE_DURATION_SEC: f64 = 0.9;
pub const BURST_BASE_RADIUS: f64 = 0.3;
pub const BURST_BASE_SPOKES: usize = 10;
pub const BURST_SPOKE_LENGTH: (f64, f64) = (0.55, 1.0);
pub const BURST_SPIN: (f64, f64) = (0.6, 1.6); // radians over the burst lifetime
pub const BURST_INNER_RATIO: f64 = 0.2;
pub const DOUBLE_CLICK_BURST_MAGNITUDE: f64 = 1.0;

// Hold interaction
pub const HOLD_RAMP_SEC: f64 = 1.1; // time to reach full intensity
pub const HOLD_DECAY_PER_SEC: f64 = 2.2; // linear decay after release
pub const HOLD_BURST_MIN_SEC: f64 = 0.25; // shorter holds do not burst
pub const HOLD_BURST_MAX_MAGNITUDE: f64 = 1.6;
pub const HOLD_AURA_RADIUS: f64 = 0.35; // fraction of min(canvas w, canvas h)

// Click vs double-click disambiguation
pub const CLICK_DEBOUNCE_SEC: f64 = 0.3;

// Pointer glow
pub const POINTER_GLOW_RADIUS_SCALE: f64 = 1.5; // times max(cell w, cell h)
pub const POINTER_GLOW_EXPONENT: f64 = 1.35;

// Frame timing
pub const MAX_FRAME_DT_SEC: f64 = 0.1;
