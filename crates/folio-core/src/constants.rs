// Shared tuning constants for the gallery engine.
//
// Distances are CSS pixels, angles are degrees, smoothing factors are
// per-frame blend weights and durations are seconds.

// Track layout
pub const CARD_SPACING: f32 = 180.0; // distance between neighbouring cards along the track
pub const Y_OFFSET_PER_CARD: f32 = 64.0; // vertical drop per card step
pub const Z_OFFSET_PER_CARD: f32 = 220.0; // depth per card step
pub const GALLERY_TILT_Y_DEG: f32 = -50.0; // constant rotateY applied to every card

// Input scaling
pub const WHEEL_DELTA_SCALE: f32 = 0.5;
pub const KEY_STEP: f32 = 100.0; // injected straight into target progress

// Progress smoothing
pub const PROGRESS_SMOOTHING: f32 = 0.08;

// Velocity skew (shared by all cards)
pub const SKEW_MAX_DEG: f32 = 15.0;
pub const SKEW_VELOCITY_GAIN: f32 = 0.8;
pub const SKEW_SMOOTHING: f32 = 0.08;

// Velocity curve, rotateZ (shared by all cards)
pub const CURVE_MAX_DEG: f32 = 4.0;
pub const CURVE_VELOCITY_GAIN: f32 = 0.3;
pub const CURVE_SMOOTHING: f32 = 0.06;

// Depth brightness
pub const BRIGHTNESS_FLOOR: f32 = 0.3;
pub const BRIGHTNESS_DEPTH_FALLOFF: f32 = 0.7;

// Paint order baseline; z-index = round(base - |offset|)
pub const PAINT_ORDER_BASE: f32 = 1000.0;

// Observer tolerances (accumulated |delta| before a dispatch)
pub const CAROUSEL_TOLERANCE: f32 = 10.0;
pub const PREVIEW_TOLERANCE: f32 = 10.0;
pub const FULLSCREEN_TOLERANCE: f32 = 5.0;

// Preview rectangle as a fraction of the viewport
pub const PREVIEW_WIDTH_FRACTION: f32 = 0.8;
pub const PREVIEW_HEIGHT_FRACTION: f32 = 0.7;

// Preview swipe dead zone
pub const SWIPE_THRESHOLD: f32 = 30.0;

// Pull-to-close rubber band
pub const PULL_GAIN: f32 = 0.01; // progress per unit of |delta|
pub const PULL_CLOSE_THRESHOLD: f32 = 1.5;
pub const PULL_TRANSLATE_PER_PROGRESS: f32 = 50.0;
pub const PULL_TRANSLATE_MAX: f32 = 100.0;
pub const PULL_SCALE_PER_PROGRESS: f32 = 0.02;
pub const PULL_SCALE_MAX_REDUCTION: f32 = 0.02;

// Fullscreen scroll and parallax
pub const SCROLL_GAIN: f32 = 0.8;
pub const HERO_PARALLAX_FACTOR: f32 = 0.4;
pub const HERO_SCALE_PER_SCROLL: f32 = 0.0002;
pub const GALLERY_PARALLAX_AMPLITUDE: f32 = 50.0;

// Border radii for the morphing container
pub const RADIUS_CARD: f32 = 4.0;
pub const RADIUS_PREVIEW: f32 = 16.0;
pub const RADIUS_FULLSCREEN: f32 = 0.0;
pub const RADIUS_CLOSING: f32 = 8.0;

// Hero image zoom per phase
pub const HERO_SCALE_PREVIEW: f32 = 1.05;
pub const HERO_SCALE_FULLSCREEN: f32 = 1.15;

// Detail content reveal
pub const CONTENT_OFFSET_HIDDEN: f32 = 40.0;
pub const CONTENT_OFFSET_PREVIEW: f32 = 20.0;
pub const CONTENT_OPACITY_PREVIEW: f32 = 0.8;

// Opening timeline
pub const OPEN_OVERLAY_SEC: f32 = 0.5;
pub const OPEN_MORPH_SEC: f32 = 0.6;
pub const OPEN_HERO_SEC: f32 = 0.7;
pub const OPEN_CONTENT_DELAY_SEC: f32 = 0.3;
pub const OPEN_CONTENT_SEC: f32 = 0.4;

// Expanding timeline
pub const EXPAND_MORPH_SEC: f32 = 0.5;
pub const EXPAND_HERO_SEC: f32 = 0.6;
pub const EXPAND_CONTENT_DELAY_SEC: f32 = 0.2;
pub const EXPAND_CONTENT_SEC: f32 = 0.4;
pub const EXPAND_CONTENT_STAGGER_SEC: f32 = 0.05;

// Closing timeline
pub const CLOSE_HERO_SEC: f32 = 0.3;
pub const CLOSE_RADIUS_DELAY_SEC: f32 = 0.1;
pub const CLOSE_RADIUS_SEC: f32 = 0.3;
pub const CLOSE_MORPH_DELAY_SEC: f32 = 0.1;
pub const CLOSE_MORPH_SEC: f32 = 0.6;
pub const CLOSE_OVERLAY_DELAY_SEC: f32 = 0.2;
pub const CLOSE_OVERLAY_SEC: f32 = 0.4;

// Gesture feedback tweens
pub const PULL_FEEDBACK_SEC: f32 = 0.1;
pub const PULL_RELEASE_SEC: f32 = 0.3;
pub const SCROLL_FOLLOW_SEC: f32 = 0.1;
pub const GALLERY_PARALLAX_SEC: f32 = 0.2;
