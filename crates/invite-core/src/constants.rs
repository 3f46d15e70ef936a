// Shared tuning constants for the invitation scene.

// Scroll model
pub const SCROLL_MAX_PERCENT: f32 = 100.0;
pub const WHEEL_PX_PER_PERCENT: f32 = 40.0; // wheel pixels per scroll percent
pub const LINE_HEIGHT_PX: f32 = 16.0; // deltaMode=line conversion
pub const SCROLL_SMOOTH_TAU_SEC: f32 = 0.18;
pub const SCROLL_SNAP_EPSILON: f32 = 0.001;
pub const KEY_STEP_PERCENT: f32 = 2.0; // arrow keys
pub const PAGE_STEP_PERCENT: f32 = 10.0; // PageUp/PageDown

// Camera path: dolly through the gate, then pan down the aisle to the stage
pub const DOLLY_END_PERCENT: f32 = 28.0;
pub const DOLLY_RATE: f32 = 0.2; // world units of -Z per percent
pub const PAN_SPEED: f32 = 0.05; // world units per percent on X and Y
pub const X_LIMIT: f32 = -2.45;
pub const Y_LIMIT: f32 = -2.1;
pub const EYE_LEVEL_UNTIL_PERCENT: f32 = 38.0; // Y floor holds at eye level until here
pub const TAPER_END_PERCENT: f32 = 50.0;
// Y floor drop per percent; reaches Y_LIMIT exactly at TAPER_END_PERCENT
pub const TAPER_RATE: f32 =
    (ENTRY_EYE[1] - Y_LIMIT) / (TAPER_END_PERCENT - EYE_LEVEL_UNTIL_PERCENT);
pub const ENTRY_EYE: [f32; 3] = [0.0, 0.5, 9.0];
pub const GATE_TARGET: [f32; 3] = [0.0, 0.5, 0.0];
pub const STAGE_TARGET: [f32; 3] = [-2.0, -1.5, -6.0];
pub const CAMERA_FOVY_DEG: f32 = 50.0;

// Preloading
pub const ASSET_TIMEOUT_MS: u32 = 8_000;

// Form limits
pub const NAME_MAX_CHARS: usize = 60;
pub const MESSAGE_MAX_CHARS: usize = 500;
pub const RSVP_MAX_GUESTS: u8 = 5;
