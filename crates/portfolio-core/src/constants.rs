/// Animation tuning constants.
///
/// These express intended behavior (thresholds, time constants, gains) and
/// keep magic numbers out of the code.
// Particle field
pub const PARTICLE_BOUNDS: f32 = 1000.0;
pub const PARTICLE_SPAWN_SPAN: f32 = 2000.0; // positions uniform in ±SPAN/2
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocities uniform in ±SPAN/2
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_COUNT_MOBILE: usize = 75;
pub const MOBILE_WIDTH_PX: f32 = 768.0;

// Pointer attraction: particles within the radius of the scaled pointer
// target get a velocity nudge. There is deliberately no damping or cap.
pub const POINTER_WORLD_SCALE: f32 = 500.0;
pub const ATTRACT_RADIUS: f32 = 300.0;
pub const ATTRACT_GAIN: f32 = 1e-4;

// Camera: fixed Z, x/y drift toward a pointer-derived offset
pub const CAMERA_Z: f32 = 1000.0;
pub const CAMERA_DRIFT_SPAN: f32 = 50.0;
pub const CAMERA_EASE: f32 = 0.1; // fraction of remaining distance per frame
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 4000.0;

// Cursor follower
pub const FOLLOWER_LAG: f32 = 0.1; // inner dot; the ring has zero lag
pub const HOVER_SCALE: f32 = 1.5;

// Scroll reveal
pub const REVEAL_THRESHOLD: f32 = 0.8; // fraction of viewport height
pub const REVEAL_OFFSET_PX: f32 = 50.0;
pub const REVEAL_DURATION_SEC: f32 = 1.0;
pub const PARALLAX_DRIFT: f32 = -0.30; // of element height over the scrub span

// Staggered child entrances
pub const STAGGER_CARD_SEC: f32 = 0.1;
pub const STAGGER_TIMELINE_SEC: f32 = 0.15;
pub const STAGGER_CONTENT_SEC: f32 = 0.2;
pub const STAGGER_OFFSET_PX: f32 = 30.0;

// Skill bars: one-shot width fill
pub const FILL_DURATION_SEC: f32 = 1.5;

// Anchor navigation
pub const SCROLL_DURATION_SEC: f32 = 1.5;
pub const HEADER_OFFSET_PX: f32 = 80.0;

// Contact form
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SUBMIT_LATENCY_MS: i32 = 1500;
pub const STATUS_CLEAR_MS: i32 = 5000;
