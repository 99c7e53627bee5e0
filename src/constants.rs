/// Web-side tuning constants (rendering and DOM wiring).
///
/// Animation timing/threshold constants live in `portfolio_core::constants`;
/// these cover only what the browser layer owns.
// Scene colors: accent #00ff88 with the layer opacity carried in alpha.
pub const POINT_TINT: [f32; 4] = [0.0, 1.0, 0.533, 0.8];
pub const LINE_TINT: [f32; 4] = [0.0, 1.0, 0.533, 0.2];

// Link overlay between nearby particles
pub const LINK_DISTANCE: f32 = 180.0;
pub const MAX_LINK_VERTICES: usize = 600; // 300 segments

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const CANVAS_ID: &str = "bg-canvas";

// Particle field RNG seed (fixed: the backdrop is decorative, determinism
// makes visual regressions diffable)
pub const FIELD_SEED: u64 = 42;

// Elements that scale the cursor dot on hover
pub const INTERACTIVE_SELECTOR: &str = r#"a, button, input, textarea, [role="button"]"#;

// CSS timing function for the one-shot skill-bar fill (power2-out shape)
pub const FILL_EASE_CSS: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
