// Site-wide tuning knobs. Everything here is compile-time; the site has no
// runtime configuration surface.

/// Header gets the `scrolled` style past this many pixels.
pub const HEADER_SCROLLED_AFTER: f64 = 100.0;

/// Back-to-top button shows past this many pixels.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const ANCHOR_HEADER_OFFSET: f64 = 90.0;

/// Added to the scroll position before matching it against section bounds.
pub const ACTIVE_SECTION_PROBE: f64 = 150.0;

/// How long the submit button stays in "SUBMITTING..." after a submission.
pub const SUBMIT_RESET_DELAY_MS: u32 = 2_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
