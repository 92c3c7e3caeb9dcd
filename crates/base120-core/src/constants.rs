/// Base120 system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of models returned by a recommendation.
pub const DEFAULT_LIMIT: usize = 5;

/// Maximum number of models a caller may request.
pub const MAX_LIMIT: usize = 20;

/// Minimum token length kept by keyword extraction (shorter tokens dropped).
pub const MIN_TOKEN_LEN: usize = 3;

/// Hard cap on extracted keywords per request. Bounds worst-case scoring cost
/// on adversarially long input; normal problem descriptions never hit it.
pub const KEYWORD_CAP: usize = 256;

/// Accumulated pattern weight above which a transformation is reported as a
/// matched pattern in the response.
pub const PATTERN_REPORT_THRESHOLD: f64 = 1.2;

/// Score bonus per priority step: priority 1 → +1.0, priority 5 → +0.2.
pub const PRIORITY_BONUS_STEP: f64 = 0.2;

/// Most fundamental model priority.
pub const PRIORITY_MIN: u8 = 1;

/// Least fundamental model priority.
pub const PRIORITY_MAX: u8 = 5;

/// Maximum number of expanded keywords echoed back in a response.
pub const KEYWORDS_USED_SAMPLE: usize = 10;
