//! Catalog, annealing and layout constants with runtime configuration defaults

use crate::catalog::Category;

// Symbol sets, one literal per category
/// Small snowflake symbols
pub const SMALL_SYMBOLS: &str = "⸳.ꞏ`";
/// Large snowflake symbols
pub const LARGE_SYMBOLS: &str = "*+•×";
/// The blank symbol
pub const SPACE_SYMBOLS: &str = " ";

/// The space character, which never gets identical-symbol tension
pub const SPACE: char = ' ';

/// Ordered category to symbol-literal table
pub const CATEGORY_SYMBOLS: [(Category, &str); 3] = [
    (Category::Small, SMALL_SYMBOLS),
    (Category::Large, LARGE_SYMBOLS),
    (Category::Space, SPACE_SYMBOLS),
];

// Tension increases energy, negative tension rewards proximity
/// Tension weight per category
pub const CATEGORY_TENSIONS: [(Category, f64); 3] = [
    (Category::Small, 0.1),
    (Category::Large, 0.7),
    (Category::Space, -0.1),
];

/// Tension between two identical non-space symbols
pub const IDENTICAL_SYMBOL_TENSION: f64 = 1.0;

/// Target frequency per category, `None` shares the remaining mass
pub const CATEGORY_FREQUENCIES: [(Category, Option<f64>); 3] = [
    (Category::Small, Some(0.375)),
    (Category::Large, Some(0.125)),
    (Category::Space, None),
];

/// Tolerance when checking that probabilities sum to one
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

// Energy walk
/// Multiplicative fade of tension with distance
pub const TENSION_DECAY: f64 = 0.8;
/// Walk stops once the running weight falls below this
pub const TENSION_TOLERANCE: f64 = 0.001;

// Annealing schedule
/// Lowest temperature, visited last
pub const MIN_TEMPERATURE: f64 = 0.2;
/// Highest temperature, visited first
pub const MAX_TEMPERATURE: f64 = 2.5;
/// Number of temperatures in the schedule
pub const TEMPERATURE_STEPS: usize = 10;
/// Swap proposals per grid cell at each temperature
pub const ITERATIONS_PER_SITE: f64 = 1.0;

// Header layout
/// Total width of a rendered header line, marker included
pub const HEADER_LINE_WIDTH: usize = 80;
/// Extra columns of texture kept beside the longest text line
pub const HEADER_PADDING: usize = 3;
/// Pure texture lines above and below the text
pub const HEADER_BUFFER_LINES: usize = 1;
/// Marker prepended to each line when rendering as comments
pub const COMMENT_MARKER: &str = "# ";

// Command-line defaults
/// Fixed seed for reproducible texture generation
pub const DEFAULT_SEED: u64 = 42;
/// Default texture height
pub const DEFAULT_ROWS: usize = 4;
/// Default texture width
pub const DEFAULT_COLS: usize = 80;
/// First year accepted by the header command
pub const MIN_YEAR: u16 = 2015;
/// First puzzle day
pub const MIN_DAY: u8 = 1;
/// Last puzzle day
pub const MAX_DAY: u8 = 25;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
