//! Shared numeric constants for the whiteboard crate.

// ── Notes ───────────────────────────────────────────────────────

/// Fixed note card width in canvas units.
pub const NOTE_WIDTH: f64 = 200.0;

/// Fixed note card height in canvas units.
pub const NOTE_HEIGHT: f64 = 120.0;

/// Gutter between neighbouring grid cells.
pub const NOTE_MARGIN: f64 = 20.0;

/// Horizontal pitch of the placement grid.
pub const CELL_WIDTH: f64 = NOTE_WIDTH + NOTE_MARGIN;

/// Vertical pitch of the placement grid.
pub const CELL_HEIGHT: f64 = NOTE_HEIGHT + NOTE_MARGIN;

// ── Sections ────────────────────────────────────────────────────

/// Padding between the canvas edge and the outer sections.
pub const CANVAS_PADDING: f64 = 20.0;

/// Horizontal gap between adjacent sections.
pub const SECTION_GAP: f64 = 20.0;

/// Height of the title band at the top of each section. Notes never sit in it.
pub const SECTION_HEADER_HEIGHT: f64 = 60.0;

/// Left/right inset of the note area inside a section.
pub const SECTION_INNER_PADDING: f64 = 10.0;

/// Space kept below the lowest note when a section grows.
pub const SECTION_BOTTOM_MARGIN: f64 = 40.0;

/// Narrowest canvas whose sections can each hold one note across. Below this
/// a note's width exceeds its section's content width and spills over.
pub const MIN_CANVAS_WIDTH: f64 =
    2.0 * CANVAS_PADDING + 2.0 * SECTION_GAP + 3.0 * (NOTE_WIDTH + 2.0 * SECTION_INNER_PADDING);

// ── Placement ───────────────────────────────────────────────────

/// Upper bound on grid rows scanned before falling back to a jittered origin.
pub const MAX_GRID_ROWS: usize = 500;

/// Half-width of the jitter applied by the placement fallback.
pub const PLACEMENT_FALLBACK_JITTER: f64 = 10.0;

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 2.0;

/// Zoom change per zoom-in / zoom-out action.
pub const ZOOM_STEP: f64 = 0.1;

// ── Clustering ──────────────────────────────────────────────────

/// Minimum similarity to the seed note for joining its cluster.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Minimum number of notes that make up a cluster.
pub const MIN_CLUSTER_SIZE: usize = 2;

/// Keywords must be strictly longer than this many characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Number of consecutive words forming a phrase.
pub const PHRASE_WORDS: usize = 3;

/// Weight of a keyword match in the similarity score.
pub const KEYWORD_WEIGHT: f64 = 1.0;

/// Weight of a phrase match or shared topic in the similarity score.
pub const PHRASE_WEIGHT: f64 = 2.0;

// ── Cluster layout ──────────────────────────────────────────────

/// Smallest circle radius for a cluster.
pub const MIN_CLUSTER_RADIUS: f64 = 30.0;

/// Radius added per cluster member.
pub const CLUSTER_RADIUS_PER_NOTE: f64 = 10.0;

/// Jitter amplitude as a fraction of the cluster radius.
pub const CLUSTER_JITTER_RATIO: f64 = 0.1;

// ── Themes ──────────────────────────────────────────────────────

/// Saturation (percent) of generated theme colours.
pub const THEME_SATURATION: f64 = 70.0;

/// Lightness (percent) of generated theme colours.
pub const THEME_LIGHTNESS: f64 = 85.0;
