//! Fixed layout dimensions shared by the element styles. All values are pixels
//! unless noted.

pub const FONT_SIZE: f64 = 14.0;
pub const OUTPUT_PADDING: f64 = 10.0;
pub const PROMPT_VERTICAL_PADDING: f64 = 5.0;
pub const PROMPT_HORIZONTAL_PADDING: f64 = 10.0;
pub const PROMPT_HEIGHT: f64 = 12.0 + 2.0 * PROMPT_VERTICAL_PADDING;
pub const PROMPT_WRAPPER_HEIGHT: f64 = PROMPT_HEIGHT + PROMPT_VERTICAL_PADDING;
pub const SUGGESTION_SIZE: f64 = 2.0 * FONT_SIZE;
pub const TITLE_BAR_HEIGHT: f64 = 24.0;
pub const ROW_HEIGHT: f64 = FONT_SIZE + 4.0;
pub const INFO_PANEL_HEIGHT: f64 = 2.0 * FONT_SIZE + 4.0;
/// Advance of one monospace character.
pub const LETTER_WIDTH: f64 = FONT_SIZE / 2.0 + 1.5;

/// Row height forced on finished jobs that used the alternate screen.
pub const ALTERNATE_ROW_HEIGHT: f64 = 70.0;

pub const OUTPUT_CUT_HEIGHT: f64 = FONT_SIZE * 2.6;
pub const OUTPUT_CUT_Z_INDEX: i32 = 0;

pub const DECORATION_WIDTH: f64 = 30.0;
pub const ACTIONS_WIDTH: f64 = 150.0;
pub const ARROW_Z_INDEX: i32 = 2;
pub const PROGRESS_BAR_STRIPES_SIZE: f64 = 30.0;

pub const TAB_WIDTH: f64 = 150.0;

/// Maximum number of suggestions the autocompletion box shows at once.
pub const SUGGESTIONS_LIMIT: usize = 9;

pub const DEFAULT_SHADOW: &str = "0 2px 8px 1px rgba(0, 0, 0, 0.3)";

pub const FONT_FAMILY: &str = "'Hack', 'Fira Code', 'Menlo', monospace";
pub const ICON_FONT_FAMILY: &str = "FontAwesome";
