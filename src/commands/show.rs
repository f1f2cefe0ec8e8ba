//! `show` subcommand: print one element style

use anyhow::Result;
use clap::{Args, ValueEnum};

use panestyle::color::{Brightness, ColorId};
use panestyle::state::{Attributes, ScreenBufferType, Status, TabHoverState, VcsStatus, Weight};
use panestyle::viewport::FixedViewport;
use panestyle::{StyleDescriptor, Stylesheet};

/// Every element the stylesheet can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Element {
    Application,
    Jobs,
    Row,
    Output,
    Session,
    ActiveTabContent,
    OutputCut,
    OutputCutIcon,
    PromptWrapper,
    Arrow,
    ArrowInner,
    PromptInfo,
    Actions,
    Action,
    DecorationToggle,
    Prompt,
    AutocompletedPreview,
    PromptPlaceholder,
    CommandSign,
    Tabs,
    Tab,
    TabClose,
    AutocompleteBox,
    AutocompleteSynopsis,
    AutocompleteValue,
    AutocompleteItem,
    SuggestionsList,
    AutocompletionDescription,
    SuggestionIcon,
    StatusLine,
    PresentDirectory,
    VcsData,
    StatusLineIcon,
    VcsStatus,
    CharGroup,
}

/// Output format for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Css,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Element to describe
    #[arg(value_enum)]
    pub element: Element,

    /// Job status
    #[arg(long, default_value = "not-started")]
    pub status: Status,

    /// Active screen buffer
    #[arg(long, default_value = "standard")]
    pub buffer: ScreenBufferType,

    /// Tab hover target
    #[arg(long, default_value = "nothing")]
    pub hover: TabHoverState,

    /// Working tree state
    #[arg(long, default_value = "clean")]
    pub vcs: VcsStatus,

    /// Session or tab is active
    #[arg(long)]
    pub active: bool,

    /// Element is hovered
    #[arg(long)]
    pub hovered: bool,

    /// Prompt is sticky
    #[arg(long)]
    pub sticky: bool,

    /// Suggestion is highlighted
    #[arg(long)]
    pub highlighted: bool,

    /// Toggle is enabled
    #[arg(long)]
    pub enabled: bool,

    /// Autocompletion box shows a description
    #[arg(long)]
    pub description: bool,

    /// Vertical offset of the autocompletion anchor
    #[arg(long, default_value_t = 0.0)]
    pub offset_top: f64,

    /// Caret column
    #[arg(long, default_value_t = 0)]
    pub caret: usize,

    /// Viewport height used for autocompletion placement
    #[arg(long, default_value_t = 800.0)]
    pub viewport_height: f64,

    /// Cell foreground color
    #[arg(long, default_value = "white")]
    pub fg: ColorId,

    /// Cell background color
    #[arg(long, default_value = "black")]
    pub bg: ColorId,

    /// Use the bright foreground variant
    #[arg(long)]
    pub bright: bool,

    /// Bold cell
    #[arg(long)]
    pub bold: bool,

    /// Underlined cell
    #[arg(long)]
    pub underline: bool,

    /// Inverse video cell
    #[arg(long)]
    pub inverse: bool,

    /// Cell under the cursor
    #[arg(long)]
    pub cursor: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

impl ShowArgs {
    fn attributes(&self) -> Attributes {
        Attributes {
            color: self.fg,
            background_color: self.bg,
            brightness: if self.bright {
                Brightness::Bright
            } else {
                Brightness::Normal
            },
            weight: if self.bold { Weight::Bold } else { Weight::Normal },
            underline: self.underline,
            inverse: self.inverse,
            cursor: self.cursor,
        }
    }
}

/// Compute the descriptor selected by `args`.
pub fn describe(sheet: &Stylesheet, args: &ShowArgs) -> StyleDescriptor {
    match args.element {
        Element::Application => sheet.application(),
        Element::Jobs => sheet.jobs(args.active),
        Element::Row => sheet.row(args.status, args.buffer),
        Element::Output => sheet.output(args.buffer, args.status),
        Element::Session => sheet.session(args.active),
        Element::ActiveTabContent => sheet.active_tab_content(),
        Element::OutputCut => sheet.output_cut(args.status, args.hovered),
        Element::OutputCutIcon => sheet.output_cut_icon(),
        Element::PromptWrapper => sheet.prompt_wrapper(args.status, args.sticky),
        Element::Arrow => sheet.arrow(args.status),
        Element::ArrowInner => sheet.arrow_inner(args.status),
        Element::PromptInfo => sheet.prompt_info(args.status),
        Element::Actions => sheet.actions(),
        Element::Action => sheet.action(),
        Element::DecorationToggle => sheet.decoration_toggle(args.enabled),
        Element::Prompt => sheet.prompt(),
        Element::AutocompletedPreview => sheet.autocompleted_preview(),
        Element::PromptPlaceholder => sheet.prompt_placeholder(),
        Element::CommandSign => sheet.command_sign(),
        Element::Tabs => sheet.tabs(),
        Element::Tab => sheet.tab(args.hovered, args.active),
        Element::TabClose => sheet.tab_close(args.hover),
        Element::AutocompleteBox => sheet.autocomplete_box(
            &FixedViewport(args.viewport_height),
            args.offset_top,
            args.caret,
            args.description,
        ),
        Element::AutocompleteSynopsis => sheet.autocomplete_synopsis(),
        Element::AutocompleteValue => sheet.autocomplete_value(),
        Element::AutocompleteItem => sheet.autocomplete_item(args.highlighted),
        Element::SuggestionsList => sheet.suggestions_list(),
        Element::AutocompletionDescription => sheet.autocompletion_description(),
        Element::SuggestionIcon => sheet.suggestion_icon(),
        Element::StatusLine => sheet.status_line(),
        Element::PresentDirectory => sheet.present_directory(),
        Element::VcsData => sheet.vcs_data(),
        Element::StatusLineIcon => sheet.status_line_icon(),
        Element::VcsStatus => sheet.vcs_status(args.vcs),
        Element::CharGroup => sheet.char_group(&args.attributes(), args.status),
    }
}

/// Render a descriptor in the requested format.
pub fn render(style: &StyleDescriptor, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(style)?),
        Format::Css => Ok(style.to_css()),
    }
}

/// Print the selected element style.
#[cfg(not(tarpaulin_include))]
pub fn handle(sheet: &Stylesheet, args: &ShowArgs) -> Result<()> {
    let style = describe(sheet, args);
    println!("{}", render(&style, args.format)?);
    Ok(())
}
