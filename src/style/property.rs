//! The closed vocabulary of style properties and keyword values.
//!
//! Each table row maps a variant to the camelCase key the component layer
//! uses, the CSS declaration name, and whether bare numbers carry a `px`
//! unit.

use serde::{Serialize, Serializer};

macro_rules! properties {
    (@unitless px) => { false };
    (@unitless unitless) => { true };
    ($($variant:ident => $key:literal, $css:literal, $unit:ident;)+) => {
        /// A style property name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Property {
            $($variant),+
        }

        impl Property {
            /// Every property, in declaration order.
            pub const ALL: &'static [Property] = &[$(Property::$variant),+];

            /// camelCase key, e.g. `backgroundColor`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Property::$variant => $key),+
                }
            }

            /// CSS declaration name, e.g. `background-color`.
            pub fn css_name(&self) -> &'static str {
                match self {
                    $(Property::$variant => $css),+
                }
            }

            /// Numbers for this property are rendered without a `px` suffix.
            pub fn is_unitless(&self) -> bool {
                match self {
                    $(Property::$variant => properties!(@unitless $unit)),+
                }
            }
        }
    };
}

properties! {
    Display => "display", "display", px;
    Position => "position", "position", px;
    Top => "top", "top", px;
    Bottom => "bottom", "bottom", px;
    Left => "left", "left", px;
    Right => "right", "right", px;
    ZIndex => "zIndex", "z-index", unitless;
    Width => "width", "width", px;
    Height => "height", "height", px;
    MinWidth => "minWidth", "min-width", px;
    MinHeight => "minHeight", "min-height", px;
    MaxHeight => "maxHeight", "max-height", px;
    Margin => "margin", "margin", px;
    MarginTop => "marginTop", "margin-top", px;
    MarginRight => "marginRight", "margin-right", px;
    MarginBottom => "marginBottom", "margin-bottom", px;
    Padding => "padding", "padding", px;
    PaddingTop => "paddingTop", "padding-top", px;
    PaddingRight => "paddingRight", "padding-right", px;
    PaddingBottom => "paddingBottom", "padding-bottom", px;
    PaddingLeft => "paddingLeft", "padding-left", px;
    Flex => "flex", "flex", unitless;
    FlexWrap => "flexWrap", "flex-wrap", px;
    FlexDirection => "flexDirection", "flex-direction", px;
    JustifyContent => "justifyContent", "justify-content", px;
    Float => "float", "float", px;
    GridArea => "gridArea", "grid-area", px;
    GridTemplateAreas => "gridTemplateAreas", "grid-template-areas", px;
    GridTemplateRows => "gridTemplateRows", "grid-template-rows", px;
    GridTemplateColumns => "gridTemplateColumns", "grid-template-columns", px;
    Overflow => "overflow", "overflow", px;
    OverflowX => "overflowX", "overflow-x", px;
    Color => "color", "color", px;
    Background => "background", "background", px;
    BackgroundColor => "backgroundColor", "background-color", px;
    BackgroundImage => "backgroundImage", "background-image", px;
    BackgroundSize => "backgroundSize", "background-size", px;
    Opacity => "opacity", "opacity", unitless;
    BoxShadow => "boxShadow", "box-shadow", px;
    Outline => "outline", "outline", px;
    Zoom => "zoom", "zoom", unitless;
    FontFamily => "fontFamily", "font-family", px;
    FontSize => "fontSize", "font-size", px;
    FontStyle => "fontStyle", "font-style", px;
    FontWeight => "fontWeight", "font-weight", unitless;
    LineHeight => "lineHeight", "line-height", unitless;
    TextAlign => "textAlign", "text-align", px;
    TextDecoration => "textDecoration", "text-decoration", px;
    VerticalAlign => "verticalAlign", "vertical-align", px;
    WhiteSpace => "whiteSpace", "white-space", px;
    ListStyleType => "listStyleType", "list-style-type", px;
    Content => "content", "content", px;
    Cursor => "cursor", "cursor", px;
    PointerEvents => "pointerEvents", "pointer-events", px;
    Transform => "transform", "transform", px;
    TransformOrigin => "transformOrigin", "transform-origin", px;
    Transition => "transition", "transition", px;
    Animation => "animation", "animation", px;
    WebkitAppearance => "WebkitAppearance", "-webkit-appearance", px;
    WebkitFontFeatureSettings => "WebkitFontFeatureSettings", "-webkit-font-feature-settings", px;
    WebkitAppRegion => "WebkitAppRegion", "-webkit-app-region", px;
    WebkitMarginBefore => "WebkitMarginBefore", "-webkit-margin-before", px;
    WebkitMarginAfter => "WebkitMarginAfter", "-webkit-margin-after", px;
    WebkitPaddingStart => "WebkitPaddingStart", "-webkit-padding-start", px;
    WebkitUserSelect => "WebkitUserSelect", "-webkit-user-select", px;
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

macro_rules! keywords {
    ($($variant:ident => $css:literal,)+) => {
        /// A literal keyword value from a small closed set.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant),+
        }

        impl Keyword {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $css),+
                }
            }
        }
    };
}

keywords! {
    None => "none",
    Auto => "auto",
    Normal => "normal",
    Transparent => "transparent",
    Fixed => "fixed",
    Relative => "relative",
    Absolute => "absolute",
    Block => "block",
    InlineBlock => "inline-block",
    Flex => "flex",
    Grid => "grid",
    Nowrap => "nowrap",
    Column => "column",
    Center => "center",
    Right => "right",
    Middle => "middle",
    Hidden => "hidden",
    Scroll => "scroll",
    PreWrap => "pre-wrap",
    Pointer => "pointer",
    Help => "help",
    Progress => "progress",
    Underline => "underline",
    Bold => "bold",
    Drag => "drag",
}

impl Serialize for Keyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
