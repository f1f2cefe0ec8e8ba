//! Style values.

use serde::{Serialize, Serializer};

use super::property::{Keyword, Property};
use crate::color::Color;

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The value of a single style property.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Pixels, unless the property is unitless.
    Number(f64),
    /// Pre-formatted text such as `"100%"` or a gradient function.
    Text(String),
    Color(Color),
    Keyword(Keyword),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// Render as the right-hand side of a CSS declaration for `property`.
    pub fn to_css(&self, property: Property) -> String {
        match self {
            Self::Number(n) if property.is_unitless() => format!("{n}"),
            Self::Number(n) => format!("{n}px"),
            Self::Text(s) => s.clone(),
            Self::Color(c) => c.to_hex(),
            Self::Keyword(k) => k.as_str().to_string(),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

impl From<Keyword> for StyleValue {
    fn from(k: Keyword) -> Self {
        Self::Keyword(k)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole numbers go out as JSON integers.
            Self::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Color(c) => serializer.serialize_str(&c.to_hex()),
            Self::Keyword(k) => k.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_get_px_unless_unitless() {
        let value = StyleValue::from(10);
        assert_eq!(value.to_css(Property::PaddingTop), "10px");
        assert_eq!(value.to_css(Property::ZIndex), "10");
        assert_eq!(StyleValue::from(0.1).to_css(Property::Zoom), "0.1");
    }

    #[test]
    fn other_values_render_verbatim() {
        assert_eq!(StyleValue::from("100%").to_css(Property::Width), "100%");
        assert_eq!(
            StyleValue::from(Color::rgb(255, 0, 16)).to_css(Property::Color),
            "#ff0010"
        );
        assert_eq!(
            StyleValue::from(Keyword::Absolute).to_css(Property::Position),
            "absolute"
        );
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        let json = |value: StyleValue| serde_json::to_string(&value).unwrap();
        assert_eq!(json(StyleValue::from(70)), "70");
        assert_eq!(json(StyleValue::from(-10.0)), "-10");
        assert_eq!(json(StyleValue::from(0.4)), "0.4");
        assert_eq!(json(StyleValue::from(36.4)), "36.4");
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(StyleValue::from(3).as_number(), Some(3.0));
        assert_eq!(StyleValue::from("x").as_number(), None);
        assert_eq!(StyleValue::from("x").as_text(), Some("x"));
        assert_eq!(
            StyleValue::from(Keyword::Auto).as_keyword(),
            Some(Keyword::Auto)
        );
        assert_eq!(StyleValue::from(Keyword::Auto).as_color(), None);
    }
}
