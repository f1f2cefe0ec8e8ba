//! Integration tests for the stylesheet's public API

use std::cell::Cell;

use panestyle::color::{failurize, Color, ColorId};
use panestyle::grid::{compile_area_template, compile_column_template};
use panestyle::state::{Attributes, ScreenBufferType, Status, TabHoverState};
use panestyle::style::{displays_above, Keyword, Property, StyleValue};
use panestyle::viewport::FixedViewport;
use panestyle::{StyleDescriptor, Stylesheet};

fn number(style: &StyleDescriptor, property: Property) -> Option<f64> {
    style.get(property).and_then(StyleValue::as_number)
}

fn color(style: &StyleDescriptor, property: Property) -> Option<Color> {
    style.get(property).and_then(StyleValue::as_color)
}

#[test]
fn finished_rows_on_the_alternate_screen_have_fixed_height() {
    let sheet = Stylesheet::default();
    for status in [Status::Success, Status::Failure, Status::Interrupted] {
        let row = sheet.row(status, ScreenBufferType::Alternate);
        assert_eq!(number(&row, Property::Height), Some(70.0), "{status}");
    }
    for status in [Status::NotStarted, Status::InProgress] {
        let row = sheet.row(status, ScreenBufferType::Alternate);
        assert!(!row.contains(Property::Height), "{status}");
    }
    let standard = sheet.row(Status::Success, ScreenBufferType::Standard);
    assert!(!standard.contains(Property::Height));
}

#[test]
fn failed_output_is_tinted_only_on_the_standard_screen() {
    let sheet = Stylesheet::default();
    let tinted = failurize(sheet.theme().background);

    let failed = sheet.output(ScreenBufferType::Standard, Status::Failure);
    assert_eq!(color(&failed, Property::BackgroundColor), Some(tinted));

    let ok = sheet.output(ScreenBufferType::Standard, Status::Success);
    assert_eq!(
        color(&ok, Property::BackgroundColor),
        Some(sheet.theme().background)
    );
}

#[test]
fn running_alternate_output_becomes_an_overlay() {
    let sheet = Stylesheet::default();
    let output = sheet.output(ScreenBufferType::Alternate, Status::InProgress);
    assert_eq!(
        output.get(Property::Position).and_then(StyleValue::as_keyword),
        Some(Keyword::Fixed)
    );
}

#[test]
fn inverse_swaps_colors_and_cursor_overrides_them() {
    let sheet = Stylesheet::default();
    let colors = *sheet.theme().colors();
    let base = Attributes {
        color: ColorId::Green,
        background_color: ColorId::Blue,
        ..Attributes::default()
    };

    let plain = sheet.char_group(&base, Status::InProgress);
    assert_eq!(color(&plain, Property::Color), Some(colors.green));
    assert_eq!(color(&plain, Property::BackgroundColor), Some(colors.blue));

    let inverse = Attributes { inverse: true, ..base };
    let swapped = sheet.char_group(&inverse, Status::InProgress);
    assert_eq!(color(&swapped, Property::Color), Some(colors.blue));
    assert_eq!(color(&swapped, Property::BackgroundColor), Some(colors.green));

    for inverse in [false, true] {
        let cursor = Attributes {
            inverse,
            cursor: true,
            ..base
        };
        let style = sheet.char_group(&cursor, Status::InProgress);
        assert_eq!(color(&style, Property::Color), Some(colors.black));
        assert_eq!(color(&style, Property::BackgroundColor), Some(colors.white));
    }
}

#[test]
fn tab_close_color_takes_three_values() {
    let sheet = Stylesheet::default();
    let colors = *sheet.theme().colors();
    let value = |hover| sheet.tab_close(hover).get(Property::Color).cloned();

    assert_eq!(value(TabHoverState::Close), Some(StyleValue::Color(colors.red)));
    assert_eq!(value(TabHoverState::Tab), Some(StyleValue::Color(colors.white)));
    assert_eq!(
        value(TabHoverState::Nothing),
        Some(StyleValue::Keyword(Keyword::Transparent))
    );
}

#[test]
fn autocomplete_box_flips_at_the_viewport_edge() {
    let sheet = Stylesheet::default();
    let viewport = FixedViewport(800.0);

    assert!(!displays_above(548.0, 800.0));
    assert!(displays_above(549.0, 800.0));

    let below = sheet.autocomplete_box(&viewport, 548.0, 0, false);
    assert_eq!(number(&below, Property::Top), Some(27.0));

    let above = sheet.autocomplete_box(&viewport, 549.0, 0, false);
    assert_eq!(number(&above, Property::Bottom), Some(28.0));

    let with_description = sheet.autocomplete_box(&viewport, 549.0, 0, true);
    assert_eq!(number(&with_description, Property::Bottom), Some(56.0));
}

#[test]
fn autocomplete_box_follows_the_caret() {
    let sheet = Stylesheet::default();
    let viewport = FixedViewport(800.0);
    let left = |caret| number(&sheet.autocomplete_box(&viewport, 0.0, caret, false), Property::Left);

    let start = left(0).expect("left is set");
    assert_eq!(left(4), Some(start + 4.0 * 8.5));
}

#[test]
fn viewport_is_read_once_per_call() {
    let sheet = Stylesheet::default();
    let reads = Cell::new(0);
    let viewport = || {
        reads.set(reads.get() + 1);
        600.0
    };
    sheet.autocomplete_box(&viewport, 100.0, 3, true);
    assert_eq!(reads.get(), 1);
}

#[test]
fn prompt_grid_compiles_to_css_templates() {
    let sheet = Stylesheet::default();
    let grid = sheet.prompt_grid();
    assert_eq!(compile_area_template(grid), "'decoration prompt actions'");
    assert_eq!(compile_column_template(grid), "30px 1fr 150px");
    assert_eq!(sheet.prompt_template().areas, "'decoration prompt actions'");
}

#[test]
fn styles_are_pure_functions_of_state() {
    let sheet = Stylesheet::default();
    assert_eq!(
        sheet.prompt_wrapper(Status::Failure, true),
        sheet.prompt_wrapper(Status::Failure, true)
    );
    assert_eq!(sheet.arrow(Status::Failure), sheet.arrow(Status::Success));
    assert_ne!(sheet.arrow(Status::InProgress), sheet.arrow(Status::Success));
    assert_ne!(
        sheet.arrow_inner(Status::Failure),
        sheet.arrow_inner(Status::Success)
    );
}

#[test]
fn descriptors_serialize_with_camel_case_keys() {
    let sheet = Stylesheet::default();
    let json = serde_json::to_value(sheet.char_group(&Attributes::default(), Status::Success))
        .expect("serializable");
    assert_eq!(json["display"], "inline-block");
    assert_eq!(json["backgroundColor"], "#2b303b");
}
