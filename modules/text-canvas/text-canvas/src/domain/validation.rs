//! Explicit input validation, executed before any persistence call.

use text_canvas_sdk::{NewSettings, Settings, SettingsPatch};

use super::error::FieldViolation;
use super::fields::{CanvasFields, SettingsFields};
use super::surface::MAX_CANVAS_SIDE;

/// Validate a create payload. Every field is required.
///
/// # Errors
/// Returns every violation found, one entry per offending field.
pub fn validate_new_settings(input: &SettingsPatch) -> Result<NewSettings, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = input
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(str::to_owned);
    if name.is_none() {
        violations.push(required(SettingsFields::NAME));
    }

    let numbers = [
        (SettingsFields::MIN_FONT_SIZE, input.min_font_size),
        (SettingsFields::MAX_FONT_SIZE, input.max_font_size),
        (SettingsFields::LINE_SPACE, input.line_space),
        (SettingsFields::WORD_SPACE, input.word_space),
        (SettingsFields::CANVAS_HEIGHT, input.canvas_height),
        (SettingsFields::CANVAS_WIDTH, input.canvas_width),
        (SettingsFields::PADDING, input.padding),
    ];
    for (field, value) in numbers {
        if value.is_none() {
            violations.push(required(field));
        }
    }

    check_ranges(input, &mut violations);
    if let (Some(min), Some(max)) = (input.min_font_size, input.max_font_size) {
        check_font_order(min, max, &mut violations);
    }

    let (
        Some(name),
        Some(min_font_size),
        Some(max_font_size),
        Some(line_space),
        Some(word_space),
        Some(canvas_height),
        Some(canvas_width),
        Some(padding),
    ) = (
        name,
        input.min_font_size,
        input.max_font_size,
        input.line_space,
        input.word_space,
        input.canvas_height,
        input.canvas_width,
        input.padding,
    )
    else {
        return Err(violations);
    };

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(NewSettings {
        name,
        min_font_size,
        max_font_size,
        line_space,
        word_space,
        canvas_height,
        canvas_width,
        padding,
    })
}

/// Validate a partial update against the record it will be applied to.
///
/// # Errors
/// Returns every violation found in the present fields and in the merged
/// font-size range.
pub fn validate_settings_patch(
    patch: &SettingsPatch,
    current: &Settings,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        violations.push(FieldViolation::new(
            SettingsFields::NAME,
            "name must not be empty",
        ));
    }

    check_ranges(patch, &mut violations);
    check_font_order(
        patch.min_font_size.unwrap_or(current.min_font_size),
        patch.max_font_size.unwrap_or(current.max_font_size),
        &mut violations,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Validate the text submitted for rendering and return it as given.
///
/// Blankness is judged on the trimmed text; the length bound applies to the
/// text as submitted, since that is what gets stored.
///
/// # Errors
/// Rejects blank text and text longer than `max_len` characters.
pub fn validate_text(text: Option<&str>, max_len: usize) -> Result<String, FieldViolation> {
    let text = text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(required(CanvasFields::TEXT));
    }
    if text.chars().count() > max_len {
        return Err(FieldViolation::new(
            CanvasFields::TEXT,
            format!("text must be at most {max_len} characters"),
        ));
    }
    Ok(text.to_owned())
}

fn required(field: &str) -> FieldViolation {
    FieldViolation::new(field, format!("{field} is required"))
}

fn check_ranges(input: &SettingsPatch, violations: &mut Vec<FieldViolation>) {
    let positive = [
        (SettingsFields::MIN_FONT_SIZE, input.min_font_size),
        (SettingsFields::MAX_FONT_SIZE, input.max_font_size),
        (SettingsFields::CANVAS_HEIGHT, input.canvas_height),
        (SettingsFields::CANVAS_WIDTH, input.canvas_width),
    ];
    for (field, value) in positive {
        if value.is_some_and(|v| v < 1) {
            violations.push(FieldViolation::new(
                field,
                format!("{field} must be greater than 0"),
            ));
        }
    }

    let dimensions = [
        (SettingsFields::CANVAS_HEIGHT, input.canvas_height),
        (SettingsFields::CANVAS_WIDTH, input.canvas_width),
    ];
    for (field, value) in dimensions {
        if value.is_some_and(|v| v > MAX_CANVAS_SIDE) {
            violations.push(FieldViolation::new(
                field,
                format!("{field} must be at most {MAX_CANVAS_SIDE}"),
            ));
        }
    }

    let non_negative = [
        (SettingsFields::LINE_SPACE, input.line_space),
        (SettingsFields::WORD_SPACE, input.word_space),
        (SettingsFields::PADDING, input.padding),
    ];
    for (field, value) in non_negative {
        if value.is_some_and(|v| v < 0) {
            violations.push(FieldViolation::new(
                field,
                format!("{field} must not be negative"),
            ));
        }
    }
}

fn check_font_order(min: i32, max: i32, violations: &mut Vec<FieldViolation>) {
    if min > max {
        violations.push(FieldViolation::new(
            SettingsFields::MAX_FONT_SIZE,
            "maxFontSize must be greater than or equal to minFontSize",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn full_input() -> SettingsPatch {
        SettingsPatch {
            name: Some("default".to_owned()),
            min_font_size: Some(66),
            max_font_size: Some(114),
            line_space: Some(40),
            word_space: Some(20),
            canvas_height: Some(2430),
            canvas_width: Some(1770),
            padding: Some(120),
        }
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn full_input_passes_unchanged() {
        let new = validate_new_settings(&full_input()).unwrap();
        assert_eq!(new.name, "default");
        assert_eq!(new.min_font_size, 66);
        assert_eq!(new.max_font_size, 114);
        assert_eq!(new.line_space, 40);
        assert_eq!(new.word_space, 20);
        assert_eq!(new.canvas_height, 2430);
        assert_eq!(new.canvas_width, 1770);
        assert_eq!(new.padding, 120);
    }

    #[test]
    fn each_missing_field_is_reported() {
        let violations = validate_new_settings(&SettingsPatch::default()).unwrap_err();
        assert_eq!(
            fields(&violations),
            vec![
                "name",
                "minFontSize",
                "maxFontSize",
                "lineSpace",
                "wordSpace",
                "canvasHeight",
                "canvasWidth",
                "padding"
            ]
        );
        assert_eq!(violations[1].message, "minFontSize is required");
    }

    #[test]
    fn missing_padding_alone_is_rejected() {
        let input = SettingsPatch {
            padding: None,
            ..full_input()
        };
        let violations = validate_new_settings(&input).unwrap_err();
        assert_eq!(fields(&violations), vec!["padding"]);
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let input = SettingsPatch {
            name: Some("   ".to_owned()),
            ..full_input()
        };
        let violations = validate_new_settings(&input).unwrap_err();
        assert_eq!(violations[0].message, "name is required");
    }

    #[test]
    fn inverted_font_range_is_rejected() {
        let input = SettingsPatch {
            min_font_size: Some(50),
            max_font_size: Some(40),
            ..full_input()
        };
        let violations = validate_new_settings(&input).unwrap_err();
        assert_eq!(fields(&violations), vec!["maxFontSize"]);
    }

    #[test]
    fn negative_and_zero_values_are_rejected() {
        let input = SettingsPatch {
            padding: Some(-1),
            canvas_width: Some(0),
            ..full_input()
        };
        let violations = validate_new_settings(&input).unwrap_err();
        assert_eq!(fields(&violations), vec!["canvasWidth", "padding"]);
    }

    #[test]
    fn patch_checks_merged_font_range() {
        let current = Settings::from_new(
            Uuid::new_v4(),
            validate_new_settings(&full_input()).unwrap(),
            OffsetDateTime::UNIX_EPOCH,
        );

        let ok = SettingsPatch {
            min_font_size: Some(100),
            ..SettingsPatch::default()
        };
        assert!(validate_settings_patch(&ok, &current).is_ok());

        let bad = SettingsPatch {
            min_font_size: Some(200),
            ..SettingsPatch::default()
        };
        let violations = validate_settings_patch(&bad, &current).unwrap_err();
        assert_eq!(fields(&violations), vec!["maxFontSize"]);
    }

    #[test]
    fn empty_patch_is_valid() {
        let current = Settings::from_new(
            Uuid::new_v4(),
            validate_new_settings(&full_input()).unwrap(),
            OffsetDateTime::UNIX_EPOCH,
        );
        assert!(validate_settings_patch(&SettingsPatch::default(), &current).is_ok());
    }

    #[test]
    fn canvas_larger_than_the_limit_is_rejected() {
        let input = SettingsPatch {
            canvas_height: Some(100_000),
            canvas_width: Some(100_000),
            ..full_input()
        };
        let violations = validate_new_settings(&input).unwrap_err();
        assert_eq!(fields(&violations), vec!["canvasHeight", "canvasWidth"]);
        assert_eq!(violations[0].message, "canvasHeight must be at most 8192");

        let edge = SettingsPatch {
            canvas_height: Some(MAX_CANVAS_SIDE),
            canvas_width: Some(MAX_CANVAS_SIDE),
            ..full_input()
        };
        assert!(validate_new_settings(&edge).is_ok());
    }

    #[test]
    fn patch_cannot_grow_canvas_past_the_limit() {
        let current = Settings::from_new(
            Uuid::new_v4(),
            validate_new_settings(&full_input()).unwrap(),
            OffsetDateTime::UNIX_EPOCH,
        );
        let patch = SettingsPatch {
            canvas_width: Some(MAX_CANVAS_SIDE + 1),
            ..SettingsPatch::default()
        };
        let violations = validate_settings_patch(&patch, &current).unwrap_err();
        assert_eq!(fields(&violations), vec!["canvasWidth"]);
    }

    #[test]
    fn text_is_kept_as_given_and_bounded() {
        assert_eq!(validate_text(Some("  Hello World "), 20).unwrap(), "  Hello World ");
        assert_eq!(validate_text(None, 20).unwrap_err().field, "text");
        assert_eq!(validate_text(Some(" "), 20).unwrap_err().message, "text is required");
        assert!(validate_text(Some("abcdef"), 5).is_err());
    }
}
