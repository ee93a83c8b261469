//! Field-by-field prompts over a [`FormModel`].
//!
//! Each entry is prompted with its current value pre-filled in the line editor.
//! Accepting the line unchanged keeps the cached value; clearing it leaves the
//! field to the record factory's defaults. Ctrl-C cancels the whole form.

use billzapp::fields::Widget;
use billzapp::views::{FormEntry, FormModel};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::Value;

/// Prompts for every entry of `form`. Returns `false` when the user cancelled.
///
/// `skip_id` leaves the id out, for edits where it cannot change.
pub fn fill(editor: &mut DefaultEditor, form: &mut FormModel, skip_id: bool) -> rustyline::Result<bool> {
    let entries: Vec<FormEntry> = form.entries().to_vec();
    for entry in entries {
        if skip_id && entry.field_id == "id" {
            continue;
        }
        let initial = entry.current().map(value_to_input).unwrap_or_default();
        let prompt = format!("{}{}: ", entry.header, widget_hint(&entry.widget));
        let line = match editor.readline_with_initial(&prompt, (&initial, "")) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
            Err(e) => return Err(e),
        };

        let line = line.trim();
        if line == initial.trim() {
            continue;
        }
        let value = if line.is_empty() {
            Value::Null
        } else {
            input_to_value(&entry.widget, line)
        };
        form.set_live(entry.field_id, value);
    }
    Ok(true)
}

/// Prompt suffix describing the expected input.
pub fn widget_hint(widget: &Widget) -> String {
    match widget {
        Widget::Text => String::new(),
        Widget::Number => " (number)".to_string(),
        Widget::Currency { .. } => " (amount)".to_string(),
        Widget::Date => " (m/d/yyyy)".to_string(),
        Widget::Dropdown { options } => {
            let numbered: Vec<String> = options
                .iter()
                .enumerate()
                .map(|(i, option)| format!("{}={}", i + 1, option))
                .collect();
            format!(" [{}]", numbered.join(" "))
        }
    }
}

/// Converts typed input to the raw value the widget would hold.
///
/// Numbers that do not parse stay text; the record factory coerces them.
/// Dropdowns accept an option's 1-based position as well as its token.
pub fn input_to_value(widget: &Widget, input: &str) -> Value {
    match widget {
        Widget::Number | Widget::Currency { .. } => input
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(input.to_string())),
        Widget::Dropdown { options } => input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .map(|option| Value::String(option.clone()))
            .unwrap_or_else(|| Value::String(input.to_string())),
        Widget::Text | Widget::Date => Value::String(input.to_string()),
    }
}

/// The text a prompt is pre-filled with for a raw value.
pub fn value_to_input(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dropdown() -> Widget {
        Widget::Dropdown {
            options: vec!["draft".into(), "due".into(), "paid".into()],
        }
    }

    #[test]
    fn test_numbers_parse_for_amount_widgets() {
        let currency = Widget::Currency { decimal_places: 2 };
        assert_eq!(input_to_value(&currency, "1,200.50"), json!(1200.5));
        assert_eq!(input_to_value(&Widget::Number, "7"), json!(7.0));
        assert_eq!(input_to_value(&currency, "lots"), json!("lots"));
    }

    #[test]
    fn test_dropdown_accepts_position_or_token() {
        assert_eq!(input_to_value(&dropdown(), "2"), json!("due"));
        assert_eq!(input_to_value(&dropdown(), "paid"), json!("paid"));
        assert_eq!(input_to_value(&dropdown(), "9"), json!("9"));
        assert_eq!(input_to_value(&dropdown(), "0"), json!("0"));
    }

    #[test]
    fn test_text_and_dates_stay_strings() {
        assert_eq!(input_to_value(&Widget::Date, "3/1/2024"), json!("3/1/2024"));
        assert_eq!(input_to_value(&Widget::Text, "42"), json!("42"));
    }

    #[test]
    fn test_hints_describe_widgets() {
        assert_eq!(widget_hint(&Widget::Text), "");
        assert_eq!(widget_hint(&dropdown()), " [1=draft 2=due 3=paid]");
    }

    #[test]
    fn test_prefill_text_for_values() {
        assert_eq!(value_to_input(&json!(null)), "");
        assert_eq!(value_to_input(&json!("Acme")), "Acme");
        assert_eq!(value_to_input(&json!(12.5)), "12.5");
    }
}
