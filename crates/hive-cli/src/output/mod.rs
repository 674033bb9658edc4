use hive_site::view::ViewState;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// What a table-mode view prints for its non-ready states.
#[derive(Clone, Copy, Debug)]
pub struct ViewMessages {
    pub empty: &'static str,
    pub not_found: &'static str,
}

impl Default for ViewMessages {
    fn default() -> Self {
        Self {
            empty: "Nothing to display yet",
            not_found: "Not found",
        }
    }
}

/// Render a serializable response in the requested format, building the
/// table with `table` in table mode.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce(&T) -> Table,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(table(value).render(ui::prefs().term_width)),
    }
}

/// Render a view state. JSON formats carry the tagged state; table mode
/// prints a message for every state but `Ready`.
pub fn render_view<T: Serialize>(
    state: &ViewState<T>,
    format: OutputFormat,
    messages: ViewMessages,
    table: impl FnOnce(&T) -> Table,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(state, format, |_| Table::default());
    }
    Ok(match state {
        ViewState::Ready(value) => table(value).render(ui::prefs().term_width),
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Empty => messages.empty.to_string(),
        ViewState::NotFound => messages.not_found.to_string(),
        ViewState::Error { message } => message.clone(),
    })
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce(&T) -> Table,
) -> anyhow::Result<()> {
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}

pub fn output_view<T: Serialize>(
    state: &ViewState<T>,
    format: OutputFormat,
    messages: ViewMessages,
    table: impl FnOnce(&T) -> Table,
) -> anyhow::Result<()> {
    let rendered = render_view(state, format, messages, table)?;
    println!("{rendered}");
    Ok(())
}

/// Join a list into one table cell.
#[must_use]
pub fn list_cell(items: &[String]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items.join(", ")
}

/// A free-text cell, `-` when blank.
#[must_use]
pub fn text_cell(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use hive_site::view::ViewState;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{Table, ViewMessages, list_cell, render, render_view, text_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    fn example_table(value: &Example) -> Table {
        Table::new(&["id", "value"]).with_row(vec![value.id.to_string(), value.value.to_string()])
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json, example_table).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw, example_table).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_builder() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table, example_table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("id")));
        assert!(out.contains('7'));
    }

    #[test]
    fn not_found_view_prints_message_in_table_mode() {
        let state: ViewState<Example> = ViewState::NotFound;
        let messages = ViewMessages {
            empty: "empty",
            not_found: "Engineer not found",
        };
        let out = render_view(&state, OutputFormat::Table, messages, example_table)
            .expect("render should work");
        assert_eq!(out, "Engineer not found");
    }

    #[test]
    fn view_json_carries_state_tag() {
        let state = ViewState::Ready(Example { id: "x", value: 1 });
        let out = render_view(&state, OutputFormat::Raw, ViewMessages::default(), example_table)
            .expect("render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["state"], "ready");
        assert_eq!(parsed["data"]["id"], "x");
    }

    #[test]
    fn list_cell_joins_or_dashes() {
        assert_eq!(list_cell(&[]), "-");
        assert_eq!(list_cell(&["Rust".into(), "Go".into()]), "Rust, Go");
    }

    #[test]
    fn blank_text_cell_is_dash() {
        assert_eq!(text_cell(""), "-");
        assert_eq!(text_cell("  "), "-");
        assert_eq!(text_cell("Writes engines."), "Writes engines.");
    }
}
