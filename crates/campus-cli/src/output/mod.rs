use std::io::IsTerminal;

use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

/// A response that knows how to lay itself out as a table.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;

    /// Line printed above the table (e.g. a result count).
    fn caption(&self) -> Option<String> {
        None
    }

    /// Line printed when there are no rows.
    fn empty_message(&self) -> &'static str {
        "(no rows)"
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_tabular(value, terminal_width())),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_tabular<T: Tabular>(value: &T, max_width: Option<usize>) -> String {
    let rows = value.rows();
    let body = if rows.is_empty() {
        value.empty_message().to_string()
    } else {
        table::render_table(&value.headers(), &rows, max_width)
    };
    match value.caption() {
        Some(caption) => format!("{caption}\n\n{body}"),
        None => body,
    }
}

/// Per-column cap derived from `COLUMNS` when stdout is a terminal.
fn terminal_width() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
        .map(|width| width / 3)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Tabular, render, render_tabular};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    impl Tabular for Example {
        fn headers(&self) -> Vec<&'static str> {
            vec!["id", "value"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            vec![vec![self.id.to_string(), self.value.to_string()]]
        }

        fn caption(&self) -> Option<String> {
            Some(format!("example {}", self.id))
        }
    }

    #[derive(Serialize)]
    struct Nothing;

    impl Tabular for Nothing {
        fn headers(&self) -> Vec<&'static str> {
            vec!["id"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            Vec::new()
        }

        fn empty_message(&self) -> &'static str {
            "nothing here"
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_has_caption_and_rows() {
        let out = render_tabular(&Example { id: "x", value: 7 }, None);
        assert!(out.starts_with("example x\n\n"));
        assert!(out.contains("id  value"));
    }

    #[test]
    fn table_render_uses_empty_message() {
        assert_eq!(render_tabular(&Nothing, None), "nothing here");
    }
}
