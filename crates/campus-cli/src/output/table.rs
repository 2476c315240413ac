/// Render an aligned table for string rows.
///
/// Numeric-looking cells are right-aligned; cells wider than `max_width`
/// (when given) are truncated with an ellipsis.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let widest = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count());
            max_width.map_or(widest, |cap| widest.min(cap))
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                format_cell(&text, *width, looks_numeric(&text))
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn format_cell(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 1 {
        return text.chars().take(width).collect();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

fn looks_numeric(text: &str) -> bool {
    !text.is_empty() && text.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aligns_columns() {
        let rows = vec![
            vec!["1".to_string(), "Harvard University".to_string()],
            vec!["10".to_string(), "ANU".to_string()],
        ];
        let out = render_table(&["id", "name"], &rows, None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id  name");
        assert_eq!(lines[1], "-".repeat("id  name              ".len()));
        assert_eq!(lines[2], " 1  Harvard University");
        assert_eq!(lines[3], "10  ANU");
    }

    #[test]
    fn truncates_to_max_width() {
        let rows = vec![vec!["Australian National University".to_string()]];
        let out = render_table(&["name"], &rows, Some(10));
        assert!(out.lines().nth(2).unwrap().ends_with('…'));
        assert_eq!(out.lines().nth(2).unwrap().chars().count(), 10);
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let out = render_table(&["a", "b"], &rows, None);
        assert!(out.lines().nth(2).unwrap().ends_with('-'));
    }
}
