/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// A plain aligned text table.
#[derive(Clone, Debug, Default)]
pub struct Table {
    caption: Vec<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    notes: Vec<String>,
}

impl Table {
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            caption: Vec::new(),
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Add a line printed above the table.
    #[must_use]
    pub fn caption(mut self, line: impl Into<String>) -> Self {
        self.caption.push(line.into());
        self
    }

    /// Add a line printed below the table. Notes are never truncated.
    pub fn note(&mut self, line: impl Into<String>) {
        self.notes.push(line.into());
    }

    /// Append a row; missing trailing cells render as `-`.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    #[must_use]
    pub fn with_row(mut self, cells: Vec<String>) -> Self {
        self.row(cells);
        self
    }

    #[must_use]
    pub fn render(&self, max_width: Option<usize>) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN)
            })
            .collect();

        if let Some(max_width) = max_width {
            shrink_to_fit(&mut widths, max_width);
        }

        let header = line(&self.headers, &widths);
        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * GAP.len();
        let divider = "-".repeat(total);

        let mut lines =
            Vec::with_capacity(self.caption.len() + self.rows.len() + self.notes.len() + 4);
        if !self.caption.is_empty() {
            lines.extend(self.caption.iter().cloned());
            lines.push(String::new());
        }
        lines.push(header);
        lines.push(divider);
        lines.extend(self.rows.iter().map(|row| line(row, &widths)));
        if !self.notes.is_empty() {
            lines.push(String::new());
            lines.extend(self.notes.iter().cloned());
        }
        lines.join("\n")
    }
}

fn line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map_or("-", String::as_str);
            pad(&truncate(cell, *width), *width)
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Take one column off the widest shrinkable column at a time until the
/// table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN)
            .max_by_key(|w| **w);
        match widest {
            Some(width) => *width -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Table;

    fn sample() -> Table {
        Table::new(&["id", "role"])
            .with_row(vec!["e1".into(), "Frontend".into()])
            .with_row(vec!["e2".into(), "Backend".into()])
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let rendered = sample().render(None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id    role");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "e1    Frontend");
        assert_eq!(lines[3], "e2    Backend");
    }

    #[test]
    fn narrow_terminal_truncates_with_ellipsis() {
        let table = Table::new(&["title"]).with_row(vec!["A very long project title".into()]);
        let rendered = table.render(Some(10));
        assert_eq!(rendered.lines().nth(2), Some("A very lo…"));
    }

    #[test]
    fn caption_precedes_header() {
        let rendered = sample().caption("Roles: All, Frontend, Backend").render(None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Roles: All, Frontend, Backend");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("id"));
    }

    #[test]
    fn notes_follow_rows_untruncated() {
        let mut table = sample();
        table.note("Problem: checkout abandoned on slow networks");
        let rendered = table.render(Some(12));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Problem: checkout abandoned on slow networks");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = Table::new(&["id", "role"]).with_row(vec!["e1".into()]);
        assert!(table.render(None).lines().nth(2).is_some_and(|l| l.ends_with('-')));
    }
}
