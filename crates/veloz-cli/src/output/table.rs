#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table. Widths count characters, so accented labels
/// such as `En Tránsito` line up with plain ones.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let divider = "-".repeat(display_width(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = truncate(value, *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

const MIN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Narrow the widest column one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_width(headers[*index]).max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

/// Color order and payment status labels.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell.to_lowercase().as_str() {
        "completada" | "pagado" | "true" => "32",
        "pendiente" | "en tránsito" => "33",
        "cancelada" | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn accented_cells_align_with_plain_ones() {
        let rows = vec![
            vec!["1001".to_string(), "En Tránsito".to_string()],
            vec!["1002".to_string(), "Completada".to_string()],
        ];
        let table = render_table(&["id", "status"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(display_width(lines[2]), display_width(lines[3]));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["890.5".to_string()], vec!["2100".to_string()]];
        let table = render_table(&["total_amount"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with("890.5")));
        assert!(table.lines().nth(3).is_some_and(|line| line.starts_with(' ')));
    }

    #[test]
    fn wide_columns_are_truncated_to_fit() {
        let rows = vec![vec![
            "1".to_string(),
            "Transportes Rápidos del Sur S.A.C.".to_string(),
        ]];
        let table = render_table(
            &["id", "business_name"],
            &rows,
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(display_width(line) <= 24, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn status_labels_are_colored() {
        let rows = vec![vec!["Cancelada".to_string()]];
        let table = render_table(
            &["status"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mCancelada"));
    }
}
