//! Box-drawn tables for `console.table`.
//!
//! Each entry of an array (or each member of an object) becomes a row keyed
//! by its index. Object and array rows spread their fields into columns;
//! scalar rows fill a trailing `Values` column.

use console::{measure_text_width, pad_str, Alignment};
use serde_json::Value as Json;

use crate::format::{inspect, FormatOptions};
use crate::value::Value;

const INDEX_HEADER: &str = "(index)";
const VALUES_HEADER: &str = "Values";

struct Row {
    index: String,
    fields: Vec<(String, String)>,
    value: Option<String>,
}

/// Renders `data` as a table, or `None` if it is not an array or object.
///
/// `columns` restricts and orders the field columns.
pub(super) fn render(data: &Json, columns: Option<Vec<String>>) -> Option<String> {
    let entries: Vec<(String, &Json)> = match data {
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        Json::Object(map) => map.iter().map(|(key, item)| (key.clone(), item)).collect(),
        _ => return None,
    };

    let rows: Vec<Row> = entries
        .into_iter()
        .map(|(index, item)| match item {
            Json::Object(map) => Row {
                index,
                fields: map.iter().map(|(k, v)| (k.clone(), cell(v))).collect(),
                value: None,
            },
            Json::Array(items) => Row {
                index,
                fields: items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), cell(v)))
                    .collect(),
                value: None,
            },
            scalar => Row {
                index,
                fields: Vec::new(),
                value: Some(cell(scalar)),
            },
        })
        .collect();

    let columns = columns.unwrap_or_else(|| {
        let mut seen: Vec<String> = Vec::new();
        for (key, _) in rows.iter().flat_map(|row| &row.fields) {
            if !seen.contains(key) {
                seen.push(key.clone());
            }
        }
        seen
    });
    let has_values = rows.iter().any(|row| row.value.is_some());

    let mut header = vec![INDEX_HEADER.to_string()];
    header.extend(columns.iter().cloned());
    if has_values {
        header.push(VALUES_HEADER.to_string());
    }

    let body = rows
        .iter()
        .map(|row| {
            let mut line = vec![row.index.clone()];
            line.extend(columns.iter().map(|column| {
                row.fields
                    .iter()
                    .find(|(key, _)| key == column)
                    .map(|(_, text)| text.clone())
                    .unwrap_or_default()
            }));
            if has_values {
                line.push(row.value.clone().unwrap_or_default());
            }
            line
        })
        .collect::<Vec<_>>();

    Some(grid(&header, &body))
}

/// Column names from a `console.table(data, columns)` second argument.
pub(super) fn columns(arg: Option<&Value>) -> Option<Vec<String>> {
    match arg {
        Some(Value::Data(Json::Array(items))) => Some(
            items
                .iter()
                .map(|item| match item {
                    Json::String(name) => name.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}

fn cell(value: &Json) -> String {
    let options = FormatOptions::new().depth(0).break_length(usize::MAX);
    inspect(&Value::Data(value.clone()), &options)
}

fn grid(header: &[String], body: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(header)
                .chain(body.iter().map(Vec::as_slice))
                .map(|row| measure_text_width(&row[col]))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |row: &[String]| {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!(" {} ", pad_str(text, *width, Alignment::Left, None)))
            .collect();
        format!("│{}│", cells.join("│"))
    };

    let mut lines = vec![rule("┌", "┬", "┐"), line(header), rule("├", "┼", "┤")];
    lines.extend(body.iter().map(|row| line(row)));
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_rows_of_objects() {
        let table = render(&json!([{"a": 1, "b": "x"}, {"a": 2}]), None).unwrap();
        assert_eq!(
            table,
            [
                "┌─────────┬───┬─────┐",
                "│ (index) │ a │ b   │",
                "├─────────┼───┼─────┤",
                "│ 0       │ 1 │ 'x' │",
                "│ 1       │ 2 │     │",
                "└─────────┴───┴─────┘",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_render_scalars_fill_values_column() {
        let table = render(&json!({"x": 1, "y": "s"}), None).unwrap();
        assert_eq!(
            table,
            [
                "┌─────────┬────────┐",
                "│ (index) │ Values │",
                "├─────────┼────────┤",
                "│ x       │ 1      │",
                "│ y       │ 's'    │",
                "└─────────┴────────┘",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_render_restricted_columns() {
        let columns = Some(vec!["b".to_string()]);
        let table = render(&json!([{"a": 1, "b": 2}]), columns).unwrap();
        assert!(table.contains("│ (index) │ b │"));
        assert!(!table.contains(" a "));
    }

    #[test]
    fn test_render_nested_rows_collapse() {
        let table = render(&json!([[1, {"deep": {"x": 1}}]]), None).unwrap();
        assert!(table.contains("│ (index) │ 0 │ 1                  │"));
        assert!(table.contains("│ 0       │ 1 │ { deep: [Object] } │"));
    }

    #[test]
    fn test_render_rejects_scalars() {
        assert!(render(&json!(5), None).is_none());
        assert!(render(&json!("text"), None).is_none());
    }

    #[test]
    fn test_columns_argument() {
        let arg = Value::from(json!(["a", 1]));
        assert_eq!(columns(Some(&arg)), Some(vec!["a".to_string(), "1".to_string()]));
        assert_eq!(columns(Some(&Value::from("a"))), None);
        assert_eq!(columns(None), None);
    }
}
