//! Plain-text rendering of API resources.
//!
//! Every resource kind has a fixed column set; list views print one row
//! per resource with long cells cut short, show views print the full
//! field/value pairs of a single resource. Deliberately minimal: this is
//! a projection of server fields, not a formatting framework.

use crate::client::Resource;

pub const RUNTIME_COLUMNS: &[&str] = &[
    "id",
    "name",
    "image",
    "status",
    "description",
    "project_id",
    "created_at",
    "updated_at",
];
pub const RUNTIME_POOL_COLUMNS: &[&str] = &["name", "capacity"];
pub const FUNCTION_COLUMNS: &[&str] = &[
    "id",
    "name",
    "count",
    "code",
    "runtime_id",
    "entry",
    "created_at",
    "updated_at",
];
pub const FUNCTION_VERSION_COLUMNS: &[&str] = &[
    "id",
    "function_id",
    "description",
    "version_number",
    "count",
    "project_id",
    "created_at",
    "updated_at",
];
pub const FUNCTION_ALIAS_COLUMNS: &[&str] = &[
    "id",
    "name",
    "function_id",
    "function_version",
    "description",
    "project_id",
    "created_at",
    "updated_at",
];
pub const EXECUTION_COLUMNS: &[&str] = &[
    "id",
    "function_id",
    "input",
    "output",
    "status",
    "sync",
    "created_at",
    "updated_at",
];
pub const JOB_COLUMNS: &[&str] = &[
    "id",
    "name",
    "count",
    "status",
    "function_id",
    "function_input",
    "pattern",
    "first_execution_time",
    "next_execution_time",
    "project_id",
    "created_at",
    "updated_at",
];
pub const WEBHOOK_COLUMNS: &[&str] = &[
    "id",
    "function_id",
    "function_alias",
    "description",
    "project_id",
    "created_at",
    "updated_at",
    "webhook_url",
];
pub const WORKER_COLUMNS: &[&str] = &["function_id", "worker_name"];

const CUT_LENGTH: usize = 25;

/// Shorten a cell value for list views.
pub fn cut(value: &str, length: usize) -> String {
    if value.chars().count() > length {
        let head: String = value.chars().take(length).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

fn capitalize(column: &str) -> String {
    let mut chars = column.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One row per resource, fixed columns, long values cut.
pub fn print_list(columns: &[&str], resources: &[Resource]) {
    let headers: Vec<String> = columns.iter().map(|c| capitalize(c)).collect();
    let rows: Vec<Vec<String>> = resources
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| cut(&r.display(c), CUT_LENGTH))
                .collect()
        })
        .collect();
    print_table(&headers, &rows);
}

/// Full field/value pairs of one resource.
pub fn print_detail(columns: &[&str], resource: &Resource) {
    let headers = vec!["Field".to_string(), "Value".to_string()];
    let rows: Vec<Vec<String>> = columns
        .iter()
        .map(|c| vec![capitalize(c), resource.display(c)])
        .collect();
    print_table(&headers, &rows);
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect();
        println!("| {} |", rendered.join(" | "));
    };
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    println!("+-{}-+", separator.join("-+-"));
    line(headers);
    println!("+-{}-+", separator.join("-+-"));
    for row in rows {
        line(row);
    }
    println!("+-{}-+", separator.join("-+-"));
}
