//! Plain-text renderings used by the command-line surface.

use crate::domain::{
    ApiResult, InMemoryResultSet, LensQuery, NativeTable, QueryHandle, QueryStatus,
    ResultSetMetadata,
};

pub const INVALID_STORE_LOCATION: &str = "Provided storage location either does not exist or is not a directory, please check the path.";

/// Header line of column names, then one line per row, tab separated.
pub fn result_table(result_set: &InMemoryResultSet, metadata: &ResultSetMetadata) -> String {
    let mut lines = Vec::with_capacity(result_set.row_count() + 1);
    lines.push(metadata.column_names().join("\t"));
    lines.extend(result_set.rows.iter().map(|row| row.cells().join("\t")));
    lines.join("\n")
}

pub fn row_count_message(rows: usize, elapsed_secs: i64) -> String {
    format!("{rows} rows processed in ({elapsed_secs}) seconds.")
}

pub fn in_memory_report(
    query: &LensQuery,
    result_set: &InMemoryResultSet,
    metadata: &ResultSetMetadata,
) -> String {
    format!(
        "{}\n{}",
        result_table(result_set, metadata),
        row_count_message(result_set.row_count(), query.elapsed_secs())
    )
}

pub fn persistent_report(download_url: &str) -> String {
    format!("Results available at {download_url}")
}

pub fn status_report(status: &QueryStatus) -> String {
    let mut lines = vec![format!("Status : {}", status.state)];
    if let Some(message) = &status.status_message {
        lines.push(format!("Message : {message}"));
    }
    if status.progress != 0.0 {
        lines.push(format!("Progress : {}", status.progress));
        if let Some(message) = &status.progress_message {
            lines.push(format!("Progress Message : {message}"));
        }
    }
    if let Some(error) = &status.error_message {
        lines.push(format!("Error : {error}"));
    }
    lines.join("\n")
}

pub fn query_list(queries: &[LensQuery]) -> String {
    if queries.is_empty() {
        return "No queries".to_string();
    }
    queries
        .iter()
        .map(|q| format!("{}\t{}\t{}", q.handle(), q.state(), q.user_query))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One name per line, or `empty` when there are none.
pub fn name_list(names: &[String], empty: &str) -> String {
    if names.is_empty() {
        empty.to_string()
    } else {
        names.join("\n")
    }
}

pub fn table_report(table: &NativeTable) -> String {
    let mut lines = vec![table.name.clone()];
    lines.extend(table.columns.iter().map(|c| {
        format!(
            "{}\t{}\t{}",
            c.name,
            c.data_type,
            c.comment.as_deref().unwrap_or("")
        )
    }));
    lines.join("\n")
}

pub fn kill_report(handle: &QueryHandle, result: &ApiResult) -> String {
    if result.is_success() {
        format!("Successfully killed {handle}")
    } else {
        format!("Failed in killing {handle}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiStatus, QueryState, ResultColumn, ResultRow, TableColumn};
    use rstest::rstest;
    use serde_json::json;

    fn finished_query(submission: i64, finish: i64) -> LensQuery {
        LensQuery {
            query_handle: QueryHandle::new("h1"),
            user_query: "select * from sales".to_string(),
            submitted_user: None,
            query_name: None,
            is_persistent: false,
            status: QueryStatus {
                state: QueryState::Successful,
                ..Default::default()
            },
            driver_query: None,
            result_set_path: None,
            submission_time: submission,
            finish_time: finish,
        }
    }

    fn region_totals() -> (InMemoryResultSet, ResultSetMetadata) {
        let metadata = ResultSetMetadata {
            columns: vec![
                ResultColumn {
                    name: "region".to_string(),
                    data_type: "STRING".to_string(),
                },
                ResultColumn {
                    name: "total".to_string(),
                    data_type: "INT".to_string(),
                },
            ],
        };
        let rows = InMemoryResultSet {
            rows: vec![
                ResultRow {
                    values: vec![json!("east"), json!(42)],
                },
                ResultRow {
                    values: vec![json!("west"), json!(null)],
                },
            ],
        };
        (rows, metadata)
    }

    #[test]
    fn in_memory_report_has_header_rows_and_count() {
        let (rows, metadata) = region_totals();

        let report = in_memory_report(&finished_query(1_000, 4_500), &rows, &metadata);

        assert_eq!(
            report,
            "region\ttotal\neast\t42\nwest\tnull\n2 rows processed in (3) seconds."
        );
    }

    #[rstest]
    #[case(1_000, 0, 0)]
    #[case(1_000, 61_000, 60)]
    fn elapsed_seconds_in_row_count(
        #[case] submission: i64,
        #[case] finish: i64,
        #[case] expected: i64,
    ) {
        let query = finished_query(submission, finish);

        assert_eq!(
            row_count_message(0, query.elapsed_secs()),
            format!("0 rows processed in ({expected}) seconds.")
        );
    }

    #[test]
    fn status_report_skips_zero_progress() {
        let status = QueryStatus {
            state: QueryState::Failed,
            status_message: Some("Query failed".to_string()),
            error_message: Some("Semantic error".to_string()),
            ..Default::default()
        };

        assert_eq!(
            status_report(&status),
            "Status : FAILED\nMessage : Query failed\nError : Semantic error"
        );
    }

    #[test]
    fn status_report_shows_progress_with_message() {
        let status = QueryStatus {
            state: QueryState::Running,
            progress: 0.5,
            progress_message: Some("stage 2".to_string()),
            ..Default::default()
        };

        assert_eq!(
            status_report(&status),
            "Status : RUNNING\nProgress : 0.5\nProgress Message : stage 2"
        );
    }

    #[test]
    fn empty_query_list() {
        assert_eq!(query_list(&[]), "No queries");
    }

    #[test]
    fn query_list_line_per_query() {
        let queries = vec![finished_query(0, 0)];

        assert_eq!(
            query_list(&queries),
            "h1\tSUCCESSFUL\tselect * from sales"
        );
    }

    #[test]
    fn table_report_lists_columns() {
        let table = NativeTable {
            name: "orders".to_string(),
            columns: vec![TableColumn {
                name: "id".to_string(),
                data_type: "int".to_string(),
                comment: Some("primary".to_string()),
            }],
        };

        assert_eq!(table_report(&table), "orders\nid\tint\tprimary");
    }

    #[rstest]
    #[case(ApiStatus::Succeeded, "Successfully killed h1")]
    #[case(ApiStatus::Failed, "Failed in killing h1")]
    #[case(ApiStatus::Partial, "Failed in killing h1")]
    fn kill_report_by_status(#[case] status: ApiStatus, #[case] expected: &str) {
        let result = ApiResult {
            status,
            message: None,
        };

        assert_eq!(kill_report(&QueryHandle::new("h1"), &result), expected);
    }

    #[test]
    fn name_list_uses_empty_message() {
        assert_eq!(name_list(&[], "No databases found"), "No databases found");
        assert_eq!(
            name_list(&["a".to_string(), "b".to_string()], "none"),
            "a\nb"
        );
    }
}
