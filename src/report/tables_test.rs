use super::*;

#[test]
fn data_sources_has_eight_populated_rows() {
    let table = data_sources_table();
    assert_eq!(table.columns, ["Dataset", "Source", "Merged Features", "Number of Records"]);
    assert_eq!(table.rows.len(), 8);
    for row in &table.rows {
        assert_eq!(row.len(), 4);
        for cell in &row[..3] {
            assert!(matches!(cell, Cell::Text(t) if !t.is_empty()));
        }
        assert!(matches!(row[3], Cell::Count(n) if n > 0));
    }
}

#[test]
fn street_maintenance_record_count() {
    let table = data_sources_table();
    assert_eq!(table.cell("Street Maintenance", "Number of Records"), Some(&Cell::Count(114_919)));
    assert_eq!(table.cell("Street Maintenance", "Source"), Some(&Cell::Text("MDC")));
}

#[test]
fn data_source_publishers() {
    let by_source = |p: Publisher| data_sources().iter().filter(|r| r.source == p).count();
    assert_eq!(by_source(Publisher::TomTom), 2);
    assert_eq!(by_source(Publisher::Mdc), 5);
    assert_eq!(by_source(Publisher::Fdot), 1);
    assert_eq!(data_sources()[7].dataset, "2023 Avg Annual Daily Traffic (AADT)");
    assert_eq!(data_sources()[7].records, 100_893);
}

#[test]
fn model_results_has_three_rows_of_six_scores() {
    let table = model_results_table();
    assert_eq!(table.columns.len(), 7);
    let models: Vec<_> = table.rows.iter().map(|r| r[0]).collect();
    assert_eq!(models, [Cell::Text("Decision Tree"), Cell::Text("Random Forest"), Cell::Text("XGBoost")]);
    for row in &table.rows {
        assert_eq!(row.len(), 7);
        assert!(row[1..].iter().all(Cell::is_numeric));
    }
}

#[test]
fn xgboost_test_tuning_score() {
    let table = model_results_table();
    let Some(Cell::Score(v)) = table.cell("XGBoost", "Test Tuning") else {
        panic!("XGBoost row should carry a Test Tuning score");
    };
    assert!((v - 0.986_644).abs() < f64::EPSILON);
    assert_eq!(Cell::Score(*v).to_string(), "0.986644");
}

#[test]
fn xgboost_ties_or_beats_others_on_tuned_test() {
    let results = model_results();
    let xgb = results.iter().find(|m| m.model == "XGBoost").unwrap();
    assert!(results.iter().all(|m| m.test_tuning <= xgb.test_tuning));
}

#[test]
fn unknown_row_or_column_is_none() {
    let table = model_results_table();
    assert!(table.cell("Logistic Regression", "Test Tuning").is_none());
    assert!(table.cell("XGBoost", "Validation").is_none());
}
