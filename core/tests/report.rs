//! Report rendering tests — the fixed-width table and JSON rows.

use cohort_core::{
    config::SimConfig,
    engine::SimEngine,
    report::{render_header, render_table, RunSummary, YearRow},
};

fn rows_for(years: u32) -> Vec<YearRow> {
    let mut engine = SimEngine::new("report".into(), SimConfig { years, ..SimConfig::default() })
        .unwrap();
    engine.run().unwrap();
    engine.rows().unwrap()
}

#[test]
fn header_columns_are_ten_wide() {
    assert_eq!(
        render_header(),
        "Year      Young     Adults    Old       Salary    Dependent Coin valueBorn      \
         Adulthood Senior    Died      "
    );
}

#[test]
fn year_zero_prints_unrounded_ratios() {
    let rows = rows_for(1);
    assert_eq!(
        rows[0].render(),
        "0         0         100       0         1000.0    1.0       1.0       0         \
         100       0         0         "
    );
}

#[test]
fn later_years_print_two_decimals() {
    let rows = rows_for(23);
    assert_eq!(
        rows[1].render(),
        "1         100       100       0         1000.00   1.00      1.00      100       \
         0         0         0         "
    );
    assert_eq!(
        rows[22].render(),
        "22        0         200       0         500.00    0.00      2.00      0         \
         100       0         0         "
    );
}

#[test]
fn table_has_header_and_one_line_per_year() {
    let table = render_table(&rows_for(10));
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("Year"));
    assert!(lines[10].starts_with("9 "));
}

#[test]
fn json_rows_are_flat() {
    let rows = rows_for(2);
    let value = serde_json::to_value(&rows[1]).unwrap();

    assert_eq!(value["year"], 1);
    assert_eq!(value["young"], 100);
    assert_eq!(value["born"], 100);
    assert_eq!(value["salary"], 1000.0);

    let back: YearRow = serde_json::from_value(value).unwrap();
    assert_eq!(back, rows[1]);
}

#[test]
fn summary_tracks_extremes() {
    let mut engine = SimEngine::new("summary".into(), SimConfig::default()).unwrap();
    engine.run().unwrap();

    let summary = RunSummary::from_history(engine.history()).unwrap();
    assert_eq!(summary.final_year, 99);
    assert_eq!(summary.final_adults, 800);
    assert_eq!(summary.max_salary, 1000.0);
    assert_eq!(summary.min_salary, 125.0);
    assert_eq!(summary.peak_dependent, 2.0);

    assert!(RunSummary::from_history(&[]).is_none());
}
