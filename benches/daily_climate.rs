use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daily_climate::{clean, to_long_form, Category, CleanOptions, ClimateTable};
use polars::prelude::*;

/// A raw, all-text year of daily rows with placeholders sprinkled in.
fn synthetic_year() -> PolarsResult<DataFrame> {
    let days_in_month = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut months = Vec::new();
    let mut days = Vec::new();
    let mut temps = Vec::new();
    let mut flags = Vec::new();
    for (m, &n) in days_in_month.iter().enumerate() {
        for d in 1..=n {
            months.push((m + 1).to_string());
            days.push(d.to_string());
            temps.push(if d % 7 == 0 {
                "—".to_string()
            } else {
                format!("{:.1}", (d as f64) - 10.0)
            });
            flags.push(if d % 7 == 0 { "M" } else { "" }.to_string());
        }
    }
    let n = months.len();
    df!(
        "Station Name" => vec!["OTTAWA CDA"; n],
        "Climate ID" => vec!["6105976"; n],
        "Year" => vec!["2000"; n],
        "Month" => months,
        "Day" => days,
        "Max Temp (°C)" => temps.clone(),
        "Max Temp Flag" => flags,
        "Min Temp (°C)" => temps.clone(),
        "Mean Temp (°C)" => temps,
    )
}

fn bench_daily_climate(c: &mut Criterion) {
    let raw = synthetic_year().expect("synthetic table");
    let options = CleanOptions::default();
    c.bench_function("clean", |b| b.iter(|| clean(black_box(&raw), &options)));

    let table = ClimateTable::from_raw(&raw).expect("cleaned table");
    let month = table.month_frame(7).expect("july");
    let columns = table.category_groups().get(Category::Temperature).columns.clone();
    c.bench_function("to_long_form", |b| {
        b.iter(|| to_long_form(black_box(&month), &columns))
    });
    c.bench_function("row_for", |b| b.iter(|| table.row_for(black_box(12), black_box(31))));
}

criterion_group!(benches, bench_daily_climate);
criterion_main!(benches);
