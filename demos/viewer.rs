//! demos/viewer.rs
//!
//! Prints what a climate viewer would show for one day of a station's daily CSV
//! export: the heading, the metric panel of a category, and the month chart data.
//!
//! To run this example:
//! cargo run --example viewer -- <file.csv> <month> <day> [category] [month_b day_b]

use std::error::Error;

use daily_climate::{Category, ClimateTable};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: viewer <file.csv> <month> <day> [category] [month_b day_b]");
        std::process::exit(2);
    };

    // 1. Load and clean the table
    let table = ClimateTable::load_csv(path)?;
    let months = table.months()?;
    let Some(&first_month) = months.first() else {
        println!("No months available in {}", path);
        return Ok(());
    };

    // 2. Resolve the selection, defaulting to the first available day
    let month = args.get(1).map(|m| m.parse()).transpose()?.unwrap_or(first_month);
    let day = match args.get(2) {
        Some(d) => Some(d.parse()?),
        None => table.days(month)?.first().copied(),
    };
    let category = match args.get(3) {
        Some(label) => label.parse()?,
        None => Category::Temperature,
    };
    let month_b = args.get(4).map(|m| m.parse()).transpose()?;
    let day_b = args.get(5).map(|d| d.parse()).transpose()?;

    // 3. Build the view
    let view = table
        .view()
        .month(month)
        .maybe_day(day)
        .category(category)
        .maybe_month_b(month_b)
        .maybe_day_b(day_b)
        .call()?;

    println!("{}", view.title);
    println!("{}", "=".repeat(view.title.chars().count()));
    if view.days.is_empty() {
        println!("No days available for month {:02} in the dataset.", month);
    }

    for metric in &view.metrics {
        match &metric.delta {
            Some(delta) => println!("  {:<24} {:>8}  ({})", metric.label, metric.value, delta),
            None => println!("  {:<24} {:>8}", metric.label, metric.value),
        }
    }

    if let Some(comparison) = &view.comparison {
        match &comparison.diff {
            Some(diff) => println!("\nDay A vs Day B:\n{}", diff),
            None => println!("\nSelect two existing days to compare."),
        }
    }

    match &view.chart {
        Some(chart) => println!("\n{} [{}]\n{}", chart.title, chart.axis_title, chart.series),
        None => println!("\nNo columns found for {} in this dataset.", view.category),
    }

    match &view.record_table {
        Some(record) => println!("\nSelected day - full record\n{}", record),
        None => println!("\nNo record found for this date."),
    }

    Ok(())
}
