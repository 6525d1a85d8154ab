//! Output formatting utilities

use crate::domain::{
    Day, DayAnswer, MetricsAggregator, MetricsView, RecordStore, SummaryRow, TravelRecord,
    UserProfile,
};
use crate::infrastructure::Config;

/// Round to a whole number and insert thousands separators (1234.6 -> "1,235")
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_money(amount: f64, symbol: &str) -> String {
    format!("{}{}", symbol, group_thousands(amount))
}

pub fn format_grams(grams: f64) -> String {
    format!("{}g", group_thousands(grams))
}

pub fn format_km(distance: f64) -> String {
    format!("{:.1} KM", distance)
}

/// Create a simple bar representation of `value` relative to `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn format_profile(profile: &UserProfile) -> String {
    format!(
        "Name:    {}\nAge:     {}\nVehicle: {}\nCity:    {}\n",
        profile.name(),
        profile.age(),
        profile.vehicle(),
        profile.city()
    )
}

/// Detail block for one saved record
pub fn format_record(record: &TravelRecord, config: &Config) -> String {
    if !record.is_traveled() {
        return format!("{}: did not travel\n", record.day());
    }
    format!(
        "{}:\n  Destination:     {}\n  Distance:        {}\n  Estimated Cost:  {}\n  Carbon Emission: {}\n",
        record.day(),
        record.destination(),
        format_km(record.distance()),
        format_money(record.cost(), &config.currency_symbol),
        format_grams(record.emission())
    )
}

/// Confirmation printed after a day is saved
pub fn format_saved(record: &TravelRecord, user_name: &str, config: &Config) -> String {
    if record.is_traveled() {
        format!(
            "Data saved for {}!\n{}",
            record.day(),
            format_record(record, config)
        )
    } else {
        format!(
            "That's great, {}! You preserved money as well as carbon emission on {}.\n",
            user_name,
            record.day()
        )
    }
}

/// One line per weekday with its selector state
pub fn format_week(store: &RecordStore, config: &Config) -> String {
    let mut output = String::new();
    for day in Day::ALL {
        let answer = store.answer(day);
        let line = match store.get(day) {
            Some(record) if answer == DayAnswer::Traveled => format!(
                "{:<10} {:<4} {} ({}, {}, {})",
                day.name(),
                answer.label(),
                record.destination(),
                format_km(record.distance()),
                format_money(record.cost(), &config.currency_symbol),
                format_grams(record.emission())
            ),
            _ => format!("{:<10} {}", day.name(), answer.label()),
        };
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// The six headline metrics
pub fn format_metrics(view: &MetricsView, config: &Config) -> String {
    let symbol = &config.currency_symbol;
    format!(
        "Total KM:            {:.1}\n\
         Total Cost:          {}\n\
         Total Emissions:     {}\n\
         Max Daily Emission:  {}\n\
         Min Daily Emission:  {}\n\
         Days Traveled:       {}\n",
        view.totals.total_distance,
        format_money(view.totals.total_cost, symbol),
        format_grams(view.totals.total_emission),
        format_grams(view.extremes.max_emission),
        format_grams(view.extremes.min_emission),
        view.day_count
    )
}

/// Horizontal bar chart, one bar per summary row
pub fn format_bar_chart<F>(title: &str, rows: &[SummaryRow], width: usize, value: F) -> String
where
    F: Fn(&SummaryRow) -> (f64, String),
{
    let max_value = rows.iter().map(|row| value(row).0).fold(0.0, f64::max);

    let mut output = format!("{}\n", title);
    for row in rows {
        let (amount, label) = value(row);
        output.push_str(&format!(
            "{:<10} {} {}\n",
            row.day.name(),
            format_bar(amount, max_value, width),
            label
        ));
    }
    output
}

pub fn format_cost_distribution(shares: &[(Day, f64)]) -> String {
    let mut output = "Cost Distribution by Day\n".to_string();
    for (day, share) in shares {
        output.push_str(&format!("{:<10} {:>5.1}%\n", day.name(), share * 100.0));
    }
    output
}

/// Detailed summary table with display formatting applied
pub fn format_summary_table(rows: &[SummaryRow], config: &Config) -> String {
    let header = ["Day", "Destination", "Distance", "Cost", "Emissions"];
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.day.name().to_string(),
                row.destination.clone(),
                format_km(row.distance),
                format_money(row.cost, &config.currency_symbol),
                format_grams(row.emission),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |values: [&str; 5]| -> String {
        let line: Vec<String> = values
            .iter()
            .zip(widths)
            .map(|(value, width)| {
                let pad = width - value.chars().count();
                format!("{}{}", value, " ".repeat(pad))
            })
            .collect();
        format!("{}\n", line.join("  ").trim_end())
    };

    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let mut output = render(header);
    output.push_str(&separator(total_width));
    output.push('\n');
    for row in &cells {
        output.push_str(&render([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }
    output
}

/// Full analytics block: metrics, charts, cost distribution and table
pub fn format_summary(metrics: &MetricsAggregator<'_>, config: &Config) -> String {
    let view = metrics.view();
    if !view.has_answers() {
        return "Please fill in your travel information for each day using 'day'.\n".to_string();
    }
    if view.day_count == 0 {
        return "Great! You didn't travel any day this week. \
                You saved money and reduced carbon emissions!\n"
            .to_string();
    }

    let width = config.chart_width;
    let sections = [
        format_metrics(&view, config),
        format_bar_chart("Daily Distance Traveled (KM)", &view.rows, width, |row| {
            (row.distance, format!("{:.1}", row.distance))
        }),
        format_bar_chart("Daily Carbon Emissions (g)", &view.rows, width, |row| {
            (row.emission, format_grams(row.emission))
        }),
        format_cost_distribution(&metrics.cost_shares()),
        format!("Detailed Summary\n{}", format_summary_table(&view.rows, config)),
    ];
    sections.join("\n")
}
