//! Plotly charts for the aggregate views.
//!
//! Each helper converts an already computed view into a `plotly::Plot`; no
//! aggregation happens here. Empty input produces a plot with no points.
use plotly::common::{Fill, Line, Marker, Mode, TextPosition};
use plotly::layout::{Axis, BarMode, Layout, RangeMode};
use plotly::{Bar, Plot, Scatter};

use crate::aggregates::{CategoryGenderSpend, CategoryQuantity, DailyTrendPoint};
use crate::stats::Density;

/// Per-category colours for the quantity bar chart.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860",
];

/// Per-gender colours for the average spend bar chart.
pub const GENDER_PALETTE: [&str; 2] = ["#fc5a03", "#fc0341"];

const PLOT_HEIGHT: usize = 600;

/// Line of the daily mean total amount with a shaded 95% confidence band.
pub fn plot_amount_over_time(points: &[DailyTrendPoint]) -> Plot {
    let dates: Vec<String> = points
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let means: Vec<f64> = points.iter().map(|p| p.mean).collect();

    // band polygon: upper edge forward, lower edge backward
    let mut band_x = dates.clone();
    band_x.extend(dates.iter().rev().cloned());
    let mut band_y: Vec<f64> = points.iter().map(|p| p.upper).collect();
    band_y.extend(points.iter().rev().map(|p| p.lower));

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(band_x, band_y)
            .name("95% CI")
            .mode(Mode::Lines)
            .fill(Fill::ToSelf)
            .line(Line::new().width(0.0))
            .fill_color("rgba(0, 0, 0, 0.15)")
            .show_legend(false),
    );
    plot.add_trace(
        Scatter::new(dates, means)
            .name("Total Amount")
            .mode(Mode::Lines)
            .line(Line::new().color("black")),
    );

    plot.set_layout(
        Layout::new()
            .title("Total Amount over Time")
            .height(PLOT_HEIGHT)
            .x_axis(Axis::new().title("Date"))
            .y_axis(Axis::new().title("Total Amount")),
    );

    plot
}

/// Filled density curve of the total amount. `None` plots an empty trace.
pub fn plot_amount_density(density: Option<&Density>) -> Plot {
    let (x, y) = match density {
        Some(d) => (d.x.clone(), d.y.clone()),
        None => (Vec::new(), Vec::new()),
    };

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x, y)
            .name("Total Amount")
            .mode(Mode::Lines)
            .fill(Fill::ToZeroY)
            .line(Line::new().color("green"))
            .fill_color("rgba(0, 128, 0, 0.25)"),
    );

    plot.set_layout(
        Layout::new()
            .title("Total Amount Distribution")
            .height(PLOT_HEIGHT)
            .x_axis(Axis::new().title("Total Amount"))
            .y_axis(Axis::new().title("Count").range_mode(RangeMode::ToZero)),
    );

    plot
}

/// One labelled bar per product category, each in its own colour.
pub fn plot_category_quantity(rows: &[CategoryQuantity]) -> Plot {
    let mut plot = Plot::new();

    for (idx, row) in rows.iter().enumerate() {
        plot.add_trace(
            Bar::new(vec![row.product_category.clone()], vec![row.quantity])
                .name(&row.product_category)
                .text_array(vec![row.quantity.to_string()])
                .text_position(TextPosition::Outside)
                .marker(Marker::new().color(CATEGORY_PALETTE[idx % CATEGORY_PALETTE.len()])),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("Product Quantity Count versus Product Category")
            .height(PLOT_HEIGHT)
            .x_axis(Axis::new().title("Product Category"))
            .y_axis(Axis::new().title("Quantity")),
    );

    plot
}

/// Grouped bars of average spend per category, one series per gender.
///
/// Series follow the order genders first appear in `rows`.
pub fn plot_category_gender_spend(rows: &[CategoryGenderSpend]) -> Plot {
    let mut series: Vec<(&str, Vec<String>, Vec<f64>)> = Vec::new();
    for row in rows {
        let idx = match series.iter().position(|(g, _, _)| *g == row.gender) {
            Some(idx) => idx,
            None => {
                series.push((row.gender.as_str(), Vec::new(), Vec::new()));
                series.len() - 1
            }
        };
        series[idx].1.push(row.product_category.clone());
        series[idx].2.push(row.average_amount);
    }

    let mut plot = Plot::new();
    for (idx, (gender, categories, averages)) in series.into_iter().enumerate() {
        let labels: Vec<String> = averages.iter().map(|v| v.to_string()).collect();
        plot.add_trace(
            Bar::new(categories, averages)
                .name(gender)
                .text_array(labels)
                .text_position(TextPosition::Outside)
                .marker(Marker::new().color(GENDER_PALETTE[idx % GENDER_PALETTE.len()])),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("Total Amount on Average per Gender")
            .height(PLOT_HEIGHT)
            .bar_mode(BarMode::Group)
            .x_axis(Axis::new().title("Product Category"))
            .y_axis(Axis::new().title("Total Amount")),
    );

    plot
}
