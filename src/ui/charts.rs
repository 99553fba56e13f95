use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::{self, ColorMap};
use crate::report::aggregates::{CountryAverage, Histogram, RemoteCount, RoleAverage, COUNTRY_ROLE};
use crate::report::format;

const CHART_HEIGHT: f32 = 300.0;
const BAR_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

fn no_data(ui: &mut Ui) {
    ui.colored_label(ui.visuals().warn_fg_color, "No data to show in the chart.");
}

/// Category labels on the axis at integer positions.
fn category_formatter(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Top roles – horizontal bars
// ---------------------------------------------------------------------------

pub fn top_roles(ui: &mut Ui, roles: Option<&[RoleAverage]>) {
    ui.strong("Top 10 roles by average salary");
    let Some(roles) = roles else {
        no_data(ui);
        return;
    };

    let bars: Vec<Bar> = roles
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.mean_usd)
                .name(format!("{}: {}", r.role, format::usd(r.mean_usd)))
                .width(0.7)
        })
        .collect();
    let labels: Vec<String> = roles.iter().map(|r| r.role.clone()).collect();

    Plot::new("top_roles_chart")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_label("Average annual salary (USD)")
        .y_axis_formatter(category_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().color(BAR_COLOR));
        });
}

// ---------------------------------------------------------------------------
// Salary histogram
// ---------------------------------------------------------------------------

pub fn salary_histogram(ui: &mut Ui, histogram: Option<&Histogram>) {
    ui.strong("Annual salary distribution");
    let Some(hist) = histogram else {
        no_data(ui);
        return;
    };

    let width = hist.bin_width();
    let bars: Vec<Bar> = hist
        .edges
        .windows(2)
        .zip(&hist.counts)
        .map(|(edge, &count)| {
            Bar::new((edge[0] + edge[1]) / 2.0, count as f64)
                .width(width)
                .name(format!(
                    "{} – {}",
                    format::usd(edge[0]),
                    format::usd(edge[1])
                ))
        })
        .collect();

    Plot::new("salary_histogram_chart")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_label("Salary range (USD)")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
        });
}

// ---------------------------------------------------------------------------
// Remote-mode donut
// ---------------------------------------------------------------------------

pub fn remote_donut(ui: &mut Ui, counts: Option<&[RemoteCount]>, colors: &ColorMap) {
    ui.strong("Types of work proportion");
    let Some(counts) = counts else {
        no_data(ui);
        return;
    };
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        no_data(ui);
        return;
    }

    let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let outer = (rect.height().min(rect.width()) / 2.0 - 28.0).max(10.0);
    let inner = outer * 0.5;
    let text_color = ui.visuals().strong_text_color();

    let point = |angle: f32, radius: f32| -> Pos2 {
        center + radius * egui::vec2(angle.cos(), angle.sin())
    };

    let mut start = -TAU / 4.0;
    for slice in counts {
        let fraction = slice.count as f32 / total as f32;
        let sweep = fraction * TAU;
        let fill = colors.color_for(&slice.mode);

        // Ring segments are not convex; draw them as thin quads.
        let steps = ((sweep / TAU) * 128.0).ceil().max(1.0) as usize;
        for s in 0..steps {
            let a0 = start + sweep * s as f32 / steps as f32;
            let a1 = start + sweep * (s + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![point(a0, outer), point(a1, outer), point(a1, inner), point(a0, inner)],
                fill,
                Stroke::NONE,
            ));
        }

        let mid = start + sweep / 2.0;
        painter.text(
            point(mid, outer + 16.0),
            Align2::CENTER_CENTER,
            format!("{} {:.1}%", slice.mode, fraction * 100.0),
            FontId::proportional(12.0),
            text_color,
        );
        start += sweep;
    }
}

// ---------------------------------------------------------------------------
// Country averages for one role
// ---------------------------------------------------------------------------

pub fn country_average(ui: &mut Ui, averages: Option<&[CountryAverage]>) {
    ui.strong(format!("Average {COUNTRY_ROLE} salary by country"));
    let Some(averages) = averages else {
        no_data(ui);
        return;
    };
    if averages.is_empty() {
        ui.label(format!("No {COUNTRY_ROLE} records in the current selection."));
        return;
    }

    let (min, max) = averages
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c.mean_usd), hi.max(c.mean_usd))
        });

    let bars: Vec<Bar> = averages
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let t = color::normalize(c.mean_usd, min, max);
            Bar::new(i as f64, c.mean_usd)
                .name(format!("{}: {}", c.country_iso3, format::usd(c.mean_usd)))
                .fill(color::red_yellow_green(t))
                .width(0.7)
        })
        .collect();
    let labels: Vec<String> = averages.iter().map(|c| c.country_iso3.clone()).collect();

    Plot::new("country_average_chart")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(category_formatter(labels))
        .y_axis_label("Average salary (USD)")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
