//! Time-Series Chart Component
//!
//! Fetches the per-date metric records and renders them as a multi-line
//! chart on an HTML5 Canvas, with a hover tooltip and a legend.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::{self, TimeSeriesPoint};
use crate::components::loading::LoadingMessage;

/// Canvas geometry, shared by drawing and hover hit-testing
const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Upper bound on drawn x-axis labels before thinning kicks in
const MAX_X_LABELS: usize = 10;

/// The three plotted series
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Anxiety,
    Depression,
    SleepIssues,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Anxiety, Series::Depression, Series::SleepIssues];

    /// Series name as it appears in the payload, used for the legend
    pub fn name(self) -> &'static str {
        match self {
            Series::Anxiety => "anxiety",
            Series::Depression => "depression",
            Series::SleepIssues => "sleep_issues",
        }
    }

    /// Stroke color for this series
    pub fn color(self) -> &'static str {
        match self {
            Series::Anxiety => "#8884d8",
            Series::Depression => "#82ca9d",
            Series::SleepIssues => "#ffc658",
        }
    }

    /// Value of this series in a record
    pub fn value(self, point: &TimeSeriesPoint) -> f64 {
        match self {
            Series::Anxiety => point.anxiety,
            Series::Depression => point.depression,
            Series::SleepIssues => point.sleep_issues,
        }
    }
}

/// Time-series chart component
///
/// Issues one fetch on mount and keeps the records as local display state.
/// While the stored sequence is empty the loading placeholder is shown;
/// a failed fetch is logged and leaves the sequence empty, so the
/// placeholder simply stays up.
#[component]
pub fn TimeSeriesChart() -> impl IntoView {
    let (points, set_points) = create_signal(Vec::<TimeSeriesPoint>::new());
    let (hovered, set_hovered) = create_signal(None::<usize>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Fetch once on mount (reads no signals, so the effect runs once)
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_timeseries().await {
                Ok(data) => {
                    set_points.set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch time series: {}", e).into());
                }
            }
        });
    });

    // Redraw when the data or the hovered record changes
    create_effect(move |_| {
        let data = points.get();
        let hover = hovered.get();

        if let Some(canvas) = canvas_ref.get() {
            if !data.is_empty() {
                draw_chart(&canvas, &data, hover);
            }
        }
    });

    view! {
        <div class="chart-card">
            <h2>"Mental Health Time Series"</h2>

            {move || {
                if points.with(Vec::is_empty) {
                    view! { <LoadingMessage text="Loading chart data..." /> }.into_view()
                } else {
                    let on_mousemove = move |ev: ev::MouseEvent| {
                        let len = points.with(Vec::len);
                        let Some(canvas) = canvas_ref.get() else {
                            return;
                        };
                        // Mouse offsets are in CSS pixels; rescale to the
                        // fixed canvas coordinate space before hit-testing
                        let css_width = canvas.client_width() as f64;
                        if css_width <= 0.0 {
                            return;
                        }
                        let x = ev.offset_x() as f64 * (CANVAS_WIDTH / css_width);
                        set_hovered.set(nearest_index(x, len));
                    };

                    let on_mouseleave = move |_| set_hovered.set(None);

                    view! {
                        <div class="chart-area" on:mouseleave=on_mouseleave>
                            <canvas
                                node_ref=canvas_ref
                                width="800"
                                height="400"
                                class="chart-canvas"
                                on:mousemove=on_mousemove
                            />
                            <ChartTooltip points=points hovered=hovered />
                        </div>
                        <ChartLegend />
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Chart legend identifying the series by name and color
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="chart-legend">
            {Series::ALL.into_iter().map(|series| view! {
                <div class="legend-entry">
                    <span
                        class="legend-swatch"
                        style=format!("background-color: {}", series.color())
                    />
                    <span class="legend-label">{series.name()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Tooltip overlay showing every series value for the hovered date
#[component]
fn ChartTooltip(
    points: ReadSignal<Vec<TimeSeriesPoint>>,
    hovered: ReadSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        {move || {
            let data = points.get();
            hovered.get()
                .and_then(|i| data.get(i).map(|p| (i, p.clone())))
                .map(|(i, point)| {
                    let left = x_at(i, data.len()) / CANVAS_WIDTH * 100.0;

                    view! {
                        <div class="chart-tooltip" style=format!("left: {:.1}%", left)>
                            <div class="tooltip-date">{pretty_date(&point.date)}</div>
                            {Series::ALL.into_iter().map(|series| view! {
                                <div class="tooltip-row">
                                    <span
                                        class="tooltip-swatch"
                                        style=format!("background-color: {}", series.color())
                                    />
                                    <span class="tooltip-label">{series.name()}</span>
                                    <span class="tooltip-value">
                                        {format!("{}", series.value(&point))}
                                    </span>
                                </div>
                            }).collect_view()}
                        </div>
                    }
                })
        }}
    }
}

/// Tooltip header: pretty-printed when the date parses, verbatim otherwise
fn pretty_date(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a, %b %-d %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[TimeSeriesPoint], hovered: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let len = points.len();

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    let (y_min, y_max) = y_bounds(points);

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * plot_height();
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(CANVAS_WIDTH - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Vertical grid line per tick
    ctx.set_stroke_style(&"#f3f4f6".into());
    for &i in &axis_ticks(len) {
        let x = x_at(i, len);
        ctx.begin_path();
        ctx.move_to(x, MARGIN_TOP);
        ctx.line_to(x, CANVAS_HEIGHT - MARGIN_BOTTOM);
        ctx.stroke();
    }

    // Hover cursor behind the lines
    if let Some(i) = hovered.filter(|&i| i < len) {
        let x = x_at(i, len);
        ctx.set_stroke_style(&"#9ca3af".into());
        ctx.begin_path();
        ctx.move_to(x, MARGIN_TOP);
        ctx.line_to(x, CANVAS_HEIGHT - MARGIN_BOTTOM);
        ctx.stroke();
    }

    // One smoothed line per series
    for series in Series::ALL {
        let ys: Vec<f64> = points
            .iter()
            .map(|p| y_px(series.value(p), y_min, y_max))
            .collect();
        let tangents = monotone_tangents(&ys);

        ctx.set_stroke_style(&series.color().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(x_at(0, len), ys[0]);

        for i in 0..len.saturating_sub(1) {
            let x0 = x_at(i, len);
            let x1 = x_at(i + 1, len);
            let dx = x1 - x0;

            // Cubic Bezier segment matching the monotone tangents at both ends
            ctx.bezier_curve_to(
                x0 + dx / 3.0,
                ys[i] + tangents[i] / 3.0,
                x1 - dx / 3.0,
                ys[i + 1] - tangents[i + 1] / 3.0,
                x1,
                ys[i + 1],
            );
        }

        ctx.stroke();

        // Point markers
        ctx.set_fill_style(&series.color().into());
        for (i, y) in ys.iter().enumerate() {
            let radius = if hovered == Some(i) { 4.5 } else { 3.0 };
            ctx.begin_path();
            let _ = ctx.arc(x_at(i, len), *y, radius, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // X-axis labels, verbatim date strings
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");

    for &i in &axis_ticks(len) {
        let x = x_at(i, len);
        let _ = ctx.fill_text(&points[i].date, x - 30.0, CANVAS_HEIGHT - 10.0);
    }
}

fn plot_width() -> f64 {
    CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// X pixel position of a record; a lone record sits mid-plot
fn x_at(index: usize, len: usize) -> f64 {
    if len <= 1 {
        MARGIN_LEFT + plot_width() / 2.0
    } else {
        MARGIN_LEFT + index as f64 / (len - 1) as f64 * plot_width()
    }
}

/// Y pixel position of a value (canvas y grows downward)
fn y_px(value: f64, y_min: f64, y_max: f64) -> f64 {
    MARGIN_TOP + (y_max - value) / (y_max - y_min) * plot_height()
}

/// Y-axis bounds: data min/max across all series, padded by 10%,
/// widened to a unit band when the data is flat
fn y_bounds(points: &[TimeSeriesPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for point in points {
        for series in Series::ALL {
            let v = series.value(point);
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Indices of records that get an x-axis label. Every record is a tick
/// source; labels are thinned for legibility on dense series, keeping the
/// first and last record.
fn axis_ticks(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let stride = (len - 1) / MAX_X_LABELS + 1;
    let mut ticks: Vec<usize> = (0..len).step_by(stride).collect();
    if ticks.last() != Some(&(len - 1)) {
        ticks.push(len - 1);
    }
    ticks
}

/// Record nearest to an x pixel position, clamped to the plotted range
fn nearest_index(x: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if len == 1 {
        return Some(0);
    }

    let step = plot_width() / (len - 1) as f64;
    let idx = ((x - MARGIN_LEFT) / step).round();

    if idx < 0.0 {
        Some(0)
    } else if idx as usize >= len {
        Some(len - 1)
    } else {
        Some(idx as usize)
    }
}

/// Fritsch-Carlson tangents for a monotone cubic through evenly spaced
/// samples (unit step). Interpolating with these tangents never overshoots
/// between adjacent samples, so the drawn curve stays inside the data range.
fn monotone_tangents(ys: &[f64]) -> Vec<f64> {
    let n = ys.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0.0];
    }

    let deltas: Vec<f64> = ys.windows(2).map(|w| w[1] - w[0]).collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = deltas[0];
    tangents[n - 1] = deltas[n - 2];
    for i in 1..n - 1 {
        tangents[i] = if deltas[i - 1] * deltas[i] <= 0.0 {
            // Local extremum: flat tangent
            0.0
        } else {
            (deltas[i - 1] + deltas[i]) / 2.0
        };
    }

    // Clamp tangents so each segment stays monotone
    for i in 0..n - 1 {
        if deltas[i] == 0.0 {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }
        let a = tangents[i] / deltas[i];
        let b = tangents[i + 1] / deltas[i];
        let s = a * a + b * b;
        if s > 9.0 {
            let t = 3.0 / s.sqrt();
            tangents[i] = t * a * deltas[i];
            tangents[i + 1] = t * b * deltas[i];
        }
    }

    tangents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, anxiety: f64, depression: f64, sleep_issues: f64) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: date.to_string(),
            anxiety,
            depression,
            sleep_issues,
        }
    }

    #[test]
    fn series_names_and_colors_are_distinct() {
        let names: Vec<_> = Series::ALL.into_iter().map(Series::name).collect();
        let colors: Vec<_> = Series::ALL.into_iter().map(Series::color).collect();
        assert_eq!(names, vec!["anxiety", "depression", "sleep_issues"]);
        assert_eq!(colors.len(), 3);
        assert!(colors.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn series_value_reads_matching_field() {
        let p = point("2024-01-01", 3.0, 2.0, 1.0);
        assert_eq!(Series::Anxiety.value(&p), 3.0);
        assert_eq!(Series::Depression.value(&p), 2.0);
        assert_eq!(Series::SleepIssues.value(&p), 1.0);
    }

    #[test]
    fn y_bounds_pads_by_ten_percent() {
        let points = vec![
            point("2024-01-01", 0.0, 5.0, 10.0),
            point("2024-01-02", 2.0, 4.0, 6.0),
        ];
        let (min, max) = y_bounds(&points);
        assert_eq!(min, -1.0);
        assert_eq!(max, 11.0);
    }

    #[test]
    fn y_bounds_widens_flat_data() {
        let points = vec![point("2024-01-01", 4.0, 4.0, 4.0)];
        let (min, max) = y_bounds(&points);
        assert_eq!(min, 3.0);
        assert_eq!(max, 5.0);
    }

    #[test]
    fn axis_ticks_one_per_record_when_sparse() {
        assert_eq!(axis_ticks(1), vec![0]);
        assert_eq!(axis_ticks(7), (0..7).collect::<Vec<_>>());
        assert_eq!(axis_ticks(10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn axis_ticks_thin_dense_series() {
        let ticks = axis_ticks(90);
        assert!(ticks.len() <= MAX_X_LABELS + 1);
        assert_eq!(ticks[0], 0);
        assert_eq!(*ticks.last().unwrap(), 89);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn axis_ticks_empty_for_no_records() {
        assert!(axis_ticks(0).is_empty());
    }

    #[test]
    fn nearest_index_resolves_and_clamps() {
        assert_eq!(nearest_index(400.0, 0), None);
        assert_eq!(nearest_index(700.0, 1), Some(0));

        // Two records sit at the plot edges
        assert_eq!(nearest_index(MARGIN_LEFT, 2), Some(0));
        assert_eq!(nearest_index(CANVAS_WIDTH - MARGIN_RIGHT, 2), Some(1));

        // Positions off the plot clamp to the nearest end
        assert_eq!(nearest_index(0.0, 5), Some(0));
        assert_eq!(nearest_index(CANVAS_WIDTH, 5), Some(4));
    }

    #[test]
    fn lone_record_is_centered() {
        let x = x_at(0, 1);
        assert!(x > MARGIN_LEFT && x < CANVAS_WIDTH - MARGIN_RIGHT);
    }

    #[test]
    fn monotone_tangents_flat_data_is_flat() {
        let tangents = monotone_tangents(&[2.0, 2.0, 2.0, 2.0]);
        assert!(tangents.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn monotone_tangents_keep_direction() {
        let tangents = monotone_tangents(&[1.0, 2.0, 4.0, 8.0]);
        assert!(tangents.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn monotone_tangents_zero_at_extrema() {
        let tangents = monotone_tangents(&[0.0, 2.0, 0.0]);
        assert_eq!(tangents[1], 0.0);
    }

    #[test]
    fn monotone_tangents_flat_segment_pins_both_ends() {
        let tangents = monotone_tangents(&[0.0, 0.0, 10.0]);
        assert_eq!(tangents[0], 0.0);
        assert_eq!(tangents[1], 0.0);
    }

    #[test]
    fn monotone_tangents_handle_tiny_inputs() {
        assert!(monotone_tangents(&[]).is_empty());
        assert_eq!(monotone_tangents(&[5.0]), vec![0.0]);
        assert_eq!(monotone_tangents(&[0.0, 3.0]), vec![3.0, 3.0]);
    }

    #[test]
    fn pretty_date_falls_back_to_verbatim() {
        assert_eq!(pretty_date("2024-01-01"), "Mon, Jan 1 2024");
        assert_eq!(pretty_date("not-a-date"), "not-a-date");
    }
}
