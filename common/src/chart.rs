//! 2D charts painted with egui
//!
//! A [`Chart`] collects lines, markers, reference lines, bars and an info box
//! in data coordinates and paints them into a region of an egui `Ui`. Axes can
//! be linear or base-10 logarithmic.

use egui::{
    epaint::TextShape, pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense,
    Shape, Stroke, Ui, Vec2,
};

/// Line colors, cycled by series index
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(23, 190, 207),
];

const PLOT_BACKGROUND: Color32 = Color32::from_rgb(18, 18, 26);
const GRID_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 70, 80);
const AXIS_COLOR: Color32 = Color32::from_rgb(160, 160, 170);
const TEXT_COLOR: Color32 = Color32::from_rgb(220, 220, 225);
const INFO_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(70, 60, 40, 220);

/// Plot area inset from the allocated rect: left, top, right, bottom
const MARGIN: [f32; 4] = [72.0, 32.0, 16.0, 48.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log10,
}

/// A tick position and its label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub scale: Scale,
}

impl Axis {
    pub fn linear(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            scale: Scale::Linear,
        }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            scale: Scale::Log10,
        }
    }

    /// Axis spanning the finite values in `values`.
    ///
    /// Linear axes get 5% padding on both sides. Log axes snap outward to
    /// whole decades and ignore non-positive values.
    pub fn fit(
        label: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
        scale: Scale,
    ) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite() && (scale == Scale::Linear || *v > 0.0))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let (min, max) = match scale {
            Scale::Linear if lo > hi => (0.0, 1.0),
            Scale::Linear if lo == hi => {
                let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
                (lo - pad, hi + pad)
            }
            Scale::Linear => {
                let pad = (hi - lo) * 0.05;
                (lo - pad, hi + pad)
            }
            Scale::Log10 if lo > hi => (1.0, 10.0),
            Scale::Log10 => {
                let lo_exp = lo.log10().floor();
                let mut hi_exp = hi.log10().ceil();
                if hi_exp <= lo_exp {
                    hi_exp = lo_exp + 1.0;
                }
                (10f64.powf(lo_exp), 10f64.powf(hi_exp))
            }
        };

        Self {
            label: label.into(),
            min,
            max,
            scale,
        }
    }

    fn transform(&self, v: f64) -> Option<f64> {
        match self.scale {
            Scale::Linear => v.is_finite().then_some(v),
            Scale::Log10 => (v.is_finite() && v > 0.0).then(|| v.log10()),
        }
    }

    /// Position of `v` along the axis, 0 at `min` and 1 at `max`.
    /// `None` when the value cannot be placed (non-positive on a log axis).
    pub fn fraction(&self, v: f64) -> Option<f64> {
        let lo = self.transform(self.min)?;
        let hi = self.transform(self.max)?;
        let t = self.transform(v)?;
        if hi == lo {
            return None;
        }
        Some((t - lo) / (hi - lo))
    }

    /// Inverse of [`Axis::fraction`]
    pub fn value_at(&self, fraction: f64) -> f64 {
        match self.scale {
            Scale::Linear => self.min + fraction * (self.max - self.min),
            Scale::Log10 => {
                let lo = self.min.log10();
                let hi = self.max.log10();
                10f64.powf(lo + fraction * (hi - lo))
            }
        }
    }

    pub fn ticks(&self) -> Vec<Tick> {
        match self.scale {
            Scale::Linear => linear_ticks(self.min, self.max),
            Scale::Log10 => log_ticks(self.min, self.max),
        }
    }
}

fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn linear_ticks(min: f64, max: f64) -> Vec<Tick> {
    if !(max > min) {
        return Vec::new();
    }
    let step = nice_step(max - min, 5);
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let eps = step * 1e-9;
    let mut value = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    while value <= max + eps {
        // Avoid printing "-0.0"
        let shown = if value.abs() < eps { 0.0 } else { value };
        let label = if shown != 0.0 && (shown.abs() >= 1e5 || shown.abs() < 1e-3) {
            format!("{shown:.1e}")
        } else {
            format!("{shown:.decimals$}")
        };
        ticks.push(Tick { value: shown, label });
        value += step;
    }
    ticks
}

fn log_ticks(min: f64, max: f64) -> Vec<Tick> {
    if !(min > 0.0 && max > min) {
        return Vec::new();
    }
    // Tolerate rounding in log10 of exact powers of ten.
    let lo = (min.log10() - 1e-9).ceil() as i32;
    let hi = (max.log10() + 1e-9).floor() as i32;
    if hi < lo {
        return Vec::new();
    }
    let decades = (hi - lo + 1) as usize;
    let stride = decades.div_ceil(8).max(1);
    (lo..=hi)
        .step_by(stride)
        .map(|exp| Tick {
            value: 10f64.powi(exp),
            label: format!("1e{exp}"),
        })
        .collect()
}

/// A polyline in data coordinates
#[derive(Debug, Clone)]
pub struct Line {
    pub label: Option<String>,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub width: f32,
}

/// A single highlighted data point
#[derive(Debug, Clone)]
pub struct Marker {
    pub position: [f64; 2],
    pub color: Color32,
    pub radius: f32,
}

/// A dashed line across the whole plot at a fixed x (vertical) or y
#[derive(Debug, Clone)]
pub struct Guide {
    pub value: f64,
    pub vertical: bool,
    pub label: Option<String>,
    pub color: Color32,
}

/// One category bar
#[derive(Debug, Clone)]
pub struct Bar {
    pub category: String,
    pub value: f64,
    pub color: Color32,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    pub lines: Vec<Line>,
    pub markers: Vec<Marker>,
    pub guides: Vec<Guide>,
    pub bars: Vec<Bar>,
    pub info: Option<String>,
}

impl Chart {
    pub fn new(title: impl Into<String>, x: Axis, y: Axis) -> Self {
        Self {
            title: title.into(),
            x,
            y,
            lines: Vec::new(),
            markers: Vec::new(),
            guides: Vec::new(),
            bars: Vec::new(),
            info: None,
        }
    }

    /// Categorical bar chart; the x axis spans one slot per bar
    pub fn bars(
        title: impl Into<String>,
        y_label: impl Into<String>,
        x_label: impl Into<String>,
        bars: Vec<Bar>,
    ) -> Self {
        let n = bars.len().max(1) as f64;
        let y = Axis::fit(
            y_label,
            bars.iter().map(|b| b.value).chain([0.0]),
            Scale::Linear,
        );
        let mut chart = Self::new(title, Axis::linear(x_label, -0.5, n - 0.5), y);
        chart.bars = bars;
        chart
    }

    pub fn line(mut self, label: Option<String>, points: Vec<[f64; 2]>, color: Color32) -> Self {
        self.lines.push(Line {
            label,
            points,
            color,
            width: 2.0,
        });
        self
    }

    pub fn marker(mut self, position: [f64; 2], color: Color32) -> Self {
        self.markers.push(Marker {
            position,
            color,
            radius: 5.0,
        });
        self
    }

    pub fn vline(mut self, x: f64, label: Option<String>, color: Color32) -> Self {
        self.guides.push(Guide {
            value: x,
            vertical: true,
            label,
            color,
        });
        self
    }

    pub fn hline(mut self, y: f64, label: Option<String>, color: Color32) -> Self {
        self.guides.push(Guide {
            value: y,
            vertical: false,
            label,
            color,
        });
        self
    }

    pub fn info(mut self, text: impl Into<String>) -> Self {
        self.info = Some(text.into());
        self
    }

    /// Map a data point into `plot` screen space
    pub fn to_screen(&self, plot: Rect, point: [f64; 2]) -> Option<Pos2> {
        let fx = self.x.fraction(point[0])?;
        let fy = self.y.fraction(point[1])?;
        Some(pos2(
            plot.left() + fx as f32 * plot.width(),
            plot.bottom() - fy as f32 * plot.height(),
        ))
    }

    /// Inverse of [`Chart::to_screen`]
    pub fn from_screen(&self, plot: Rect, pos: Pos2) -> [f64; 2] {
        let fx = ((pos.x - plot.left()) / plot.width()) as f64;
        let fy = ((plot.bottom() - pos.y) / plot.height()) as f64;
        [self.x.value_at(fx), self.y.value_at(fy)]
    }

    /// Paint the chart into a freshly allocated region of `size`
    pub fn show(&self, ui: &mut Ui, size: Vec2) -> Response {
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let outer = response.rect;
        let plot = Rect::from_min_max(
            outer.min + vec2(MARGIN[0], MARGIN[1]),
            outer.max - vec2(MARGIN[2], MARGIN[3]),
        );
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return response;
        }

        painter.rect_filled(plot, 2.0, PLOT_BACKGROUND);
        painter.text(
            pos2(outer.center().x, outer.top() + 4.0),
            Align2::CENTER_TOP,
            &self.title,
            FontId::proportional(15.0),
            TEXT_COLOR,
        );

        self.paint_axes(&painter, plot);

        let data = painter.with_clip_rect(plot);
        self.paint_bars(&data, &painter, plot);
        self.paint_guides(&data, plot);
        self.paint_lines(&data, plot);
        for marker in &self.markers {
            if let Some(pos) = self.to_screen(plot, marker.position) {
                data.circle_filled(pos, marker.radius, marker.color);
                data.circle_stroke(pos, marker.radius, Stroke::new(1.0, Color32::WHITE));
            }
        }

        self.paint_legend(&painter, plot);
        if let Some(info) = &self.info {
            paint_text_box(&painter, plot.left_top() + vec2(8.0, 8.0), info);
        }

        if let Some(hover) = response.hover_pos().filter(|p| plot.contains(*p)) {
            let [x, y] = self.from_screen(plot, hover);
            painter.text(
                plot.right_bottom() + vec2(0.0, 30.0),
                Align2::RIGHT_BOTTOM,
                format!("x = {x:.4e}   y = {y:.4e}"),
                FontId::monospace(11.0),
                AXIS_COLOR,
            );
        }

        painter.rect_stroke(plot, 2.0, Stroke::new(1.0, AXIS_COLOR));
        response
    }

    fn paint_axes(&self, painter: &Painter, plot: Rect) {
        let font = FontId::proportional(11.0);
        let grid = Stroke::new(1.0, GRID_COLOR);

        if self.bars.is_empty() {
            for tick in self.x.ticks() {
                let Some(f) = self.x.fraction(tick.value) else { continue };
                let sx = plot.left() + f as f32 * plot.width();
                painter.line_segment([pos2(sx, plot.top()), pos2(sx, plot.bottom())], grid);
                painter.text(
                    pos2(sx, plot.bottom() + 4.0),
                    Align2::CENTER_TOP,
                    tick.label,
                    font.clone(),
                    AXIS_COLOR,
                );
            }
        } else {
            for (i, bar) in self.bars.iter().enumerate() {
                if let Some(f) = self.x.fraction(i as f64) {
                    let sx = plot.left() + f as f32 * plot.width();
                    painter.text(
                        pos2(sx, plot.bottom() + 4.0),
                        Align2::CENTER_TOP,
                        &bar.category,
                        font.clone(),
                        AXIS_COLOR,
                    );
                }
            }
        }

        for tick in self.y.ticks() {
            let Some(f) = self.y.fraction(tick.value) else { continue };
            let sy = plot.bottom() - f as f32 * plot.height();
            painter.line_segment([pos2(plot.left(), sy), pos2(plot.right(), sy)], grid);
            painter.text(
                pos2(plot.left() - 6.0, sy),
                Align2::RIGHT_CENTER,
                tick.label,
                font.clone(),
                AXIS_COLOR,
            );
        }

        painter.text(
            pos2(plot.center().x, plot.bottom() + 22.0),
            Align2::CENTER_TOP,
            &self.x.label,
            FontId::proportional(13.0),
            TEXT_COLOR,
        );

        let galley =
            painter.layout_no_wrap(self.y.label.clone(), FontId::proportional(13.0), TEXT_COLOR);
        let anchor = pos2(
            plot.left() - MARGIN[0] + 4.0,
            plot.center().y + galley.size().x / 2.0,
        );
        painter.add(
            TextShape::new(anchor, galley, TEXT_COLOR).with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }

    fn paint_bars(&self, data: &Painter, labels: &Painter, plot: Rect) {
        let baseline = self.y.min.max(0.0).min(self.y.max);
        for (i, bar) in self.bars.iter().enumerate() {
            let x = i as f64;
            let (Some(a), Some(b)) = (
                self.to_screen(plot, [x - 0.3, baseline]),
                self.to_screen(plot, [x + 0.3, bar.value]),
            ) else {
                continue;
            };
            let rect = Rect::from_two_pos(a, b);
            data.rect_filled(rect, 0.0, bar.color.gamma_multiply(0.7));
            if let Some(annotation) = &bar.annotation {
                labels.text(
                    pos2(rect.center().x, rect.top() - 4.0),
                    Align2::CENTER_BOTTOM,
                    annotation,
                    FontId::proportional(13.0),
                    TEXT_COLOR,
                );
            }
        }
    }

    fn paint_guides(&self, data: &Painter, plot: Rect) {
        for guide in &self.guides {
            let axis = if guide.vertical { &self.x } else { &self.y };
            let Some(f) = axis.fraction(guide.value) else { continue };
            let ends = if guide.vertical {
                let sx = plot.left() + f as f32 * plot.width();
                [pos2(sx, plot.top()), pos2(sx, plot.bottom())]
            } else {
                let sy = plot.bottom() - f as f32 * plot.height();
                [pos2(plot.left(), sy), pos2(plot.right(), sy)]
            };
            data.extend(Shape::dashed_line(&ends, Stroke::new(2.0, guide.color), 8.0, 5.0));
        }
    }

    fn paint_lines(&self, data: &Painter, plot: Rect) {
        for line in &self.lines {
            let stroke = Stroke::new(line.width, line.color);
            // Points that cannot be placed split the line into runs.
            let mut run: Vec<Pos2> = Vec::new();
            let flush = |run: &mut Vec<Pos2>| {
                if run.len() >= 2 {
                    data.add(Shape::line(std::mem::take(run), stroke));
                }
                run.clear();
            };
            for point in &line.points {
                match self.to_screen(plot, *point) {
                    Some(pos) => run.push(pos),
                    None => flush(&mut run),
                }
            }
            flush(&mut run);
        }
    }

    /// Labelled series in legend order: lines first, then guides.
    /// The flag marks entries drawn dashed.
    pub fn legend_entries(&self) -> Vec<(&str, Color32, bool)> {
        let lines = self
            .lines
            .iter()
            .filter_map(|l| l.label.as_deref().map(|s| (s, l.color, false)));
        let guides = self
            .guides
            .iter()
            .filter_map(|g| g.label.as_deref().map(|s| (s, g.color, true)));
        lines.chain(guides).collect()
    }

    fn paint_legend(&self, painter: &Painter, plot: Rect) {
        let entries = self.legend_entries();
        if entries.is_empty() {
            return;
        }

        let font = FontId::proportional(12.0);
        let row = 16.0;
        let width = entries
            .iter()
            .map(|(label, _, _)| {
                painter
                    .layout_no_wrap(label.to_string(), font.clone(), TEXT_COLOR)
                    .size()
                    .x
            })
            .fold(0.0f32, f32::max)
            + 40.0;
        let height = entries.len() as f32 * row + 8.0;
        let rect = Rect::from_min_size(
            plot.right_top() + vec2(-width - 8.0, 8.0),
            vec2(width, height),
        );
        painter.rect_filled(rect, 4.0, PLOT_BACKGROUND.gamma_multiply(0.9));
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, GRID_COLOR));

        for (i, (label, color, dashed)) in entries.into_iter().enumerate() {
            let y = rect.top() + 4.0 + row * (i as f32 + 0.5);
            let swatch = [pos2(rect.left() + 6.0, y), pos2(rect.left() + 28.0, y)];
            if dashed {
                painter.extend(Shape::dashed_line(&swatch, Stroke::new(2.0, color), 4.0, 3.0));
            } else {
                painter.line_segment(swatch, Stroke::new(2.0, color));
            }
            painter.text(
                pos2(rect.left() + 34.0, y),
                Align2::LEFT_CENTER,
                label,
                font.clone(),
                TEXT_COLOR,
            );
        }
    }
}

/// Multi-line monospace text on a rounded background, anchored at its top-left
pub fn paint_text_box(painter: &Painter, top_left: Pos2, text: &str) -> Rect {
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::monospace(12.0), TEXT_COLOR);
    let rect = Rect::from_min_size(top_left, galley.size() + vec2(12.0, 10.0));
    painter.rect_filled(rect, 6.0, INFO_BACKGROUND);
    painter.galley(top_left + vec2(6.0, 5.0), galley, TEXT_COLOR);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_fraction_and_inverse() {
        let axis = Axis::linear("x", 0.0, 10.0);
        assert_eq!(axis.fraction(0.0), Some(0.0));
        assert_eq!(axis.fraction(10.0), Some(1.0));
        assert_eq!(axis.fraction(2.5), Some(0.25));
        assert!((axis.value_at(0.25) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn log_fraction_rejects_non_positive() {
        let axis = Axis::log10("E", 1e-3, 1e1);
        assert_eq!(axis.fraction(0.0), None);
        assert_eq!(axis.fraction(-1.0), None);
        assert!((axis.fraction(1e-1).unwrap() - 0.5).abs() < 1e-12);
        assert!((axis.value_at(0.5) - 1e-1).abs() < 1e-12);
    }

    #[test]
    fn fit_linear_pads_range() {
        let axis = Axis::fit("v", [0.0, 10.0, 5.0], Scale::Linear);
        assert!((axis.min + 0.5).abs() < 1e-12);
        assert!((axis.max - 10.5).abs() < 1e-12);
    }

    #[test]
    fn fit_log_snaps_to_decades_and_skips_zeros() {
        let axis = Axis::fit("E", [0.0, 3e-4, 2.0, f64::NAN], Scale::Log10);
        assert!((axis.min - 1e-4).abs() < 1e-16);
        assert!((axis.max - 10.0).abs() < 1e-12);
    }

    #[test]
    fn fit_handles_degenerate_input() {
        let flat = Axis::fit("v", [2.0, 2.0], Scale::Linear);
        assert!(flat.min < 2.0 && flat.max > 2.0);
        let empty = Axis::fit("v", std::iter::empty(), Scale::Log10);
        assert_eq!((empty.min, empty.max), (1.0, 10.0));
    }

    #[test]
    fn linear_ticks_use_nice_steps() {
        let ticks = Axis::linear("x", 0.0, 10.0).ticks();
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks[1].label, "2");

        let fine = Axis::linear("x", -0.5, 1.5).ticks();
        assert_eq!(fine[0].label, "-0.5");
        assert!(fine.iter().any(|t| t.label == "0.0"));
    }

    #[test]
    fn log_ticks_one_per_decade() {
        let ticks = Axis::log10("E", 1e-3, 1e2).ticks();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1e-3", "1e-2", "1e-1", "1e0", "1e1", "1e2"]);
    }

    #[test]
    fn log_ticks_thin_out_wide_ranges() {
        let ticks = Axis::log10("E", 1e-40, 1e0).ticks();
        assert!(ticks.len() <= 9);
        assert_eq!(ticks[0].label, "1e-40");
        assert!((ticks[0].value / 1e-40 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn screen_mapping_round_trips() {
        let chart = Chart::new(
            "t",
            Axis::linear("x", 0.0, 4.0),
            Axis::log10("y", 1.0, 100.0),
        );
        let plot = Rect::from_min_size(pos2(10.0, 20.0), vec2(400.0, 200.0));
        let pos = chart.to_screen(plot, [1.0, 10.0]).unwrap();
        assert!((pos.x - 110.0).abs() < 1e-3);
        assert!((pos.y - 120.0).abs() < 1e-3);
        let [x, y] = chart.from_screen(plot, pos);
        assert!((x - 1.0).abs() < 1e-4);
        assert!((y - 10.0).abs() < 1e-3);
        assert!(chart.to_screen(plot, [1.0, 0.0]).is_none());
    }

    #[test]
    fn bar_chart_spans_one_slot_per_bar() {
        let bars = vec![
            Bar {
                category: "a".into(),
                value: 0.5,
                color: PALETTE[0],
                annotation: None,
            },
            Bar {
                category: "b".into(),
                value: 1.5,
                color: PALETTE[1],
                annotation: None,
            },
        ];
        let chart = Chart::bars("waves", "N", "case", bars);
        assert_eq!((chart.x.min, chart.x.max), (-0.5, 1.5));
        assert!(chart.y.min <= 0.0 && chart.y.max >= 1.5);
    }

    #[test]
    fn legend_draws_guides_dashed_and_lines_solid() {
        let chart = Chart::new("t", Axis::linear("x", 0.0, 1.0), Axis::linear("y", 0.0, 1.0))
            .line(Some("curve".into()), vec![[0.0, 0.0], [1.0, 1.0]], PALETTE[0])
            .line(None, vec![[0.0, 1.0], [1.0, 0.0]], PALETTE[1])
            .hline(0.5, Some("reference".into()), PALETTE[2])
            .vline(0.5, None, PALETTE[3]);
        assert_eq!(
            chart.legend_entries(),
            vec![("curve", PALETTE[0], false), ("reference", PALETTE[2], true)]
        );
    }
}
