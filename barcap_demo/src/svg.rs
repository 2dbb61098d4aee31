// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `barcap_demo`.

use kurbo::{BezPath, Rect, Shape};
use peniko::Brush;

#[derive(Debug)]
struct SvgPath {
    path: BezPath,
    fill: Brush,
    stroke: Option<(Brush, f64)>,
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    paths: Vec<SvgPath>,
    labels: Vec<(f64, f64, String)>,
}

impl SvgScene {
    pub(crate) fn fill(&mut self, path: BezPath, fill: impl Into<Brush>) {
        self.paths.push(SvgPath {
            path,
            fill: fill.into(),
            stroke: None,
        });
    }

    pub(crate) fn fill_and_stroke(
        &mut self,
        path: BezPath,
        fill: impl Into<Brush>,
        stroke: impl Into<Brush>,
        stroke_width: f64,
    ) {
        self.paths.push(SvgPath {
            path,
            fill: fill.into(),
            stroke: Some((stroke.into(), stroke_width)),
        });
    }

    pub(crate) fn label(&mut self, x: f64, y: f64, text: impl Into<String>) {
        self.labels.push((x, y, text.into()));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box()
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for p in &self.paths {
            let d = p.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}" fill-rule="nonzero""#));
            write_paint_attr(&mut out, "fill", &p.fill);
            if let Some((stroke, width)) = &p.stroke {
                write_paint_attr(&mut out, "stroke", stroke);
                out.push_str(&format!(r#" stroke-width="{width}""#));
            }
            out.push_str("/>\n");
        }
        for (x, y, text) in &self.labels {
            out.push_str(&format!(
                r#"<text x="{x}" y="{y}" font-size="12" text-anchor="middle">{}</text>"#,
                escape_xml(text)
            ));
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }

    fn view_box(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for p in &self.paths {
            if p.path.elements().is_empty() {
                continue;
            }
            let b = p.path.bounding_box();
            rect = Some(rect.map_or(b, |r| r.union(b)));
        }
        for (x, y, _) in &self.labels {
            let b = Rect::new(x - 30.0, y - 12.0, x + 30.0, y + 4.0);
            rect = Some(rect.map_or(b, |r| r.union(b)));
        }
        // Add a small padding margin.
        rect.map(|r| r.inflate(10.0, 10.0))
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
