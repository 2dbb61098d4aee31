// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a gallery of bar outlines and a waterfall chart to `barcap_demo.svg`.

mod svg;

use barcap::{
    AxisOffset, BarEntry, BiConvexOutline, ConcaveConvexOutline, ConvexConcaveConvexOutline,
    LinearAxis, Outline, PlaneConvexOutline, Size, WaterfallSpec,
};
use kurbo::{Line, Rect, Shape, Vec2};
use peniko::Color;
use peniko::color::palette::css;

use crate::svg::SvgScene;

const RISING: Color = css::SEA_GREEN;
const FALLING: Color = css::TOMATO;
const FIRST: Color = css::STEEL_BLUE;
const GUIDE: Color = css::LIGHT_GRAY;

fn main() {
    let mut scene = SvgScene::default();
    gallery(&mut scene, Vec2::new(0.0, 0.0));
    waterfall(&mut scene, Rect::new(0.0, 200.0, 640.0, 520.0));
    std::fs::write("barcap_demo.svg", scene.to_svg_string()).expect("write barcap_demo.svg");
}

/// One cell per variant, each drawn over its layout box.
fn gallery(scene: &mut SvgScene, origin: Vec2) {
    let size = Size::new(40.0, 120.0);
    let short = Size::new(40.0, 12.0);
    let axis = LinearAxis::new((-100.0, 100.0));
    let cc = ConcaveConvexOutline::new(axis);
    let ccc = ConvexConcaveConvexOutline::new(axis);

    let cells: [(&str, Size, Outline, Color); 7] = [
        (
            "plane",
            size,
            PlaneConvexOutline::new().outline(size).expect("plane-convex"),
            RISING,
        ),
        (
            "short",
            short,
            PlaneConvexOutline::new().outline(short).expect("short plane-convex"),
            RISING,
        ),
        (
            "capsule",
            size,
            BiConvexOutline::new().outline(size).expect("bi-convex"),
            FIRST,
        ),
        (
            "stacked",
            size,
            cc.outline(size, BarEntry::new(40.0, 100.0)).expect("concave-convex"),
            RISING,
        ),
        (
            "inverted",
            size,
            cc.outline(size, BarEntry::new(-40.0, -100.0)).expect("concave-convex"),
            FALLING,
        ),
        (
            "crossing",
            size,
            ccc.outline(size, BarEntry::new(-60.0, 10.0), 1).expect("waterfall bar"),
            RISING,
        ),
        (
            "first",
            size,
            ccc.outline(size, BarEntry::new(0.0, 60.0), 0).expect("waterfall bar"),
            FIRST,
        ),
    ];

    for (i, (name, size, outline, color)) in cells.into_iter().enumerate() {
        let offset = origin + Vec2::new(20.0 + 80.0 * i as f64, 20.0);
        let frame = Rect::from_origin_size(offset.to_point(), size);
        scene.fill_and_stroke(frame.to_path(0.1), Color::TRANSPARENT, GUIDE, 1.0);
        scene.fill(outline.translated(offset), color);
        scene.label(frame.center().x, frame.y1 + 20.0, name);
    }
}

fn waterfall(scene: &mut SvgScene, area: Rect) {
    let deltas = [120.0, 45.0, -30.0, -80.0, 60.0, 25.0, -15.0];
    let spec = WaterfallSpec::new(deltas);
    let plot = area.inset(-20.0);
    let bars = spec.layout(plot).expect("waterfall layout");

    scene.fill_and_stroke(plot.to_path(0.1), Color::TRANSPARENT, GUIDE, 1.0);
    let axis = spec.axis();
    let zero_y = plot.y1 - axis.offset(0.0) * plot.height();
    scene.fill_and_stroke(
        Line::new((plot.x0, zero_y), (plot.x1, zero_y)).to_path(0.1),
        Color::TRANSPARENT,
        css::DIM_GRAY,
        1.0,
    );

    for bar in &bars {
        let color = if bar.index == 0 {
            FIRST
        } else if bar.entry.is_inverted() {
            FALLING
        } else {
            RISING
        };
        scene.fill(bar.placed_path(), color);
        let label = format!("{:+}", deltas[bar.index]);
        scene.label(bar.frame.center().x, plot.y1 + 16.0, label);
    }
}
