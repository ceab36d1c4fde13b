use std::f32::consts::{PI, TAU};

use eframe::egui::{Color32, Pos2};

use crate::dataset::ColorEntry;

/// One equal-weight pie segment. Angles are radians in screen space
/// (y down), so increasing angle runs clockwise.
pub struct Slice {
    pub label: String,
    pub color: Color32,
    pub start: f32,
    pub end: f32,
}

/// One slice per entry, starting at 12 o'clock, clockwise, contiguous over
/// the full circle.
pub fn layout(entries: &[ColorEntry]) -> Vec<Slice> {
    let n = entries.len();
    let step = TAU / n.max(1) as f32;
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| Slice {
            label: format!("{} ({},{},{})", e.name, e.rgb[0], e.rgb[1], e.rgb[2]),
            color: Color32::from_rgb(e.rgb[0], e.rgb[1], e.rgb[2]),
            start: -PI / 2.0 + step * i as f32,
            end: -PI / 2.0 + step * (i + 1) as f32,
        })
        .collect()
}

/// Fan polygon for one slice: center plus arc samples. Convex for any sweep
/// up to a half circle, which holds for two or more entries.
pub fn wedge_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let sweep = end - start;
    let steps = ((sweep / 0.05).ceil() as usize).max(2);
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push(center);
    for i in 0..=steps {
        let a = start + sweep * (i as f32 / steps as f32);
        pts.push(Pos2::new(center.x + radius * a.cos(), center.y + radius * a.sin()));
    }
    pts
}
