//! Scene tessellation
//!
//! Converts a [`SceneView`] into a triangle list, back to front: base, links
//! and joints, tool, arc light or reticle, then sparks on top.

use crate::palette::{self, Rgba};
use crate::shapes::Mesh;
use cobot_core::sim::{ArmMode, SceneView};
use cobot_core::sparks::{Spark, SparkBand};
use cobot_core::Segment;
use glam::Vec2;

const BASE_SIZE: Vec2 = Vec2::new(60.0, 30.0);
const HUB_RADIUS: f32 = 20.0;
const HUB_RISE: f32 = 15.0;
const RETICLE_HALF: f32 = 10.0;

/// Rebuild `mesh` for one frame. `flicker` in `[0, 1)` sizes the arc light.
pub fn build_scene(view: &SceneView<'_>, flicker: f32, mesh: &mut Mesh) {
    mesh.clear();

    let anchor = view.chain.anchor().as_vec2();
    mesh.rect(anchor - BASE_SIZE * 0.5, BASE_SIZE, palette::BASE_PLATE);
    mesh.circle(anchor - Vec2::Y * HUB_RISE, HUB_RADIUS, palette::HUB);

    let segments = view.chain.segments();
    let count = segments.len();
    for (i, segment) in segments.iter().enumerate() {
        let base_half = link_half_thickness(count, i);
        let tip_half = link_half_thickness(count, i + 1);
        draw_link(mesh, segment, base_half, tip_half);
        draw_joint(mesh, segment.base.as_vec2(), base_half + 2.0);
    }

    if let Some(last) = segments.last() {
        draw_tool(mesh, last);
    }

    let tip = view.tip.as_vec2();
    match view.mode {
        ArmMode::Welding => {
            let radius = 6.0 + flicker * 6.0;
            mesh.circle(tip, radius * 2.0, palette::ARC_HALO);
            mesh.circle(tip, radius, palette::ARC_LIGHT);
        }
        ArmMode::Tracking => {
            let target = view.target.as_vec2();
            let h = Vec2::X * RETICLE_HALF;
            let v = Vec2::Y * RETICLE_HALF;
            mesh.line(target - h, target + h, 1.0, palette::RETICLE);
            mesh.line(target - v, target + v, 1.0, palette::RETICLE);
        }
        ArmMode::Seeking => {}
    }

    for spark in view.sparks {
        mesh.round_line(
            spark.previous.as_vec2(),
            spark.position.as_vec2(),
            spark_width(spark),
            spark_color(spark),
        );
    }
}

/// Links thin out toward the tool: 2px narrower per joint, 6px at the end.
fn link_half_thickness(count: usize, index: usize) -> f32 {
    count.saturating_sub(index) as f32 * 2.0 + 6.0
}

fn draw_link(mesh: &mut Mesh, segment: &Segment, base_half: f32, tip_half: f32) {
    let base = segment.base.as_vec2();
    let tip = segment.tip().as_vec2();
    let normal = Vec2::from_angle(segment.angle as f32).perp();
    let corners = [
        base + normal * base_half,
        tip + normal * tip_half,
        tip - normal * tip_half,
        base - normal * base_half,
    ];
    mesh.quad(corners, palette::LINK);
    mesh.closed_polyline(&corners, 1.0, palette::OUTLINE);
}

fn draw_joint(mesh: &mut Mesh, center: Vec2, radius: f32) {
    // 2px ring straddling the rim
    mesh.circle(center, radius + 1.0, palette::ACCENT);
    mesh.circle(center, radius - 1.0, palette::JOINT);
}

fn draw_tool(mesh: &mut Mesh, segment: &Segment) {
    let origin = segment.tip().as_vec2();
    let rotation = Vec2::from_angle(segment.angle as f32);
    let local = |x: f32, y: f32| origin + rotation.rotate(Vec2::new(x, y));

    mesh.quad(
        [local(0.0, -8.0), local(12.0, -8.0), local(12.0, 8.0), local(0.0, 8.0)],
        palette::HUB,
    );
    mesh.quad(
        [local(12.0, -4.0), local(24.0, -1.0), local(24.0, 1.0), local(12.0, 4.0)],
        palette::TOOL_TIP,
    );
}

pub fn spark_color(spark: &Spark) -> Rgba {
    let base = match spark.band() {
        SparkBand::WhiteHot => palette::SPARK_WHITE_HOT,
        SparkBand::Glowing => palette::SPARK_GLOWING,
        SparkBand::Cooling => palette::SPARK_COOLING,
    };
    palette::with_alpha(base, spark.heat().clamp(0.0, 1.0) as f32)
}

pub fn spark_width(spark: &Spark) -> f32 {
    (spark.heat() as f32 * 2.5).max(0.5)
}
