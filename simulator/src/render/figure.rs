use crate::workflow::config::DemoConfig;
use crate::workflow::runner::WorkflowResult;
use anyhow::{anyhow, Context};
use laplacecore::math::StatsHelper;
use laplacecore::scene::{MissileMarker, Point, Scene};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const FIGURE_SIZE: (u32, u32) = (1600, 700);
const CONE_FILL: RGBColor = RGBColor(255, 221, 170);
const CONE_EDGE: RGBColor = RGBColor(255, 165, 0);
const RING: RGBColor = RGBColor(128, 128, 128);
const SWEEP: RGBColor = RGBColor(0, 128, 0);
const INTERCEPTOR: RGBColor = RGBColor(31, 119, 180);
const TARGET: RGBColor = RGBColor(214, 39, 40);

type SceneChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("drawing failed: {}", err)
}

fn as_coord(point: Point) -> (f64, f64) {
    (point.x, point.y)
}

/// Renders the scene snapshot and the `|F(s)|` curve side by side into a PNG.
pub fn render_figure(
    config: &DemoConfig,
    result: &WorkflowResult,
    scene: &Scene,
) -> anyhow::Result<()> {
    let path = config.output.as_path();
    ensure_parent(path)?;

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;
    let root = root
        .titled(&config.title, ("sans-serif", 26))
        .map_err(draw_error)?;
    let panels = root.split_evenly((1, 2));

    draw_scene(&panels[0], scene).context("drawing radar scene")?;
    draw_transform(&panels[1], result).context("drawing transform curve")?;

    root.present().map_err(draw_error)?;
    log::info!("figure written to {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    Ok(())
}

fn draw_scene(area: &DrawingArea<BitMapBackend<'_>, Shift>, scene: &Scene) -> anyhow::Result<()> {
    let bounds = scene.bounds;
    let mut chart = ChartBuilder::on(area)
        .caption("Radar Intercept Scene", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(draw_error)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .draw()
        .map_err(draw_error)?;

    let radar = &scene.radar;
    let cone: Vec<(f64, f64)> = radar.cone_outline(48).into_iter().map(as_coord).collect();
    chart
        .draw_series(std::iter::once(Polygon::new(
            cone.clone(),
            CONE_FILL.mix(0.35).filled(),
        )))
        .map_err(draw_error)?;
    chart
        .draw_series(LineSeries::new(cone, CONE_EDGE.stroke_width(2)))
        .map_err(draw_error)?;

    for radius in [radar.inner_radius, radar.outer_radius] {
        chart
            .draw_series(LineSeries::new(
                radar.ring(radius, 64).into_iter().map(as_coord),
                RING.mix(0.8),
            ))
            .map_err(draw_error)?;
    }

    for (from, to) in radar.cross_segments() {
        chart
            .draw_series(LineSeries::new(
                [as_coord(from), as_coord(to)],
                BLACK.stroke_width(2),
            ))
            .map_err(draw_error)?;
    }
    chart
        .draw_series(std::iter::once(Text::new(
            radar.label.clone(),
            as_coord(radar.label_anchor()),
            ("sans-serif", 14),
        )))
        .map_err(draw_error)?;

    let (beam_start, beam_end) = scene.sweep.beam(radar.center);
    chart
        .draw_series(LineSeries::new(
            [as_coord(beam_start), as_coord(beam_end)],
            SWEEP.mix(0.7).stroke_width(2),
        ))
        .map_err(draw_error)?;

    draw_marker(&mut chart, &scene.interceptor, INTERCEPTOR)?;
    draw_marker(&mut chart, &scene.target, TARGET)?;
    Ok(())
}

fn draw_marker(
    chart: &mut SceneChart<'_, '_>,
    marker: &MissileMarker,
    color: RGBColor,
) -> anyhow::Result<()> {
    let outline: Vec<(f64, f64)> = marker.outline().into_iter().map(as_coord).collect();
    chart
        .draw_series(std::iter::once(Polygon::new(outline, color.filled())))
        .map_err(draw_error)?;
    chart
        .draw_series(std::iter::once(Text::new(
            marker.label.clone(),
            as_coord(marker.label_anchor()),
            ("sans-serif", 14).into_font().color(&color),
        )))
        .map_err(draw_error)?;
    Ok(())
}

fn draw_transform(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    result: &WorkflowResult,
) -> anyhow::Result<()> {
    let (s_min, s_max) = StatsHelper::finite_bounds(&result.sample_points).unwrap_or((0.0, 1.0));
    let s_range = if s_max > s_min {
        s_min..s_max
    } else {
        (s_min - 0.5)..(s_max + 0.5)
    };
    let y_max = StatsHelper::finite_bounds(&result.magnitudes)
        .map(|(_, hi)| hi * 1.1)
        .filter(|hi| *hi > 0.0)
        .unwrap_or(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption("Laplace Transform of Target Position", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(s_range, 0.0..y_max)
        .map_err(draw_error)?;
    chart
        .configure_mesh()
        .x_desc("s")
        .y_desc("|F(s)|")
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            result
                .sample_points
                .iter()
                .zip(&result.magnitudes)
                .filter(|(_, m)| m.is_finite())
                .map(|(&s, &m)| (s, m)),
            INTERCEPTOR.stroke_width(2),
        ))
        .map_err(draw_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::runner::Runner;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Needs system fonts: cargo test -- --ignored
    #[test]
    #[ignore]
    fn figure_is_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig {
            output: dir.path().join("plots").join("laplace_test.png"),
            ..Default::default()
        }
        .with_overrides(None, Some(4));
        let result = Runner::new(config.clone()).execute().unwrap();
        let scene = Scene::new(&mut StdRng::seed_from_u64(4));

        render_figure(&config, &result, &scene).unwrap();
        assert!(config.output.exists());
    }
}
