use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, text, Container,
    },
    Alignment, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Subscription, Task,
    Theme,
};
use laplacecore::math::{linspace, StatsHelper};
use laplacecore::scene::{Bounds, MissileMarker, Point as ScenePoint, Scene};
use laplacecore::signal::{NoisySine, NoisySineConfig};
use laplacecore::{EstimatorConfig, LaplaceEstimator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Hypersonic Interceptor vs Incoming Missile Simulation".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(FRAME_INTERVAL).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    scene: Scene,
    rng: StdRng,
    transform: Vec<(f64, f64)>,
    status: String,
    paused: bool,
    frames: u64,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    TogglePause,
    Respawn,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let mut rng = StdRng::from_entropy();
        let scene = Scene::new(&mut rng);
        let (transform, status) = match compute_transform() {
            Ok(points) => {
                let status = format!("|F(s)| computed at {} points", points.len());
                (points, status)
            }
            Err(err) => {
                log::warn!("transform failed: {}", err);
                (Vec::new(), format!("Transform error: {err}"))
            }
        };

        (
            Visualizer {
                scene,
                rng,
                transform,
                status,
                paused: false,
                frames: 0,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if !state.paused {
                    state.scene.tick(&mut state.rng);
                    state.frames += 1;
                }
            }
            Message::TogglePause => state.paused = !state.paused,
            Message::Respawn => state.scene.respawn_target(&mut state.rng),
        }
        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scene_canvas = Canvas::new(SceneView {
            scene: state.scene.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(420.0));

        let controls = row![
            button(if state.paused { "Resume" } else { "Pause" })
                .on_press(Message::TogglePause)
                .padding(8),
            button("Respawn target")
                .on_press(Message::Respawn)
                .padding(8),
        ]
        .spacing(10);

        let scene_column = column![
            text("Radar Intercept Scene").size(24),
            scene_canvas,
            controls,
            text(format!(
                "Sweep {:.0} deg | frame {}",
                state.scene.sweep.angle_deg, state.frames
            ))
            .size(14),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::FillPortion(3));

        let transform_canvas = Canvas::new(TransformPlot {
            points: state.transform.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(420.0));

        let transform_column = column![
            text("Laplace Transform of Target Position").size(24),
            transform_canvas,
            text("x: s, y: |F(s)|").size(12),
            text(&state.status).size(14),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::FillPortion(2));

        let layout = row![scene_column, transform_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Reference run: noisy sine, 50 points in [0.1, 5], t_max = 6, dt = 0.001.
fn compute_transform() -> Result<Vec<(f64, f64)>, String> {
    let s_values = linspace(0.1, 5.0, 50);
    let estimator = LaplaceEstimator::new(EstimatorConfig::new(6.0, 0.001));
    let mut signal = NoisySine::new(&NoisySineConfig::default()).map_err(|e| e.to_string())?;
    let values = estimator
        .estimate(&mut signal, &s_values)
        .map_err(|e| e.to_string())?;
    Ok(s_values
        .into_iter()
        .zip(StatsHelper::magnitudes(&values))
        .collect())
}

/// Maps scene coordinates (y up) onto a canvas (y down), preserving aspect.
struct Viewport {
    bounds: Bounds,
    scale: f32,
    origin: Point,
}

impl Viewport {
    fn fit(bounds: Bounds, canvas: Rectangle) -> Self {
        let scale =
            (canvas.width / bounds.width() as f32).min(canvas.height / bounds.height() as f32);
        let origin = Point::new(
            (canvas.width - bounds.width() as f32 * scale) / 2.0,
            (canvas.height - bounds.height() as f32 * scale) / 2.0,
        );
        Self {
            bounds,
            scale,
            origin,
        }
    }

    fn project(&self, point: ScenePoint) -> Point {
        Point::new(
            self.origin.x + (point.x - self.bounds.x_min) as f32 * self.scale,
            self.origin.y + (self.bounds.y_max - point.y) as f32 * self.scale,
        )
    }

    fn length(&self, value: f64) -> f32 {
        value as f32 * self.scale
    }
}

#[derive(Clone)]
struct SceneView {
    scene: Scene,
}

impl SceneView {
    fn draw_marker(frame: &mut Frame, view: &Viewport, marker: &MissileMarker, color: Color) {
        let outline = marker.outline();
        let triangle = Path::new(|builder| {
            builder.move_to(view.project(outline[0]));
            builder.line_to(view.project(outline[1]));
            builder.line_to(view.project(outline[2]));
            builder.close();
        });
        frame.fill(&triangle, color);
        frame.fill_text(canvas::Text {
            content: marker.label.clone(),
            position: view.project(marker.label_anchor()),
            color,
            size: Pixels(12.0),
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for SceneView {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.02, 0.02, 0.04),
        );

        let view = Viewport::fit(self.scene.bounds, bounds);
        let radar = &self.scene.radar;
        let center = view.project(radar.center);

        let cone = Path::new(|builder| {
            for (idx, point) in radar.cone_outline(48).into_iter().enumerate() {
                if idx == 0 {
                    builder.move_to(view.project(point));
                } else {
                    builder.line_to(view.project(point));
                }
            }
            builder.close();
        });
        frame.fill(&cone, Color::from_rgba(1.0, 0.87, 0.67, 0.35));
        frame.stroke(
            &cone,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgb(1.0, 0.65, 0.0)),
        );

        for radius in [radar.inner_radius, radar.outer_radius] {
            let ring = Path::new(|builder| builder.circle(center, view.length(radius)));
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_width(1.5)
                    .with_color(Color::from_rgba(0.5, 0.5, 0.5, 0.8)),
            );
        }

        let cross = Path::new(|builder| {
            for (from, to) in radar.cross_segments() {
                builder.move_to(view.project(from));
                builder.line_to(view.project(to));
            }
        });
        frame.stroke(
            &cross,
            Stroke::default().with_width(2.0).with_color(Color::WHITE),
        );
        frame.fill_text(canvas::Text {
            content: radar.label.clone(),
            position: view.project(radar.label_anchor()),
            color: Color::WHITE,
            size: Pixels(12.0),
            ..canvas::Text::default()
        });

        let (beam_start, beam_end) = self.scene.sweep.beam(radar.center);
        let beam = Path::line(view.project(beam_start), view.project(beam_end));
        frame.stroke(
            &beam,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgba(0.2, 0.9, 0.3, 0.7)),
        );

        Self::draw_marker(
            &mut frame,
            &view,
            &self.scene.interceptor,
            Color::from_rgb(0.18, 0.72, 0.89),
        );
        Self::draw_marker(
            &mut frame,
            &view,
            &self.scene.target,
            Color::from_rgb(0.95, 0.3, 0.2),
        );

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
struct TransformPlot {
    points: Vec<(f64, f64)>,
}

impl canvas::Program<Message> for TransformPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let margin = 16.0;
        let axes = Path::new(|builder| {
            builder.move_to(Point::new(margin, margin));
            builder.line_to(Point::new(margin, bounds.height - margin));
            builder.line_to(Point::new(bounds.width - margin, bounds.height - margin));
        });
        frame.stroke(
            &axes,
            Stroke::default()
                .with_color(Color::from_rgb(0.35, 0.35, 0.45))
                .with_width(1.0),
        );

        let finite: Vec<(f64, f64)> = self
            .points
            .iter()
            .copied()
            .filter(|(s, m)| s.is_finite() && m.is_finite())
            .collect();
        let s_values: Vec<f64> = finite.iter().map(|(s, _)| *s).collect();
        let m_values: Vec<f64> = finite.iter().map(|(_, m)| *m).collect();

        if let (Some((s_min, s_max)), Some((_, m_max))) = (
            StatsHelper::finite_bounds(&s_values),
            StatsHelper::finite_bounds(&m_values),
        ) {
            let s_span = (s_max - s_min).max(f64::EPSILON) as f32;
            let m_span = (m_max * 1.1).max(f64::EPSILON) as f32;
            let width = bounds.width - 2.0 * margin;
            let height = bounds.height - 2.0 * margin;

            let curve = Path::new(|builder| {
                for (idx, (s, m)) in finite.iter().enumerate() {
                    let x = margin + (*s - s_min) as f32 / s_span * width;
                    let y = bounds.height - margin - *m as f32 / m_span * height;
                    if idx == 0 {
                        builder.move_to(Point::new(x, y));
                    } else {
                        builder.line_to(Point::new(x, y));
                    }
                }
            });
            frame.stroke(
                &curve,
                Stroke::default()
                    .with_width(2.5)
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_flips_y_and_keeps_aspect() {
        let bounds = Bounds::default();
        let canvas = Rectangle::new(Point::ORIGIN, iced::Size::new(600.0, 600.0));
        let view = Viewport::fit(bounds, canvas);
        let top_left = view.project(ScenePoint::new(bounds.x_min, bounds.y_max));
        let bottom_right = view.project(ScenePoint::new(bounds.x_max, bounds.y_min));
        assert!((top_left.x - 0.0).abs() < 1e-3);
        assert!((bottom_right.x - 600.0).abs() < 1e-3);
        assert!(top_left.y < bottom_right.y);
        assert!(((bottom_right.y - top_left.y) - 400.0).abs() < 1e-3);
    }

    #[test]
    fn reference_transform_has_fifty_points() {
        let points = compute_transform().unwrap();
        assert_eq!(points.len(), 50);
        assert!(points.iter().all(|(_, m)| *m >= 0.0));
    }
}
