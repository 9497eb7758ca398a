use crate::modules::config::{AppConfig, Params};
use crate::modules::controls::{
    gravity_controller, interval_controller, rate_controller, ControlAction, Readouts, SpawnSuppression, Step,
};
use crate::modules::error::ConfigError;
use crate::modules::factory::ShapeFactory;
use crate::modules::registry::Registry;
use crate::modules::shape::{Shape, ShapeId};
use crate::modules::simulator::FallSimulator;
use crate::modules::spawner::SpawnScheduler;
use log::{debug, info};
use macroquad::prelude::Vec2;

/// Everything the toy knows, driven one frame at a time by the main loop.
///
/// Times are milliseconds from any fixed origin. The main loop passes
/// `get_time() * 1000.0`, tests pass whatever they like.
pub struct ShapeApp {
    config: AppConfig,
    params: Params,
    registry: Registry,
    factory: ShapeFactory,
    simulator: FallSimulator,
    scheduler: SpawnScheduler,
    suppression: SpawnSuppression,
    readouts: Readouts,
}

impl ShapeApp {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = Params::from_config(&config);
        let registry = Registry::new();
        let readouts = Readouts::new(&params, &registry);
        Ok(ShapeApp {
            factory: ShapeFactory::new(config.viewport_width),
            simulator: FallSimulator::new(config.viewport_height),
            scheduler: SpawnScheduler::new(0.0),
            suppression: SpawnSuppression::default(),
            params,
            registry,
            readouts,
            config,
        })
    }

    /// Spawns the first shape and starts the periodic spawn loop
    pub fn init(&mut self, now_ms: f64) {
        info!(
            "starting with gravity {:.1}, interval {} ms, {} shape(s) per tick",
            self.params.gravity(),
            self.params.spawn_interval_ms(),
            self.params.shapes_per_tick()
        );
        self.scheduler.restart_auto(now_ms);
        self.spawn_random();
    }

    /// Spawns, moves and culls for one frame
    pub fn frame(&mut self, now_ms: f64) {
        let due = self.scheduler.tick(now_ms, self.params.spawn_interval_ms());
        for _ in 0..due {
            self.spawn_random();
        }

        if !self.simulator.step(&mut self.registry).is_empty() {
            self.readouts.refresh_population(&self.registry);
        }
        if self.suppression.is_armed() {
            debug!("spawn suppression expired unused");
            self.suppression.expire();
        }
    }

    /// A click on the canvas. Hits the topmost shape first, then the spawn check.
    pub fn click(&mut self, point: Vec2) -> Option<ShapeId> {
        if let Some(id) = self.registry.shape_at(point) {
            self.on_shape_click(id);
        }
        self.on_canvas_click(point)
    }

    /// Removes the clicked shape and suppresses the spawn for this click
    pub fn on_shape_click(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self.registry.remove(id)?;
        debug!("removed {} #{} by click", removed.kind.name(), removed.id.0);
        self.suppression.arm();
        self.readouts.refresh_population(&self.registry);
        Some(removed)
    }

    /// Spawns at the point unless a removal just claimed this click
    pub fn on_canvas_click(&mut self, point: Vec2) -> Option<ShapeId> {
        if self.suppression.consume() {
            return None;
        }
        Some(self.spawn_at(point))
    }

    pub fn apply(&mut self, action: ControlAction, now_ms: f64) {
        match action {
            ControlAction::AddGravity => self.gravity(Step::Up),
            ControlAction::MinusGravity => self.gravity(Step::Down),
            ControlAction::AddInterval => self.interval(Step::Up, now_ms),
            ControlAction::MinusInterval => self.interval(Step::Down, now_ms),
            ControlAction::AddAmount => self.rate(Step::Up, now_ms),
            ControlAction::MinusAmount => self.rate(Step::Down, now_ms),
        }
    }

    fn gravity(&mut self, step: Step) {
        gravity_controller(step, &mut self.params, &mut self.registry, &mut self.readouts);
    }

    fn interval(&mut self, step: Step, now_ms: f64) {
        interval_controller(step, now_ms, &mut self.params, &mut self.scheduler, &mut self.readouts);
    }

    fn rate(&mut self, step: Step, now_ms: f64) {
        rate_controller(step, now_ms, &mut self.params, &mut self.scheduler, &mut self.readouts);
    }

    pub fn spawn_random(&mut self) -> ShapeId {
        let shape = self.factory.spawn_random(self.params.gravity());
        self.track(shape)
    }

    pub fn spawn_at(&mut self, point: Vec2) -> ShapeId {
        let shape = self.factory.spawn_at(point, self.params.gravity());
        self.track(shape)
    }

    fn track(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        self.registry.add(shape);
        self.readouts.refresh_population(&self.registry);
        id
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::geometry::total_area;

    fn app() -> ShapeApp {
        ShapeApp::new(AppConfig::default()).expect("default config is valid")
    }

    #[test]
    fn bad_config_is_rejected() {
        let config = AppConfig { spawn_interval_ms: 10, ..AppConfig::default() };
        assert!(matches!(ShapeApp::new(config), Err(ConfigError::InvalidInterval(10))));
    }

    #[test]
    fn init_spawns_one_shape_above_the_viewport() {
        let mut app = app();
        app.init(0.0);
        assert_eq!(app.registry().len(), 1);
        assert_eq!(app.readouts().count, "1");
        let shape = app.registry().iter().next().unwrap();
        assert_eq!(shape.pos.y, -100.0);
        assert_eq!(shape.gravity, 0.5);
    }

    #[test]
    fn periodic_loop_spawns_each_interval() {
        let mut app = app();
        app.init(0.0);
        app.frame(500.0);
        assert_eq!(app.registry().len(), 1);
        app.frame(1000.0);
        assert_eq!(app.registry().len(), 2);
        app.frame(2000.0);
        assert_eq!(app.registry().len(), 3);
    }

    #[test]
    fn click_on_empty_canvas_spawns_at_point() {
        let mut app = app();
        let id = app.click(Vec2::new(200.0, 300.0)).expect("spawned");
        let shape = app.registry().get(id).unwrap();
        assert_eq!(shape.pos, Vec2::new(200.0, 300.0));
    }

    #[test]
    fn click_on_shape_removes_it_without_spawning() {
        let mut app = app();
        let first = app.spawn_at(Vec2::new(200.0, 300.0));
        let other = app.spawn_at(Vec2::new(700.0, 600.0));
        let area_before = app.registry().total_area();
        let removed_area = app.registry().get(first).unwrap().area();

        assert_eq!(app.click(Vec2::new(200.0, 300.0)), None);
        assert_eq!(app.registry().len(), 1);
        assert!(app.registry().contains(other));
        assert!(!app.registry().contains(first));
        let expected = total_area([app.registry().get(other).unwrap().area()]);
        assert_eq!(app.registry().total_area(), expected);
        assert!(area_before >= app.registry().total_area());
        assert!((area_before as f64 - expected as f64 - removed_area).abs() <= 1.0);
    }

    #[test]
    fn next_click_after_a_removal_spawns_again() {
        let mut app = app();
        let id = app.spawn_at(Vec2::new(200.0, 300.0));
        assert!(app.on_shape_click(id).is_some());
        assert_eq!(app.on_canvas_click(Vec2::new(200.0, 300.0)), None);
        assert!(app.on_canvas_click(Vec2::new(200.0, 300.0)).is_some());
    }

    #[test]
    fn removing_a_gone_shape_does_not_arm_suppression() {
        let mut app = app();
        let id = app.spawn_at(Vec2::new(200.0, 300.0));
        assert!(app.on_shape_click(id).is_some());
        app.frame(1.0);
        assert!(app.on_shape_click(id).is_none());
        assert!(app.on_canvas_click(Vec2::new(10.0, 10.0)).is_some());
    }

    #[test]
    fn gravity_button_changes_existing_shapes() {
        let mut app = app();
        let id = app.spawn_at(Vec2::new(100.0, 100.0));
        app.apply(ControlAction::AddGravity, 0.0);
        assert_eq!(app.registry().get(id).unwrap().gravity, 0.6);

        app.frame(1.0);
        assert!((app.registry().get(id).unwrap().pos.y - 100.6).abs() < 1e-4);
        assert_eq!(app.readouts().gravity, "Gravity Value: 0.6");
    }

    #[test]
    fn button_pressed_on_a_frame_governs_that_frame() {
        let mut app = app();
        app.init(0.0);

        // The old 1000 ms loop would fire here, the restarted one does not
        app.apply(ControlAction::AddInterval, 1000.0);
        app.frame(1000.0);
        assert_eq!(app.registry().len(), 1);
        app.frame(3000.0);
        assert_eq!(app.registry().len(), 2);
    }

    #[test]
    fn rate_button_starts_a_bounded_burst() {
        let mut app = app();
        app.apply(ControlAction::AddInterval, 0.0);
        app.apply(ControlAction::AddAmount, 0.0);
        assert_eq!(app.params().shapes_per_tick(), 2);

        // Interval is 2000 ms, periodic loop and burst both fire at each mark
        app.frame(2000.0);
        assert_eq!(app.registry().len(), 2);
        app.frame(4000.0);
        assert_eq!(app.registry().len(), 4);
        app.frame(6000.0);
        assert_eq!(app.registry().len(), 5);
    }

    #[test]
    fn shapes_fall_out_and_readouts_follow() {
        let config = AppConfig { viewport_height: 100.0, ..AppConfig::default() };
        let mut app = ShapeApp::new(config).unwrap();
        let id = app.spawn_at(Vec2::new(10.0, 179.8));
        assert_eq!(app.readouts().count, "1");

        // Tallest kind is the circle at 80 px, so 0.5 px more clears every kind
        app.frame(1.0);
        assert!(app.registry().get(id).is_none());
        assert_eq!(app.readouts().count, "0");
        assert_eq!(app.readouts().area, "0 px²");
    }
}
