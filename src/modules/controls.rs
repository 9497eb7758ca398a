/*
Control panel: gravity, spawn interval and spawn rate.

Each controller is a pair of buttons plus a text readout.  The panel is
mounted from a layout that names every control by its selector, and
mounting fails if any required control is missing so the toy never starts
with half a panel.
*/

use crate::modules::config::Params;
use crate::modules::error::ConfigError;
use crate::modules::registry::Registry;
use crate::modules::scale::mouse_position_virtual;
use crate::modules::spawner::SpawnScheduler;
use crate::modules::text_button::TextButton;
use log::info;
use macroquad::prelude::*;
use std::collections::HashMap;

/// Every element the panel needs, named by its selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    AmountControls,
    Amount,
    AddAmount,
    MinusAmount,
    GravityValueControls,
    GravityValue,
    AddGravityValue,
    MinusGravityValue,
    Interval,
    AddInterval,
    MinusInterval,
}

impl ControlId {
    pub const ALL: [ControlId; 11] = [
        ControlId::AmountControls,
        ControlId::Amount,
        ControlId::AddAmount,
        ControlId::MinusAmount,
        ControlId::GravityValueControls,
        ControlId::GravityValue,
        ControlId::AddGravityValue,
        ControlId::MinusGravityValue,
        ControlId::Interval,
        ControlId::AddInterval,
        ControlId::MinusInterval,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            ControlId::AmountControls => ".amount-controls",
            ControlId::Amount => ".amount",
            ControlId::AddAmount => ".add-amount",
            ControlId::MinusAmount => ".minus-amount",
            ControlId::GravityValueControls => ".gravity-value-controls",
            ControlId::GravityValue => ".gravity-value",
            ControlId::AddGravityValue => ".add-gravity-value",
            ControlId::MinusGravityValue => ".minus-gravity-value",
            ControlId::Interval => ".interval",
            ControlId::AddInterval => ".add-interval",
            ControlId::MinusInterval => ".minus-interval",
        }
    }

    // Buttons map to an action, containers and readouts don't
    fn action(&self) -> Option<ControlAction> {
        match self {
            ControlId::AddAmount => Some(ControlAction::AddAmount),
            ControlId::MinusAmount => Some(ControlAction::MinusAmount),
            ControlId::AddGravityValue => Some(ControlAction::AddGravity),
            ControlId::MinusGravityValue => Some(ControlAction::MinusGravity),
            ControlId::AddInterval => Some(ControlAction::AddInterval),
            ControlId::MinusInterval => Some(ControlAction::MinusInterval),
            _ => None,
        }
    }
}

/// What a button press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    AddGravity,
    MinusGravity,
    AddInterval,
    MinusInterval,
    AddAmount,
    MinusAmount,
}

/// Where each control sits, in virtual pixels
#[derive(Debug, Clone, Default)]
pub struct PanelLayout {
    slots: Vec<(ControlId, Rect)>,
}

impl PanelLayout {
    pub fn new() -> Self {
        PanelLayout { slots: Vec::new() }
    }

    pub fn with(mut self, id: ControlId, rect: Rect) -> Self {
        self.slots.push((id, rect));
        self
    }

    pub fn without(mut self, id: ControlId) -> Self {
        self.slots.retain(|(slot, _)| *slot != id);
        self
    }

    pub fn get(&self, id: ControlId) -> Option<Rect> {
        self.slots.iter().find(|(slot, _)| *slot == id).map(|(_, rect)| *rect)
    }

    /// Three stacked groups in the top right corner
    pub fn standard(viewport_width: f32) -> Self {
        let group_w = 400.0;
        let x = viewport_width - group_w - 10.0;
        let group = |y: f32| Rect::new(x, y, group_w, 64.0);
        let readout = |y: f32| Rect::new(x + 10.0, y + 4.0, group_w - 20.0, 22.0);
        let add = |y: f32| Rect::new(x + 10.0, y + 28.0, 120.0, 30.0);
        let minus = |y: f32| Rect::new(x + 140.0, y + 28.0, 120.0, 30.0);

        let (gravity_y, amount_y, interval_y) = (10.0, 84.0, 158.0);
        PanelLayout::new()
            .with(ControlId::GravityValueControls, group(gravity_y))
            .with(ControlId::GravityValue, readout(gravity_y))
            .with(ControlId::AddGravityValue, add(gravity_y))
            .with(ControlId::MinusGravityValue, minus(gravity_y))
            .with(ControlId::AmountControls, group(amount_y))
            .with(ControlId::Amount, readout(amount_y))
            .with(ControlId::AddAmount, add(amount_y))
            .with(ControlId::MinusAmount, minus(amount_y))
            .with(ControlId::Interval, readout(interval_y))
            .with(ControlId::AddInterval, add(interval_y))
            .with(ControlId::MinusInterval, minus(interval_y))
    }
}

const PANEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.35);
const BUTTON_COLOR: Color = Color::new(0.10, 0.35, 0.55, 1.0);
const BUTTON_HOVER: Color = Color::new(0.15, 0.55, 0.35, 1.0);
const READOUT_FONT: u16 = 18;
const BUTTON_FONT: u16 = 18;

/// The mounted control panel
pub struct ControlPanel {
    rects: HashMap<ControlId, Rect>,
    // Background of each group, clicks inside never reach the canvas
    groups: Vec<Rect>,
    buttons: Vec<(ControlAction, TextButton)>,
}

impl ControlPanel {
    /// Fails on the first required control the layout doesn't have
    pub fn mount(layout: &PanelLayout) -> Result<Self, ConfigError> {
        let mut rects = HashMap::new();
        for id in ControlId::ALL {
            let rect = layout.get(id).ok_or(ConfigError::MissingControl { selector: id.selector() })?;
            rects.insert(id, rect);
        }

        let mut buttons = Vec::new();
        for id in ControlId::ALL {
            if let Some(action) = id.action() {
                let label = if id.selector().starts_with(".add") { "+" } else { "-" };
                buttons.push((action, TextButton::from_rect(rects[&id], label, BUTTON_COLOR, BUTTON_HOVER, BUTTON_FONT)));
            }
        }
        // The interval controls have no container selector, so their group
        // is the box around the readout and both buttons
        let interval_group = bounding_rect(&[
            rects[&ControlId::Interval],
            rects[&ControlId::AddInterval],
            rects[&ControlId::MinusInterval],
        ]);
        let groups = vec![
            rects[&ControlId::GravityValueControls],
            rects[&ControlId::AmountControls],
            interval_group,
        ];
        Ok(ControlPanel { rects, groups, buttons })
    }

    /// True when the point lands on any panel element or group background
    pub fn contains(&self, point: Vec2) -> bool {
        self.groups.iter().chain(self.rects.values()).any(|rect| rect.contains(point))
    }

    /// Which button, if any, sits under the point
    pub fn action_at(&self, point: Vec2) -> Option<ControlAction> {
        self.buttons.iter().find(|(_, button)| button.rect().contains(point)).map(|(action, _)| *action)
    }

    /// Draws group backgrounds, readouts and buttons
    pub fn draw(&self, readouts: &Readouts) {
        for rect in &self.groups {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_COLOR);
        }

        for (id, text) in [
            (ControlId::GravityValue, &readouts.gravity),
            (ControlId::Amount, &readouts.rate),
            (ControlId::Interval, &readouts.interval),
        ] {
            let rect = self.rects[&id];
            draw_text(text, rect.x, rect.y + rect.h - 4.0, READOUT_FONT as f32, WHITE);
        }

        let mouse = mouse_position_virtual();
        for (_, button) in &self.buttons {
            button.draw(button.rect().contains(mouse));
        }
    }
}

// Smallest rect holding all the given ones
fn bounding_rect(rects: &[Rect]) -> Rect {
    let left = rects.iter().map(|r| r.x).fold(f32::MAX, f32::min);
    let top = rects.iter().map(|r| r.y).fold(f32::MAX, f32::min);
    let right = rects.iter().map(|r| r.x + r.w).fold(f32::MIN, f32::max);
    let bottom = rects.iter().map(|r| r.y + r.h).fold(f32::MIN, f32::max);
    Rect::new(left, top, right - left, bottom - top)
}

/// All text the toy shows
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub count: String,
    pub area: String,
    pub gravity: String,
    pub interval: String,
    pub rate: String,
}

impl Readouts {
    pub fn new(params: &Params, registry: &Registry) -> Self {
        Readouts {
            count: count_text(registry.len()),
            area: area_text(registry.total_area()),
            gravity: gravity_text(params.gravity()),
            interval: interval_text(params.spawn_interval_ms()),
            rate: rate_text(params.shapes_per_tick()),
        }
    }

    pub fn refresh_population(&mut self, registry: &Registry) {
        self.count = count_text(registry.len());
        self.area = area_text(registry.total_area());
    }
}

pub fn count_text(count: usize) -> String {
    count.to_string()
}

pub fn area_text(total_area: u64) -> String {
    format!("{total_area} px²")
}

pub fn gravity_text(gravity: f32) -> String {
    format!("Gravity Value: {gravity:.1}")
}

pub fn interval_text(interval_ms: u32) -> String {
    format!("Interval of shape creation is {interval_ms} milliseconds")
}

pub fn rate_text(shapes_per_tick: u32) -> String {
    format!("Created {shapes_per_tick} shape/seconds")
}

/// Direction of a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Changes gravity and hands the new value to every live shape right away
pub fn gravity_controller(step: Step, params: &mut Params, registry: &mut Registry, readouts: &mut Readouts) {
    let gravity = match step {
        Step::Up => params.increase_gravity(),
        Step::Down => params.decrease_gravity(),
    };
    registry.set_gravity(gravity);
    readouts.gravity = gravity_text(gravity);
    info!("gravity set to {gravity:.1}");
}

/// Changes the spawn interval and restarts the periodic spawn loop
pub fn interval_controller(step: Step, now_ms: f64, params: &mut Params, scheduler: &mut SpawnScheduler, readouts: &mut Readouts) {
    let interval = match step {
        Step::Up => params.increase_interval(),
        Step::Down => params.decrease_interval(),
    };
    scheduler.restart_auto(now_ms);
    readouts.interval = interval_text(interval);
    info!("spawn interval set to {interval} ms");
}

/// Changes the spawn rate and restarts the burst loop with the new count
pub fn rate_controller(step: Step, now_ms: f64, params: &mut Params, scheduler: &mut SpawnScheduler, readouts: &mut Readouts) {
    let rate = match step {
        Step::Up => params.increase_shapes_per_tick(),
        Step::Down => params.decrease_shapes_per_tick(),
    };
    scheduler.restart_burst(rate, now_ms);
    readouts.rate = rate_text(rate);
    info!("spawn rate set to {rate}");
}

/// One-shot token that keeps a removal click from also spawning a shape.
///
/// A removal arms it, the next click-to-spawn check consumes it. Whatever
/// is left at the end of the frame expires.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSuppression {
    armed: bool,
}

impl SpawnSuppression {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// True if a spawn should be skipped. Disarms the token.
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    pub fn expire(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
