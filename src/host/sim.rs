//! In-memory host that records every command it receives.

use super::{ConstraintHost, IndicatorHost, PoseHost};
use crate::coupling::{Body, LinkId};
use crate::indicator::IndicatorColor;
use crate::motion::Vec3;
use std::collections::HashMap;

/// Number of indicator colors kept in the log.
pub const COLOR_LOG_LIMIT: usize = 256;

/// A headless stand-in for the rendering/physics host.
///
/// Keeps the last commanded pose of every part, the live link table and a
/// log of indicator colors, so demos and tests can observe the sequencer.
#[derive(Clone, Debug, Default)]
pub struct SimulatedRig {
    color: IndicatorColor,
    color_log: Vec<IndicatorColor>,
    links: HashMap<LinkId, (Body, Body)>,
    next_link: u64,
    slider_height: f32,
    prop_position: Vec3,
    front_wheel_angle: f32,
    rear_wheel_angle: f32,
    wheel_resets: usize,
}

impl SimulatedRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent colors applied, oldest first, at most
    /// [`COLOR_LOG_LIMIT`] entries.
    pub fn color_log(&self) -> &[IndicatorColor] {
        &self.color_log
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The bodies joined by `link`, if it still exists.
    pub fn link(&self, link: LinkId) -> Option<(Body, Body)> {
        self.links.get(&link).copied()
    }

    pub fn slider_height(&self) -> f32 {
        self.slider_height
    }

    pub fn prop_position(&self) -> Vec3 {
        self.prop_position
    }

    pub fn front_wheel_angle(&self) -> f32 {
        self.front_wheel_angle
    }

    pub fn rear_wheel_angle(&self) -> f32 {
        self.rear_wheel_angle
    }

    pub fn wheel_resets(&self) -> usize {
        self.wheel_resets
    }
}

impl IndicatorHost for SimulatedRig {
    fn set_color(&mut self, color: IndicatorColor) {
        self.color = color;
        if self.color_log.len() == COLOR_LOG_LIMIT {
            self.color_log.remove(0);
        }
        self.color_log.push(color);
    }

    fn current_color(&self) -> IndicatorColor {
        self.color
    }
}

impl ConstraintHost for SimulatedRig {
    fn create_link(&mut self, a: Body, b: Body) -> LinkId {
        self.next_link += 1;
        let id = LinkId(self.next_link);
        self.links.insert(id, (a, b));
        id
    }

    fn retarget(&mut self, link: LinkId, b: Body) {
        if let Some(ends) = self.links.get_mut(&link) {
            ends.1 = b;
        }
    }

    fn remove_link(&mut self, link: LinkId) {
        self.links.remove(&link);
    }
}

impl PoseHost for SimulatedRig {
    fn set_slider_height(&mut self, y: f32) {
        self.slider_height = y;
    }

    fn set_prop_position(&mut self, position: Vec3) {
        self.prop_position = position;
    }

    fn rotate_wheels(&mut self, degrees: f32) {
        self.front_wheel_angle += degrees;
        self.rear_wheel_angle += degrees;
    }

    fn reset_wheels(&mut self) {
        self.front_wheel_angle = 0.0;
        self.rear_wheel_angle = 0.0;
        self.wheel_resets += 1;
    }
}
