//! Per-task configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{FieldKind, TASK10_NAME, TASK20_NAME, TASK40_NAME};

/// Destination for one produced sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Name of the receiving task's queue
    pub to: String,

    /// Field the receiver will apply the payload to
    pub kind: FieldKind,
}

impl Route {
    pub fn new(to: impl Into<String>, kind: FieldKind) -> Self {
        Self { to: to.into(), kind }
    }
}

/// Identity, period and routing table of a single task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Task name; also the name of the queue it consumes
    pub name: String,

    /// Sleep between iterations in milliseconds
    #[serde(rename = "period-ms")]
    pub period_ms: u64,

    /// Where each coordinate sample goes
    #[serde(rename = "coord-routes", default)]
    pub coord_routes: Vec<Route>,

    /// Where each angle sample goes
    #[serde(rename = "angle-routes", default)]
    pub angle_routes: Vec<Route>,
}

impl TaskConfig {
    pub fn new(name: impl Into<String>, period_ms: u64) -> Self {
        Self {
            name: name.into(),
            period_ms,
            coord_routes: Vec::new(),
            angle_routes: Vec::new(),
        }
    }

    pub fn with_coord_route(mut self, to: impl Into<String>, kind: FieldKind) -> Self {
        self.coord_routes.push(Route::new(to, kind));
        self
    }

    pub fn with_angle_route(mut self, to: impl Into<String>, kind: FieldKind) -> Self {
        self.angle_routes.push(Route::new(to, kind));
        self
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    /// Every route, coordinate routes first
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.coord_routes.iter().chain(self.angle_routes.iter())
    }

    /// 10ms task: z to Task20, roll to Task40
    pub fn task10() -> Self {
        Self::new(TASK10_NAME, 10)
            .with_coord_route(TASK20_NAME, FieldKind::Z)
            .with_angle_route(TASK40_NAME, FieldKind::Roll)
    }

    /// 20ms task: x to Task10, pitch to Task40
    pub fn task20() -> Self {
        Self::new(TASK20_NAME, 20)
            .with_coord_route(TASK10_NAME, FieldKind::X)
            .with_angle_route(TASK40_NAME, FieldKind::Pitch)
    }

    /// 40ms task: y to Task10, yaw to Task20
    pub fn task40() -> Self {
        Self::new(TASK40_NAME, 40)
            .with_coord_route(TASK10_NAME, FieldKind::Y)
            .with_angle_route(TASK20_NAME, FieldKind::Yaw)
    }
}

/// The three cyclically wired tasks
pub fn default_task_set() -> Vec<TaskConfig> {
    vec![TaskConfig::task10(), TaskConfig::task20(), TaskConfig::task40()]
}
