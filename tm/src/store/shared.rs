//! SharedStore implementation

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use super::StoreError;
use crate::domain::{FieldKind, Message};

static GLOBAL: OnceLock<Arc<SharedStore>> = OnceLock::new();

/// Point-in-time read of all six fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Snapshot {
    pub fn get(&self, kind: FieldKind) -> f32 {
        match kind {
            FieldKind::X => self.x,
            FieldKind::Y => self.y,
            FieldKind::Z => self.z,
            FieldKind::Roll => self.roll,
            FieldKind::Pitch => self.pitch,
            FieldKind::Yaw => self.yaw,
        }
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x: {}, y: {}, z: {}, roll: {}, pitch: {}, yaw: {}",
            self.x, self.y, self.z, self.roll, self.pitch, self.yaw
        )
    }
}

/// Thread-safe store of the six most recently received values
#[derive(Debug, Default)]
pub struct SharedStore {
    x: Mutex<f32>,
    y: Mutex<f32>,
    z: Mutex<f32>,
    roll: Mutex<f32>,
    pitch: Mutex<f32>,
    yaw: Mutex<f32>,
}

impl SharedStore {
    /// New store with every field at 0.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default instance, created on first call from any thread
    pub fn global() -> Arc<SharedStore> {
        Arc::clone(GLOBAL.get_or_init(|| {
            debug!("SharedStore::global: initializing");
            Arc::new(SharedStore::new())
        }))
    }

    fn slot(&self, kind: FieldKind) -> &Mutex<f32> {
        match kind {
            FieldKind::X => &self.x,
            FieldKind::Y => &self.y,
            FieldKind::Z => &self.z,
            FieldKind::Roll => &self.roll,
            FieldKind::Pitch => &self.pitch,
            FieldKind::Yaw => &self.yaw,
        }
    }

    /// Store `value` if it lies within the field's range, otherwise leave the field untouched
    pub fn set(&self, kind: FieldKind, value: f32) -> Result<(), StoreError> {
        let range = kind.range();
        if !range.contains(value) {
            return Err(StoreError::OutOfRange {
                kind,
                value,
                min: range.min,
                max: range.max,
            });
        }
        *self.slot(kind).lock() = value;
        Ok(())
    }

    pub fn get(&self, kind: FieldKind) -> f32 {
        *self.slot(kind).lock()
    }

    /// Apply a received message to the field it targets
    pub fn apply(&self, msg: &Message) -> Result<(), StoreError> {
        self.set(msg.kind, msg.payload)
    }

    /// Read every field. Each read is atomic; the six together are not.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            x: self.get_x(),
            y: self.get_y(),
            z: self.get_z(),
            roll: self.get_roll(),
            pitch: self.get_pitch(),
            yaw: self.get_yaw(),
        }
    }

    pub fn set_x(&self, value: f32) -> Result<(), StoreError> {
        self.set(FieldKind::X, value)
    }

    pub fn get_x(&self) -> f32 {
        self.get(FieldKind::X)
    }

    pub fn set_y(&self, value: f32) -> Result<(), StoreError> {
        self.set(FieldKind::Y, value)
    }

    pub fn get_y(&self) -> f32 {
        self.get(FieldKind::Y)
    }

    pub fn set_z(&self, value: f32) -> Result<(), StoreError> {
        self.set(FieldKind::Z, value)
    }

    pub fn get_z(&self) -> f32 {
        self.get(FieldKind::Z)
    }

    pub fn set_roll(&self, value: f32) -> Result<(), StoreError> {
        self.set(FieldKind::Roll, value)
    }

    pub fn get_roll(&self) -> f32 {
        self.get(FieldKind::Roll)
    }

    pub fn set_pitch(&self, value: f32) -> Result<(), StoreError> {
        self.set(FieldKind::Pitch, value)
    }

    pub fn get_pitch(&self) -> f32 {
        self.get(FieldKind::Pitch)
    }

    pub fn set_yaw(&self, value: f32) -> Result<(), StoreError> {
        self.set(FieldKind::Yaw, value)
    }

    pub fn get_yaw(&self) -> f32 {
        self.get(FieldKind::Yaw)
    }
}
