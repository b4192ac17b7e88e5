//! Store field tags and their valid ranges

use serde::{Deserialize, Serialize};

/// Angle limit used for roll/pitch/yaw. Deliberately two decimal places.
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.14;

/// Closed numeric range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f32,
    pub max: f32,
}

impl FieldRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True if `value` lies within the closed range. NaN is never contained.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance between the bounds
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Valid range for x, y and z
pub const COORD_RANGE: FieldRange = FieldRange::new(-1.0, 1.0);

/// Valid range for roll, pitch and yaw
pub const ANGLE_RANGE: FieldRange = FieldRange::new(-PI, PI);

/// One of the six store fields a message can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    X,
    Y,
    Z,
    Roll,
    Pitch,
    Yaw,
}

impl FieldKind {
    /// All kinds in store order
    pub const ALL: [FieldKind; 6] = [
        FieldKind::X,
        FieldKind::Y,
        FieldKind::Z,
        FieldKind::Roll,
        FieldKind::Pitch,
        FieldKind::Yaw,
    ];

    /// Validity range the store enforces for this field
    pub fn range(&self) -> FieldRange {
        if self.is_angle() { ANGLE_RANGE } else { COORD_RANGE }
    }

    pub fn is_angle(&self) -> bool {
        matches!(self, Self::Roll | Self::Pitch | Self::Yaw)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
            Self::Roll => write!(f, "roll"),
            Self::Pitch => write!(f, "pitch"),
            Self::Yaw => write!(f, "yaw"),
        }
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "roll" => Ok(Self::Roll),
            "pitch" => Ok(Self::Pitch),
            "yaw" => Ok(Self::Yaw),
            _ => Err(format!("Unknown field kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_bounds() {
        assert!(COORD_RANGE.contains(-1.0));
        assert!(COORD_RANGE.contains(1.0));
        assert!(!COORD_RANGE.contains(1.0001));
        assert!(ANGLE_RANGE.contains(-PI));
        assert!(!ANGLE_RANGE.contains(PI + 0.01));
    }

    #[test]
    fn test_range_rejects_nan() {
        assert!(!COORD_RANGE.contains(f32::NAN));
        assert!(!ANGLE_RANGE.contains(f32::NAN));
    }

    #[test]
    fn test_kind_range() {
        assert_eq!(FieldKind::X.range(), COORD_RANGE);
        assert_eq!(FieldKind::Z.range(), COORD_RANGE);
        assert_eq!(FieldKind::Roll.range(), ANGLE_RANGE);
        assert_eq!(FieldKind::Yaw.range(), ANGLE_RANGE);
    }

    #[test]
    fn test_kind_display_and_parse() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.to_string().parse::<FieldKind>().unwrap(), kind);
        }
        assert_eq!("PITCH".parse::<FieldKind>().unwrap(), FieldKind::Pitch);
        assert!("w".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_kind_serde() {
        let yaml = serde_yaml::to_string(&FieldKind::Roll).unwrap();
        assert_eq!(yaml.trim(), "roll");

        let kind: FieldKind = serde_yaml::from_str("yaw").unwrap();
        assert_eq!(kind, FieldKind::Yaw);
    }
}
