//! Gate descriptions for unary and binary instructions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator name of the controlled-NOT gate.
pub const CNOT: &str = "CNOT";

/// Operator name of the SWAP gate inserted by routing.
pub const SWAP: &str = "SWAP";

/// Axis of a single-qubit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Rotation around X.
    Rx,
    /// Rotation around Y.
    Ry,
    /// Rotation around Z.
    Rz,
}

impl Rotation {
    /// Look up a rotation by its operator name (`Rx`, `Ry` or `Rz`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Rx" => Some(Rotation::Rx),
            "Ry" => Some(Rotation::Ry),
            "Rz" => Some(Rotation::Rz),
            _ => None,
        }
    }

    /// The operator name.
    pub fn name(self) -> &'static str {
        match self {
            Rotation::Rx => "Rx",
            Rotation::Ry => "Ry",
            Rotation::Rz => "Rz",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The operator of a single-qubit instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryGate {
    /// A rotation with its angle.
    ///
    /// The angle is kept as the source token and never evaluated.
    Rotation {
        /// Rotation axis.
        axis: Rotation,
        /// Angle token, passed through unchanged.
        angle: String,
    },
    /// A parameter-free operator such as `H`, `T` or `MeasZ`.
    Fixed(String),
}

impl UnaryGate {
    /// Create a rotation gate.
    pub fn rotation(axis: Rotation, angle: impl Into<String>) -> Self {
        UnaryGate::Rotation {
            axis,
            angle: angle.into(),
        }
    }

    /// Create a parameter-free gate.
    pub fn fixed(name: impl Into<String>) -> Self {
        UnaryGate::Fixed(name.into())
    }

    /// The operator name.
    pub fn name(&self) -> &str {
        match self {
            UnaryGate::Rotation { axis, .. } => axis.name(),
            UnaryGate::Fixed(name) => name.as_str(),
        }
    }

    /// The angle token, if this is a rotation.
    pub fn angle(&self) -> Option<&str> {
        match self {
            UnaryGate::Rotation { angle, .. } => Some(angle.as_str()),
            UnaryGate::Fixed(_) => None,
        }
    }
}
