//! Logical axis configuration.

use crate::error::{Error, Result, VectorKind};

/// Conventional names of the six logical axes, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisName {
    X,
    Y,
    Z,
    A,
    B,
    C,
}

impl AxisName {
    pub const ALL: [AxisName; 6] = [
        AxisName::X,
        AxisName::Y,
        AxisName::Z,
        AxisName::A,
        AxisName::B,
        AxisName::C,
    ];

    /// Parse axis from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(AxisName::X),
            "y" => Some(AxisName::Y),
            "z" => Some(AxisName::Z),
            "a" => Some(AxisName::A),
            "b" => Some(AxisName::B),
            "c" => Some(AxisName::C),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AxisName::X => "x",
            AxisName::Y => "y",
            AxisName::Z => "z",
            AxisName::A => "a",
            AxisName::B => "b",
            AxisName::C => "c",
        }
    }
}

/// How an axis participates in motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum AxisMode {
    /// Travel is passed through to the mapped motors.
    #[default]
    Standard,
    /// The axis never moves: every motor mapped to it receives zero steps.
    Inhibited,
}

impl AxisMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            AxisMode::Standard => "standard",
            AxisMode::Inhibited => "inhibited",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConfig {
    pub mode: AxisMode,
}

impl AxisConfig {
    pub const fn new(mode: AxisMode) -> Self {
        Self { mode }
    }
}

/// Per-axis configuration for `A` logical axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSet<const A: usize> {
    axes: [AxisConfig; A],
}

impl<const A: usize> AxisSet<A> {
    pub const fn new(axes: [AxisConfig; A]) -> Self {
        Self { axes }
    }

    /// Every axis in [`AxisMode::Standard`].
    pub const fn standard() -> Self {
        Self {
            axes: [AxisConfig::new(AxisMode::Standard); A],
        }
    }

    pub fn from_modes(modes: [AxisMode; A]) -> Self {
        Self {
            axes: modes.map(AxisConfig::new),
        }
    }

    pub fn from_slice(axes: &[AxisConfig]) -> Result<Self> {
        let axes = <[AxisConfig; A]>::try_from(axes).map_err(|_| Error::DimensionMismatch {
            kind: VectorKind::Axes,
            expected: A,
            actual: axes.len(),
        })?;
        Ok(Self { axes })
    }

    pub fn get(&self, index: usize) -> Option<&AxisConfig> {
        self.axes.get(index)
    }

    pub fn mode(&self, index: usize) -> Option<AxisMode> {
        self.axes.get(index).map(|axis| axis.mode)
    }

    /// Returns `true` when the axis exists and is inhibited.
    pub fn is_inhibited(&self, index: usize) -> bool {
        self.mode(index) == Some(AxisMode::Inhibited)
    }

    /// Change the mode of a single axis, returning the previous mode.
    ///
    /// Returns `None` and leaves the set untouched if `index` is out of range.
    pub fn set_mode(&mut self, index: usize, mode: AxisMode) -> Option<AxisMode> {
        let axis = self.axes.get_mut(index)?;
        Some(std::mem::replace(&mut axis.mode, mode))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisConfig> {
        self.axes.iter()
    }

    pub const fn len(&self) -> usize {
        A
    }

    pub const fn is_empty(&self) -> bool {
        A == 0
    }
}

impl<const A: usize> Default for AxisSet<A> {
    fn default() -> Self {
        Self::standard()
    }
}
