//! A single rigid segment of the chain.

use twobone_core::ValidationError;

/// Identifies one of the two bones in a [`BoneChain`](crate::chain::BoneChain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoneId {
    /// Root bone; its base is the fixed origin.
    Upper,
    /// Child bone; its base is the tip of the upper bone.
    Lower,
}

impl BoneId {
    /// Both bones, root first.
    pub const ALL: [Self; 2] = [Self::Upper, Self::Lower];

    /// The bone this one is attached to, if any.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Upper => None,
            Self::Lower => Some(Self::Upper),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }
}

impl std::fmt::Display for BoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-length segment with an angle relative to its parent.
///
/// The parent is a relation by [`BoneId`], not an owned bone; the chain
/// owns both bones and resolves the relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    length: f64,
    /// Degrees, relative to the parent's angle.
    angle: f64,
    parent: Option<BoneId>,
}

impl Bone {
    /// Create a bone.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLength`] for negative or non-finite
    /// lengths and [`ValidationError::NonFiniteAngle`] for a non-finite angle.
    pub fn new(length: f64, angle: f64, parent: Option<BoneId>) -> Result<Self, ValidationError> {
        if !length.is_finite() || length < 0.0 {
            return Err(ValidationError::InvalidLength(length));
        }
        check_angle(angle)?;
        Ok(Self {
            length,
            angle,
            parent,
        })
    }

    pub(crate) const fn new_unchecked(length: f64, angle: f64, parent: Option<BoneId>) -> Self {
        Self {
            length,
            angle,
            parent,
        }
    }

    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Angle in degrees, relative to the parent bone.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub const fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    /// Only the chain writes angles, after validating them.
    pub(crate) fn set_angle_unchecked(&mut self, angle: f64) {
        self.angle = angle;
    }
}

pub(crate) fn check_angle(angle: f64) -> Result<(), ValidationError> {
    if angle.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteAngle(angle))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
