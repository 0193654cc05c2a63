//! Fixity (support) conditions at a beam node

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// Number of degrees of freedom per node: axial, transverse, rotation
pub const DOF_PER_NODE: usize = 3;

/// Restraint state of a node's three degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fixity {
    /// Restrained in axial (X) translation
    pub dx: bool,
    /// Restrained in transverse (Y) translation
    pub dy: bool,
    /// Restrained in rotation
    pub rz: bool,
}

impl Fixity {
    /// Create a fixity with explicit restraints
    pub fn new(dx: bool, dy: bool, rz: bool) -> Self {
        Self { dx, dy, rz }
    }

    /// No restraint on any DOF
    pub fn free() -> Self {
        Self::default()
    }

    /// All DOFs restrained
    pub fn fixed() -> Self {
        Self::new(true, true, true)
    }

    /// Translations restrained, rotation free
    pub fn pinned() -> Self {
        Self::new(true, true, false)
    }

    /// Transverse translation restrained only
    pub fn roller() -> Self {
        Self::new(false, true, false)
    }

    /// Get the restraints as an array [DX, DY, RZ]
    pub fn as_array(&self) -> [bool; DOF_PER_NODE] {
        [self.dx, self.dy, self.rz]
    }

    /// Get the restraints as 0/1 flags [DX, DY, RZ]
    pub fn as_flags(&self) -> [u8; DOF_PER_NODE] {
        self.as_array().map(u8::from)
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.dx || self.dy || self.rz
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.as_array().iter().filter(|&&r| r).count()
    }
}

impl From<[bool; DOF_PER_NODE]> for Fixity {
    fn from(value: [bool; DOF_PER_NODE]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

/// Unvalidated fixity as supplied by a caller.
///
/// A single flag applies to every DOF; a list must hold exactly one flag per
/// DOF. Flags must be 0 (free) or 1 (fixed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixityInput {
    /// One flag broadcast to all DOFs
    Flag(f64),
    /// One flag per DOF
    Flags(Vec<f64>),
    /// Already typed
    Typed(Fixity),
}

impl FixityInput {
    /// Normalize and validate into a [`Fixity`].
    ///
    /// A one-element list is treated like a single flag.
    pub fn resolve(&self) -> BeamResult<Fixity> {
        let flags = match self {
            FixityInput::Typed(fixity) => return Ok(*fixity),
            FixityInput::Flag(flag) => vec![*flag; DOF_PER_NODE],
            FixityInput::Flags(flags) if flags.len() == 1 => vec![flags[0]; DOF_PER_NODE],
            FixityInput::Flags(flags) => flags.clone(),
        };

        if let Some(bad) = flags.iter().find(|&&f| f != 0.0 && f != 1.0) {
            return Err(BeamError::InvalidFixity(format!(
                "fixity must contain only zeros and ones, found {bad}"
            )));
        }
        if flags.len() != DOF_PER_NODE {
            return Err(BeamError::InvalidFixity(format!(
                "fixity must be a single flag or a list of {DOF_PER_NODE} flags, got {} values",
                flags.len()
            )));
        }

        Ok(Fixity::new(flags[0] == 1.0, flags[1] == 1.0, flags[2] == 1.0))
    }
}

impl From<Fixity> for FixityInput {
    fn from(value: Fixity) -> Self {
        FixityInput::Typed(value)
    }
}

impl From<[bool; DOF_PER_NODE]> for FixityInput {
    fn from(value: [bool; DOF_PER_NODE]) -> Self {
        FixityInput::Typed(value.into())
    }
}

impl From<i32> for FixityInput {
    fn from(value: i32) -> Self {
        FixityInput::Flag(f64::from(value))
    }
}

impl From<f64> for FixityInput {
    fn from(value: f64) -> Self {
        FixityInput::Flag(value)
    }
}

impl From<&[i32]> for FixityInput {
    fn from(value: &[i32]) -> Self {
        FixityInput::Flags(value.iter().map(|&f| f64::from(f)).collect())
    }
}

impl<const N: usize> From<[i32; N]> for FixityInput {
    fn from(value: [i32; N]) -> Self {
        FixityInput::from(&value[..])
    }
}

impl From<Vec<i32>> for FixityInput {
    fn from(value: Vec<i32>) -> Self {
        FixityInput::from(value.as_slice())
    }
}

impl From<&[f64]> for FixityInput {
    fn from(value: &[f64]) -> Self {
        FixityInput::Flags(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for FixityInput {
    fn from(value: [f64; N]) -> Self {
        FixityInput::Flags(value.to_vec())
    }
}

impl From<Vec<f64>> for FixityInput {
    fn from(value: Vec<f64>) -> Self {
        FixityInput::Flags(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_broadcasts() {
        let fixity = FixityInput::from(1).resolve().unwrap();
        assert_eq!(fixity, Fixity::fixed());

        let fixity = FixityInput::from(0).resolve().unwrap();
        assert_eq!(fixity, Fixity::free());
    }

    #[test]
    fn test_vector_input() {
        let fixity = FixityInput::from([1, 1, 0]).resolve().unwrap();
        assert_eq!(fixity, Fixity::pinned());
        assert_eq!(fixity.as_flags(), [1, 1, 0]);

        let fixity = FixityInput::from([0.0, 1.0, 0.0]).resolve().unwrap();
        assert_eq!(fixity, Fixity::roller());
    }

    #[test]
    fn test_single_element_list_broadcasts() {
        let fixity = FixityInput::from(vec![1]).resolve().unwrap();
        assert_eq!(fixity, Fixity::fixed());
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        for input in [
            FixityInput::from([1, 1]),
            FixityInput::from([1, 1, 0, 0]),
            FixityInput::from(Vec::<i32>::new()),
        ] {
            assert!(matches!(input.resolve(), Err(BeamError::InvalidFixity(_))));
        }
    }

    #[test]
    fn test_non_binary_rejected() {
        assert!(matches!(
            FixityInput::from([1, 2, 0]).resolve(),
            Err(BeamError::InvalidFixity(_))
        ));
        assert!(matches!(
            FixityInput::from(0.5).resolve(),
            Err(BeamError::InvalidFixity(_))
        ));
    }

    #[test]
    fn test_num_restrained() {
        assert_eq!(Fixity::fixed().num_restrained(), 3);
        assert_eq!(Fixity::pinned().num_restrained(), 2);
        assert!(!Fixity::free().is_supported());
    }

    #[test]
    fn test_json_input_forms() {
        let flag: FixityInput = serde_json::from_str("1").unwrap();
        assert_eq!(flag.resolve().unwrap(), Fixity::fixed());

        let flags: FixityInput = serde_json::from_str("[1, 1, 0]").unwrap();
        assert_eq!(flags.resolve().unwrap(), Fixity::pinned());
    }
}
