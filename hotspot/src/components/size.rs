use serde::{Deserialize, Serialize};

use crate::{HotspotError, HotspotResult};

/// Extents of a hotspot quad, in world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Extent along local X
    pub width: f32,
    /// Extent along local Y
    pub height: f32,
}

impl Size {
    /// Create a size, rejecting negative or non-finite extents
    pub fn new(width: f32, height: f32) -> HotspotResult<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(HotspotError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_size_validation() {
        assert!(Size::new(2.0, 1.0).is_ok());
        assert!(Size::new(0.0, 0.0).is_ok());
        assert!(matches!(
            Size::new(-1.0, 1.0),
            Err(HotspotError::InvalidSize { .. })
        ));
        assert!(Size::new(1.0, f32::NAN).is_err());
        assert!(Size::new(f32::INFINITY, 1.0).is_err());
    }
}
