// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the outline generators.

use core::fmt;

use kurbo::Size;

/// Errors returned when an outline cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlineError {
    /// The bar size cannot carry a cap.
    ///
    /// The cap radius is `width / 2`, so the width must be finite and strictly positive. The
    /// height must be finite and non-negative.
    InvalidGeometry {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { width, height } => {
                write!(f, "invalid bar geometry: width {width}, height {height}")
            }
        }
    }
}

impl core::error::Error for OutlineError {}

/// Rejects sizes whose cap radius would be zero, negative or non-finite.
pub(crate) fn validate(size: Size) -> Result<(), OutlineError> {
    let Size { width, height } = size;
    if width.is_finite() && width > 0.0 && height.is_finite() && height >= 0.0 {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(width, height, "rejecting bar size");
    Err(OutlineError::InvalidGeometry { width, height })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            validate(Size::new(0.0, 10.0)),
            Err(OutlineError::InvalidGeometry {
                width: 0.0,
                height: 10.0
            })
        );
    }

    #[test]
    fn negative_and_non_finite_sizes_are_rejected() {
        assert!(validate(Size::new(-4.0, 10.0)).is_err());
        assert!(validate(Size::new(4.0, -1.0)).is_err());
        assert!(validate(Size::new(f64::NAN, 10.0)).is_err());
        assert!(validate(Size::new(4.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn zero_height_is_allowed() {
        assert_eq!(validate(Size::new(4.0, 0.0)), Ok(()));
    }

    #[test]
    fn display_names_the_size() {
        let err = OutlineError::InvalidGeometry {
            width: 0.0,
            height: 3.5,
        };
        assert_eq!(err.to_string(), "invalid bar geometry: width 0, height 3.5");
    }
}
