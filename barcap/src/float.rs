// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Inverse trigonometry is not available on `f64` in `core`; this dispatches to `libm`.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn asin(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn asin(self) -> Self {
        libm::asin(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("barcap requires either the `std` or `libm` feature");
