//! # colour-contrast
//!
//! WCAG-style luminance contrast between colours written in common web
//! notations. The crate is one pure pipeline:
//!
//! 1. **Parse** a colour string into an RGB triple ([`Rgb::parse`])
//! 2. **Linearise** it to a relative luminance ([`Rgb::relative_luminance`])
//! 3. **Combine** two luminances into a contrast ratio ([`contrast_ratio`])
//!
//! ## Quick Start
//!
//! ```rust
//! use colour_contrast::{contrast_ratio, meets_aa};
//!
//! let ratio = contrast_ratio("#ffffff", "#2660a1").unwrap();
//! assert!(meets_aa(ratio));
//!
//! // Formats can be mixed freely.
//! let same = contrast_ratio("rgb(255, 255, 255)", "hsl(212, 62%, 39%)").unwrap();
//! assert!((ratio - same).abs() < 0.1);
//! ```
//!
//! ## Supported Formats
//!
//! - **Hex**: `#RGB`, `#RRGGBB` (longer forms accepted, extra digits ignored)
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)` — channels as 0-255 or `N%`
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)` — hue in degrees
//!
//! Alpha components are accepted and discarded; the contrast model is
//! opaque-on-opaque. Named colours and the wider CSS colour grammar
//! (`lab()`, `oklch()`, variables) are out of scope.
//!
//! ## Modules
//!
//! - [`parser`]: colour string parsing and normalisation
//! - [`contrast`]: luminance transform and ratio combination
//! - [`types`]: the [`Rgb`] triple
//! - [`error`]: the [`FormatError`] parse failure

pub mod contrast;
pub mod error;
pub mod parser;
pub mod types;

pub use contrast::{AA_THRESHOLD, AAA_THRESHOLD, contrast_ratio, contrast_ratio_of, meets_aa, meets_aaa};
pub use error::FormatError;
pub use types::Rgb;
