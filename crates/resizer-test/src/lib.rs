//! resizer-test - Regression test framework for the resizer workspace
//!
//! Regression tests record a sequence of checks through [`RegParams`] and
//! report every failure at the end instead of stopping at the first one.
//! Three modes are supported:
//!
//! - **Generate**: Write outputs and copy them into the golden directory
//! - **Compare**: Compare outputs with golden files (default)
//! - **Display**: Write outputs for inspection without comparison
//!
//! Source images are built in code by the [`synth`] module; only the
//! expected outputs are checked in under `tests/golden`.
//!
//! # Usage
//!
//! ```ignore
//! use resizer_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("scale");
//! let src = synth::gradient(16, 16).unwrap();
//! rp.compare_values(16.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // resizer-test is at crates/resizer-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
