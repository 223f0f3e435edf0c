//! Snapshot tests for rendered shimmer frames.
//!
//! Each check renders a fixture scene at a fixed animation time, compares it
//! against `references/<fixture>_<ms>ms.png` with SSIM and leaves the captured
//! frame (plus a diff image on failure) under `output/`. Set
//! `UPDATE_REFERENCES` to re-record references instead of comparing.

mod compare;
mod fixtures;

pub use compare::{compare_images, generate_diff_image, CompareResult};
pub use fixtures::{capture_fixture, fixture, render_fixture, CaptureConfig, FIXTURES};

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualTestError {
    #[error("cannot render fixture: {0}")]
    Capture(String),
    #[error("cannot compare frames: {0}")]
    Compare(String),
    #[error("no reference frame at {0}")]
    ReferenceNotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VisualTestError>;

/// One fixture frame to check.
#[derive(Clone, Debug)]
pub struct VisualTestConfig {
    pub fixture_name: String,
    /// Animation clock of the checked frame
    pub elapsed: Duration,
    /// Minimum SSIM score, `0.0..=1.0`
    pub similarity_threshold: f64,
}

impl Default for VisualTestConfig {
    fn default() -> Self {
        Self {
            fixture_name: String::new(),
            elapsed: Duration::ZERO,
            similarity_threshold: 0.99,
        }
    }
}

impl VisualTestConfig {
    pub fn new(fixture_name: impl Into<String>) -> Self {
        Self {
            fixture_name: fixture_name.into(),
            ..Self::default()
        }
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// File stem shared by the reference and every artifact of this frame.
    pub fn stem(&self) -> String {
        format!("{}_{:04}ms", self.fixture_name, self.elapsed.as_millis())
    }

    pub fn reference_path(&self) -> PathBuf {
        manifest_dir()
            .join("references")
            .join(format!("{}.png", self.stem()))
    }

    pub fn captured_path(&self) -> PathBuf {
        output_dir().join(format!("{}_captured.png", self.stem()))
    }

    pub fn diff_path(&self) -> PathBuf {
        output_dir().join(format!("{}_diff.png", self.stem()))
    }

    fn capture_to(&self, output_path: PathBuf) -> Result<()> {
        capture_fixture(&CaptureConfig {
            fixture_name: self.fixture_name.clone(),
            output_path,
            elapsed: self.elapsed,
        })
    }
}

/// Outcome of [`run_visual_test`]
pub struct VisualTestResult {
    /// Similarity reached the threshold
    pub passed: bool,
    pub similarity: f64,
    /// Pixels that differ noticeably from the reference
    pub changed_pixels: usize,
    pub captured_path: PathBuf,
    pub reference_path: PathBuf,
    /// Written only when the check fails
    pub diff_path: Option<PathBuf>,
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Where captured frames and diffs are written.
pub fn output_dir() -> PathBuf {
    manifest_dir().join("output")
}

/// Render the fixture frame and compare it against its reference.
pub fn run_visual_test(config: &VisualTestConfig) -> Result<VisualTestResult> {
    let reference_path = config.reference_path();
    if !reference_path.exists() {
        return Err(VisualTestError::ReferenceNotFound(reference_path));
    }

    let captured_path = config.captured_path();
    config.capture_to(captured_path.clone())?;

    let reference = image::open(&reference_path)?.to_rgba8();
    let captured = image::open(&captured_path)?.to_rgba8();
    let comparison = compare_images(&reference, &captured)?;
    let passed = comparison.similarity >= config.similarity_threshold;

    let diff_path = if passed {
        None
    } else {
        let path = config.diff_path();
        generate_diff_image(&reference, &captured).save(&path)?;
        Some(path)
    };

    Ok(VisualTestResult {
        passed,
        similarity: comparison.similarity,
        changed_pixels: comparison.changed_pixels,
        captured_path,
        reference_path,
        diff_path,
    })
}

/// Re-record the reference for one fixture frame.
pub fn update_reference(config: &VisualTestConfig) -> Result<PathBuf> {
    let path = config.reference_path();
    config.capture_to(path.clone())?;
    println!("Updated reference: {}", path.display());
    Ok(path)
}

/// `UPDATE_REFERENCES` is set in the environment.
pub fn should_update_references() -> bool {
    std::env::var_os("UPDATE_REFERENCES").is_some()
}
