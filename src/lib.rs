pub mod model;
pub mod geometry {
    pub mod mat2;
    pub mod tolerance;
    pub mod weights;
}
pub mod algorithms {
    pub mod deform;
    pub mod precompute;
}

use algorithms::deform;
use algorithms::precompute::{self, Coefficients};
use model::{DeformError, Mode, Point, Scalar, WeightConfig};

/// One interactive deformation session: the original curve, the live
/// (deformed) curve, the control set, and every precomputed coefficient
/// table. All state is owned here; the interaction collaborator edits the
/// deformed control points through `deformed_control_points_mut` and then
/// calls exactly one update.
pub struct MlsSession {
    config: WeightConfig,
    original: Vec<Point>,
    curve: Vec<Point>,
    control_idx: Vec<usize>,
    control_pts: Vec<Point>,
    deformed_pts: Vec<Point>,
    coeffs: Coefficients,
    scale: Scalar,
}

impl MlsSession {
    pub fn new() -> Self {
        Self::with_config(WeightConfig::default())
    }

    pub fn with_config(config: WeightConfig) -> Self {
        MlsSession {
            config,
            original: Vec::new(),
            curve: Vec::new(),
            control_idx: Vec::new(),
            control_pts: Vec::new(),
            deformed_pts: Vec::new(),
            coeffs: Coefficients::default(),
            scale: 0.0,
        }
    }

    /// Binds the session to a curve and control index set and rebuilds
    /// every derived table. Deformed control points reset to the originals
    /// and the live curve resets to `curve`. Fails atomically: on error the
    /// previous session state is fully retained.
    pub fn init(&mut self, curve: &[Point], control_idx: &[usize]) -> Result<(), DeformError> {
        // A zero or negative clamp would send a control vertex's own weight
        // to infinity and poison every downstream table with NaN.
        if !(self.config.clamp.is_finite() && self.config.clamp > 0.0) {
            return Err(DeformError::InvalidWeightClamp);
        }
        if control_idx.is_empty() {
            return Err(DeformError::EmptyControlSet);
        }
        for (k, &idx) in control_idx.iter().enumerate() {
            if idx >= curve.len() {
                return Err(DeformError::IndexOutOfRange {
                    index: idx,
                    len: curve.len(),
                });
            }
            if control_idx[..k].contains(&idx) {
                return Err(DeformError::DuplicateControlIndex { index: idx });
            }
        }
        let coeffs = precompute::build(curve, control_idx, &self.config)?;

        self.original = curve.to_vec();
        self.curve = curve.to_vec();
        self.control_idx = control_idx.to_vec();
        self.control_pts = control_idx.iter().map(|&i| curve[i]).collect();
        self.deformed_pts = self.control_pts.clone();
        self.scale = precompute::curve_scale(curve);
        self.coeffs = coeffs;
        Ok(())
    }

    /// Dispatches to one of the three updates. Carries no mode state; the
    /// caller's UI toggle owns the choice.
    pub fn update(&mut self, mode: Mode) -> Result<(), DeformError> {
        match mode {
            Mode::Affine => {
                self.update_affine();
                Ok(())
            }
            Mode::Similarity => {
                self.update_similarity();
                Ok(())
            }
            Mode::Rigid => self.update_rigid(),
        }
    }

    /// Recomputes the live curve under the general affine fit.
    pub fn update_affine(&mut self) {
        deform::update_affine(&self.coeffs, &self.deformed_pts, &mut self.curve);
    }

    /// Recomputes the live curve under the rotation + uniform scale fit.
    pub fn update_similarity(&mut self) {
        deform::update_similarity(&self.coeffs, &self.deformed_pts, &mut self.curve);
    }

    /// Recomputes the live curve under the rotation + translation fit.
    /// All-or-nothing: the live curve is untouched on error.
    pub fn update_rigid(&mut self) -> Result<(), DeformError> {
        let next = deform::rigid_positions(&self.coeffs, &self.deformed_pts)?;
        self.curve = next;
        Ok(())
    }

    /// Restores the deformed control points and the live curve to their
    /// original values without rebuilding any table.
    pub fn reset(&mut self) {
        self.deformed_pts.clone_from(&self.control_pts);
        self.curve.clone_from(&self.original);
    }

    /// The live (possibly deformed) curve; the rendering collaborator's
    /// input.
    pub fn curve(&self) -> &[Point] {
        &self.curve
    }

    pub fn original_curve(&self) -> &[Point] {
        &self.original
    }

    pub fn control_indices(&self) -> &[usize] {
        &self.control_idx
    }

    /// Original control points; immutable after `init`.
    pub fn control_points(&self) -> &[Point] {
        &self.control_pts
    }

    pub fn deformed_control_points(&self) -> &[Point] {
        &self.deformed_pts
    }

    /// Exclusive edit access for the interaction collaborator. Mutate
    /// entries, drop the borrow, then call one update.
    pub fn deformed_control_points_mut(&mut self) -> &mut [Point] {
        &mut self.deformed_pts
    }

    /// The precomputed tables, for collaborators that audit the per-vertex
    /// weighted means.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }

    /// Dominant principal standard deviation of the original curve.
    pub fn original_scale(&self) -> Scalar {
        self.scale
    }
}

impl Default for MlsSession {
    fn default() -> Self {
        Self::new()
    }
}
