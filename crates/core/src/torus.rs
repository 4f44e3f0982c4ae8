//! Approximate signed distance field of a torus revolved around the z axis.

use crate::cordic::LengthEstimator;
use crate::types::{Fixed, Vec3, DISTANCE_UNIT, REVOLVE_RADIUS, TUBE_RADIUS, VIEW_DISTANCE};

/// Torus geometry in whole distance units. Constant for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    /// r1
    pub tube_radius: Fixed,
    /// r2
    pub revolve_radius: Fixed,
    /// Camera distance from the centre.
    pub view_distance: Fixed,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            tube_radius: TUBE_RADIUS,
            revolve_radius: REVOLVE_RADIUS,
            view_distance: VIEW_DISTANCE,
        }
    }
}

/// One distance-field evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceSample {
    /// Signed distance to the surface (negative inside the tube).
    pub distance: Fixed,
    /// Light direction carried into the surface-normal frame; its value is
    /// proportional to `normal · light`.
    pub light: Fixed,
}

impl Torus {
    /// Tube radius at distance scale.
    pub fn tube(&self) -> Fixed {
        self.tube_radius * DISTANCE_UNIT
    }

    /// Revolve radius at distance scale.
    pub fn revolve(&self) -> Fixed {
        self.revolve_radius * DISTANCE_UNIT
    }

    /// Evaluate the distance field at `p`, transporting `light` alongside.
    ///
    /// The first length pass measures the radius in the xy plane and turns
    /// the light's (x, y) into its radial component. The second pass measures
    /// the tube cross-section (z against radial offset) and turns the light's
    /// (z, radial) into its component along the surface normal.
    pub fn sample<E: LengthEstimator>(&self, engine: &E, p: Vec3, light: Vec3) -> DistanceSample {
        let mut radial = light.x;
        let ring = engine.approx_length(p.x, p.y, &mut radial, light.y);

        let mut normal = light.z;
        let tube = engine.approx_length(p.z, ring - self.revolve(), &mut normal, radial);

        DistanceSample {
            distance: tube - self.tube(),
            light: normal,
        }
    }
}
