//! Animation surface driven by the frame loop.

use crate::cordic::{Cordic, LengthEstimator};
use crate::frame::Frame;
use crate::raymarch::Raymarcher;
use crate::rotation::RotationState;
use crate::splat::{SplatRenderer, SplatRotation};

/// An animation the frame loop can drive: draw the current state, then step.
pub trait Scene {
    /// Render the current state. Rendering twice without [`Scene::advance`]
    /// produces identical frames.
    fn render_into(&self, frame: &mut Frame);

    /// Move the animation forward by one frame.
    fn advance(&mut self);
}

/// Sphere-traced torus.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaymarchScene<E = Cordic> {
    pub marcher: Raymarcher<E>,
    pub rotation: RotationState,
}

impl<E: LengthEstimator> RaymarchScene<E> {
    pub fn new(marcher: Raymarcher<E>, rotation: RotationState) -> Self {
        Self { marcher, rotation }
    }
}

impl<E: LengthEstimator> Scene for RaymarchScene<E> {
    fn render_into(&self, frame: &mut Frame) {
        self.marcher.render_into(&self.rotation, frame);
    }

    fn advance(&mut self) {
        self.rotation.advance();
    }
}

/// Point-splat torus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplatScene {
    pub renderer: SplatRenderer,
    pub rotation: SplatRotation,
}

impl Scene for SplatScene {
    fn render_into(&self, frame: &mut Frame) {
        self.renderer.render_into(&self.rotation, frame);
    }

    fn advance(&mut self) {
        self.rotation.advance();
    }
}
