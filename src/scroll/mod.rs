//! Scroll reconciliation
//! Keeps the active block inside a comfortable reading band of the viewport

use crate::constants::scroll::{TARGET_RATIO, THRESHOLD_RATIO};
use crate::dom::{Document, NodeId};

/// How the host should animate a scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Viewport primitives of the host platform
pub trait ScrollSurface {
    /// Height of the viewport in the same units as `Document::bounding_top`
    fn viewport_height(&self) -> f64;

    /// Scroll the viewport vertically by `dy`
    fn scroll_by(&mut self, dy: f64, behavior: ScrollBehavior);
}

/// Upper band of the viewport where the active block should sit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBand {
    /// Fraction of the viewport height below which a block top triggers a scroll
    pub threshold: f64,
    /// Fraction of the viewport height where a scrolled block top lands
    pub target: f64,
}

impl Default for ScrollBand {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD_RATIO,
            target: TARGET_RATIO,
        }
    }
}

impl ScrollBand {
    /// Scroll offset needed for a block whose top is at `top`, if any
    #[must_use]
    pub fn delta_for(&self, top: f64, viewport_height: f64) -> Option<f64> {
        if top > viewport_height * self.threshold || top < 0.0 {
            Some(top - viewport_height * self.target)
        } else {
            None
        }
    }
}

/// Smooth-scroll so `block` sits in the reading band
///
/// Returns the requested offset, or `None` when the block is already in place.
pub fn reconcile<H>(host: &mut H, block: NodeId, band: &ScrollBand) -> Option<f64>
where
    H: Document + ScrollSurface + ?Sized,
{
    let top = host.bounding_top(block);
    let delta = band.delta_for(top, host.viewport_height())?;
    tracing::trace!(top, delta, "scrolling block into reading band");
    host.scroll_by(delta, ScrollBehavior::Smooth);
    Some(delta)
}
