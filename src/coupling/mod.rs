//! Reversible rigid coupling between the slider and the prop.

use crate::host::ConstraintHost;
use serde::{Deserialize, Serialize};

/// Bodies a link can join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Slider,
    FrontWheel,
    RearWheel,
}

/// Host-issued handle for a live link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub u64);

/// Owns at most one link and keeps it in step with the host.
///
/// Both directions are idempotent: attaching an attached coupling re-targets
/// the existing link, and detaching a detached one does nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coupling {
    link: Option<LinkId>,
    target: Option<Body>,
}

impl Coupling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    /// The body the link currently holds, if attached.
    pub fn target(&self) -> Option<Body> {
        self.target
    }

    pub fn link(&self) -> Option<LinkId> {
        self.link
    }

    /// Join `a` to `b`, creating the link if none exists.
    pub fn attach<H: ConstraintHost + ?Sized>(&mut self, host: &mut H, a: Body, b: Body) {
        match self.link {
            Some(link) => {
                if self.target != Some(b) {
                    host.retarget(link, b);
                    tracing::debug!(?link, ?b, "coupling retargeted");
                }
            }
            None => {
                let link = host.create_link(a, b);
                self.link = Some(link);
                tracing::debug!(?link, ?a, ?b, "coupling attached");
            }
        }
        self.target = Some(b);
    }

    /// Remove the link if present.
    pub fn detach<H: ConstraintHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(link) = self.link.take() {
            host.remove_link(link);
            tracing::debug!(?link, "coupling detached");
        }
        self.target = None;
    }
}
