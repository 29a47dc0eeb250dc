use std::fmt::{Display, Formatter};

/// Whether the stylesheets of a [`ShadowDom`](crate::ShadowDom) are still being fetched.
///
/// The state only moves forward: `Idle -> Resolving -> Resolved | Failed`, or `Idle -> Resolved` when there are no
/// stylesheets. `Resolved` and `Failed` are final.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionState {
    /// No stylesheet work has been considered yet
    #[default]
    Idle,

    /// Stylesheets are being fetched
    Resolving,

    /// Every stylesheet has been merged into the shadow root, or there were none
    Resolved,

    /// A stylesheet failed to load
    Failed,
}

impl ResolutionState {
    /// The class token exposed on the wrapping element
    pub fn class_token(&self) -> &'static str {
        match self {
            ResolutionState::Idle | ResolutionState::Resolving => "resolving",
            ResolutionState::Resolved => "resolved",
            ResolutionState::Failed => "failed",
        }
    }

    /// Check if no more transitions can happen
    pub fn is_settled(&self) -> bool {
        matches!(self, ResolutionState::Resolved | ResolutionState::Failed)
    }

    pub(crate) fn can_transition_to(&self, next: ResolutionState) -> bool {
        use ResolutionState::*;
        matches!(
            (self, next),
            (Idle, Resolving) | (Idle, Resolved) | (Resolving, Resolved) | (Resolving, Failed)
        )
    }
}

impl Display for ResolutionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_token())
    }
}

/// Where a [`ShadowDom`](crate::ShadowDom) is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// The container is prepared and the instance is waiting for its host node
    Mounting,

    /// The shadow root exists and there were no stylesheets to resolve
    MountedNoStyle,

    /// The shadow root exists and stylesheets are in flight
    MountedResolving,

    /// The shadow root exists and its stylesheets have been attached
    Resolved,

    /// The shadow root exists but a stylesheet failed to load
    Failed,

    /// The instance was torn down
    Destroyed,
}

impl Lifecycle {
    /// Check if the shadow root has been created and not torn down
    pub fn is_mounted(&self) -> bool {
        matches!(
            self,
            Lifecycle::MountedNoStyle
                | Lifecycle::MountedResolving
                | Lifecycle::Resolved
                | Lifecycle::Failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_regresses() {
        use ResolutionState::*;
        assert!(Idle.can_transition_to(Resolved));
        assert!(Resolving.can_transition_to(Failed));
        assert!(!Resolved.can_transition_to(Resolving));
        assert!(!Failed.can_transition_to(Resolved));
        assert!(!Resolving.can_transition_to(Idle));
    }
}
