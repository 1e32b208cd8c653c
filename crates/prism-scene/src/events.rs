//! Events fired by scene tweens and handled by their owning scene.

/// Completion events bound to scene tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The header's main group finished growing in.
    Revealed,
    /// The outgoing project texture finished fading out.
    TextureFadedOut,
    /// The video placeholder finished shrinking away.
    PlaceholderHidden,
}
