//! Extension contract.

/// Core trait for behavior-hook objects stored in an extension registry.
///
/// The hook methods themselves live on consumer-owned subtraits (one per
/// extension point); the registry only needs the identity.
pub trait Extension: Send + Sync + 'static {
    /// Unique name identifying this extension within its extension point.
    fn name(&self) -> &str;
}
