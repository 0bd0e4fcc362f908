//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (add to cart, submit a search)
/// - System events (search responses arriving from the network task)
///
/// Intents are processed by reducers to produce new states. They must be
/// `Send` because search completions are produced on runtime worker threads.
pub trait Intent: Send + 'static {}
