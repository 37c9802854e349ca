//! Type aliases for callbacks and subscriptions.
//!
//! Keeps the store-notification plumbing readable without spelling out
//! boxed trait objects at every use site.

/// A callback that receives a single borrowed parameter.
pub type DataCallback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Identifier handed out by `subscribe` calls, used to identify a
/// subscription.
pub type SubscriptionId = u64;
