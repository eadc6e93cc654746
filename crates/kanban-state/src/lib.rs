pub mod action;
pub mod observer;
pub mod store;

pub use action::Action;
pub use observer::{BoardObserver, ChangeCause, SubscriptionId};
pub use store::BoardStore;
