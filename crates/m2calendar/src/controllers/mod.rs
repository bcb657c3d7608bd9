mod lifecycle;
mod navigation;

pub use lifecycle::{DeleteOutcome, EventLifecycleController};
pub use navigation::NavigationController;
