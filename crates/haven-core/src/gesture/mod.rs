mod classifier;
mod clock;

pub use classifier::{
    AlertIntent, ControlVisual, GestureClassifier, GestureState, InputSource, PressSession,
    DEFAULT_HOLD_THRESHOLD_MS,
};
pub use clock::{Clock, ManualClock, MonotonicClock};
