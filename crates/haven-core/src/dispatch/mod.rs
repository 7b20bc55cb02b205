mod dispatcher;
mod location;
mod payload;
mod platform;

pub use dispatcher::{
    AlertDispatcher, AlertResolution, AlertTransport, DispatchOutcome, DispatchSettings,
    DEFAULT_EMERGENCY_NUMBER, NAME_PROMPT, PHONE_PROMPT, QUICK_CONFIRM_PROMPT, SOS_FAILED_MESSAGE,
    SOS_SENT_MESSAGE,
};
pub use location::{acquire_location, FixedLocation, LocationProvider, DEFAULT_LOCATION_TIMEOUT};
pub use payload::{AlertPayload, GeoPoint, Identity};
pub use platform::Platform;
