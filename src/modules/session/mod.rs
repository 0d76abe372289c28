mod config;
mod controller;
mod title;
pub mod traits;
mod version;

pub use config::{SessionConfig, DEFAULT_API_URL, REQUIRED_CLIENT_VERSION};
pub use controller::{FailReason, SessionController, SessionState, MOVIE_PARAM};
pub use title::title_markup;
pub use traits::{
    AddressState, Analytics, AnalyticsPayload, AnalyticsProps, ColorProbe, InMemoryAddressState,
    MessageKind, NoopColorProbe, Presentation,
};
