//! Browser-side services, provided once at the application root and reached
//! from components through `use_context` hooks.

mod community;
mod pricing;
mod session;

pub use community::{use_community, CommunityService};
pub use pricing::{use_pricing, PricingService};
pub use session::{use_session, SessionService};

/// Current wall-clock time in ms since the Unix epoch.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
