pub mod service_action;
pub mod site_intent;
pub mod site_name;

pub use service_action::ServiceAction;
pub use site_intent::{SiteIntent, DEFAULT_LISTEN_PORT};
pub use site_name::SiteName;
