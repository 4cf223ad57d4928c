mod error;
mod finder;
mod launcher;
mod prefs;
mod profile;
mod session;
mod user_agent;

pub use error::{Error, Result};
pub use finder::BrowserFinder;
pub use launcher::Launcher;
pub use prefs::LaunchPrefs;
pub use profile::ProfileDir;
pub use session::VisitSession;
pub use user_agent::random_user_agent;
