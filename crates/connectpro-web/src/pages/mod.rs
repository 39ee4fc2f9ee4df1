//! Route pages.

mod explore;
mod home;
mod login;
mod messages;
mod notifications;
mod profile;
mod register;
mod simulator;

pub use explore::ExplorePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use messages::MessagesPage;
pub use notifications::NotificationsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use simulator::CampaignSimulatorPage;
