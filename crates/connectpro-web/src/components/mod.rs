//! Shared UI components.

mod avatar;
mod mobile_nav;
mod navbar;
mod post_card;
mod post_composer;
mod right_rail;
mod sidebar;

pub use avatar::Avatar;
pub use mobile_nav::MobileNavigation;
pub use navbar::Navbar;
pub use post_card::PostCard;
pub use post_composer::PostComposer;
pub use right_rail::RightSidebar;
pub use sidebar::Sidebar;
