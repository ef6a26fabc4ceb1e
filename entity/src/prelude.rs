pub use super::log::Entity as Log;
pub use super::queue::Entity as Queue;
pub use super::raider::Entity as Raider;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
pub use super::wow_item::Entity as WowItem;
