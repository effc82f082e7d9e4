pub use super::booking::Entity as Booking;
pub use super::car::Entity as Car;
pub use super::category::Entity as Category;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
