pub mod catalog;
pub mod payment;
pub mod rbac;
pub mod resource;
pub mod session;
pub mod supplier;
pub mod user;

pub use catalog::{Category, Product};
pub use payment::PaymentMethod;
pub use rbac::Role;
pub use resource::{Resource, ResourceKind};
pub use session::{Session, SessionUser};
pub use supplier::Supplier;
pub use user::User;
