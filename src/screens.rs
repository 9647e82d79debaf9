pub mod categories;
pub use categories::CategoriesScreen;
pub mod products;
pub use products::ProductsScreen;
pub mod suppliers;
pub use suppliers::SuppliersScreen;
pub mod roles;
pub use roles::RolesScreen;
pub mod payment_methods;
pub use payment_methods::PaymentMethodsScreen;
pub mod users;
pub use users::UsersScreen;
