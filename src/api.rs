pub mod client;
pub use client::ApiClient;
pub mod repository;
pub use repository::{ResourceRepository, RestRepository};
pub mod images;
pub use images::ImageApi;
pub mod users;
pub use users::UserApi;
