pub mod model;
pub mod store;

pub use model::FavoriteSet;
pub use store::{FavoritesStore, storage_key};
