mod app_state;
pub mod persistence;

pub use app_state::AppState;
pub use persistence::{deserialize, serialize};
