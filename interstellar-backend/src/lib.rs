pub mod app;
pub mod error;
pub mod handlers;

pub use app::build_router;
