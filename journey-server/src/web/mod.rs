//! Web layer for the JourneyJunction travel guide.
//!
//! Serves the guide pages, the trip planner (HTML or JSON) and the expense
//! tracker and contact forms.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
