pub mod app;
pub mod calculators;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod page;
pub mod render;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::{CalculatorClient, SubmitError};
pub use config::Config;
pub use page::CalculatorPage;
pub use state::AppState;
