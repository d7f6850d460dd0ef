pub mod api;
pub mod app;
pub mod files;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod ui;
pub mod upload;
pub mod utils;
pub mod worker;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use api::{GenerationBackend, HttpBackend, DEFAULT_BASE_URL};
pub use app::App;
pub use files::scan_documents;
pub use input::handle_key;
pub use models::{Focus, GenerateJob, GenerateOutcome, QuizQuestion};
pub use quiz::QuizSession;
pub use upload::UploadForm;
pub use utils::html::render_html;
pub use worker::spawn_generation_worker;
