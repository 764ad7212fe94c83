mod status;
pub use status::Status;

mod config;
pub use config::Config;

mod setup;
pub use setup::Setup;

mod completions;
pub use completions::Completions;
