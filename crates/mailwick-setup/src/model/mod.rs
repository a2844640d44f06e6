//! Setup flow state models.

mod options;
mod server_config;
mod wizard;

pub use options::OptionsState;
pub use server_config::ServerConfigState;
pub use wizard::SetupState;
