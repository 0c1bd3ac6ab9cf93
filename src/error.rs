//! Global error types and error handling utilities

use crate::config::ConfigError;
use crate::core::ValidationError;
use crate::store::StoreError;
use thiserror::Error;

/// Library errors as reported at the command line
#[derive(Error, Debug)]
pub enum WaymarkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Initialize error handling for the application
pub fn install_error_handlers() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Route panics through tracing before printing
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Some(location) = panic_info.location() {
            tracing::error!(
                message = %panic_info,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
                "Application panic"
            );
        } else {
            tracing::error!(message = %panic_info, "Application panic");
        }

        // If in test environment, don't print the panic (test frameworks handle this)
        if std::env::var_os("RUST_TEST").is_some() {
            return;
        }

        default_hook(panic_info);
    }));

    Ok(())
}
