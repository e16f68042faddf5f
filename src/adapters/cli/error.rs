use std::{io, net::SocketAddr, path::PathBuf};

use thiserror::Error;

use crate::{
    application::error::ApplicationError, domain::config::converter::ConfigError,
    services::ConversionError,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create conversion client: {0}")]
    Client(#[from] ConversionError),

    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Conversion(#[from] ApplicationError),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[source] io::Error),
}
