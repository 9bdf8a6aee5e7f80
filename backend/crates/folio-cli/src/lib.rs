//! folio-cli library
//!
//! The HTTP client and the command layer behind the `folio` binary.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod panel;
pub mod project_commands;

#[cfg(test)]
mod tests;

pub use cli::{Cli, DEFAULT_SERVER_URL, SERVER_URL_ENV, resolve_server_url};
pub use client::{
    CliClientResult, Client, ClientError,
    requests::{ProjectInput, ProjectUpdate},
};
pub use panel::ProjectPanel;
