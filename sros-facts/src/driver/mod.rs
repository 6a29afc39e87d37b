//! Driver facade: issues show commands through a [`CommandSession`] and
//! feeds the transcripts to the fact builders.

mod builder;
mod commands;
mod config;
mod sros;

pub use builder::SrosFactsBuilder;
pub use config::FactsConfig;
pub use sros::SrosFacts;

use std::future::Future;

/// The one primitive the facade needs from a device session.
///
/// `command` sends literal text (already newline-terminated, possibly
/// several lines) and returns whatever output accumulated in response.
/// Connection setup, authentication, prompt handling and pacing all belong
/// to the implementor. Errors are handed back to the caller unchanged.
pub trait CommandSession: Send {
    /// Error raised by the session.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `command` and collect the raw response text.
    fn command(
        &mut self,
        command: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<T: CommandSession> CommandSession for &mut T {
    type Error = T::Error;

    fn command(
        &mut self,
        command: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        (**self).command(command)
    }
}
