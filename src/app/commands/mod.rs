//! Subcommand handlers used by the CLI.

/// `chat` command helpers.
pub(crate) mod chat;
/// `init` command helpers.
pub(crate) mod init;
/// `theme` command helpers.
pub(crate) mod theme;
/// `ticket` command helpers.
pub(crate) mod ticket;
