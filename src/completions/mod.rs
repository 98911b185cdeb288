//! Shell completion support for nautilus
//!
//! Static scripts are always available through `nautilus completions
//! <SHELL>`. With the `dynamic-completions` feature, values such as config
//! keys are completed by the binary itself at TAB time.

use crate::config::SETTABLE_KEYS;
use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// A completion suggestion returned to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The value to insert
    pub value: String,
    /// Optional help text shown alongside
    pub help: Option<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Known configuration keys for `config set/get`
#[must_use]
pub fn config_keys() -> Vec<Candidate> {
    SETTABLE_KEYS
        .iter()
        .map(|key| {
            let help = match *key {
                "database" => "Path of the document database",
                "title" => "Collection title",
                "page_size" => "Documents per page",
                "randomize" => "Start on a random sample",
                "show_author" => "Display authors in rows",
                "show_description" => "Display descriptions in rows",
                "files_prefix" => "Prefix of attachment paths",
                "debug" => "Verbose logging",
                _ => "",
            };
            Candidate::new(*key).with_help(help)
        })
        .collect()
}

/// Candidates starting with `current`
#[must_use]
pub fn filter_candidates(candidates: Vec<Candidate>, current: &str) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| c.value.starts_with(current))
        .collect()
}

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

/// Initialize dynamic completion system
///
/// Call this at the start of main() before argument parsing. It answers
/// completion requests signalled by the `COMPLETE` environment variable.
#[cfg(feature = "dynamic-completions")]
pub fn init_dynamic_completions<F: Fn() -> Command>(factory: F) {
    clap_complete::CompleteEnv::with_factory(factory).complete();
}

/// Complete config keys for `config get`
#[cfg(feature = "dynamic-completions")]
pub fn complete_config_keys(
    current: &std::ffi::OsStr,
) -> Vec<clap_complete::engine::CompletionCandidate> {
    use clap_complete::engine::CompletionCandidate;

    filter_candidates(config_keys(), &current.to_string_lossy())
        .into_iter()
        .map(|c| CompletionCandidate::new(c.value).help(c.help.map(Into::into)))
        .collect()
}
