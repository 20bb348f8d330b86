//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names and help
//! text. No business logic lives here.

use clap::Parser;

use nextpro_core::application::RawInput;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-next-pro",
    bin_name = "create-next-pro",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a production-ready Next.js 15 app",
    long_about = "create-next-pro runs create-next-app, then layers typed env \
                  validation, tRPC, tooling, CI, Docker and optional Stripe, \
                  Supabase and AI integrations on top.",
    after_help = "EXAMPLES:\n\
        \x20 create-next-pro\n\
        \x20 create-next-pro my-app --with stripe,ai\n\
        \x20 create-next-pro my-app --minimal",
)]
pub struct Cli {
    /// Name of the project; asked for when omitted.
    #[arg(value_name = "PROJECT_NAME")]
    pub name: Option<String>,

    /// Comma-separated list of integrations (stripe,supabase,ai).
    #[arg(long = "with", value_name = "LIST")]
    pub with: Option<String>,

    /// Minimal setup without optional integrations.
    #[arg(long = "minimal")]
    pub minimal: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// The answers given on the command line, before any prompting.
    pub fn raw_input(&self) -> RawInput {
        RawInput {
            name: self.name.clone(),
            with: self.with.clone(),
            minimal: self.minimal,
        }
    }
}
