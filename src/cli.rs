//! The interactive command line.
//!
//! There are no subcommands: running the binary enters the numbered menu
//! loop and stays there until the user exits or input ends.

mod menu;
mod prompt;
mod terminal;

use std::io;

use clap::ArgAction;

/// Menu-driven console tool for a scratch integer sequence and an employee
/// roster.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Runs the menu loop over stdin/stdout until the user exits.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        if self.no_color {
            terminal::disable_color();
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = menu::Session::new(stdin.lock(), stdout.lock());
        session.run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Diagnostics go to stderr so they never interleave with the menu.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
