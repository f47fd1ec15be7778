use std::io;

use clap::Subcommand;

use crate::state::AppState;

pub mod info;
pub mod lookup;
pub mod repl;
pub mod self_test;
pub mod translate;

use info::handle_info;
use lookup::handle_lookup;
use repl::run_repl;
use self_test::handle_self_test;
use translate::handle_translate;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text given as arguments, or stdin line by line
    Translate {
        /// Source language (creole, fr)
        #[arg(long, short)]
        from: Option<String>,
        /// Target language (creole, fr)
        #[arg(long, short)]
        to: Option<String>,
        text: Vec<String>,
    },
    /// Interactive translation, one line at a time
    Repl {
        #[arg(long, short)]
        from: Option<String>,
        #[arg(long, short)]
        to: Option<String>,
    },
    /// Show how each word resolves
    Lookup {
        #[arg(long, short)]
        from: Option<String>,
        #[arg(long, short)]
        to: Option<String>,
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Translate a known word to check the dictionary is usable
    SelfTest,
    /// Dictionary statistics
    Info,
}

/// Run a command, or pick one from how stdin is attached
pub fn handle_command(state: &AppState, command: Option<Command>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    let command = command.unwrap_or_else(|| {
        if atty::is(atty::Stream::Stdin) {
            Command::Repl { from: None, to: None }
        } else {
            Command::Translate {
                from: None,
                to: None,
                text: vec![],
            }
        }
    });
    tracing::debug!("Running {command:?}");

    match command {
        Command::Translate { from, to, text } => handle_translate(
            state,
            from.as_deref(),
            to.as_deref(),
            &text,
            stdin.lock(),
            &mut out,
        )?,
        Command::Repl { from, to } => {
            let prompt = atty::is(atty::Stream::Stdin);
            run_repl(state, from.as_deref(), to.as_deref(), stdin.lock(), &mut out, prompt)?
        }
        Command::Lookup { from, to, words } => {
            handle_lookup(state, from.as_deref(), to.as_deref(), &words, &mut out)?
        }
        Command::SelfTest => handle_self_test(state, &mut out)?,
        Command::Info => handle_info(state, &mut out)?,
    }

    Ok(())
}
