use std::io::{self, BufRead, Write};

use kreol_translator::Translator;

use crate::state::AppState;

const SWAP: &str = ":swap";
const QUIT: [&str; 2] = [":quit", ":q"];

/// Read lines until EOF or `:quit`. `:swap` flips the direction.
pub fn run_repl<R: BufRead, W: Write>(
    state: &AppState,
    from: Option<&str>,
    to: Option<&str>,
    mut input: R,
    out: &mut W,
    prompt: bool,
) -> io::Result<()> {
    let (mut from, mut to) = state.direction_codes(from, to);
    tracing::info!("Interactive mode: {} -> {}", from, to);

    let mut line = String::new();
    loop {
        if prompt {
            write!(out, "[{from} -> {to}] > ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            cmd if QUIT.contains(&cmd) => break,
            SWAP => {
                std::mem::swap(&mut from, &mut to);
                writeln!(out, "{from} -> {to}")?;
            }
            text => writeln!(out, "{}", state.translator.translate_or_sentinel(text, &from, &to))?,
        }
    }

    Ok(())
}
