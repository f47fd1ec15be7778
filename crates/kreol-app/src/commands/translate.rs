use std::io::{BufRead, Write};

use kreol_translator::Translator;

use crate::state::AppState;

/// Translate the argument words as one text, or each stdin line on its own
pub fn handle_translate<R: BufRead, W: Write>(
    state: &AppState,
    from: Option<&str>,
    to: Option<&str>,
    text: &[String],
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let (from, to) = state.direction_codes(from, to);
    tracing::debug!("Direction: {} -> {}", from, to);

    if !text.is_empty() {
        let translated = state
            .translator
            .translate_or_sentinel(&text.join(" "), &from, &to);
        writeln!(out, "{translated}")?;
        return Ok(());
    }

    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", state.translator.translate_or_sentinel(&line, &from, &to))?;
    }

    Ok(())
}
