use std::io::Write;

use anyhow::bail;
use kreol_core::Direction;
use kreol_core::language::LanguageProcessor;
use kreol_translator::UNSUPPORTED_DIRECTION;

use crate::state::AppState;

/// One line per token: surface, translation and the rule that matched
pub fn handle_lookup<W: Write>(
    state: &AppState,
    from: Option<&str>,
    to: Option<&str>,
    words: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    let (from, to) = state.direction_codes(from, to);
    let Some(direction) = Direction::parse(&from, &to) else {
        bail!("{UNSUPPORTED_DIRECTION}: {from} -> {to}");
    };

    let processor = state.translator.processor();
    for token in processor.tokenize(&words.join(" ")) {
        let result = processor.lookup(&token, direction);
        writeln!(
            out,
            "{}\t{}\t{}",
            result.term,
            result.translation,
            result.kind.as_str()
        )?;
    }

    Ok(())
}
