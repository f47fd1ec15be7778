use std::io::Write;

use kreol_core::Dictionary;
use kreol_core::language::LanguageProcessor;
use kreol_translator::Translator;

use crate::state::AppState;

pub fn handle_info<W: Write>(state: &AppState, out: &mut W) -> anyhow::Result<()> {
    let dictionaries = state.translator.processor().dictionaries();

    writeln!(out, "{}", state.translator.metadata().name)?;
    for metadata in [dictionaries.forward().metadata(), dictionaries.reverse().metadata()] {
        writeln!(
            out,
            "  {:<8} {:<7} {} entries",
            metadata.name, metadata.language, metadata.entry_count
        )?;
    }
    for (from, to) in state.translator.supported_languages() {
        writeln!(out, "  {from} -> {to}")?;
    }

    Ok(())
}
