use std::io::Write;

use kreol_core::Direction;
use kreol_translator::Translator;

use crate::state::AppState;

const PROBE: &str = "bonzour";

pub fn handle_self_test<W: Write>(state: &AppState, out: &mut W) -> anyhow::Result<()> {
    let direction = Direction::CREOLE_TO_FRENCH;
    let translated = state.translator.translate_or_sentinel(
        PROBE,
        direction.from().code(),
        direction.to().code(),
    );

    if translated == PROBE {
        tracing::warn!("Self-test word {PROBE:?} is not in the dictionary");
    } else {
        tracing::info!("Self-test passed");
    }

    writeln!(out, "{PROBE} -> {translated}")?;
    Ok(())
}
