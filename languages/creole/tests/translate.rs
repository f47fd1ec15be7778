use std::sync::Arc;

use kreol_core::{Direction, DictionarySet, ForwardDictionary};
use kreol_lang_creole::{CreoleProcessor, CreoleTranslator, DictionaryLoader};
use kreol_translator::{TRANSLATION_ERROR, Translator, UNSUPPORTED_DIRECTION};

fn translator_with(entries: &[(&str, &str)]) -> CreoleTranslator {
    let forward: ForwardDictionary = entries.iter().copied().collect();
    CreoleTranslator::new(Arc::new(CreoleProcessor::new(DictionarySet::new(forward))))
}

fn embedded_translator() -> CreoleTranslator {
    let forward = DictionaryLoader::load_embedded().unwrap();
    CreoleTranslator::new(Arc::new(CreoleProcessor::new(DictionarySet::new(forward))))
}

#[test]
fn single_word_both_ways() {
    let translator = translator_with(&[("bonzour", "bonjour")]);

    assert_eq!(translator.translate_or_sentinel("bonzour", "creole", "fr"), "bonjour");
    assert_eq!(translator.translate_or_sentinel("bonjour", "fr", "creole"), "bonzour");
}

#[test]
fn empty_text_is_empty_for_any_direction() {
    let translator = translator_with(&[("bonzour", "bonjour")]);

    for (from, to) in [("creole", "fr"), ("fr", "creole"), ("xx", "yy"), ("fr", "fr")] {
        assert_eq!(translator.translate_or_sentinel("", from, to), "");
        assert_eq!(translator.translate_or_sentinel("  \n\t ", from, to), "");
    }
}

#[test]
fn tokens_are_translated_independently() {
    let translator = translator_with(&[("bonzour", "bonjour"), ("koman", "comment")]);

    let translation = translator
        .translate("  Bonzour,   koman\ti lé? ", "creole", "fr")
        .unwrap();
    assert_eq!(translation.text, "bonjour comment i lé?");
    assert_eq!(translation.matched, 2);
    assert_eq!(translation.unmatched, 2);
    assert_eq!(translation.provider, "dictionary");
}

#[test]
fn alternatives_translate_back_to_the_same_word() {
    let translator = translator_with(&[("gro", "gros ou grand (taille)")]);

    assert_eq!(translator.translate_or_sentinel("Gros grand", "fr", "creole"), "gro gro");
    assert_eq!(translator.translate_or_sentinel("taille", "fr", "creole"), "taille");
    assert_eq!(
        translator.translate_or_sentinel("gro", "creole", "fr"),
        "gros ou grand (taille)"
    );
}

#[test]
fn unsupported_directions_yield_the_sentinel() {
    let translator = translator_with(&[("bonzour", "bonjour")]);

    assert_eq!(translator.translate_or_sentinel("bonzour", "xx", "yy"), UNSUPPORTED_DIRECTION);
    assert_eq!(
        translator.translate_or_sentinel("bonzour", "creole", "creole"),
        UNSUPPORTED_DIRECTION
    );
    assert_ne!(
        translator.translate_or_sentinel("bonzour", "creole", "fr"),
        TRANSLATION_ERROR
    );
    assert!(translator.translate("bonzour", "xx", "yy").is_err());
}

#[test]
fn embedded_round_trip_for_unambiguous_words() {
    let translator = embedded_translator();

    for word in ["bonzour", "mersi", "koman", "lapli", "solèy"] {
        let french = translator.translate_or_sentinel(word, "creole", "fr");
        assert_ne!(french, word);
        assert_eq!(translator.translate_or_sentinel(&french, "fr", "creole"), word);
    }
}

#[test]
fn embedded_sentence_keeps_unknown_words() {
    let translator = embedded_translator();

    assert_eq!(
        translator
            .translate_direction("Bonzour Marmay! Zistoir", Direction::CREOLE_TO_FRENCH)
            .unwrap()
            .text,
        "bonjour enfant ou enfants Zistoir"
    );
    assert_eq!(
        translator
            .translate_direction("Merci pour la pluie", Direction::FRENCH_TO_CREOLE)
            .unwrap()
            .text,
        "mersi pou la lapli"
    );
}

#[test]
fn metadata_reports_both_dictionaries() {
    let translator = translator_with(&[("gro", "gros ou grand (taille)"), ("ti", "petit")]);
    let metadata = translator.metadata();

    assert_eq!(metadata.entry_count, 2);
    assert_eq!(metadata.reverse_entry_count, 4);
    assert_eq!(translator.supported_languages().len(), 2);
}

#[test]
fn decomposed_accents_match_but_unknown_words_keep_their_bytes() {
    let translator = translator_with(&[("bonzour", "bonjour"), ("solèy", "soleil")]);

    let unknown = "cafe\u{301}";
    assert_eq!(
        translator.translate_or_sentinel(&format!("bonzour {unknown}"), "creole", "fr"),
        format!("bonjour {unknown}")
    );
    assert_eq!(translator.translate_or_sentinel("sole\u{300}y!", "creole", "fr"), "soleil");
    assert_eq!(translator.translate_or_sentinel("soleil", "fr", "creole"), "solèy");
}
