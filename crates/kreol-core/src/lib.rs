pub mod dictionary;
pub mod error;
pub mod language;
pub mod lookup;
pub mod preprocess;

pub use dictionary::{Dictionary, DictionarySet, ForwardDictionary, ReverseDictionary};
pub use error::{InitError, LoadError};
pub use language::{Direction, Language, Token};
pub use lookup::{MatchKind, resolve, resolve_match};
pub use preprocess::{normalize, tokenize};
