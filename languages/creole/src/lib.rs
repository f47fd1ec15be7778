pub mod loader;
pub mod processor;
pub mod translator;

pub use loader::DictionaryLoader;
pub use processor::CreoleProcessor;
pub use translator::CreoleTranslator;
