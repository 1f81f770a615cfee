mod dispatcher;
mod request;
mod translator;

pub use {
    dispatcher::{DEFAULT_TRANSLATION_TIMEOUT, TranslationDispatcher},
    request::{
        AUTO_DETECT, LanguagePair, PendingTranslation, TranslationOrigin, TranslationRequest,
        TranslationResult,
    },
    translator::Translator,
};
