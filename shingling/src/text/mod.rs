mod shingles;
mod stopwords;
mod tokenizers;

pub use self::tokenizers::clean_text;
pub use self::tokenizers::tokenize;
pub use self::tokenizers::whitespace_split;

pub use self::stopwords::filter_stopwords;
pub use self::stopwords::StopwordSet;

pub use self::shingles::build_shingles;
pub use self::shingles::build_shingles_with_separator;
pub use self::shingles::universe;
pub use self::shingles::ShingleSet;
pub use self::shingles::DEFAULT_SEPARATOR;
pub(crate) use self::shingles::shingle_windows;
