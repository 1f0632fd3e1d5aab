pub mod encoding;
pub mod factor;
pub mod record;
pub mod scoring;

pub use encoding::{Frequency, Gender, ResidenceArea};
pub use factor::Factor;
pub use record::{clean_records, encode_records, CleanedRecord, EncodedRecord, EncodingReport};
pub use scoring::{dislike_score, parse_item, ScorePolicy};
