pub mod columns;
pub mod reader;

pub use columns::{rename_header, SurveyColumns, ITEM_COUNT};
pub use reader::{read_survey, read_survey_file, RawTable};
