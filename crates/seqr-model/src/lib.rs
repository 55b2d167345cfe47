pub mod error;
pub mod outcome;
pub mod record;
pub mod value;

pub use error::{ModelError, Result};
pub use outcome::{
    CellOutcome, ColumnIdentity, ColumnOutcome, INVALID_ROWS_MESSAGE, ParseResult, RowOutcome,
};
pub use record::RawRecord;
pub use value::TypedValue;
