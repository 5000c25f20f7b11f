//! Wire format for dialogform definitions.
//!
//! A finished [`Dialog`](dialogform_types::Dialog) is exported here into the
//! nested plain map/list structure a UI host consumes - the only boundary
//! artifact of the system. The export is a pure function applying the
//! compaction rules (default-valued fields produce no key at all), and the
//! parse direction validates untyped host values back into the typed model.

mod value;
pub use value::Value;

mod export;
pub use export::{export_answer, export_category, export_dialog, export_question};

mod parse;
pub use parse::{parse_answer, parse_category, parse_dialog, parse_question};
