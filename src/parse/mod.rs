pub mod lines;
pub mod record_parser;
pub mod record_serializer;

pub use lines::TextLines;
pub use record_parser::{Record, parse_record, parse_store, parse_weight};
pub use record_serializer::serialize_store;
