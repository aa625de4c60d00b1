//! Response decoder module
//!
//! Turns the API's flat, line-oriented response text
//! (`KEY = VALUE` and `property[NAME][INDEX] = VALUE` assignments)
//! into a typed result: either one record with scalar/list-valued
//! properties, or an ordered table of rows filtered through the
//! declared column manifest.
//!
//! Decoding is a pure, single-pass transform. It has no failure path:
//! malformed lines are skipped and uncoercible values are kept as text.

mod response;
mod scanner;

pub use response::{
    decode, decode_record, decode_table, DecodedResponse, Envelope, Property, RecordResponse, Row,
    TableResponse, Value,
};
pub use scanner::{classify, scan, ResponseKey};
