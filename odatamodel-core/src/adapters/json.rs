//! JSON payloads, backed by [serde_json::Value].

mod parse_node;
mod writer;


pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;
