pub mod answer;
pub mod class;
pub mod record_type;

pub use answer::{DnsAnswer, RecordData};
pub use class::RecordClass;
pub use record_type::RecordType;
