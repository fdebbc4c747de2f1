//! Probe report parsing: the descriptor model, the per-section key tables,
//! and the section-tracking parser.

pub mod descriptor;
pub mod fields;
pub mod parser;

pub use descriptor::{ExtraFields, MediaDescriptor, StreamDescriptor, StreamKind};
pub use fields::{Conversion, FormatField, INVALID_STREAM_INDEX, StreamField};
pub use parser::{ParseStats, ParsedReport, ReportParser, parse_report, parse_report_strict};
