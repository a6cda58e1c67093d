pub mod date;
pub mod duration;
pub mod formatting;
pub mod path;
pub mod table;

pub use duration::format_duration;
pub use formatting::describe_location;
