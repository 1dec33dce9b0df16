/// Presentation layer: side panel controls, metric row, scatter plot and
/// candidate table. Widgets only read the session and forward edits to it.

pub mod panels;
pub mod plot;
pub mod table;
