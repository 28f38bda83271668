pub mod layout;
pub mod renderer;

pub use layout::{DocumentTable, StatementDocument, SummaryRow};
pub use renderer::{DocumentRenderer, PdfRenderer, PlainTextRenderer};
