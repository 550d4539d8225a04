// Presentation layer - Document, renderers and the apply loop
pub mod console;
pub mod memory_document;
pub mod tracing_renderers;
