pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Exports a document through the deterministic trace backend and
/// returns the call trace as text.
pub fn export_trace(
    doc: &polar::Document,
    options: &polar::ExportOptions,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = polar::export(doc, options, Box::new(polar::TraceComposer::new()))?;
    Ok(String::from_utf8(bytes)?)
}
