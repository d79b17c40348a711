// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive catalog tool.
//
// Module responsibilities:
// - `catalog`: the record type, the '/'-delimited file codec, load/save,
//   duplicate detection, and the field validation rules.
// - `style`: stateless display color constants passed to output routines.
// - `ui`: the terminal menu and prompt flows; delegates to `catalog`.
//
// Keeping this separation lets the catalog rules be unit tested without a
// terminal attached.
pub mod catalog;
pub mod style;
pub mod ui;
