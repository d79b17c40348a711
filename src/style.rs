// Display styling: a stateless set of color constants handed by reference to
// every output routine. Nothing here touches the terminal; the UI applies the
// colors with `crossterm::style::Stylize`.

use crossterm::style::Color;

/// Color roles used across the UI. Passing this struct around (instead of
/// reaching for globals) keeps the output routines testable and makes a
/// plain, color-free palette trivial to swap in.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    /// Menu and section headers.
    pub header: Color,
    /// Input prompts and informational text.
    pub prompt: Color,
    /// Success confirmations.
    pub good: Color,
    /// Warnings that still let the session continue.
    pub warn: Color,
    /// Validation and I/O failures.
    pub bad: Color,
}

impl Default for Styles {
    fn default() -> Self {
        Styles {
            header: Color::Magenta,
            prompt: Color::Cyan,
            good: Color::Green,
            warn: Color::Yellow,
            bad: Color::Red,
        }
    }
}
