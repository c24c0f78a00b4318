//! Front-end configuration.
//!
//! Grammar and rendering switches shared by the parser and the lowering
//! pass. The binary fills this from its command line flags.

/// Parser and lowering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Parse `name(args)` as a call. Off by default: an identifier is always a
    /// bare variable reference and a following `(` starts a new expression.
    pub call_expressions: bool,
    /// Render calls as `callee(arg,arg)` instead of the empty string.
    pub stitch_calls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            call_expressions: false,
            stitch_calls: false,
        }
    }
}
