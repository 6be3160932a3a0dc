use crate::pass::charset::CharClass;

/// Flags resolved from argv. `classes` preserves the order the flags were
/// given, with `-a` already expanded.
#[derive(Debug, Default)]
pub struct CliFlags {
    pub classes: Vec<CharClass>,
    pub length: Option<usize>,
}
