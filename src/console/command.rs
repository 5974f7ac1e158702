/// A line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Modifiers,
    Lookup,
    /// Anything else is looked up as a key name
    Query(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a prompt line. Command words are case-insensitive, queries are kept as typed.
    pub fn parse(line: &'a str) -> Self {
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            Self::Quit
        } else if input.eq_ignore_ascii_case("modifiers") {
            Self::Modifiers
        } else if input.eq_ignore_ascii_case("lookup") {
            Self::Lookup
        } else {
            Self::Query(input)
        }
    }
}
