use regex::Regex;
use std::sync::LazyLock;

static HARD_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}\n").unwrap());

pub struct HardBreak;

impl HardBreak {
    pub const TAG: &'static str = "<br />\n";

    /// Two or more spaces before a newline become a `<br />`.
    pub fn apply(content: &str) -> String {
        HARD_BREAK.replace_all(content, Self::TAG).into_owned()
    }
}

/// Trims spaces and stray newlines from both ends of every line.
pub fn trim_lines(content: &str) -> String {
    content
        .split('\n')
        .map(|line| line.trim_matches([' ', '\n']))
        .collect::<Vec<_>>()
        .join("\n")
}
