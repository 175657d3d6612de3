use regex::Regex;
use std::sync::LazyLock;

/// `[0-3 spaces][marker][1+ spaces][rest of line]`
static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^( {0,3}(?:(\d{1,9})([.)])|([-*+])) +)(.*)\n?").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dash,
    Asterisk,
    Plus,
    Numbered { start: u32 },
}

impl Marker {
    fn from_bullet(c: char) -> Option<Self> {
        match c {
            '-' => Some(Marker::Dash),
            '*' => Some(Marker::Asterisk),
            '+' => Some(Marker::Plus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletMatch<'a> {
    pub marker: Marker,
    /// Width of leading spaces, marker and trailing spaces. Continuation
    /// lines indented by at least this much belong to the item.
    pub legal_padding: usize,
    /// Text after the padding, without the newline.
    pub content: &'a str,
    /// Bytes of the bullet line, newline included.
    pub consumed: usize,
}

pub struct Bullet;

impl Bullet {
    pub fn match_line(remainder: &str) -> Option<BulletMatch<'_>> {
        let caps = BULLET_LINE.captures(remainder)?;
        let marker = match (caps.get(2), caps.get(3), caps.get(4)) {
            (Some(digits), Some(_), _) => Marker::Numbered {
                start: digits.as_str().parse().ok()?,
            },
            (_, _, Some(bullet)) => Marker::from_bullet(bullet.as_str().chars().next()?)?,
            _ => return None,
        };
        Some(BulletMatch {
            marker,
            legal_padding: caps.get(1)?.len(),
            content: caps.get(5)?.as_str(),
            consumed: caps.get(0)?.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Marker::Dash, 2, "item")]
    #[case("*   wide\n", Marker::Asterisk, 4, "wide")]
    #[case("  + plus", Marker::Plus, 4, "plus")]
    #[case("1. one", Marker::Numbered { start: 1 }, 3, "one")]
    #[case("42) answer", Marker::Numbered { start: 42 }, 4, "answer")]
    fn recognises_markers(
        #[case] input: &str,
        #[case] marker: Marker,
        #[case] padding: usize,
        #[case] content: &str,
    ) {
        let bullet = Bullet::match_line(input).unwrap();
        assert_eq!(bullet.marker, marker);
        assert_eq!(bullet.legal_padding, padding);
        assert_eq!(bullet.content, content);
    }

    #[rstest]
    #[case("-no space")]
    #[case("    - too deep")]
    #[case("1234567890. too long")]
    #[case("text")]
    fn rejects_non_bullets(#[case] input: &str) {
        assert_eq!(Bullet::match_line(input), None);
    }

    #[test]
    fn consumed_includes_newline() {
        assert_eq!(Bullet::match_line("- a\nb").unwrap().consumed, 4);
    }
}
