//! Recovers the numeric score from the evaluation service's free text.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::score::Score;

/// Score nouns recognized by default, as regex fragments.
///
/// The system prompt asks for a Russian answer, so the table covers the
/// Russian noun in nominative and accusative form.
pub const DEFAULT_KEYWORDS: &[&str] = &["оценк[ау]"];

static DEFAULT_PARSER: LazyLock<ScoreParser> = LazyLock::new(ScoreParser::default);
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\d\z").expect("digit pattern must compile"));

fn is_decimal_digit(c: char) -> bool {
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Numeric value of a Unicode decimal digit.
///
/// Decimal digits are encoded in runs of ten starting at zero, so the value is
/// the offset from the start of the surrounding run of digits, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Parses a run of decimal digits from any script. `None` on overflow.
fn parse_digits(digits: &str) -> Option<i64> {
    digits.chars().try_fold(0i64, |acc, c| {
        acc.checked_mul(10)?
            .checked_add(i64::from(digit_value(c)?))
    })
}

/// Finds the first `<keyword> <digits>` occurrence in a response.
#[derive(Clone, Debug)]
pub struct ScoreParser {
    pattern: Option<Regex>,
}

impl ScoreParser {
    /// Builds a parser from a keyword table.
    ///
    /// Each keyword is a regex fragment matched case-insensitively and must
    /// be followed by optional whitespace and then the digits, in any script.
    /// Keywords may contain their own capture groups. An empty table
    /// yields a parser that always returns [`Score::DEFAULT`].
    pub fn new<I, S>(keywords: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives = keywords
            .into_iter()
            .map(|keyword| format!("(?:{})", keyword.as_ref()))
            .collect::<Vec<_>>();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!(
            r"(?i)(?:{})\s*(?P<score>\d+)",
            alternatives.join("|")
        ))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns the first stated score, or [`Score::DEFAULT`].
    pub fn parse(&self, response: &str) -> Score {
        self.pattern
            .as_ref()
            .and_then(|pattern| pattern.captures(response))
            .and_then(|captures| captures.name("score"))
            .and_then(|digits| parse_digits(digits.as_str()))
            .map_or(Score::DEFAULT, Score::new)
    }
}

impl Default for ScoreParser {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS).expect("default score keywords must compile")
    }
}

/// Parses `response` with the default keyword table.
pub fn parse_score(response: &str) -> Score {
    DEFAULT_PARSER.parse(response)
}
