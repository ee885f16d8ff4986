//! Strict parser for lineup cells such as `['V Kohli', "F du Plessis"]`.
//!
//! Only a flat bracketed list of quoted names is accepted. Anything else
//! (bare words, nested lists, escapes, trailing commas) is rejected so a
//! malformed cell surfaces as a schema error instead of being guessed at.

use std::iter::Peekable;
use std::str::CharIndices;

/// Parse a lineup cell into player names.
///
/// The error string describes the first offending position and is meant to
/// be wrapped into a schema error by the caller.
pub fn parse_player_list(raw: &str) -> std::result::Result<Vec<String>, String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| format!("expected a bracketed list, got `{}`", trimmed))?;

    let mut names = Vec::new();
    let mut chars = inner.char_indices().peekable();

    skip_whitespace(&mut chars);
    if chars.peek().is_none() {
        return Ok(names);
    }

    loop {
        skip_whitespace(&mut chars);
        let (pos, quote) = chars
            .next()
            .ok_or_else(|| "expected a quoted name after `,`".to_string())?;
        if quote != '\'' && quote != '"' {
            return Err(format!("expected a quoted name at offset {}, found `{}`", pos, quote));
        }

        let mut name = String::new();
        loop {
            match chars.next() {
                Some((_, c)) if c == quote => break,
                Some((at, '\\')) => return Err(format!("escape sequences are not allowed (offset {})", at)),
                Some((_, c)) => name.push(c),
                None => return Err(format!("unterminated name starting at offset {}", pos)),
            }
        }
        if name.trim().is_empty() {
            return Err(format!("empty player name at offset {}", pos));
        }
        names.push(name);

        skip_whitespace(&mut chars);
        match chars.next() {
            None => return Ok(names),
            Some((_, ',')) => continue,
            Some((at, c)) => return Err(format!("expected `,` or end of list at offset {}, found `{}`", at, c)),
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_quoted_list() {
        let names = parse_player_list("['YBK Jaiswal', 'JC Buttler', 'SV Samson']").unwrap();
        assert_eq!(names, vec!["YBK Jaiswal", "JC Buttler", "SV Samson"]);
    }

    #[test]
    fn test_parses_mixed_quotes_and_apostrophes() {
        let names = parse_player_list(r#"["B O'Neil", 'R Ashwin']"#).unwrap();
        assert_eq!(names, vec!["B O'Neil", "R Ashwin"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_player_list("[]").unwrap().is_empty());
        assert!(parse_player_list("  [  ]  ").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_missing_brackets() {
        assert!(parse_player_list("'A', 'B'").is_err());
        assert!(parse_player_list("['A', 'B'").is_err());
    }

    #[test]
    fn test_rejects_unquoted_items() {
        let err = parse_player_list("[A, 'B']").unwrap_err();
        assert!(err.contains("expected a quoted name"));
    }

    #[test]
    fn test_rejects_code_like_content() {
        assert!(parse_player_list("__import__('os').system('ls')").is_err());
        assert!(parse_player_list("['A'] + ['B']").is_err());
        assert!(parse_player_list("[['A'], 'B']").is_err());
    }

    #[test]
    fn test_rejects_trailing_comma_and_escapes() {
        assert!(parse_player_list("['A', 'B',]").is_err());
        assert!(parse_player_list(r"['A\'s']").is_err());
    }

    #[test]
    fn test_rejects_unterminated_and_empty_names() {
        assert!(parse_player_list("['A, 'B']").is_err());
        assert!(parse_player_list("['A', '  ']").is_err());
    }
}
