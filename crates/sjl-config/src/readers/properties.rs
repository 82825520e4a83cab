//! Properties reader.
//!
//! Understands the usual `.properties` syntax: `#`/`!` comment lines,
//! `=`, `:` or whitespace between key and value, backslash line
//! continuations and `\t \n \r \f \uXXXX` escapes. A key that appears more
//! than once keeps its first position and its last value. `${name}` in a
//! value is replaced by the value of `name` from the same document; write
//! `\${` for a literal `${`.

use std::path::Path;

use crate::error::{Error, Result};
use crate::format::{ConfigFormat, ConfigReader};
use crate::keys::ConfigKey;
use crate::model::ResolvedConfiguration;

/// Reader for `.properties` files
#[derive(Debug, Default)]
pub struct PropertiesReader;

impl ConfigReader for PropertiesReader {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Properties
    }

    fn read(&self, path: &Path, source: &[u8]) -> Result<ResolvedConfiguration> {
        let text = std::str::from_utf8(source).map_err(|e| {
            Error::malformed(path, ConfigFormat::Properties, None, format!("invalid UTF-8: {e}"))
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let entries = parse_entries(text).map_err(|e| {
            Error::malformed(path, ConfigFormat::Properties, Some(e.key), e.message)
        })?;

        let mut config = ResolvedConfiguration::default();
        for (name, value) in entries {
            if let Some(key) = ConfigKey::match_property(&name) {
                tracing::trace!(property = %name, %key, "Matched launcher key");
                config.apply(key, value);
            }
        }
        Ok(config)
    }
}

/// Failure while decoding a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
    pub key: String,
    pub message: String,
}

/// Decode a properties document into ordered `(key, value)` pairs.
///
/// References are expanded after all entries are read, so a value may refer
/// to a key defined further down. Unknown and circular references fail.
pub fn parse_entries(text: &str) -> std::result::Result<Vec<(String, String)>, EntryError> {
    let mut entries: Vec<(String, Vec<Piece>)> = Vec::new();

    for line in logical_lines(text) {
        let (raw_key, raw_value) = split_entry(&line);
        let key = unescape(raw_key).map_err(|message| EntryError {
            key: raw_key.to_string(),
            message,
        })?;
        let value = split_references(raw_value).map_err(|message| EntryError {
            key: key.clone(),
            message,
        })?;

        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    entries
        .iter()
        .map(|(key, _)| {
            let mut chain = Vec::new();
            expand(key, &entries, &mut chain).map(|value| (key.clone(), value))
        })
        .collect()
}

/// A decoded value segment
#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Reference(String),
}

/// Split a raw value into literal text and `${name}` references.
///
/// Escapes are resolved inside literals only; an escaped `$` never opens a
/// reference, and an unterminated `${` is kept as text.
fn split_references(raw: &str) -> std::result::Result<Vec<Piece>, String> {
    let mut pieces = Vec::new();
    let mut pending = String::new();
    let mut chars = raw.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                pending.push(c);
                if let Some((_, next)) = chars.next() {
                    pending.push(next);
                }
            }
            '$' if raw[index + 1..].starts_with('{') => {
                let body = &raw[index + 2..];
                let Some(close) = body.find('}') else {
                    pending.push(c);
                    continue;
                };
                if !pending.is_empty() {
                    pieces.push(Piece::Literal(unescape(&pending)?));
                    pending.clear();
                }
                pieces.push(Piece::Reference(body[..close].to_string()));
                // skip `{`, the name and `}`
                let end = index + 2 + close;
                while chars.peek().is_some_and(|&(next, _)| next <= end) {
                    chars.next();
                }
            }
            _ => pending.push(c),
        }
    }
    if !pending.is_empty() {
        pieces.push(Piece::Literal(unescape(&pending)?));
    }
    Ok(pieces)
}

/// Fully expanded value of `key`. `chain` holds the keys being expanded.
fn expand(
    key: &str,
    entries: &[(String, Vec<Piece>)],
    chain: &mut Vec<String>,
) -> std::result::Result<String, EntryError> {
    let origin = chain.first().map_or(key, String::as_str).to_string();
    if chain.iter().any(|pending| pending == key) {
        chain.push(key.to_string());
        return Err(EntryError {
            key: origin,
            message: format!("circular reference: {}", chain.join(" -> ")),
        });
    }
    let pieces = match entries.iter().find(|(name, _)| name == key) {
        Some((_, pieces)) => pieces,
        None => {
            let referrer = chain.last().cloned().unwrap_or_default();
            return Err(EntryError {
                key: origin,
                message: format!("unknown reference ${{{key}}} in {referrer}"),
            });
        }
    };

    chain.push(key.to_string());
    let mut value = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => value.push_str(text),
            Piece::Reference(name) => {
                let expanded = expand(name, entries, chain)?;
                tracing::trace!(key, reference = %name, "Expanded reference");
                value.push_str(&expanded);
            }
        }
    }
    chain.pop();
    Ok(value)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Count of backslashes at the end of `line`.
fn trailing_backslashes(line: &str) -> usize {
    line.chars().rev().take_while(|&c| c == '\\').count()
}

/// Join continuation lines and drop comments and blank lines.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut natural = text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

    while let Some(first) = natural.next() {
        let first = first.trim_start_matches(is_blank);
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::new();
        let mut current = first;
        loop {
            if trailing_backslashes(current) % 2 == 1 {
                logical.push_str(&current[..current.len() - 1]);
                match natural.next() {
                    Some(next) => current = next.trim_start_matches(is_blank),
                    None => break,
                }
            } else {
                logical.push_str(current);
                break;
            }
        }
        lines.push(logical);
    }

    lines
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = index;
                break;
            }
            c if is_blank(c) => {
                key_end = index;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(|c| c == '=' || c == ':') {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

/// Resolve backslash escapes.
fn unescape(raw: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars)?;
                let decoded = if (0xD800..0xDC00).contains(&unit) {
                    let low = match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => read_code_unit(&mut chars)?,
                        _ => return Err(format!("unpaired surrogate \\u{unit:04X}")),
                    };
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(format!("unpaired surrogate \\u{unit:04X}"));
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                let decoded = char::from_u32(decoded)
                    .ok_or_else(|| format!("invalid code point \\u{decoded:04X}"))?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>) -> std::result::Result<u32, String> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("malformed \\uXXXX escape: \\u{digits}"));
    }
    u32::from_str_radix(&digits, 16).map_err(|e| e.to_string())
}

/// Escape a value so that [`parse_entries`] reads it back unchanged.
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut leading = true;
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '$' => out.push_str("\\$"),
            ' ' if leading => out.push_str("\\ "),
            other => out.push(other),
        }
        leading = leading && c == ' ';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(text: &str) -> Vec<(String, String)> {
        parse_entries(text).unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn separators() {
        assert_eq!(
            pairs("a=1\nb:2\nc 3\nd = 4\ne\t:\t5\n"),
            vec![pair("a", "1"), pair("b", "2"), pair("c", "3"), pair("d", "4"), pair("e", "5")]
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(
            pairs("# comment\n! also a comment\n\n   \nkey=value\n"),
            vec![pair("key", "value")]
        );
    }

    #[test]
    fn key_without_value() {
        assert_eq!(pairs("lonely\nempty=\n"), vec![pair("lonely", ""), pair("empty", "")]);
    }

    #[test]
    fn value_keeps_inner_separators() {
        assert_eq!(pairs("sjl.args.0=-Dmode=a:b"), vec![pair("sjl.args.0", "-Dmode=a:b")]);
    }

    #[test]
    fn continuation_lines_are_joined() {
        assert_eq!(
            pairs("path=/opt/\\\n    java\nnext=1"),
            vec![pair("path", "/opt/java"), pair("next", "1")]
        );
    }

    #[test]
    fn even_backslashes_do_not_continue() {
        assert_eq!(
            pairs("path=C:\\\\\nnext=1"),
            vec![pair("path", "C:\\"), pair("next", "1")]
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(pairs("a=1\r\nb=2\r\n"), vec![pair("a", "1"), pair("b", "2")]);
    }

    #[test]
    fn escapes_are_decoded() {
        assert_eq!(
            pairs("k=tab\\there\\nnew \\u0041\\u00e9"),
            vec![pair("k", "tab\there\nnew A\u{e9}")]
        );
    }

    #[test]
    fn surrogate_pairs_are_combined() {
        assert_eq!(pairs("k=\\uD83D\\uDE00"), vec![pair("k", "\u{1F600}")]);
    }

    #[test]
    fn escaped_separator_belongs_to_key() {
        assert_eq!(pairs("a\\=b=c"), vec![pair("a=b", "c")]);
    }

    #[test]
    fn repeated_key_keeps_first_position_last_value() {
        assert_eq!(
            pairs("a=1\nb=2\na=3"),
            vec![pair("a", "3"), pair("b", "2")]
        );
    }

    #[test]
    fn malformed_unicode_escape_names_the_key() {
        let err = parse_entries("good=1\nbad=\\u12G4").unwrap_err();
        assert_eq!(err.key, "bad");
        assert!(err.message.contains("\\uXXXX"));
    }

    #[test]
    fn escape_value_round_trips() {
        for value in ["  leading", "trailing  ", "a\\b", "line\nbreak", "tab\tx", "=:#!", "${x}", ""] {
            let doc = format!("k={}", escape_value(value));
            assert_eq!(pairs(&doc), vec![pair("k", value)], "value {value:?}");
        }
    }

    #[test]
    fn references_are_expanded() {
        assert_eq!(
            pairs("home=${base}/jre\nbase=/opt\n"),
            vec![pair("home", "/opt/jre"), pair("base", "/opt")]
        );
    }

    #[test]
    fn nested_references() {
        assert_eq!(
            pairs("a=${b}-${b}\nb=[${c}]\nc=x"),
            vec![pair("a", "[x]-[x]"), pair("b", "[x]"), pair("c", "x")]
        );
    }

    #[test]
    fn escaped_or_unterminated_references_stay_literal() {
        assert_eq!(
            pairs("a=\\${b}\nb=${open\nc=$x"),
            vec![pair("a", "${b}"), pair("b", "${open"), pair("c", "$x")]
        );
    }

    #[test]
    fn unknown_reference_names_the_key() {
        let err = parse_entries("a=1\nhome=${missing}/jre").unwrap_err();
        assert_eq!(err.key, "home");
        assert!(err.message.contains("${missing}"), "{}", err.message);
    }

    #[test]
    fn circular_reference_is_reported() {
        let err = parse_entries("a=${b}\nb=${a}").unwrap_err();
        assert_eq!(err.key, "a");
        assert_eq!(err.message, "circular reference: a -> b -> a");
    }

    #[test]
    fn self_reference_is_circular() {
        let err = parse_entries("a=x${a}").unwrap_err();
        assert_eq!(err.message, "circular reference: a -> a");
    }
}
