//! Dotenv file reading and writing.
//!
//! Environment state is kept in `KEY=value` files. Reading is lenient;
//! writing is deterministic (keys sorted, values quoted only when needed).

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

/// Reads and renders dotenv content.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
///
/// # Example
///
/// ```
/// use skyforge::config::EnvFileParser;
///
/// let vars = EnvFileParser::parse("SKYFORGE_LOCATION=eastus2\n# note\nNAME=\"my app\"\n");
/// assert_eq!(vars.get("SKYFORGE_LOCATION").map(String::as_str), Some("eastus2"));
/// assert_eq!(vars.get("NAME").map(String::as_str), Some("my app"));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse dotenv content. Lines without `=` are ignored.
    pub fn parse(content: &str) -> BTreeMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Self::unquote(value.trim())))
    }

    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Render variables as dotenv content, one per line in key order.
    pub fn render(vars: &BTreeMap<String, String>) -> String {
        vars.iter()
            .map(|(k, v)| format!("{}={}\n", k, Self::quote(v)))
            .collect()
    }

    fn quote(value: &str) -> String {
        let needs_quotes = value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\''));
        if needs_quotes {
            format!("\"{}\"", value)
        } else {
            value.to_string()
        }
    }

    /// Load a dotenv file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pairs() {
        let vars = EnvFileParser::parse("KEY1=value1\nKEY2=value2\n");
        assert_eq!(vars.get("KEY1"), Some(&"value1".to_string()));
        assert_eq!(vars.get("KEY2"), Some(&"value2".to_string()));
    }

    #[test]
    fn skips_comments_blank_lines_and_junk() {
        let content = r#"
# comment
KEY=value

not a pair
=orphan
"#;
        let vars = EnvFileParser::parse(content);
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn handles_quotes_and_equals() {
        let content = r#"
DOUBLE="double quoted"
SINGLE='single'
URL=https://example.com?a=b
LONE="
"#;
        let vars = EnvFileParser::parse(content);
        assert_eq!(vars["DOUBLE"], "double quoted");
        assert_eq!(vars["SINGLE"], "single");
        assert_eq!(vars["URL"], "https://example.com?a=b");
        assert_eq!(vars["LONE"], "\"");
    }

    #[test]
    fn render_sorts_and_quotes() {
        let mut vars = BTreeMap::new();
        vars.insert("ZED".to_string(), "last".to_string());
        vars.insert("ALPHA".to_string(), "has space".to_string());
        vars.insert("EMPTY".to_string(), String::new());

        assert_eq!(
            EnvFileParser::render(&vars),
            "ALPHA=\"has space\"\nEMPTY=\nZED=last\n"
        );
    }

    #[test]
    fn rendered_output_parses_back() {
        let mut vars = BTreeMap::new();
        vars.insert("A".to_string(), "x y".to_string());
        vars.insert("B".to_string(), "plain".to_string());
        assert_eq!(EnvFileParser::parse(&EnvFileParser::render(&vars)), vars);
    }

    #[test]
    fn load_optional_returns_empty_for_missing_file() {
        let vars = EnvFileParser::load_optional(Path::new("/nonexistent/path/.env")).unwrap();
        assert!(vars.is_empty());
    }
}
