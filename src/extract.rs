//! Heuristic lexical extraction of method names and `#define` constants
//! from C/C++ header text.
//!
//! These are best-effort line scans, not a C parser. The method pattern can
//! both over-match (stray tokens that happen to precede a `(`) and
//! under-match (declarations at column 0, unusual formatting). The
//! space/colon filter discards the worst of the over-matches.

use regex::Regex;
use std::sync::LazyLock;

/// Method-like declaration: whitespace, a return-type word, spaces, then a
/// run of characters excluding `(` and `-` captured up to the opening paren.
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\w+ +([^(-]+)\(").unwrap());

/// `#define NAME <value>` — trailing whitespace after the name is required,
/// so bare `#define NAME` lines contribute nothing.
static RE_DEFINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#define\s+([\w_]+)\s+").unwrap());

/// A captured token is kept only if it is a single bare identifier fragment:
/// no spaces (multi-word over-capture) and no colons (scope-qualified names).
fn accept(token: &str) -> bool {
    !token.contains(' ') && !token.contains(':')
}

/// Extract method names from header text, in scan order.
///
/// Every match on a line is considered independently; duplicates across
/// lines are kept as-is.
pub fn methods(input: &str) -> Vec<String> {
    scan(input, &RE_METHOD)
}

/// Extract `#define` constant names from header text, in scan order.
pub fn constants(input: &str) -> Vec<String> {
    scan(input, &RE_DEFINE)
}

fn scan(input: &str, re: &Regex) -> Vec<String> {
    let mut names = Vec::new();
    for line in input.lines() {
        for caps in re.captures_iter(line) {
            let token = &caps[1];
            if accept(token) {
                names.push(token.to_string());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_simple_prototype() {
        assert_eq!(
            methods("        void begin(uint8_t node, uint8_t network);"),
            vec!["begin"]
        );
    }

    #[test]
    fn method_with_return_value() {
        assert_eq!(
            methods("        uint8_t readVariableFIFO(void* buffer, uint8_t max_length);"),
            vec!["readVariableFIFO"]
        );
    }

    #[test]
    fn method_inline_body_call_also_matches() {
        // The heuristic also picks up calls inside inline bodies; the
        // original tool behaves the same way.
        let got = methods("        void setMode(uint8_t mode){this->writeRegister(RFM69_OPMODE, mode);};");
        assert!(got.contains(&"setMode".to_string()));
    }

    #[test]
    fn method_column_zero_is_skipped() {
        // Leading whitespace is part of the pattern; top-level declarations
        // starting at column 0 are not matched.
        assert_eq!(methods("void begin(uint8_t node);"), Vec::<String>::new());
    }

    #[test]
    fn method_multiword_capture_is_filtered() {
        // `uint8_t foo` style over-captures contain a space and are dropped.
        assert_eq!(methods(" static void* memcpy fast(void* d);"), Vec::<String>::new());
    }

    #[test]
    fn method_scope_qualified_is_filtered() {
        assert_eq!(
            methods("    void bareRFM69::setMode(uint8_t mode)"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn method_plain_code_line_yields_nothing() {
        assert_eq!(methods("        uint8_t cs_pin; // chip select pin."), Vec::<String>::new());
    }

    #[test]
    fn constant_simple_define() {
        assert_eq!(
            constants("#define RFM69_CTL_SENDACK  0x80"),
            vec!["RFM69_CTL_SENDACK"]
        );
    }

    #[test]
    fn constant_without_value_is_skipped() {
        // No trailing whitespace after the name — pattern requires it.
        assert_eq!(constants("#define BAREBONES"), Vec::<String>::new());
    }

    #[test]
    fn constant_non_define_lines_yield_nothing() {
        assert_eq!(constants("uint8_t readRegister(uint8_t reg);"), Vec::<String>::new());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(methods(""), Vec::<String>::new());
        assert_eq!(constants(""), Vec::<String>::new());
    }

    #[test]
    fn duplicates_are_preserved() {
        let input = "#define FOO 1\n#define FOO 2\n";
        assert_eq!(constants(input), vec!["FOO", "FOO"]);
    }

    #[test]
    fn scan_order_is_line_order() {
        let input = "        void begin(void);\n        void send(void* b);\n";
        assert_eq!(methods(input), vec!["begin", "send"]);
    }
}
