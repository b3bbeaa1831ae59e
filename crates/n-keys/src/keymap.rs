// SPDX-License-Identifier: MIT
//
// Static keymap tables.
//
// The engine speaks a fixed vocabulary of lower-case base tokens
// (`return`, `left_bracket`, `page_up`, ...). These tables translate what
// the host reports into that vocabulary. They are plain `match`
// expressions: compiled into jump tables, immutable, and free of any
// runtime initialization.
//
// Token spellings are part of the engine contract and are kept exactly as
// the engine expects them, including `amersand`.

/// Look up a key by the literal value the host reported.
///
/// Covers control characters that arrive as raw bytes (backspace, tab,
/// carriage return, escape), named keys (`Enter`, arrows), space, and every
/// printable ASCII punctuation character.
#[must_use]
pub fn named(value: &str) -> Option<&'static str> {
    let token = match value {
        "\x08" => "backspace",
        "\x09" => "tab",
        "\x0d" | "Enter" => "return",
        "\x1b" => "escape",
        " " => "space",
        "!" => "exclamation_mark",
        "\"" => "double_quote",
        "#" => "hash",
        "$" => "dollar",
        "%" => "percent",
        "&" => "amersand",
        "'" => "quote",
        "(" => "left_parenthesis",
        ")" => "right_parenthesis",
        "_" => "underscore",
        "`" => "backquote",
        "*" => "star",
        "^" => "caret",
        "+" => "plus",
        "," => "comma",
        "-" => "minus",
        "." => "period",
        "\\" => "antislash",
        "/" => "slash",
        ":" => "colon",
        ";" => "semicolon",
        "<" => "left_chevron",
        "=" => "equal",
        ">" => "right_chevron",
        "?" => "question_mark",
        "{" => "left_brace",
        "|" => "pipe",
        "}" => "right_brace",
        "[" => "left_bracket",
        "]" => "right_bracket",
        "~" => "tilde",
        "ArrowRight" => "right",
        "ArrowLeft" => "left",
        "ArrowUp" => "up",
        "ArrowDown" => "down",
        _ => return None,
    };
    Some(token)
}

/// Look up a non-character key by its numeric key code.
///
/// These are the keys a host reports only through the legacy `keyCode`
/// (navigation and editing keys). Arrow codes duplicate the named arrows so
/// hosts that leave the value empty still resolve.
#[must_use]
pub const fn by_code(code: u32) -> Option<&'static str> {
    let token = match code {
        33 => "page_up",
        34 => "page_down",
        35 => "end",
        36 => "home",
        37 => "left",
        38 => "up",
        39 => "right",
        40 => "down",
        45 => "insert",
        46 => "delete",
        _ => return None,
    };
    Some(token)
}

/// Key code of F1. F1 through F12 are contiguous.
pub const F1_CODE: u32 = 112;

/// Number of function keys mapped by code.
pub const FUNCTION_KEYS: u32 = 12;

/// Map a key code in the function-key range to `f1`..`f12`.
#[must_use]
pub fn function_key(code: u32) -> Option<String> {
    (F1_CODE..F1_CODE + FUNCTION_KEYS)
        .contains(&code)
        .then(|| format!("f{}", code - F1_CODE + 1))
}

/// Tokens for which a held Shift is already expressed by the token itself.
///
/// On a typical layout `*` is Shift+8, so a host reporting `*` with Shift
/// held must still produce `star`, not `shift_star`. `quote` and `space`
/// are deliberately absent: Shift on those keys is meaningful to the engine.
#[must_use]
pub fn shift_is_implied(token: &str) -> bool {
    matches!(
        token,
        "exclamation_mark"
            | "double_quote"
            | "hash"
            | "dollar"
            | "percent"
            | "amersand"
            | "left_parenthesis"
            | "right_parenthesis"
            | "underscore"
            | "backquote"
            | "star"
            | "plus"
            | "comma"
            | "minus"
            | "period"
            | "slash"
            | "caret"
            | "colon"
            | "semicolon"
            | "left_chevron"
            | "equal"
            | "right_chevron"
            | "question_mark"
            | "pipe"
            | "tilde"
            | "antislash"
            | "left_brace"
            | "left_bracket"
            | "right_brace"
            | "right_bracket"
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_carriage_return_agree() {
        assert_eq!(named("Enter"), Some("return"));
        assert_eq!(named("\r"), Some("return"));
    }

    #[test]
    fn unknown_value_is_not_named() {
        assert_eq!(named("a"), None);
        assert_eq!(named("F5"), None);
        assert_eq!(named(""), None);
    }

    #[test]
    fn code_table_covers_navigation() {
        assert_eq!(by_code(33), Some("page_up"));
        assert_eq!(by_code(34), Some("page_down"));
        assert_eq!(by_code(35), Some("end"));
        assert_eq!(by_code(36), Some("home"));
        assert_eq!(by_code(45), Some("insert"));
        assert_eq!(by_code(46), Some("delete"));
        assert_eq!(by_code(47), None);
    }

    #[test]
    fn function_key_range_is_inclusive_of_f12() {
        assert_eq!(function_key(111), None);
        assert_eq!(function_key(112).as_deref(), Some("f1"));
        assert_eq!(function_key(123).as_deref(), Some("f12"));
        assert_eq!(function_key(124), None);
    }

    #[test]
    fn every_punctuation_token_except_quote_implies_shift() {
        for byte in b'!'..=b'~' {
            let ch = char::from(byte);
            // `@` has no token; it passes through verbatim.
            if ch.is_ascii_alphanumeric() || ch == '@' {
                continue;
            }
            let token = named(&ch.to_string()).unwrap();
            assert_eq!(shift_is_implied(token), token != "quote", "{token}");
        }
    }

    #[test]
    fn named_keys_do_not_imply_shift() {
        for token in ["space", "return", "tab", "escape", "left", "page_up"] {
            assert!(!shift_is_implied(token), "{token}");
        }
    }
}
