// SPDX-License-Identifier: MIT
//
// Key encoder.
//
// Turns one physical key press, as reported by the host, into the single
// canonical action token the editing engine understands:
//
//   [Ctrl_][alt_][shift_]<base>     with the first character capitalized
//
// Hosts are inconsistent about what they report. A plain `a` arrives as
// the value "a"; Ctrl+A may arrive as "a", "A", or the control byte 0x01;
// PageUp arrives with an empty or descriptive value and only a numeric key
// code is reliable. The resolution order below picks the most specific
// interpretation first and falls back to the raw value, so every press
// maps to *some* token.
//
// Resolution (first match wins):
//
//   1. Literal table: control bytes, named keys, space, punctuation
//   2. ASCII digit            → digit_<d>
//   3. ASCII upper-case letter → letter_<L>   (raw char under Ctrl/Alt)
//   4. ASCII lower-case letter → letter_<l>   (raw char under Ctrl/Alt)
//   5. Key-code table (page up/down, home/end, insert/delete, arrows)
//   6. Key codes 112..=123    → f1..f12
//   7. Control byte < 0x20    → the letter it was chorded from
//   8. The raw value verbatim
//
// Letters consume Shift: the reported case already carries it.

use std::fmt;

use bitflags::bitflags;

use crate::keymap;

// ─── Modifiers ───────────────────────────────────────────────────────────────

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

// ─── RawKeyInput ─────────────────────────────────────────────────────────────

/// One physical key press, exactly as the host reported it.
///
/// `value` is the platform's character or key name (`"a"`, `"Enter"`,
/// `"ArrowLeft"`, `"F5"`, or an empty string). `code` is the legacy numeric
/// key code, used when the value alone is not enough.
///
/// # Examples
///
/// ```
/// use n_keys::{Modifiers, RawKeyInput};
///
/// let press = RawKeyInput::new("a", 65).with_modifiers(Modifiers::CTRL);
/// assert!(press.modifiers.contains(Modifiers::CTRL));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawKeyInput {
    /// Reported character or key name.
    pub value: String,
    /// Reported numeric key code.
    pub code: u32,
    /// Modifier keys held at the time of the press.
    pub modifiers: Modifiers,
}

impl RawKeyInput {
    /// A key press with no modifiers held.
    #[must_use]
    pub fn new(value: impl Into<String>, code: u32) -> Self {
        Self {
            value: value.into(),
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Build from the host's key-down record field by field.
    #[must_use]
    pub fn from_dom(key: &str, key_code: u32, ctrl: bool, alt: bool, shift: bool) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::CTRL, ctrl);
        modifiers.set(Modifiers::ALT, alt);
        modifiers.set(Modifiers::SHIFT, shift);
        Self {
            value: key.to_owned(),
            code: key_code,
            modifiers,
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[inline]
    const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    #[inline]
    const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    #[inline]
    const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

// ─── KeyAction ───────────────────────────────────────────────────────────────

/// A canonical action token, e.g. `Letter_a`, `Ctrl_shift_left`, `Return`.
///
/// The empty action means "no action" and must not be sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyAction(String);

impl KeyAction {
    /// The empty "no action" token.
    #[must_use]
    pub const fn none() -> Self {
        Self(String::new())
    }

    /// The token text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the "no action" token.
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the token string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyAction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for KeyAction {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for KeyAction {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Base token plus whether Shift still needs to be expressed.
struct Base {
    token: String,
    shift: bool,
}

/// Encode a key press as a canonical action.
///
/// Total and pure: identical input always yields the identical action, and
/// nothing fails. Input with no recognizable value and no known key code
/// yields the empty action.
///
/// # Examples
///
/// ```
/// use n_keys::{encode, Modifiers, RawKeyInput};
///
/// assert_eq!(encode(&RawKeyInput::new("a", 65)), "Letter_a");
/// assert_eq!(
///     encode(&RawKeyInput::new("a", 65).with_modifiers(Modifiers::CTRL)),
///     "Ctrl_a",
/// );
/// assert_eq!(encode(&RawKeyInput::new("F5", 116)), "F5");
/// ```
#[must_use]
pub fn encode(input: &RawKeyInput) -> KeyAction {
    let base = resolve_base(input);
    if base.token.is_empty() {
        return KeyAction::none();
    }

    let mut token = base.token;
    if base.shift && !keymap::shift_is_implied(&token) {
        token.insert_str(0, "shift_");
    }
    if input.alt() {
        token.insert_str(0, "alt_");
    }
    if input.ctrl() {
        token.insert_str(0, "ctrl_");
    }

    KeyAction(capitalize_first(&token))
}

fn resolve_base(input: &RawKeyInput) -> Base {
    let value = input.value.as_str();
    let shift = input.shift();
    let chorded = input.ctrl() || input.alt();

    if let Some(token) = keymap::named(value) {
        return Base {
            token: token.to_owned(),
            shift,
        };
    }

    if let Some(ch) = single_char(value) {
        if ch.is_ascii_digit() {
            return Base {
                token: format!("digit_{ch}"),
                shift,
            };
        }
        if ch.is_ascii_alphabetic() {
            // Under Ctrl/Alt the engine wants the bare character.
            let token = if chorded {
                ch.to_string()
            } else {
                format!("letter_{ch}")
            };
            return Base {
                token,
                shift: false,
            };
        }
    }

    if let Some(token) = keymap::by_code(input.code) {
        return Base {
            token: token.to_owned(),
            shift,
        };
    }

    if let Some(token) = keymap::function_key(input.code) {
        return Base { token, shift };
    }

    if let Some(letter) = value.chars().next().and_then(unchord) {
        return Base {
            token: letter.to_string(),
            shift,
        };
    }

    Base {
        token: value.to_owned(),
        shift,
    }
}

/// The only character of `value`, if it has exactly one.
fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

/// Recover the character a control byte was chorded from (0x01 → `a`).
fn unchord(ch: char) -> Option<char> {
    let code = u32::from(ch);
    if code < 0x20 {
        char::from_u32(code + 96)
    } else {
        None
    }
}

/// Upper-case the first character, leave the rest untouched.
fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(value: &str) -> KeyAction {
        encode(&RawKeyInput::new(value, 0))
    }

    fn with(value: &str, code: u32, modifiers: Modifiers) -> KeyAction {
        encode(&RawKeyInput::new(value, code).with_modifiers(modifiers))
    }

    // ── Literal table ───────────────────────────────────────────────────

    #[rstest]
    #[case("!", "Exclamation_mark")]
    #[case("\"", "Double_quote")]
    #[case("#", "Hash")]
    #[case("$", "Dollar")]
    #[case("%", "Percent")]
    #[case("&", "Amersand")]
    #[case("'", "Quote")]
    #[case("(", "Left_parenthesis")]
    #[case(")", "Right_parenthesis")]
    #[case("_", "Underscore")]
    #[case("`", "Backquote")]
    #[case("*", "Star")]
    #[case("^", "Caret")]
    #[case("+", "Plus")]
    #[case(",", "Comma")]
    #[case("-", "Minus")]
    #[case(".", "Period")]
    #[case("\\", "Antislash")]
    #[case("/", "Slash")]
    #[case(":", "Colon")]
    #[case(";", "Semicolon")]
    #[case("<", "Left_chevron")]
    #[case("=", "Equal")]
    #[case(">", "Right_chevron")]
    #[case("?", "Question_mark")]
    #[case("{", "Left_brace")]
    #[case("|", "Pipe")]
    #[case("}", "Right_brace")]
    #[case("[", "Left_bracket")]
    #[case("]", "Right_bracket")]
    #[case("~", "Tilde")]
    fn punctuation_maps_to_documented_token(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(plain(value), expected);
    }

    #[rstest]
    #[case("\x08", "Backspace")]
    #[case("\t", "Tab")]
    #[case("\r", "Return")]
    #[case("Enter", "Return")]
    #[case("\x1b", "Escape")]
    #[case(" ", "Space")]
    #[case("ArrowLeft", "Left")]
    #[case("ArrowRight", "Right")]
    #[case("ArrowUp", "Up")]
    #[case("ArrowDown", "Down")]
    fn named_keys(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(plain(value), expected);
    }

    #[test]
    fn shifted_digit_reports_symbol_directly() {
        // US layout: Shift+1 arrives as "!" and shift is already implied.
        assert_eq!(with("!", 49, Modifiers::SHIFT), "Exclamation_mark");
    }

    #[test]
    fn shift_on_quote_is_kept() {
        assert_eq!(with("'", 222, Modifiers::SHIFT), "Shift_quote");
    }

    #[test]
    fn shift_on_named_key_is_prefixed() {
        assert_eq!(with("Tab", 9, Modifiers::SHIFT), "Shift_Tab");
        assert_eq!(with("\t", 9, Modifiers::SHIFT), "Shift_tab");
    }

    // ── Digits ──────────────────────────────────────────────────────────

    #[test]
    fn digits() {
        for d in '0'..='9' {
            assert_eq!(plain(&d.to_string()), format!("Digit_{d}").as_str());
        }
    }

    #[test]
    fn digit_keeps_shift() {
        assert_eq!(with("5", 53, Modifiers::SHIFT), "Shift_digit_5");
    }

    #[test]
    fn ctrl_digit() {
        assert_eq!(with("1", 49, Modifiers::CTRL), "Ctrl_digit_1");
    }

    // ── Letters ─────────────────────────────────────────────────────────

    #[test]
    fn plain_letter() {
        assert_eq!(plain("a"), "Letter_a");
        assert_eq!(plain("Z"), "Letter_Z");
    }

    #[test]
    fn shift_is_consumed_by_letter_case() {
        assert_eq!(with("a", 65, Modifiers::SHIFT), "Letter_a");
        assert_eq!(with("A", 65, Modifiers::SHIFT), "Letter_A");
    }

    #[test]
    fn ctrl_letter_keeps_raw_char() {
        assert_eq!(with("a", 65, Modifiers::CTRL), "Ctrl_a");
        assert_eq!(with("A", 65, Modifiers::CTRL | Modifiers::SHIFT), "Ctrl_A");
    }

    #[test]
    fn alt_letter_keeps_raw_char() {
        assert_eq!(with("x", 88, Modifiers::ALT), "Alt_x");
    }

    #[test]
    fn ctrl_alt_letter_orders_prefixes() {
        assert_eq!(with("q", 81, Modifiers::CTRL | Modifiers::ALT), "Ctrl_alt_q");
    }

    // ── Key codes ───────────────────────────────────────────────────────

    #[test]
    fn navigation_by_code() {
        assert_eq!(encode(&RawKeyInput::new("PageUp", 33)), "Page_up");
        assert_eq!(encode(&RawKeyInput::new("PageDown", 34)), "Page_down");
        assert_eq!(encode(&RawKeyInput::new("End", 35)), "End");
        assert_eq!(encode(&RawKeyInput::new("Home", 36)), "Home");
        assert_eq!(encode(&RawKeyInput::new("Insert", 45)), "Insert");
        assert_eq!(encode(&RawKeyInput::new("Delete", 46)), "Delete");
    }

    #[test]
    fn arrow_by_code_when_value_missing() {
        assert_eq!(encode(&RawKeyInput::new("", 37)), "Left");
    }

    #[test]
    fn ctrl_shift_arrow() {
        assert_eq!(
            with("ArrowLeft", 37, Modifiers::CTRL | Modifiers::SHIFT),
            "Ctrl_shift_left"
        );
    }

    #[test]
    fn all_modifiers_compose_in_fixed_order() {
        assert_eq!(
            with("Home", 36, Modifiers::all()),
            "Ctrl_alt_shift_home"
        );
    }

    #[test]
    fn function_keys() {
        assert_eq!(encode(&RawKeyInput::new("F1", 112)), "F1");
        assert_eq!(encode(&RawKeyInput::new("F5", 116)), "F5");
        assert_eq!(encode(&RawKeyInput::new("F12", 123)), "F12");
        assert_eq!(with("F2", 113, Modifiers::SHIFT), "Shift_f2");
    }

    // ── Control bytes ───────────────────────────────────────────────────

    #[test]
    fn control_byte_recovers_letter() {
        assert_eq!(with("\x01", 65, Modifiers::CTRL), "Ctrl_a");
        assert_eq!(with("\x1a", 90, Modifiers::CTRL), "Ctrl_z");
    }

    #[test]
    fn named_control_bytes_win_over_recovery() {
        // 0x08 is backspace, not Ctrl+H.
        assert_eq!(with("\x08", 8, Modifiers::CTRL), "Ctrl_backspace");
    }

    // ── Fallback ────────────────────────────────────────────────────────

    #[test]
    fn unknown_value_passes_through() {
        assert_eq!(plain("@"), "@");
        assert_eq!(plain("Shift"), "Shift");
        assert_eq!(plain("é"), "É");
    }

    #[test]
    fn fallback_composes_modifiers() {
        assert_eq!(with("CapsLock", 20, Modifiers::ALT), "Alt_CapsLock");
    }

    #[test]
    fn empty_input_is_no_action() {
        let action = encode(&RawKeyInput::new("", 0));
        assert!(action.is_none());
        assert_eq!(action.as_str(), "");
    }

    #[test]
    fn modifiers_alone_do_not_make_an_action() {
        let action = with("", 0, Modifiers::all());
        assert!(action.is_none());
    }

    // ── Purity ──────────────────────────────────────────────────────────

    #[test]
    fn repeated_input_encodes_identically() {
        let input = RawKeyInput::from_dom("ArrowUp", 38, true, false, true);
        let first = encode(&input);
        for _ in 0..3 {
            assert_eq!(encode(&input), first);
        }
        assert_eq!(first, "Ctrl_shift_up");
    }

    // ── Constructors ────────────────────────────────────────────────────

    #[test]
    fn from_dom_sets_flags() {
        let input = RawKeyInput::from_dom("a", 65, true, true, false);
        assert_eq!(input.modifiers, Modifiers::CTRL | Modifiers::ALT);
        assert_eq!(input.value, "a");
        assert_eq!(input.code, 65);
    }

    #[test]
    fn capitalize_handles_multichar_uppercase() {
        assert_eq!(capitalize_first("ßx"), "SSx");
        assert_eq!(capitalize_first(""), "");
    }
}
