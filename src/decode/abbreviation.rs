//! Abbreviation decoder: model cell text → structured tire fields
//!
//! A model cell looks like `215/60 R16С Nokian Hakka 95H XL шип FR`. The
//! leading tokens are strictly ordered (size, rim, brand) and are read left to
//! right. Everything after them is a tail of optional, order-independent
//! suffixes which are stripped right to left.

use crate::error::{ImportError, ImportResult};
use crate::types::Abbreviation;
use regex::Regex;

const SEPARATOR: char = ' ';

/// Diameter suffix marking a reinforced (C-type) tire. Cyrillic Es in the
/// price lists, Latin C when typed on an English layout.
const REINFORCED_MARKERS: [char; 2] = ['С', 'C'];

/// Code stored in `strengthened` for both reinforced and extra-load tires
pub const EXTRA_LOAD_CODE: &str = "XL";

/// Rim/flange guard code stored in `additional`
pub const FLANGE_GUARD_CODE: &str = "FR";

/// Studded-tire marker word
pub const STUDDED_MARKER: &str = "шип";

/// Positional tokens at the head of the cell, in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingToken {
    /// `215/60` → width, height
    Size,
    /// `R16` / `R16С` → diameter (+ reinforcement)
    Rim,
    /// Stored verbatim
    Brand,
}

impl LeadingToken {
    pub const ORDER: [LeadingToken; 3] =
        [LeadingToken::Size, LeadingToken::Rim, LeadingToken::Brand];

    fn apply(self, token: &str, out: &mut Abbreviation) {
        match self {
            LeadingToken::Size => {
                if let Some((width, height)) = token.split_once('/') {
                    out.width = width.to_string();
                    out.height = height.to_string();
                }
            }
            LeadingToken::Rim => {
                if let Some(rim) = token.strip_prefix('R') {
                    let diameter = match rim.strip_suffix(REINFORCED_MARKERS) {
                        Some(digits) => {
                            out.strengthened = EXTRA_LOAD_CODE.to_string();
                            digits
                        }
                        None => rim,
                    };
                    out.diameter = diameter.to_string();
                }
            }
            LeadingToken::Brand => out.brand_name = token.to_string(),
        }
    }
}

/// Suffix rules for the tail, applied in this order. Each rule sees the tail
/// left over by the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailRule {
    /// ` FR`
    FlangeGuard,
    /// ` шип`
    Studded,
    /// ` XL`
    ExtraLoad,
    /// ` 95H`
    LoadSpeed,
}

impl TailRule {
    pub const ORDER: [TailRule; 4] = [
        TailRule::FlangeGuard,
        TailRule::Studded,
        TailRule::ExtraLoad,
        TailRule::LoadSpeed,
    ];
}

/// Decoder for model abbreviation cells
pub struct AbbreviationDecoder {
    load_speed: Regex,
}

impl AbbreviationDecoder {
    pub fn new() -> ImportResult<Self> {
        // <anything> <2 digits><uppercase letter> at the very end
        let load_speed = Regex::new(r"^(.*) ([0-9]{2})([A-Z])$")
            .map_err(|e| ImportError::Validation(format!("Regex error: {}", e)))?;

        Ok(Self { load_speed })
    }

    /// Decode a model cell. Never fails: parts that don't match keep their
    /// empty default.
    pub fn decode(&self, text: &str) -> Abbreviation {
        let text = text.trim();
        let mut out = Abbreviation::default();

        let tail = Self::read_leading(text, &mut out);
        let rest = TailRule::ORDER
            .into_iter()
            .fold(tail, |tail, rule| self.strip(rule, tail, &mut out));

        let rest = rest.strip_prefix(SEPARATOR).unwrap_or(rest);
        if !rest.is_empty() {
            out.model_name = rest.to_string();
        }

        out
    }

    /// Consume the positional tokens and return the tail, leading separator
    /// included. A token only counts when a separator follows it, so the last
    /// word of the cell is always tail: `205/55 R16 8PR` leaves `8PR` in
    /// `model_name` while `205/55 R16 8PR FR` puts it in `brand_name`, and a
    /// bare `215/60 R16` leaves the diameter empty with `R16` as model name.
    fn read_leading<'a>(text: &'a str, out: &mut Abbreviation) -> &'a str {
        let mut tail_start = 0;
        let mut cursor = 0;

        for slot in LeadingToken::ORDER {
            let Some((token, _)) = text[cursor..].split_once(SEPARATOR) else {
                break;
            };
            slot.apply(token, out);
            tail_start = cursor + token.len();
            cursor = tail_start + SEPARATOR.len_utf8();
        }

        &text[tail_start..]
    }

    fn strip<'a>(&self, rule: TailRule, tail: &'a str, out: &mut Abbreviation) -> &'a str {
        match rule {
            TailRule::FlangeGuard => match strip_word(tail, FLANGE_GUARD_CODE) {
                Some(rest) => {
                    out.additional = FLANGE_GUARD_CODE.to_string();
                    rest
                }
                None => tail,
            },
            TailRule::Studded => match strip_word(tail, STUDDED_MARKER) {
                Some(rest) => {
                    out.is_studded = true;
                    rest
                }
                None => tail,
            },
            TailRule::ExtraLoad => match strip_word(tail, EXTRA_LOAD_CODE) {
                Some(rest) => {
                    out.strengthened = EXTRA_LOAD_CODE.to_string();
                    rest
                }
                None => tail,
            },
            TailRule::LoadSpeed => match self.load_speed.captures(tail) {
                Some(caps) => {
                    out.weight_index = caps[2].to_string();
                    out.speed_index = caps[3].to_string();
                    caps.get(1).map_or("", |m| m.as_str())
                }
                None => tail,
            },
        }
    }
}

/// Strip `" " + word` from the end of `tail`
fn strip_word<'a>(tail: &'a str, word: &str) -> Option<&'a str> {
    tail.strip_suffix(word)?.strip_suffix(SEPARATOR)
}
