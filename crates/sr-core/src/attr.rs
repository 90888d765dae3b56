//! Loosely typed edge attributes and the shared numeric coercion rule.
//!
//! The offline pipeline that produces the network artifact does not
//! guarantee clean types: `maxspeed` may be `"30"`, `30`, `["30", "40"]` or
//! `"national"`, and `normalized_risk` occasionally arrives as text.  Every
//! consumer goes through [`coerce_f64`] so the rule lives in one place:
//!
//! | Input                 | Result                                   |
//! |-----------------------|------------------------------------------|
//! | `Number(x)`, finite   | `x`                                      |
//! | `Number(NaN / ±inf)`  | `default`                                |
//! | `Text(s)`             | `s.trim().parse()` if finite, else `default` |
//! | `List([first, ..])`   | `coerce_f64(first)`                      |
//! | `List([])`, `Bool(_)` | `default`                                |
//! | absent                | `default`                                |

use std::fmt;

/// A raw attribute value as delivered by the network artifact.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    Number(f64),
    Bool(bool),
    Text(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Parse a raw text cell (e.g. from CSV) into the most specific variant.
    ///
    /// `"30"` becomes `Number(30.0)`; `"['30', '40']"` becomes a `List` of
    /// the element cells parsed the same way; anything else stays `Text`.
    pub fn parse_cell(raw: &str) -> AttrValue {
        let s = raw.trim();
        if let Ok(x) = s.parse::<f64>() {
            return AttrValue::Number(x);
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let items = inner
                .split(',')
                .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"'))
                .filter(|item| !item.is_empty())
                .map(AttrValue::parse_cell)
                .collect();
            return AttrValue::List(items);
        }
        match s {
            "True" | "true" => AttrValue::Bool(true),
            "False" | "false" => AttrValue::Bool(false),
            _ => AttrValue::Text(s.to_owned()),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Number(x)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_owned())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(x) => write!(f, "{x}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Text(s) => write!(f, "{s:?}"),
            AttrValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Coerce an optional attribute to `f64`, substituting `default` for
/// anything that is not a usable number.  Never fails.
pub fn coerce_f64(value: Option<&AttrValue>, default: f64) -> f64 {
    let Some(value) = value else {
        return default;
    };
    match value {
        AttrValue::Number(x) if x.is_finite() => *x,
        AttrValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(x) if x.is_finite() => x,
            _ => {
                log::trace!("attribute {value} is not numeric, using {default}");
                default
            }
        },
        AttrValue::List(items) => coerce_f64(items.first(), default),
        _ => {
            log::trace!("attribute {value} is not numeric, using {default}");
            default
        }
    }
}
