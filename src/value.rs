//! Typed values and their text coercion rules.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0x([0-9A-Fa-f]+)$").unwrap());

/// Leading numeral with a non-zero value, `atoi` style.
static TRUTHY_NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?0*[1-9]").unwrap());

/// Declared type of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeTag {
    #[default]
    String,
    Integer,
    HexInteger,
    UnsignedInteger,
    Boolean,
}

impl TypeTag {
    pub const ALL: [TypeTag; 5] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::HexInteger,
        TypeTag::UnsignedInteger,
        TypeTag::Boolean,
    ];

    /// Look up a `type = ...` keyword. Unknown keywords yield `None`.
    pub fn from_keyword(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.keyword() == token)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::HexInteger => "hex_integer",
            TypeTag::UnsignedInteger => "unsigned_integer",
            TypeTag::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Map a type keyword to its tag, falling back to `string`.
pub fn parse_type(token: &str) -> TypeTag {
    TypeTag::from_keyword(token).unwrap_or_default()
}

/// A concrete value of one of the five supported types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer(i64),
    HexInteger(u64),
    UnsignedInteger(u64),
    Boolean(bool),
}

impl Value {
    /// Zero value of `tag`, used before anything has been resolved.
    pub fn empty(tag: TypeTag) -> Self {
        match tag {
            TypeTag::String => Value::String(String::new()),
            TypeTag::Integer => Value::Integer(0),
            TypeTag::HexInteger => Value::HexInteger(0),
            TypeTag::UnsignedInteger => Value::UnsignedInteger(0),
            TypeTag::Boolean => Value::Boolean(false),
        }
    }

    pub fn tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Integer(_) => TypeTag::Integer,
            Value::HexInteger(_) => TypeTag::HexInteger,
            Value::UnsignedInteger(_) => TypeTag::UnsignedInteger,
            Value::Boolean(_) => TypeTag::Boolean,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::empty(TypeTag::default())
    }
}

/// Renders the value the way it appears in generated artifacts.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")
            }
            Value::Integer(n) => write!(f, "{n}"),
            Value::HexInteger(n) => write!(f, "0x{n:X}"),
            Value::UnsignedInteger(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{}", u8::from(*b)),
        }
    }
}

/// Text that does not fit the declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    pub text: String,
    pub expected: TypeTag,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to parse: {} (expected {})",
            self.text, self.expected
        )
    }
}

impl std::error::Error for ValueError {}

/// Coerce `text` into a fresh value of type `tag`.
pub fn parse_value(text: &str, tag: TypeTag) -> Result<Value, ValueError> {
    let fail = || ValueError {
        text: text.to_string(),
        expected: tag,
    };

    match tag {
        TypeTag::String => Ok(Value::String(text.to_string())),
        TypeTag::Integer => text.parse().map(Value::Integer).map_err(|_| fail()),
        TypeTag::HexInteger => {
            let digits = HEX_RE
                .captures(text)
                .and_then(|caps| caps.get(1))
                .ok_or_else(fail)?;
            u64::from_str_radix(digits.as_str(), 16)
                .map(Value::HexInteger)
                .map_err(|_| fail())
        }
        TypeTag::UnsignedInteger => text
            .parse()
            .map(Value::UnsignedInteger)
            .map_err(|_| fail()),
        TypeTag::Boolean => Ok(Value::Boolean(parse_boolean(text))),
    }
}

/// `true` for a non-zero leading numeral or the exact literal `true`.
pub fn parse_boolean(text: &str) -> bool {
    TRUTHY_NUMERAL_RE.is_match(text) || text == "true"
}
