use std::collections::HashMap;

use lazy_static::lazy_static;
use thiserror::Error;

use super::flags::ModifierSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Super,
    Synchronized,
    Volatile,
    Bridge,
    Transient,
    Varargs,
    Native,
    Interface,
    Abstract,
    Strict,
    Synthetic,
    Annotation,
    Enum,
    Mandated,
}
impl Keyword {
    pub fn spelling(self) -> &'static str {
        use Keyword::*;
        match self {
            Public => "public",
            Private => "private",
            Protected => "protected",
            Static => "static",
            Final => "final",
            Super => "super",
            Synchronized => "synchronized",
            Volatile => "volatile",
            Bridge => "bridge",
            Transient => "transient",
            Varargs => "varargs",
            Native => "native",
            Interface => "interface",
            Abstract => "abstract",
            Strict => "strict",
            Synthetic => "synthetic",
            Annotation => "annotation",
            Enum => "enum",
            Mandated => "mandated",
        }
    }
}

pub static SYNTHETIC_PSEUDO: &str = "Synthetic(Pseudo)";
pub static DEPRECATED_PSEUDO: &str = "Deprecated(Pseudo)";

const FLAG_PAIRS: [(&str, u32); 20] = [
    ("abstract", 0x0400),
    ("annotation", 0x2000),
    ("bridge", 0x0040),
    ("enum", 0x4000),
    ("final", 0x0010),
    ("interface", 0x0200),
    ("mandated", 0x8000),
    ("native", 0x0100),
    ("private", 0x0002),
    ("protected", 0x0004),
    ("public", 0x0001),
    ("static", 0x0008),
    ("strict", 0x0800),
    ("strictfp", 0x0800),
    ("super", 0x0020),
    ("synchronized", 0x0020),
    ("synthetic", 0x1000),
    ("transient", 0x0080),
    ("varargs", 0x0080),
    ("volatile", 0x0040),
];

lazy_static! {
    static ref FLAG_MAP: HashMap<&'static str, ModifierSet> =
        FLAG_PAIRS.iter().map(|&(s, v)| (s, ModifierSet::new(v))).collect();
}

/// Looks up the bit for a flag keyword.
pub fn parse_flag(s: &str) -> Option<ModifierSet> {
    FLAG_MAP.get(s).copied()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagParseError {
    #[error("Unknown flag keyword '{0}'")]
    UnknownKeyword(String),
    #[error("Invalid flag value '{0}'")]
    BadNumber(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown name '{0}'")]
pub struct UnknownName(pub String);

fn parse_word(s: &str) -> Result<ModifierSet, FlagParseError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
            .map(ModifierSet::new)
            .map_err(|_| FlagParseError::BadNumber(s.to_owned()))
    } else if s.starts_with(|c: char| c.is_ascii_digit()) {
        s.parse()
            .map(ModifierSet::new)
            .map_err(|_| FlagParseError::BadNumber(s.to_owned()))
    } else {
        parse_flag(s).ok_or_else(|| FlagParseError::UnknownKeyword(s.to_owned()))
    }
}

/// Accumulate a flag set from keywords and raw numbers
pub struct FlagList {
    flags: ModifierSet,
}
impl FlagList {
    pub fn new() -> Self {
        Self {
            flags: ModifierSet::empty(),
        }
    }

    pub fn push(&mut self, word: &str) -> Result<(), FlagParseError> {
        self.flags |= parse_word(word)?;
        Ok(())
    }

    pub fn flush(self) -> ModifierSet {
        self.flags
    }
}

pub fn parse_flags<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<ModifierSet, FlagParseError> {
    let mut flags = FlagList::new();
    for word in words {
        flags.push(word)?;
    }
    Ok(flags.flush())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        assert!(FLAG_PAIRS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("public"), Some(ModifierSet::PUBLIC));
        assert_eq!(parse_flag("strictfp"), Some(ModifierSet::STRICT));
        assert_eq!(parse_flag("synchronized"), Some(ModifierSet::SUPER));
        assert_eq!(parse_flag("module"), None);
        assert_eq!(parse_flag("Public"), None);
    }

    #[test]
    fn test_spellings_parse_back() {
        use Keyword::*;
        for kw in [Public, Static, Final, Volatile, Bridge, Native, Interface, Abstract, Enum, Mandated] {
            assert!(parse_flag(kw.spelling()).is_some(), "{:?}", kw);
        }
    }

    #[test]
    fn test_parse_flags() {
        let m = parse_flags(["public", "static", "0x10"]).unwrap();
        assert_eq!(m, ModifierSet::PUBLIC | ModifierSet::STATIC | ModifierSet::FINAL);

        let m = parse_flags(["0x10000", "9"]).unwrap();
        assert_eq!(m, ModifierSet::SYNTHETIC_ATTRIBUTE | ModifierSet::PUBLIC | ModifierSet::STATIC);

        assert_eq!(parse_flags(Vec::<&str>::new()).unwrap(), ModifierSet::empty());
        assert_eq!(
            parse_flags(["public", "bogus"]),
            Err(FlagParseError::UnknownKeyword("bogus".to_owned()))
        );
        assert_eq!(parse_flags(["0xzz"]), Err(FlagParseError::BadNumber("0xzz".to_owned())));
        assert_eq!(parse_flags(["12a"]), Err(FlagParseError::BadNumber("12a".to_owned())));
    }
}
