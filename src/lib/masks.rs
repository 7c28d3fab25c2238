use std::fmt;
use std::str::FromStr;

use super::flags::ModifierSet as M;
use super::lexicon::UnknownName;

pub const ATTR: M = M::SYNTHETIC_ATTRIBUTE.with(M::DEPRECATED_ATTRIBUTE);
pub const ACCESS: M = M::PUBLIC.with(M::PRIVATE).with(M::PROTECTED);

pub const INTERFACE: M = M::PUBLIC.with(M::ABSTRACT).with(M::INTERFACE).with(ATTR);
pub const CLASS: M = M::PUBLIC
    .with(M::FINAL)
    .with(M::SUPER)
    .with(M::ABSTRACT)
    .with(M::SYNTHETIC)
    .with(M::ANNOTATION)
    .with(M::ENUM)
    .with(ATTR);
pub const FIELD: M = ACCESS
    .with(M::STATIC)
    .with(M::FINAL)
    .with(M::VOLATILE)
    .with(M::TRANSIENT)
    .with(M::SYNTHETIC)
    .with(M::ENUM)
    .with(ATTR);
// no pseudo attribute bits here
pub const INTERFACE_METHOD: M = M::ABSTRACT
    .with(M::PUBLIC)
    .with(M::VARARGS)
    .with(M::BRIDGE)
    .with(M::SYNTHETIC);
pub const ABSTRACT_METHOD: M = ACCESS.with(M::ABSTRACT).with(ATTR);
/// `<init>`
pub const INIT_METHOD: M = ACCESS.with(M::STRICT).with(M::VARARGS).with(M::SYNTHETIC).with(ATTR);
pub const METHOD: M = ACCESS
    .with(M::STATIC)
    .with(M::FINAL)
    .with(M::SYNCHRONIZED)
    .with(M::BRIDGE)
    .with(M::VARARGS)
    .with(M::NATIVE)
    .with(M::ABSTRACT)
    .with(M::STRICT)
    .with(M::SYNTHETIC)
    .with(ATTR);
pub const INNER_CLASS: M = ACCESS
    .with(M::STATIC)
    .with(M::FINAL)
    .with(M::SUPER)
    .with(M::INTERFACE)
    .with(M::ABSTRACT)
    .with(M::SYNTHETIC)
    .with(M::ANNOTATION)
    .with(M::ENUM)
    .with(ATTR);
/// Interface fields must carry exactly these flags, so this is a value rather than a mask.
pub const INTERFACE_FIELD: M = M::STATIC.with(M::PUBLIC).with(M::FINAL);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Class,
    Interface,
    Field,
    Method,
    AbstractMethod,
    InitMethod,
    InterfaceMethod,
    InterfaceField,
    InnerClassRef,
}
impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Class,
        EntityKind::Interface,
        EntityKind::Field,
        EntityKind::Method,
        EntityKind::AbstractMethod,
        EntityKind::InitMethod,
        EntityKind::InterfaceMethod,
        EntityKind::InterfaceField,
        EntityKind::InnerClassRef,
    ];

    /// Every flag that may legally appear on this kind of declaration.
    pub fn mask(self) -> M {
        use EntityKind::*;
        match self {
            Class => CLASS,
            Interface => INTERFACE,
            Field => FIELD,
            Method => METHOD,
            AbstractMethod => ABSTRACT_METHOD,
            InitMethod => INIT_METHOD,
            InterfaceMethod => INTERFACE_METHOD,
            InterfaceField => INTERFACE_FIELD,
            InnerClassRef => INNER_CLASS,
        }
    }

    pub fn name(self) -> &'static str {
        use EntityKind::*;
        match self {
            Class => "class",
            Interface => "interface",
            Field => "field",
            Method => "method",
            AbstractMethod => "abstractmethod",
            InitMethod => "initmethod",
            InterfaceMethod => "interfacemethod",
            InterfaceField => "interfacefield",
            InnerClassRef => "innerclass",
        }
    }
}
impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for EntityKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownName(s.to_owned()))
    }
}
