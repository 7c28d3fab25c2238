use bitflags::bitflags;

bitflags! {
    /// Access flags of a class, field, method or inner class entry, plus the two
    /// pseudo-attribute bits the assembler folds into the same word.
    ///
    /// Several names share a bit; which one applies depends on the kind of declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierSet: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SUPER = 0x0020;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const BRIDGE = 0x0040;
        const TRANSIENT = 0x0080;
        const VARARGS = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        const MANDATED = 0x8000;

        /// Not a real access flag: the declaration carries a Synthetic attribute.
        const SYNTHETIC_ATTRIBUTE = 0x0001_0000;
        /// Not a real access flag: the declaration carries a Deprecated attribute.
        const DEPRECATED_ATTRIBUTE = 0x0002_0000;
    }
}

macro_rules! define_flag_tests {
    ($($name:ident => $flag:ident),* $(,)?) => {
        $(
            pub fn $name(self) -> bool {
                self.intersects(Self::$flag)
            }
        )*
    };
}

impl ModifierSet {
    /// Wraps a raw flag word, keeping bits that have no name.
    pub const fn new(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Union usable in const context, where `|` is not.
    pub const fn with(self, other: Self) -> Self {
        Self::from_bits_retain(self.bits() | other.bits())
    }

    define_flag_tests! {
        is_public => PUBLIC,
        is_private => PRIVATE,
        is_protected => PROTECTED,
        is_static => STATIC,
        is_final => FINAL,
        is_super => SUPER,
        is_synchronized => SYNCHRONIZED,
        is_volatile => VOLATILE,
        is_bridge => BRIDGE,
        is_transient => TRANSIENT,
        is_varargs => VARARGS,
        is_native => NATIVE,
        is_interface => INTERFACE,
        is_abstract => ABSTRACT,
        is_strict => STRICT,
        is_synthetic => SYNTHETIC,
        is_annotation => ANNOTATION,
        is_enum => ENUM,
        is_mandated => MANDATED,
        is_synthetic_pseudo_mod => SYNTHETIC_ATTRIBUTE,
        is_deprecated_pseudo_mod => DEPRECATED_ATTRIBUTE,
    }

    /// There is no deprecated access flag, only the attribute.
    pub fn is_deprecated(self) -> bool {
        self.is_deprecated_pseudo_mod()
    }

    pub fn has_pseudo_mod(self) -> bool {
        self.is_synthetic_pseudo_mod() || self.is_deprecated_pseudo_mod()
    }

    /// True if `a` and `b` are both set.
    pub fn both(self, a: Self, b: Self) -> bool {
        self.contains(a | b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_bits() {
        assert_eq!(ModifierSet::SUPER, ModifierSet::SYNCHRONIZED);
        assert_eq!(ModifierSet::VOLATILE, ModifierSet::BRIDGE);
        assert_eq!(ModifierSet::TRANSIENT, ModifierSet::VARARGS);

        let m = ModifierSet::new(0x0020);
        assert!(m.is_super());
        assert!(m.is_synchronized());
    }

    #[test]
    fn test_unknown_bits_retained() {
        let m = ModifierSet::new(0x0100_0001);
        assert_eq!(m.bits(), 0x0100_0001);
        assert!(m.is_public());
        assert!(!m.has_pseudo_mod());
    }

    #[test]
    fn test_pseudo_bits() {
        let m = ModifierSet::SYNTHETIC_ATTRIBUTE;
        assert!(m.is_synthetic_pseudo_mod());
        assert!(!m.is_synthetic());
        assert!(m.has_pseudo_mod());

        let m = ModifierSet::DEPRECATED_ATTRIBUTE;
        assert!(m.is_deprecated());
        assert!(m.has_pseudo_mod());
    }

    #[test]
    fn test_both() {
        let m = ModifierSet::FINAL | ModifierSet::VOLATILE | ModifierSet::PUBLIC;
        assert!(m.both(ModifierSet::FINAL, ModifierSet::VOLATILE));
        assert!(!m.both(ModifierSet::FINAL, ModifierSet::STATIC));
        assert!(!ModifierSet::empty().both(ModifierSet::FINAL, ModifierSet::FINAL));
        assert!(m.both(ModifierSet::FINAL, ModifierSet::FINAL));
    }
}
