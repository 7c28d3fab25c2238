use std::fmt;
use std::str::FromStr;

use super::flags::ModifierSet as M;
use super::lexicon::Keyword;
use super::lexicon::UnknownName;
use super::lexicon::DEPRECATED_PSEUDO;
use super::lexicon::SYNTHETIC_PSEUDO;

/// Controls which keywords a flag word prints as, since several keywords share a bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderContext {
    Class,
    Field,
    Method,
    InnerClass,
}
impl RenderContext {
    pub const ALL: [RenderContext; 4] = [
        RenderContext::Class,
        RenderContext::Field,
        RenderContext::Method,
        RenderContext::InnerClass,
    ];

    pub fn name(self) -> &'static str {
        use RenderContext::*;
        match self {
            Class => "class",
            Field => "field",
            Method => "method",
            InnerClass => "innerclass",
        }
    }
}
impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for RenderContext {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownName(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy)]
enum When {
    Always,
    In(&'static [RenderContext]),
    /// Interfaces are implicitly abstract, so class headers leave it out.
    UnlessInterfaceClass,
}
impl When {
    fn applies(self, ctx: RenderContext, mods: M) -> bool {
        match self {
            When::Always => true,
            When::In(ctxs) => ctxs.contains(&ctx),
            When::UnlessInterfaceClass => ctx != RenderContext::Class || !mods.is_interface(),
        }
    }
}

use RenderContext as C;

/// Print order of the keywords. `final` has two slots, one for methods and one for everything
/// else, so it is never printed twice. Annotation has no keyword and is never printed.
static RULES: [(M, When, Keyword); 19] = [
    (M::PUBLIC, When::Always, Keyword::Public),
    (M::PRIVATE, When::Always, Keyword::Private),
    (M::PROTECTED, When::Always, Keyword::Protected),
    (M::STATIC, When::Always, Keyword::Static),
    (M::FINAL, When::In(&[C::Method]), Keyword::Final),
    (M::TRANSIENT, When::In(&[C::Field]), Keyword::Transient),
    (M::SUPER, When::In(&[C::Class]), Keyword::Super),
    (M::SYNCHRONIZED, When::In(&[C::Method]), Keyword::Synchronized),
    (M::BRIDGE, When::In(&[C::Method]), Keyword::Bridge),
    (M::VARARGS, When::In(&[C::Method]), Keyword::Varargs),
    (M::NATIVE, When::In(&[C::Method]), Keyword::Native),
    (M::ABSTRACT, When::UnlessInterfaceClass, Keyword::Abstract),
    (M::FINAL, When::In(&[C::Class, C::InnerClass, C::Field]), Keyword::Final),
    (M::INTERFACE, When::In(&[C::Class, C::InnerClass]), Keyword::Interface),
    (M::STRICT, When::Always, Keyword::Strict),
    (M::SYNTHETIC, When::Always, Keyword::Synthetic),
    (M::VOLATILE, When::In(&[C::Field]), Keyword::Volatile),
    (M::ENUM, When::Always, Keyword::Enum),
    (M::MANDATED, When::Always, Keyword::Mandated),
];

/// Iterates the keywords for `mods` in print order, without the pseudo attribute markers.
fn keywords(mods: M, ctx: RenderContext) -> impl Iterator<Item = &'static str> {
    RULES
        .iter()
        .filter(move |(flag, when, _)| mods.intersects(*flag) && when.applies(ctx, mods))
        .map(|(_, _, kw)| kw.spelling())
}

/// Displays a flag word as space separated keywords.
#[derive(Debug, Clone, Copy)]
pub struct Modifiers {
    mods: M,
    ctx: RenderContext,
    pseudo: bool,
}
impl Modifiers {
    pub fn new(mods: M, ctx: RenderContext) -> Self {
        Self { mods, ctx, pseudo: true }
    }

    /// Leave out the pseudo attribute markers.
    pub fn access_only(mut self) -> Self {
        self.pseudo = false;
        self
    }
}
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let markers = [
            (self.mods.is_synthetic_pseudo_mod(), SYNTHETIC_PSEUDO),
            (self.mods.is_deprecated_pseudo_mod(), DEPRECATED_PSEUDO),
        ];
        let markers = markers.into_iter().filter(|&(on, _)| on && self.pseudo).map(|(_, s)| s);

        for (i, word) in keywords(self.mods, self.ctx).chain(markers).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Renders `mods` including the pseudo attribute markers.
pub fn to_string(mods: M, ctx: RenderContext) -> String {
    let s = Modifiers::new(mods, ctx).to_string();
    log::trace!("rendered {:#x} as {} '{}'", mods.bits(), ctx, s);
    s
}

/// Renders the real access flags of `mods` only.
pub fn access_string(mods: M, ctx: RenderContext) -> String {
    Modifiers::new(mods, ctx).access_only().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(mods: M, ctx: RenderContext) -> String {
        to_string(mods, ctx)
    }

    #[test]
    fn test_field_order() {
        assert_eq!(r(M::FINAL | M::STATIC | M::PUBLIC, C::Field), "public static final");
        assert_eq!(
            r(M::PRIVATE | M::TRANSIENT | M::VOLATILE | M::FINAL | M::SYNTHETIC | M::ENUM, C::Field),
            "private transient final synthetic volatile enum"
        );
    }

    #[test]
    fn test_final_never_twice() {
        for ctx in RenderContext::ALL {
            let s = r(M::PUBLIC | M::STATIC | M::FINAL, ctx);
            assert_eq!(s.matches("final").count(), 1, "{}", ctx);
        }
        assert_eq!(r(M::PUBLIC | M::STATIC | M::FINAL, C::Method), "public static final");
        assert_eq!(r(M::FINAL | M::ABSTRACT, C::Method), "final abstract");
        assert_eq!(r(M::FINAL | M::ABSTRACT, C::InnerClass), "abstract final");
    }

    #[test]
    fn test_interface_class() {
        let m = M::PUBLIC | M::INTERFACE | M::ABSTRACT;
        assert_eq!(r(m, C::Class), "public interface");
        assert_eq!(r(m, C::InnerClass), "public abstract interface");
        assert_eq!(r(M::ABSTRACT, C::Class), "abstract");
        // interface bit means nothing for fields and methods
        assert_eq!(r(m, C::Method), "public abstract");
    }

    #[test]
    fn test_shared_bits_by_context() {
        let m = M::new(0x00e0);
        assert_eq!(r(m, C::Class), "super");
        assert_eq!(r(m, C::InnerClass), "");
        assert_eq!(r(m, C::Field), "transient volatile");
        assert_eq!(r(m, C::Method), "synchronized bridge varargs");
    }

    #[test]
    fn test_method_order() {
        let m = M::new(0xffff).difference(M::INTERFACE | M::ANNOTATION);
        assert_eq!(
            r(m, C::Method),
            "public private protected static final synchronized bridge varargs native abstract strict synthetic enum mandated"
        );
    }

    #[test]
    fn test_class_order() {
        let m = M::PUBLIC | M::SUPER | M::FINAL | M::SYNTHETIC | M::ENUM | M::ANNOTATION;
        assert_eq!(r(m, C::Class), "public super final synthetic enum");
    }

    #[test]
    fn test_pseudo_markers() {
        assert_eq!(r(M::SYNTHETIC_ATTRIBUTE, C::Method), "Synthetic(Pseudo)");
        assert_eq!(r(M::SYNTHETIC, C::Method), "synthetic");
        assert_ne!(r(M::SYNTHETIC_ATTRIBUTE, C::Field), r(M::SYNTHETIC, C::Field));
        assert_eq!(
            r(M::PUBLIC | M::SYNTHETIC | M::SYNTHETIC_ATTRIBUTE | M::DEPRECATED_ATTRIBUTE, C::Class),
            "public synthetic Synthetic(Pseudo) Deprecated(Pseudo)"
        );

        let m = M::PUBLIC | M::DEPRECATED_ATTRIBUTE;
        assert_eq!(access_string(m, C::Field), "public");
        assert_eq!(access_string(M::SYNTHETIC_ATTRIBUTE, C::Field), "");
    }

    #[test]
    fn test_empty_and_unknown() {
        for ctx in RenderContext::ALL {
            assert_eq!(r(M::empty(), ctx), "");
            assert_eq!(r(M::new(0x0100_0000), ctx), "");
        }
    }

    #[test]
    fn test_display() {
        let s = format!("[{}]", Modifiers::new(M::PUBLIC | M::STATIC, C::Method));
        assert_eq!(s, "[public static]");
    }

    #[test]
    fn test_context_names() {
        for ctx in RenderContext::ALL {
            assert_eq!(ctx.name().parse::<RenderContext>().unwrap(), ctx);
        }
        assert!("interface".parse::<RenderContext>().is_err());
    }
}
