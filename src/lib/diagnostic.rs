use std::fmt;

/// Byte offset into the source being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos(pub usize);
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    InvalidInterface,
    InterfaceNotAbstract,
    InvalidClass,
    ClassFinalAbstract,
    InvalidInterfaceField,
    InvalidField,
    FieldFinalVolatile,
    MultipleAccess,
    InitInInterface,
    InvalidInterfaceMethod,
    InvalidInit,
    InvalidAbstractMethod,
    InvalidMethod,
    InvalidInnerClass,
}
impl MessageKey {
    pub fn key(self) -> &'static str {
        use MessageKey::*;
        match self {
            InvalidInterface => "warn.invalid.modifier.int",
            InterfaceNotAbstract => "warn.invalid.modifier.int.abs",
            InvalidClass => "warn.invalid.modifier.class",
            ClassFinalAbstract => "warn.invalid.modifier.class.finabs",
            InvalidInterfaceField => "warn.invalid.modifier.intfield",
            InvalidField => "warn.invalid.modifier.field",
            FieldFinalVolatile => "warn.invalid.modifier.fiva",
            MultipleAccess => "warn.invalid.modifier.acc",
            InitInInterface => "warn.init.in_int",
            InvalidInterfaceMethod => "warn.invalid.modifier.intmth",
            InvalidInit => "warn.invalid.modifier.init",
            InvalidAbstractMethod => "warn.invalid.modifier.abst",
            InvalidMethod => "warn.invalid.modifier.mth",
            InvalidInnerClass => "warn.invalid.modifier.innerclass",
        }
    }

    pub fn message(self) -> &'static str {
        use MessageKey::*;
        match self {
            InvalidInterface => "Invalid modifiers for interface",
            InterfaceNotAbstract => "Interface must be declared abstract",
            InvalidClass => "Invalid modifiers for class",
            ClassFinalAbstract => "Class cannot be both final and abstract",
            InvalidInterfaceField => "Interface field must be public static final only",
            InvalidField => "Invalid modifiers for field",
            FieldFinalVolatile => "Field cannot be both final and volatile",
            MultipleAccess => "At most one of public, private and protected is allowed",
            InitInInterface => "<init> method cannot be declared in an interface",
            InvalidInterfaceMethod => "Interface method must be public abstract",
            InvalidInit => "Invalid modifiers for <init> method",
            InvalidAbstractMethod => "Invalid modifiers for abstract method",
            InvalidMethod => "Invalid modifiers for method",
            InvalidInnerClass => "Invalid modifiers for inner class",
        }
    }
}
impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub pos: Pos,
    pub key: MessageKey,
    pub args: Vec<String>,
}
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: warning: {}", self.pos, self.key.message())?;
        if !self.args.is_empty() {
            write!(f, ": {}", self.args.join("   "))?;
        }
        Ok(())
    }
}

/// Receives the warnings produced by the modifier checks.
pub trait DiagnosticSink {
    fn report(&mut self, pos: Pos, key: MessageKey, args: Vec<String>);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, pos: Pos, key: MessageKey, args: Vec<String>) {
        self.push(Diagnostic { pos, key, args });
    }
}

/// Sends every diagnostic to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink {
    pub count: usize,
}
impl DiagnosticSink for LogSink {
    fn report(&mut self, pos: Pos, key: MessageKey, args: Vec<String>) {
        self.count += 1;
        log::warn!("{}", Diagnostic { pos, key, args });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic {
            pos: Pos(42),
            key: MessageKey::ClassFinalAbstract,
            args: vec![],
        };
        assert_eq!(d.to_string(), "42: warning: Class cannot be both final and abstract");

        let d = Diagnostic {
            pos: Pos(7),
            key: MessageKey::InvalidInnerClass,
            args: vec!["native".to_owned(), "public native".to_owned()],
        };
        assert_eq!(
            d.to_string(),
            "7: warning: Invalid modifiers for inner class: native   public native"
        );
    }

    #[test]
    fn test_sinks() {
        let mut v: Vec<Diagnostic> = Vec::new();
        v.report(Pos(1), MessageKey::InitInInterface, Vec::new());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].key.key(), "warn.init.in_int");

        let mut sink = LogSink::default();
        sink.report(Pos(1), MessageKey::MultipleAccess, vec!["public private".to_owned()]);
        assert_eq!(sink.count, 1);
    }
}
