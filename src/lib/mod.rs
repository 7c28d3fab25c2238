pub mod check;
pub mod diagnostic;
pub mod flags;
pub mod lexicon;
pub mod masks;
pub mod render;
pub mod validate;

pub use check::check_class_modifiers;
pub use check::check_field_modifiers;
pub use check::check_inner_class_modifiers;
pub use check::check_method_modifiers;
pub use check::DeclOwner;
pub use diagnostic::Diagnostic;
pub use diagnostic::DiagnosticSink;
pub use diagnostic::LogSink;
pub use diagnostic::MessageKey;
pub use diagnostic::Pos;
pub use flags::ModifierSet;
pub use lexicon::parse_flags;
pub use masks::EntityKind;
pub use render::access_string;
pub use render::to_string;
pub use render::Modifiers;
pub use render::RenderContext;
