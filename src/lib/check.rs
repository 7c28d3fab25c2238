//! Modifier checks for each kind of declaration. Problems are reported as warnings through a
//! [`DiagnosticSink`] and never stop the caller.
use log::debug;

use super::diagnostic::DiagnosticSink;
use super::diagnostic::MessageKey;
use super::diagnostic::Pos;
use super::flags::ModifierSet;
use super::masks;
use super::render;
use super::render::RenderContext;
use super::validate::*;

/// The one thing field and method checks need to know about the enclosing class.
pub trait DeclOwner {
    fn is_owner_interface(&self) -> bool;
}
impl DeclOwner for ModifierSet {
    fn is_owner_interface(&self) -> bool {
        self.is_interface()
    }
}
impl DeclOwner for bool {
    fn is_owner_interface(&self) -> bool {
        *self
    }
}

/// Reports the flags outside `mask` together with the whole flag set.
fn report_bad(
    sink: &mut impl DiagnosticSink,
    pos: Pos,
    key: MessageKey,
    mods: ModifierSet,
    mask: ModifierSet,
    ctx: RenderContext,
) {
    let bad = bad_flags(mods, mask);
    sink.report(pos, key, vec![render::to_string(bad, ctx), render::to_string(mods, ctx)]);
}

fn report(sink: &mut impl DiagnosticSink, pos: Pos, key: MessageKey, mods: ModifierSet, ctx: RenderContext) {
    sink.report(pos, key, vec![render::to_string(mods, ctx)]);
}

pub fn check_class_modifiers(sink: &mut impl DiagnosticSink, mods: ModifierSet, pos: Pos) {
    debug!("checking class flags {:#x} at {}", mods.bits(), pos);
    let ctx = RenderContext::Class;

    if mods.is_interface() {
        if !valid_interface(mods) {
            report_bad(sink, pos, MessageKey::InvalidInterface, mods, masks::INTERFACE, ctx);
        }
        if !mods.is_abstract() {
            report(sink, pos, MessageKey::InterfaceNotAbstract, mods, ctx);
        }
    } else {
        if !valid_class(mods) {
            report_bad(sink, pos, MessageKey::InvalidClass, mods, masks::CLASS, ctx);
        }
        if mods.both(ModifierSet::ABSTRACT, ModifierSet::FINAL) {
            report(sink, pos, MessageKey::ClassFinalAbstract, mods, ctx);
        }
    }
}

pub fn check_field_modifiers(owner: &impl DeclOwner, sink: &mut impl DiagnosticSink, mods: ModifierSet, pos: Pos) {
    debug!("checking field flags {:#x} at {}", mods.bits(), pos);
    let ctx = RenderContext::Field;

    if owner.is_owner_interface() {
        if !valid_interface_field(mods) {
            report(sink, pos, MessageKey::InvalidInterfaceField, mods, ctx);
        }
    } else {
        if !valid_field(mods) {
            report_bad(sink, pos, MessageKey::InvalidField, mods, masks::FIELD, ctx);
        }
        if mods.both(ModifierSet::FINAL, ModifierSet::VOLATILE) {
            report(sink, pos, MessageKey::FieldFinalVolatile, mods, ctx);
        }
        if !valid_access(mods) {
            report(sink, pos, MessageKey::MultipleAccess, mods, ctx);
        }
    }
}

/// `is_init` and `is_clinit` say whether the method is `<init>` or `<clinit>`. The latter is not checked at all.
pub fn check_method_modifiers(
    owner: &impl DeclOwner,
    sink: &mut impl DiagnosticSink,
    mods: ModifierSet,
    pos: Pos,
    is_init: bool,
    is_clinit: bool,
) {
    debug!(
        "checking method flags {:#x} at {} (init: {}, clinit: {})",
        mods.bits(),
        pos,
        is_init,
        is_clinit
    );
    if is_clinit {
        return;
    }
    let ctx = RenderContext::Method;

    if owner.is_owner_interface() {
        if is_init {
            sink.report(pos, MessageKey::InitInInterface, Vec::new());
        } else if !valid_interface_method(mods) {
            report_bad(sink, pos, MessageKey::InvalidInterfaceMethod, mods, masks::INTERFACE_METHOD, ctx);
        }
        return;
    }

    if is_init {
        if !valid_init_method(mods) {
            report_bad(sink, pos, MessageKey::InvalidInit, mods, masks::INIT_METHOD, ctx);
        }
    } else if mods.is_abstract() {
        if !valid_abstract_method(mods) {
            report_bad(sink, pos, MessageKey::InvalidAbstractMethod, mods, masks::ABSTRACT_METHOD, ctx);
        }
    } else if !valid_method(mods) {
        report_bad(sink, pos, MessageKey::InvalidMethod, mods, masks::METHOD, ctx);
    }
    if !valid_access(mods) {
        report(sink, pos, MessageKey::MultipleAccess, mods, ctx);
    }
}

/// Inner class entries only have a mask check. The owner does not matter.
pub fn check_inner_class_modifiers(sink: &mut impl DiagnosticSink, mods: ModifierSet, pos: Pos) {
    debug!("checking inner class flags {:#x} at {}", mods.bits(), pos);
    if !valid_inner_class(mods) {
        report_bad(
            sink,
            pos,
            MessageKey::InvalidInnerClass,
            mods,
            masks::INNER_CLASS,
            RenderContext::InnerClass,
        );
    }
}
