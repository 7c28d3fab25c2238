use super::flags::ModifierSet;
use super::masks;
use super::masks::EntityKind;

/// The only legal values of the access bits: at most one of them may be set.
const LEGAL_ACCESS: [ModifierSet; 4] = [
    ModifierSet::empty(),
    ModifierSet::PUBLIC,
    ModifierSet::PRIVATE,
    ModifierSet::PROTECTED,
];

/// Returns the bits of `mods` that are not allowed by `mask`.
pub fn bad_flags(mods: ModifierSet, mask: ModifierSet) -> ModifierSet {
    mods.difference(mask)
}

/// Subset test against the mask for `kind`. Does not look at combinations of flags.
pub fn is_valid(mods: ModifierSet, kind: EntityKind) -> bool {
    bad_flags(mods, kind.mask()).is_empty()
}

pub fn valid_class(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::Class)
}
pub fn valid_interface(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::Interface)
}
pub fn valid_inner_class(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::InnerClassRef)
}
pub fn valid_field(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::Field)
}
pub fn valid_method(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::Method)
}
pub fn valid_abstract_method(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::AbstractMethod)
}
pub fn valid_init_method(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::InitMethod)
}

/// Interface methods must be public and abstract, not merely allowed to be.
pub fn valid_interface_method(mods: ModifierSet) -> bool {
    is_valid(mods, EntityKind::InterfaceMethod) && mods.is_public() && mods.is_abstract()
}

/// Interface fields must be exactly `public static final`.
pub fn valid_interface_field(mods: ModifierSet) -> bool {
    mods == masks::INTERFACE_FIELD
}

pub fn valid_access(mods: ModifierSet) -> bool {
    LEGAL_ACCESS.contains(&(mods & masks::ACCESS))
}
