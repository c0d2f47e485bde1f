//! Macro for declaring checks with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ensured_outcomes::check;
//! use ensured_outcomes::ViolationKind;
//!
//! // Unit check (no fields)
//! check! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     violation(input) { ViolationKind::Empty }
//!     fn not_empty();
//! }
//!
//! // Struct with fields and a fallible constructor
//! check! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub Within { min: usize, max: usize } for str;
//!     rule(self, input) { (self.min..=self.max).contains(&input.len()) }
//!     violation(self, input) { ViolationKind::Empty }
//!     new(min: usize, max: usize) -> ViolationKind { Ok(Self { min, max }) }
//! }
//! ```

// ============================================================================
// CHECK MACRO
// ============================================================================

/// Creates a check: struct definition, `Check` implementation, and either a
/// factory function (unit checks) or a fallible `new` (checks with fields).
///
/// `#[derive(Debug, Clone)]` is always applied to struct checks; unit checks
/// also get `Copy, PartialEq, Eq, Hash, Default`. Struct fields are private,
/// so `new` is the only way in and its invariants hold for every instance.
///
/// The `violation` block evaluates to the [`ViolationKind`](crate::ViolationKind)
/// reported when `rule` is false.
#[macro_export]
macro_rules! check {
    // ── Unit check + factory fn ──────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        violation($vinp:ident) $violation:block
        fn $factory:ident();
    ) => {
        $crate::check! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            violation($vinp) $violation
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit check, no factory ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        violation($vinp:ident) $violation:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::ViolationKind> {
                if $rule {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($violation)
                }
            }
        }
    };

    // ── Struct with fields + fallible new ────────────────────────────────
    //
    // The type after `->` is the constructor's error type; the macro wraps it
    // in `Result`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        violation($self2:ident, $vinp:ident) $violation:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Check for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::ViolationKind> {
                if $rule {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($violation)
                }
            }
        }
    };
}
