/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Higher-order macro that iterates over a cartesian product.
///
/// It takes a number of groups of token trees and a suitable definition
/// for a callback macro, and it calls the macro with one token tree from
/// each group in order.
///
/// See the examples module in the source for example usage.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @product::next($([$($groups)*])*) -> ($mac!()) }
    };
}

/// implementation detail, go away
macro_rules! cartesian__ {
    (@product::next([$($token:tt)+] $($rest:tt)*) -> $cb:tt)
    => { cartesian__!{ @product::unpack([$($token)+] $($rest)*) -> $cb } };

    // base case; direct product of no arguments
    (@product::next() -> ($mac:ident!($($args:tt)*)))
    => {$mac!{$($args)*}};

    // Smash the remaining groups into a single tt so they can be
    // replicated once per token without nested repetitions.
    (@product::unpack([$($token:tt)*] $($rest:tt)*) -> $cb:tt)
    => {cartesian__!{ @product::unpack_2([$($token)*] [$($rest)*]) -> $cb }};

    (@product::unpack_2([$($token:tt)*] $rest:tt) -> $cb:tt)
    => { $( cartesian__!{ @product::unpack_3($token $rest) -> $cb } )* };

    (@product::unpack_3($token:tt [$($rest:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => {cartesian__!{ @product::next($($rest)*) -> ($mac!($($args)*$token)) }};
}

/// `cartesian!` with some predefined groups used in the library's public API.
///
/// See the examples module in the source for example usage.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    //----------------------------
    // Groups using the standard syntax supported by cartesian

    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    //----------------------------
    // Special groups of the form @{...}

    // NOTE: This macro is what truly defines the set of members
    //       for each opaque trait, and the set of supported sizes.

    // Types that implement Field
    ([@{field} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    // Types that implement Ring
    ([@{ring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
    ]] }};

    // Types that implement Semiring
    ([@{semiring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
        {u8} {u16} {u32} {u64} {usize}
    ]] }};

    // PrimitiveFloat types
    ([@{float} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    // Fixed sized vector types
    ([@{Vn} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2} {V3} {V4} {V5} {V6}
    ]] }};

    // ...along with their size
    ([@{Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2 2} {V3 3} {V4 4} {V5 5} {V6 6}
    ]] }};

    // Matrices of generic width, and their number of rows
    ([@{Mn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M2 2} {M3 3} {M4 4} {M5 5} {M6 6}
    ]] }};

    // Square matrices, their vector types, and size
    ([@{Mnn_Mn_Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M22 M2 V2 2} {M33 M3 V3 3} {M44 M4 V4 4} {M55 M5 V5 5} {M66 M6 V6 6}
    ]] }};

    // Square matrices large enough to have a square minor, their size,
    // and the type of the minor.
    ([@{Mnn_n_minor} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M33 3 M22} {M44 4 M33} {M55 5 M44} {M66 6 M55}
    ]] }};

    // Every (smaller, larger) pair of square matrices, with sizes.
    ([@{embed} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M22 2 M33 3} {M22 2 M44 4} {M22 2 M55 5} {M22 2 M66 6}
        {M33 3 M44 4} {M33 3 M55 5} {M33 3 M66 6}
        {M44 4 M55 5} {M44 4 M66 6}
        {M55 5 M66 6}
    ]] }};

    ([@{2...6} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {2} {3} {4} {5} {6}
    ]] }};

    // Finally: Delegate to `cartesian`
    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

/// Synthesize a `Vn` vector type from a `tt` of the size.
macro_rules! V {
    (2, $X:ty) => { V2<$X> };
    (3, $X:ty) => { V3<$X> };
    (4, $X:ty) => { V4<$X> };
    (5, $X:ty) => { V5<$X> };
    (6, $X:ty) => { V6<$X> };
}

/// Synthesize an `Mn` matrix type from a `tt` of the size.
macro_rules! M {
    (2, $V:ty) => { M2<$V> };
    (3, $V:ty) => { M3<$V> };
    (4, $V:ty) => { M4<$V> };
    (5, $V:ty) => { M5<$V> };
    (6, $V:ty) => { M6<$V> };
}
