//! Aggregation of a fixed set of outcomes into one.
//!
//! Unlike chaining with [`Outcome::flat_map`], combining does not stop at the
//! first failure: every outcome is inspected and every error is kept.

use nonempty_collections::NEVec ;

use crate::Outcome ;



/// A fixed-size group of outcomes sharing the error type `E`.
///
/// Implemented for tuples of [`Outcome`]s up to twelve elements, including the
/// empty tuple. Each position keeps its own value type.
pub trait Combine<E> {

    /// Tuple of the value types, in the same order as the outcomes.
    type Values ;

    /// Folds the group into a single outcome.
    ///
    /// All successes give a tuple of every value at its original position. Any
    /// failure gives the errors of every failed outcome, in order.
    fn combine( self ) -> Outcome<Self::Values, NEVec<E>> ;

}

/// Combines a tuple of outcomes. See [`Combine::combine`].
///
/// ```
/// use outcome::{ combine, Outcome, nev };
///
/// let both = combine(( Outcome::<_, String>::Success( 1 ), Outcome::Success( "one" )));
/// assert_eq!( both, Outcome::Success(( 1, "one" )));
///
/// let neither = combine(( Outcome::<u8, _>::Failure( 'a' ), Outcome::<&str, _>::Failure( 'b' )));
/// assert_eq!( neither, Outcome::Failure( nev![ 'a', 'b' ]));
/// ```
pub fn combine<E, C: Combine<E>>( outcomes: C ) -> Outcome<C::Values, NEVec<E>> {
    outcomes.combine()
}

/// Combines its arguments as a tuple of outcomes.
///
/// `combine!()` with no arguments is a success holding `()`.
///
/// ```
/// use outcome::{ combine, Outcome, nev };
///
/// let empty: Outcome<(), outcome::NEVec<String>> = combine!();
/// assert_eq!( empty, Outcome::Success(()));
///
/// let mixed = combine!(
/// 	Outcome::<u8, &str>::Failure( "a" ),
/// 	Outcome::Success( 1 ),
/// 	Outcome::<bool, _>::Failure( "b" ),
/// );
/// assert_eq!( mixed, Outcome::Failure( nev![ "a", "b" ]));
/// ```
#[macro_export]
macro_rules! combine {
    () => { $crate::combine(()) };
    ( $( $outcome:expr ),+ $(,)? ) => { $crate::combine(( $( $outcome, )+ )) };
}

impl<E> Combine<E> for () {
    type Values = ();
    fn combine( self ) -> Outcome<Self::Values, NEVec<E>> { Outcome::Success(()) }
}

fn record<V, E>( outcome: Outcome<V, E>, errors: &mut Option<NEVec<E>> ) -> Option<V> {
    match outcome {
        Outcome::Success( value ) => Some( value ),
        Outcome::Failure( error ) => {
            match errors {
                Some( errors ) => errors.push( error ),
                None => *errors = Some( NEVec::new( error )),
            }
            None
        }
    }
}

macro_rules! impl_combine {
    ( $( $value:ident : $outcome:ident ),+ ) => {
        impl<E, $( $value ),+> Combine<E> for ( $( Outcome<$value, E>, )+ ) {

            type Values = ( $( $value, )+ );

            #[allow( clippy::many_single_char_names )]
            fn combine( self ) -> Outcome<Self::Values, NEVec<E>> {
                let ( $( $outcome, )+ ) = self ;
                let mut errors = None ;
                $( let $outcome = record( $outcome, &mut errors ); )+
                match ( errors, $( $outcome ),+ ) {
                    ( Some( errors ), .. ) => Outcome::Failure( errors ),
                    ( None, $( Some( $outcome ) ),+ ) => Outcome::Success(( $( $outcome, )+ )),
                    // A missing value is always recorded as an error.
                    ( None, .. ) => unreachable!( "outcome dropped without an error" ),
                }
            }

        }
    };
}

impl_combine!( A: a );
impl_combine!( A: a, B: b );
impl_combine!( A: a, B: b, C: c );
impl_combine!( A: a, B: b, C: c, D: d );
impl_combine!( A: a, B: b, C: c, D: d, F: f );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g, H: h );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g, H: h, I: i );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g, H: h, I: i, J: j );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g, H: h, I: i, J: j, K: k );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g, H: h, I: i, J: j, K: k, L: l );
impl_combine!( A: a, B: b, C: c, D: d, F: f, G: g, H: h, I: i, J: j, K: k, L: l, M: m );
