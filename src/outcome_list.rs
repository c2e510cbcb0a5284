use itertools::Itertools ;
use nonempty_collections::NEVec ;
use pipe_trait::Pipe ;

use crate::Outcome ;



/// Values and errors gathered from a sequence of outcomes.
///
/// Both lists keep the order in which the outcomes were produced. Built by
/// collecting any iterator of [`Outcome`]s.
///
/// ```
/// use outcome::{ Outcome, OutcomeList };
///
/// let list = [ Outcome::Success( 1 ), Outcome::Failure( "x" ), Outcome::Success( 3 )]
/// 	.into_iter()
/// 	.collect::<OutcomeList<_, _>>();
/// assert_eq!( list.successful(), &[ 1, 3 ]);
/// assert_eq!( list.failed(), &[ "x" ]);
/// ```
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct OutcomeList<V, E> {
    successful: Vec<V>,
    failed: Vec<E>,
}

impl<V, E> OutcomeList<V, E> {

    /// Values of every success, in order.
    pub fn successful( &self ) -> &[V] { &self.successful }
    /// Errors of every failure, in order.
    pub fn failed( &self ) -> &[E] { &self.failed }
    /// Splits into the values and the errors.
    pub fn deconstruct( self ) -> ( Vec<V>, Vec<E> ) {( self.successful, self.failed )}

    /// All values if nothing failed, otherwise every error.
    pub fn into_outcome( self ) -> Outcome<Vec<V>, NEVec<E>> {
        match NEVec::try_from_vec( self.failed ) {
            Some( errors ) => Outcome::Failure( errors ),
            None => Outcome::Success( self.successful ),
        }
    }

}

impl<V, E> Default for OutcomeList<V, E> {
    fn default() -> Self { Self { successful: Vec::new(), failed: Vec::new() }}
}

impl<V, E> FromIterator<Outcome<V, E>> for OutcomeList<V, E> {
    fn from_iter<T: IntoIterator<Item = Outcome<V, E>>>( iter: T ) -> Self {
        let ( successful, failed ) = iter.into_iter().partition_map( Outcome::unwrap_or_get_errors );
        Self { successful, failed }
    }
}

impl<V, E> Extend<Outcome<V, E>> for OutcomeList<V, E> {
    fn extend<T: IntoIterator<Item = Outcome<V, E>>>( &mut self, iter: T ) {
        iter.into_iter().for_each(| outcome | match outcome {
            Outcome::Success( value ) => self.successful.push( value ),
            Outcome::Failure( error ) => self.failed.push( error ),
        });
    }
}

/// Combines any number of same-typed outcomes.
///
/// Follows [`combine`]( crate::combine() ): every value in order if all succeeded,
/// otherwise every error in order. An empty sequence succeeds with no values.
/// All outcomes must share one value type; use the tuple form to keep distinct ones.
///
/// ```
/// use outcome::{ combine_all, Outcome, nev };
///
/// let parsed = [ "1", "two", "3", "four" ]
/// 	.into_iter()
/// 	.map(| text | Outcome::from( text.parse::<u8>().map_err(|_| text )));
/// assert_eq!( combine_all( parsed ), Outcome::Failure( nev![ "two", "four" ]));
/// ```
pub fn combine_all<V, E>( outcomes: impl IntoIterator<Item = Outcome<V, E>> ) -> Outcome<Vec<V>, NEVec<E>> {
    outcomes.into_iter()
        .collect::<OutcomeList<V, E>>()
        .pipe( OutcomeList::into_outcome )
}
