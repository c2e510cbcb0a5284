use itertools::Either ;

use crate::UnwrapOnFailure ;



/// The outcome of an operation: either a value or an error, never both.
///
/// Every transformation consumes the outcome and builds a new one, so the held
/// payload is never replaced in place. Calling code can branch on
/// [`is_ok`]( Self::is_ok ) / [`is_fail`]( Self::is_fail ), `match` on the variants
/// directly, or chain combinators without branching at all.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord )]
pub enum Outcome<V, E> {
    /// The operation completed and produced a value.
    Success( V ),
    /// The operation failed and produced an error.
    Failure( E ),
}

impl<V, E> Outcome<V, E> {

    /// Returns `true` if this is a [`Success`]( Self::Success ).
    #[inline] pub const fn is_ok( &self ) -> bool { matches!( self, Self::Success( _ ))}
    /// Returns `true` if this is a [`Failure`]( Self::Failure ).
    #[inline] pub const fn is_fail( &self ) -> bool { matches!( self, Self::Failure( _ ))}

    /// Borrows the value of a success.
    #[inline] pub const fn success( &self ) -> Option<&V> { match self {
        Self::Success( value ) => Some( value ),
        Self::Failure( _ ) => None,
    }}
    /// Borrows the error of a failure.
    #[inline] pub const fn failure( &self ) -> Option<&E> { match self {
        Self::Success( _ ) => None,
        Self::Failure( error ) => Some( error ),
    }}

    /// Converts into the value of a success, discarding any error.
    pub fn ok( self ) -> Option<V> { match self {
        Self::Success( value ) => Some( value ),
        Self::Failure( _ ) => None,
    }}
    /// Converts into the error of a failure, discarding any value.
    pub fn fail( self ) -> Option<E> { match self {
        Self::Success( _ ) => None,
        Self::Failure( error ) => Some( error ),
    }}

    /// Borrows the payload, keeping the variant.
    pub const fn as_ref( &self ) -> Outcome<&V, &E> { match self {
        Self::Success( value ) => Outcome::Success( value ),
        Self::Failure( error ) => Outcome::Failure( error ),
    }}

    /// Applies `map` to the value of a success.
    ///
    /// A failure passes through untouched under the new value type and `map` is
    /// never called.
    pub fn map<N>( self, map: impl FnOnce( V ) -> N ) -> Outcome<N, E> { match self {
        Self::Success( value ) => Outcome::Success( map( value )),
        Self::Failure( error ) => Outcome::Failure( error ),
    }}

    /// Chains a fallible step onto a success.
    ///
    /// The outcome returned by `step` is returned as is, so steps compose without
    /// nesting. A failure short-circuits and `step` is never called.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn parse( input: &str ) -> Outcome<u8, String> {
    /// 	input.parse::<u8>().map_err(| err | err.to_string() ).into()
    /// }
    /// fn halve( value: u8 ) -> Outcome<u8, String> {
    /// 	match value % 2 == 0 {
    /// 		true => Outcome::Success( value / 2 ),
    /// 		false => Outcome::Failure( format!( "{} is odd", value )),
    /// 	}
    /// }
    ///
    /// assert_eq!( parse( "42" ).flat_map( halve ), Outcome::Success( 21 ));
    /// assert_eq!( parse( "7" ).flat_map( halve ), Outcome::Failure( "7 is odd".to_string() ));
    /// assert!( parse( "x" ).flat_map( halve ).is_fail() );
    /// ```
    pub fn flat_map<N>( self, step: impl FnOnce( V ) -> Outcome<N, E> ) -> Outcome<N, E> { match self {
        Self::Success( value ) => step( value ),
        Self::Failure( error ) => Outcome::Failure( error ),
    }}

    /// Applies `map` to the error of a failure.
    ///
    /// A success passes through untouched under the new error type and `map` is
    /// never called.
    pub fn map_fails<N>( self, map: impl FnOnce( E ) -> N ) -> Outcome<V, N> { match self {
        Self::Success( value ) => Outcome::Success( value ),
        Self::Failure( error ) => Outcome::Failure( map( error )),
    }}

    /// Swaps the variants, so the value becomes the error and the error becomes the value.
    pub fn flip( self ) -> Outcome<E, V> { match self {
        Self::Success( value ) => Outcome::Failure( value ),
        Self::Failure( error ) => Outcome::Success( error ),
    }}

    /// Returns the value of a success.
    ///
    /// # Panics
    /// Panics with an [`UnwrapOnFailure`] payload if this is a failure, after writing
    /// its message and the caller's location to stderr.
    #[track_caller]
    pub fn unwrap( self ) -> V
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Success( value ) => value,
            Self::Failure( error ) => UnwrapOnFailure::new( UnwrapOnFailure::UNWRAP_MESSAGE, &error ).raise(),
        }
    }

    /// Returns the value of a success.
    ///
    /// # Panics
    /// Panics with an [`UnwrapOnFailure`] payload carrying `message` if this is a failure,
    /// after writing `message`, the error and the caller's location to stderr.
    #[track_caller]
    pub fn expect( self, message: &str ) -> V
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Success( value ) => value,
            Self::Failure( error ) => UnwrapOnFailure::new( message, &error ).raise(),
        }
    }

    /// Returns the value of a success, or `default` for a failure.
    ///
    /// `default` is evaluated by the caller before the call; use
    /// [`unwrap_or_else`]( Self::unwrap_or_else ) when it is costly to produce.
    pub fn unwrap_or( self, default: V ) -> V { match self {
        Self::Success( value ) => value,
        Self::Failure( _ ) => default,
    }}

    /// Returns the value of a success, or computes one for a failure.
    ///
    /// `default` is only called for a failure.
    pub fn unwrap_or_else( self, default: impl FnOnce() -> V ) -> V { match self {
        Self::Success( value ) => value,
        Self::Failure( _ ) => default(),
    }}

    /// Returns `next` if this is a success, otherwise this failure under `next`'s value type.
    ///
    /// `next` is already built when it is passed in, so whatever it took to produce
    /// it has run even when this is a failure. Use [`flat_map`]( Self::flat_map )
    /// to defer that work.
    pub fn and<N>( self, next: Outcome<N, E> ) -> Outcome<N, E> { match self {
        Self::Success( _ ) => next,
        Self::Failure( error ) => Outcome::Failure( error ),
    }}

    /// Returns this if it is a success, otherwise `alternative`.
    pub fn or( self, alternative: Self ) -> Self { match self {
        Self::Success( value ) => Self::Success( value ),
        Self::Failure( _ ) => alternative,
    }}

    /// Recovers from a failure by handing its error to `recover`.
    ///
    /// A success passes through and `recover` is never called.
    pub fn or_else<F>( self, recover: impl FnOnce( E ) -> Outcome<V, F> ) -> Outcome<V, F> { match self {
        Self::Success( value ) => Outcome::Success( value ),
        Self::Failure( error ) => recover( error ),
    }}

    /// Returns whichever payload this holds: the value on the left, the error on the right.
    pub fn unwrap_or_get_errors( self ) -> Either<V, E> { match self {
        Self::Success( value ) => Either::Left( value ),
        Self::Failure( error ) => Either::Right( error ),
    }}

    /// Converts into the standard library's `Result`.
    ///
    /// # Errors
    /// Returns `Err` holding the error of a failure.
    pub fn into_result( self ) -> Result<V, E> { match self {
        Self::Success( value ) => Ok( value ),
        Self::Failure( error ) => Err( error ),
    }}

}

impl<T> Outcome<T, T> {
    /// Returns the payload when value and error share a type.
    pub fn into_inner( self ) -> T {
        self.unwrap_or_get_errors().into_inner()
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from( result: Result<V, E> ) -> Self { match result {
        Ok( value ) => Self::Success( value ),
        Err( error ) => Self::Failure( error ),
    }}
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from( outcome: Outcome<V, E> ) -> Self { outcome.into_result() }
}

impl<V, E> From<Outcome<V, E>> for Either<V, E> {
    fn from( outcome: Outcome<V, E> ) -> Self { outcome.unwrap_or_get_errors() }
}
