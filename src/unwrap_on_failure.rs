use thiserror::Error ;



/// Panic payload raised when a [`Failure`]( crate::Outcome::Failure ) is unwrapped.
///
/// [`Outcome::unwrap`]( crate::Outcome::unwrap ) and [`Outcome::expect`]( crate::Outcome::expect )
/// are assertions made by the caller. When the assertion is wrong they panic through
/// [`std::panic::panic_any`] with this type as the payload, which keeps programmer misuse
/// apart from represented failures: a represented failure is a value, this is a panic.
///
/// The default panic hook cannot display a non-string payload, so the message, the
/// error and the caller's location are also written to stderr just before panicking.
///
/// ```
/// use outcome::{ Outcome, UnwrapOnFailure };
///
/// let panic = std::panic::catch_unwind(|| Outcome::<u32, &str>::Failure( "gone" ).unwrap() )
/// 	.unwrap_err();
/// let payload = panic.downcast::<UnwrapOnFailure>().unwrap();
/// assert_eq!( payload.error(), "\"gone\"" );
/// ```
#[derive( Error, Debug, Clone, PartialEq, Eq )]
#[error( "{message}: {error}" )]
pub struct UnwrapOnFailure {
    message: String,
    error: String,
}

impl UnwrapOnFailure {

    pub(crate) const UNWRAP_MESSAGE: &'static str = "called `Outcome::unwrap()` on a `Failure` value" ;

    pub(crate) fn new( message: impl Into<String>, error: &impl std::fmt::Debug ) -> Self {
        Self { message: message.into(), error: format!( "{:?}", error ) }
    }

    /// The message describing the failed assertion; the caller's own for `expect`.
    #[inline] pub fn message( &self ) -> &str { &self.message }
    /// `Debug` rendering of the error held by the unwrapped failure.
    #[inline] pub fn error( &self ) -> &str { &self.error }

    /// Writes the message to stderr, then panics with `self` as the payload.
    ///
    /// The default panic hook can only render string payloads, so the message is
    /// printed here to stay visible to an uncaught panic.
    #[track_caller]
    pub(crate) fn raise( self ) -> ! {
        eprintln!( "{} at {}", self, std::panic::Location::caller() );
        std::panic::panic_any( self )
    }

}
