//! A two-variant outcome type for explicit, typed success and failure.
//!
//! An [`Outcome`] is either a [`Success`]( Outcome::Success ) holding a value or a
//! [`Failure`]( Outcome::Failure ) holding an error. Failures are values: they are
//! returned and inspected, never thrown.
//!
//! # Core Concepts
//!
//! - [`Outcome`]: The sum type itself and its combinators. Transformations such as
//! 	[`map`]( Outcome::map ), [`flat_map`]( Outcome::flat_map ) and
//! 	[`map_fails`]( Outcome::map_fails ) only touch the variant they are meant for
//! 	and pass the other one through.
//!
//! - [`UnwrapOnFailure`]: The panic payload of [`Outcome::unwrap`] and [`Outcome::expect`]
//! 	when they are called on a failure. These two are the only operations that panic.
//!
//! - [`combine()`]: Folds a tuple of outcomes into one. Every outcome is inspected, so
//! 	a failure carries all the errors, not just the first. The [`combine!`] macro takes
//! 	the outcomes as plain arguments.
//!
//! - [`combine_all`] and [`OutcomeList`]: The same aggregation over any number of
//! 	outcomes that share a value type.
//!
//! # Example
//!
//! ```
//! use outcome::{ combine, Outcome, nev };
//!
//! #[derive( Debug, PartialEq )]
//! enum FieldError { Missing( &'static str ), Invalid( &'static str )}
//!
//! fn field( name: &'static str, raw: Option<&str> ) -> Outcome<String, FieldError> {
//! 	match raw {
//! 		Some( value ) => Outcome::Success( value.to_string() ),
//! 		None => Outcome::Failure( FieldError::Missing( name )),
//! 	}
//! }
//!
//! fn port( raw: Option<&str> ) -> Outcome<u16, FieldError> {
//! 	field( "port", raw ).flat_map(| value | match value.parse() {
//! 		Ok( port ) => Outcome::Success( port ),
//! 		Err( _ ) => Outcome::Failure( FieldError::Invalid( "port" )),
//! 	})
//! }
//!
//! // Every field is checked, and every problem is reported.
//! let config = combine!( field( "host", Some( "localhost" )), port( Some( "8080" )));
//! assert_eq!( config, Outcome::Success(( "localhost".to_string(), 8080 )));
//!
//! let config = combine!( field( "host", None ), port( Some( "eighty" )));
//! assert_eq!( config, Outcome::Failure( nev![ FieldError::Missing( "host" ), FieldError::Invalid( "port" )]));
//!
//! // Fall back to defaults without branching.
//! assert_eq!( port( None ).unwrap_or( 80 ), 80 );
//! ```
//!
//! # Eager Arguments
//!
//! [`Outcome::and`], [`Outcome::or`] and [`Outcome::unwrap_or`] take an already built
//! value, so producing it happens even when the call discards it. Their closure-taking
//! counterparts, [`Outcome::flat_map`], [`Outcome::or_else`] and [`Outcome::unwrap_or_else`],
//! only run the closure when the result is needed.
//!
//! # Re-exports
//!
//! `outcome` re-exports [`Either`] from `itertools`, returned by
//! [`Outcome::unwrap_or_get_errors`], and [`NEVec`] with its [`nev!`] constructor from
//! `nonempty_collections`, which holds the errors of a combined failure.

mod outcome ;
mod unwrap_on_failure ;
mod combine ;
mod outcome_list ;

#[doc( no_inline )]
pub use itertools::Either ;
#[doc( no_inline )]
pub use nonempty_collections::{ NEVec, nev };

pub use outcome::Outcome ;
pub use unwrap_on_failure::UnwrapOnFailure ;
pub use combine::{ Combine, combine };
pub use outcome_list::{ OutcomeList, combine_all };
