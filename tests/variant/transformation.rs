use std::cell::Cell ;
use outcome::Outcome ;

#[test]
fn map_applies_to_success() {
	assert_eq!( Outcome::<_, &str>::Success( 2 ).map(| value | value * 10 ), Outcome::Success( 20 ));
}

#[test]
fn map_skips_failure() {

	let called = Cell::new( false );
	let mapped = Outcome::<u32, _>::Failure( "e" ).map(| value | { called.set( true ); value.to_string() });

	assert_eq!( mapped, Outcome::Failure( "e" ));
	assert!( !called.get() );

}

#[test]
fn map_identity_and_composition() {

	let outcome = Outcome::<i64, &str>::Success( 5 );
	let double = | value: i64 | value * 2 ;
	let negate = | value: i64 | -value ;

	assert_eq!( outcome.map(| value | value ), outcome );
	assert_eq!( outcome.map( double ).map( negate ), outcome.map(| value | negate( double( value ))));

}

#[test]
fn map_fails_applies_to_failure() {
	assert_eq!(
		Outcome::<u8, _>::Failure( "short" ).map_fails( str::len ),
		Outcome::Failure( 5 ),
	);
}

#[test]
fn map_fails_skips_success() {

	let called = Cell::new( false );
	let mapped = Outcome::<_, &str>::Success( 3 ).map_fails(| error | { called.set( true ); error.len() });

	assert_eq!( mapped, Outcome::Success( 3 ));
	assert!( !called.get() );

}

#[test]
fn map_fails_identity() {
	let outcome = Outcome::<u8, &str>::Failure( "e" );
	assert_eq!( outcome.map_fails(| error | error ), outcome );
}

#[test]
fn flat_map_chains_successes() {

	let outcome = Outcome::<_, String>::Success( 4 )
		.flat_map(| value | Outcome::Success( value + 1 ))
		.flat_map(| value | Outcome::Success( format!( "#{}", value )));

	assert_eq!( outcome, Outcome::Success( "#5".to_string() ));

}

#[test]
fn flat_map_returns_step_failure() {

	let outcome = Outcome::<_, &str>::Success( 4 )
		.flat_map(| _ | Outcome::<u8, _>::Failure( "step failed" ))
		.flat_map(| value | Outcome::Success( value + 1 ));

	assert_eq!( outcome, Outcome::Failure( "step failed" ));

}

#[test]
fn flat_map_short_circuits_failure() {

	let called = Cell::new( false );
	let outcome = Outcome::<u8, _>::Failure( "first" )
		.flat_map(| value | { called.set( true ); Outcome::Success( value )});

	assert_eq!( outcome, Outcome::Failure( "first" ));
	assert!( !called.get() );

}

#[test]
fn flip_swaps_variants() {
	assert_eq!( Outcome::<u8, &str>::Success( 1 ).flip(), Outcome::Failure( 1 ));
	assert_eq!( Outcome::<u8, &str>::Failure( "e" ).flip(), Outcome::Success( "e" ));
}

#[test]
fn flip_is_an_involution() {

	let success = Outcome::<u8, &str>::Success( 1 );
	let failure = Outcome::<u8, &str>::Failure( "e" );

	assert_eq!( success.flip().flip(), success );
	assert_eq!( failure.flip().flip(), failure );

}
