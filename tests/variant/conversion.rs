use outcome::{ Outcome, Either };

#[test]
fn converts_from_std_result() {
	assert_eq!( Outcome::from( Ok::<_, &str>( 1 )), Outcome::Success( 1 ));
	assert_eq!( Outcome::from( Err::<u8, _>( "e" )), Outcome::Failure( "e" ));
}

#[test]
fn converts_into_std_result() {

	assert_eq!( Outcome::<_, &str>::Success( 1 ).into_result(), Ok( 1 ));
	assert_eq!( Outcome::<u8, _>::Failure( "e" ).into_result(), Err( "e" ));

	let result: Result<u8, &str> = Outcome::<u8, &str>::Success( 2 ).into();
	assert_eq!( result, Ok( 2 ));

}

#[test]
fn converts_into_either() {
	let either: Either<u8, &str> = Outcome::<u8, &str>::Failure( "e" ).into();
	assert_eq!( either, Either::Right( "e" ));
}

#[test]
fn std_result_question_mark_interoperates() {

	fn parse( text: &str ) -> Result<u8, std::num::ParseIntError> {
		let outcome: Outcome<u8, _> = text.parse::<u8>().into();
		let value = outcome.map(| value | value + 1 ).into_result()?;
		Ok( value )
	}

	assert_eq!( parse( "41" ), Ok( 42 ));
	assert!( parse( "x" ).is_err() );

}
