use outcome::{ Outcome, OutcomeList, nev };

fn sample() -> Vec<Outcome<u8, char>> {
	vec![
		Outcome::Failure( 'a' ),
		Outcome::Success( 1 ),
		Outcome::Success( 2 ),
		Outcome::Failure( 'b' ),
		Outcome::Success( 3 ),
	]
}

#[test]
fn outcome_list_partitions_in_order() {

	let list = sample().into_iter().collect::<OutcomeList<_, _>>();

	assert_eq!( list.successful(), &[ 1, 2, 3 ]);
	assert_eq!( list.failed(), &[ 'a', 'b' ]);
	assert_eq!( list.deconstruct(), ( vec![ 1, 2, 3 ], vec![ 'a', 'b' ]));

}

#[test]
fn outcome_list_extends() {

	let mut list = OutcomeList::default();
	list.extend( sample() );
	list.extend([ Outcome::Failure( 'c' ), Outcome::Success( 4 )]);

	assert_eq!( list.successful(), &[ 1, 2, 3, 4 ]);
	assert_eq!( list.failed(), &[ 'a', 'b', 'c' ]);

}

#[test]
fn outcome_list_into_outcome() {

	assert_eq!(
		sample().into_iter().collect::<OutcomeList<_, _>>().into_outcome(),
		Outcome::Failure( nev![ 'a', 'b' ]),
	);

	let successes = [ Outcome::<_, char>::Success( 1 ), Outcome::Success( 2 )]
		.into_iter()
		.collect::<OutcomeList<_, _>>();
	assert_eq!( successes.into_outcome(), Outcome::Success( vec![ 1, 2 ]));

}
