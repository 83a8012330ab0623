use fairshare_domain::{
    Balances, Money, Participant, ParticipantId, SharedExpense, Transfer, ValidationError,
    compute_balances, resolve_settlements, settle_group,
};
use rstest::{fixture, rstest};

const EVERYONE: [&str; 4] = ["p1", "p2", "p3", "p4"];

#[fixture]
fn travelers() -> Vec<Participant> {
    vec![
        Participant::new("p1", "You"),
        Participant::new("p2", "Alex"),
        Participant::new("p3", "Jamie"),
        Participant::new("p4", "Taylor"),
    ]
}

#[fixture]
fn barcelona_expenses() -> Vec<SharedExpense> {
    vec![
        SharedExpense::equal("e1", Money::from_i64(45_000), "p1", EVERYONE)
            .with_category("Accommodation")
            .with_description("Hotel Booking"),
        SharedExpense::equal("e2", Money::from_i64(18_000), "p2", EVERYONE)
            .with_category("Transportation")
            .with_description("Train Tickets"),
        SharedExpense::equal("e3", Money::from_i64(12_000), "p3", EVERYONE)
            .with_category("Food")
            .with_description("Tapas Dinner"),
        SharedExpense::equal("e4", Money::from_i64(3_000), "p4", EVERYONE)
            .with_category("Activities")
            .with_description("Museum Tickets"),
    ]
}

fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
    Transfer {
        from: ParticipantId::from(from),
        to: ParticipantId::from(to),
        amount: Money::from_i64(amount),
    }
}

#[rstest]
fn weekend_trip_reconciles_every_traveler(
    travelers: Vec<Participant>,
    barcelona_expenses: Vec<SharedExpense>,
) {
    let settlement = settle_group(&travelers, &barcelona_expenses).expect("trip should settle");

    let expected_balances: Balances = [
        ("p1", 25_500),
        ("p2", -1_500),
        ("p3", -7_500),
        ("p4", -16_500),
    ]
    .into_iter()
    .map(|(id, amount)| (ParticipantId::from(id), Money::from_i64(amount)))
    .collect();
    assert_eq!(settlement.balances, expected_balances);

    assert_eq!(
        settlement.transfers,
        vec![
            transfer("p4", "p1", 16_500),
            transfer("p3", "p1", 7_500),
            transfer("p2", "p1", 1_500),
        ]
    );

    for (id, balance) in &settlement.balances {
        let paid: Money = settlement
            .transfers
            .iter()
            .filter(|t| &t.from == id)
            .map(|t| t.amount)
            .sum();
        let received: Money = settlement
            .transfers
            .iter()
            .filter(|t| &t.to == id)
            .map(|t| t.amount)
            .sum();
        assert_eq!(*balance + paid - received, Money::ZERO, "{id} not settled");
    }
}

#[test]
fn hundred_split_three_ways_favours_lowest_id() {
    let participants = [
        Participant::new("a", "A"),
        Participant::new("b", "B"),
        Participant::new("c", "C"),
    ];
    let expenses = [SharedExpense::equal(
        "e1",
        Money::from_i64(100),
        "a",
        ["c", "b", "a"],
    )];

    let balances = compute_balances(&participants, &expenses).expect("balances");

    // a paid 100 and owes 34, b and c owe 33 each.
    assert_eq!(balances.get("a"), Some(&Money::from_i64(66)));
    assert_eq!(balances.get("b"), Some(&Money::from_i64(-33)));
    assert_eq!(balances.get("c"), Some(&Money::from_i64(-33)));
}

#[test]
fn single_debtor_pays_creditors_largest_first() {
    let balances: Balances = [("a", -50), ("b", 30), ("c", 20)]
        .into_iter()
        .map(|(id, amount)| (ParticipantId::from(id), Money::from_i64(amount)))
        .collect();

    let transfers = resolve_settlements(&balances).expect("transfers");

    assert_eq!(
        transfers,
        vec![transfer("a", "b", 30), transfer("a", "c", 20)]
    );
    let total: Money = transfers.iter().map(|t| t.amount).sum();
    assert_eq!(total, Money::from_i64(50));
}

#[rstest]
fn unknown_participant_is_rejected(travelers: Vec<Participant>) {
    let expenses = [SharedExpense::equal(
        "e9",
        Money::from_i64(1_000),
        "p1",
        ["p1", "z"],
    )];

    assert_eq!(
        compute_balances(&travelers, &expenses),
        Err(ValidationError::UnknownParticipant {
            expense: "e9".to_string(),
            participant: ParticipantId::from("z"),
        })
    );
}

#[test]
fn imbalanced_balances_are_rejected() {
    let balances: Balances = [("a", -10), ("b", 15)]
        .into_iter()
        .map(|(id, amount)| (ParticipantId::from(id), Money::from_i64(amount)))
        .collect();

    assert_eq!(
        resolve_settlements(&balances),
        Err(ValidationError::ImbalancedTotal(Money::from_i64(5)))
    );
}
