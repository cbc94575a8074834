//! Bet catalogue construction tests.

use roulette::{
    BIN_COUNT, BinBuilder, COLUMN_ODDS, CORNER_ODDS, DOUBLE_ZERO, DOZEN_ODDS, EVEN_MONEY_ODDS,
    FIVE_BET_ODDS, LINE_ODDS, OddsPolicy, Outcome, RED_NUMBERS, SPLIT_ODDS, STRAIGHT_ODDS,
    STREET_ODDS, Wheel, WheelError, WheelOptions,
};

fn empty_wheel() -> Wheel {
    Wheel::new(WheelOptions::default(), 1)
}

fn assert_in(wheel: &Wheel, name: &str, odds: usize, bins: &[usize]) {
    let outcome = Outcome::new(name, odds);
    for &n in bins {
        let bin = wheel.get(n).unwrap();
        assert!(bin.contains(&outcome), "{outcome} missing from bin {n}");
        assert_eq!(bin.get(name).map(Outcome::odds), Some(odds));
    }
}

fn count_with_prefix(wheel: &Wheel, prefix: &str) -> usize {
    wheel
        .outcomes()
        .filter(|o| o.name().starts_with(prefix))
        .count()
}

#[test]
fn straight_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().straight(&mut wheel).unwrap();

    for n in 0..DOUBLE_ZERO {
        assert_in(&wheel, &format!("Straight {n}"), STRAIGHT_ODDS, &[n]);
    }
    assert_in(&wheel, "Straight 00", STRAIGHT_ODDS, &[DOUBLE_ZERO]);
    assert!(wheel.bins().iter().all(|bin| bin.len() == 1));
    assert_eq!(wheel.outcome_count(), 38);
}

#[test]
fn split_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().split(&mut wheel).unwrap();

    for row in 0..12 {
        let n = 3 * row + 1;
        assert_in(&wheel, &format!("Split {}-{}", n, n + 1), SPLIT_ODDS, &[n, n + 1]);
        let n = 3 * row + 2;
        assert_in(&wheel, &format!("Split {}-{}", n, n + 1), SPLIT_ODDS, &[n, n + 1]);
    }
    for n in 1..=33 {
        assert_in(&wheel, &format!("Split {}-{}", n, n + 3), SPLIT_ODDS, &[n, n + 3]);
    }

    assert_in(&wheel, "Split 1-2", SPLIT_ODDS, &[1, 2]);
    assert_in(&wheel, "Split 1-4", SPLIT_ODDS, &[1, 4]);
    assert!(wheel.get_outcome("Split 3-4").is_none());
    assert_eq!(wheel.outcome_count(), 24 + 33);
    assert!(wheel.get(0).unwrap().is_empty());
    assert_eq!(wheel.get(5).unwrap().len(), 4);
}

#[test]
fn street_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().street(&mut wheel).unwrap();

    for row in 0..12 {
        let n = 3 * row + 1;
        let name = format!("Street {}-{}-{}", n, n + 1, n + 2);
        assert_in(&wheel, &name, STREET_ODDS, &[n, n + 1, n + 2]);
    }
    assert_eq!(wheel.outcome_count(), 12);
}

#[test]
fn corner_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().corner(&mut wheel).unwrap();

    for row in 0..11 {
        for n in [3 * row + 1, 3 * row + 2] {
            let name = format!("Corner {}-{}-{}-{}", n, n + 1, n + 3, n + 4);
            assert_in(&wheel, &name, CORNER_ODDS, &[n, n + 1, n + 3, n + 4]);
        }
    }

    assert_in(&wheel, "Corner 1-2-4-5", CORNER_ODDS, &[1, 2, 4, 5]);
    assert_eq!(wheel.outcome_count(), 22);
    assert_eq!(wheel.get(5).unwrap().len(), 4);
    assert_eq!(wheel.get(1).unwrap().len(), 1);
}

#[test]
fn line_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().line(&mut wheel).unwrap();

    for row in 0..11 {
        let n = 3 * row + 1;
        let name = format!(
            "Line {}-{}-{}-{}-{}-{}",
            n,
            n + 1,
            n + 2,
            n + 3,
            n + 4,
            n + 5
        );
        let bins: Vec<usize> = (n..n + 6).collect();
        assert_in(&wheel, &name, LINE_ODDS, &bins);
    }
    assert_eq!(wheel.outcome_count(), 11);
}

#[test]
fn dozen_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().dozen(&mut wheel).unwrap();

    for d in 0..3 {
        let bins: Vec<usize> = (1..=12).map(|n| 12 * d + n).collect();
        assert_in(&wheel, &format!("Dozen {}", d + 1), DOZEN_ODDS, &bins);
    }
    assert!((1..=36).all(|n| wheel.get(n).unwrap().len() == 1));
}

#[test]
fn column_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().column(&mut wheel).unwrap();

    for c in 1..=3 {
        let bins: Vec<usize> = (1..=36).filter(|n| (n - 1) % 3 == c - 1).collect();
        assert_eq!(bins.len(), 12);
        assert_in(&wheel, &format!("Column {c}"), COLUMN_ODDS, &bins);
    }
    assert!((1..=36).all(|n| wheel.get(n).unwrap().len() == 1));
}

#[test]
fn even_money_bets() {
    let mut wheel = empty_wheel();
    BinBuilder::new().even_money(&mut wheel).unwrap();

    for n in 1..=36 {
        let bin = wheel.get(n).unwrap();
        assert_eq!(bin.len(), 3);

        assert!(bin.contains_name("Low") ^ bin.contains_name("High"));
        assert!(bin.contains_name("Even") ^ bin.contains_name("Odd"));
        assert!(bin.contains_name("Red") ^ bin.contains_name("Black"));

        assert_eq!(bin.contains_name("Low"), n <= 18);
        assert_eq!(bin.contains_name("Even"), n % 2 == 0);
        assert_eq!(bin.contains_name("Red"), RED_NUMBERS.contains(&n));
        assert!(bin.iter().all(|o| o.odds() == EVEN_MONEY_ODDS));
    }
    assert!(wheel.get(0).unwrap().is_empty());
    assert!(wheel.get(DOUBLE_ZERO).unwrap().is_empty());
    assert_eq!(wheel.outcome_count(), 6);
}

#[test]
fn five_bet() {
    let mut wheel = empty_wheel();
    BinBuilder::new().five(&mut wheel).unwrap();

    assert_in(&wheel, "Five Bet", FIVE_BET_ODDS, &[0, 1, 2, 3, DOUBLE_ZERO]);
    let covered = wheel.bins().iter().filter(|bin| !bin.is_empty()).count();
    assert_eq!(covered, 5);
}

#[test]
fn build_bins_covers_every_bin() {
    let wheel = BinBuilder::build_wheel(WheelOptions::default(), 1).unwrap();

    assert!((0..BIN_COUNT).all(|n| !wheel.get(n).unwrap().is_empty()));

    assert_in(&wheel, "Straight 0", STRAIGHT_ODDS, &[0]);
    assert_in(&wheel, "Five Bet", FIVE_BET_ODDS, &[0, DOUBLE_ZERO]);
    assert_in(&wheel, "Straight 00", STRAIGHT_ODDS, &[DOUBLE_ZERO]);
    assert_eq!(wheel.get(0).unwrap().len(), 2);
    assert_eq!(wheel.get(DOUBLE_ZERO).unwrap().len(), 2);

    // Straight, two splits, street, corner, line, dozen, column, three even-money, five.
    assert_eq!(wheel.get(1).unwrap().len(), 12);
    // Straight, four splits, street, four corners, two lines, dozen, column, three even-money.
    assert_eq!(wheel.get(5).unwrap().len(), 17);
}

#[test]
fn build_bins_registers_the_full_catalogue() {
    let wheel = BinBuilder::build_wheel(WheelOptions::default(), 1).unwrap();

    assert_eq!(wheel.outcome_count(), 38 + 57 + 12 + 22 + 11 + 3 + 3 + 6 + 1);
    assert_eq!(count_with_prefix(&wheel, "Straight "), 38);
    assert_eq!(count_with_prefix(&wheel, "Split "), 57);
    assert_eq!(count_with_prefix(&wheel, "Street "), 12);
    assert_eq!(count_with_prefix(&wheel, "Corner "), 22);
    assert_eq!(count_with_prefix(&wheel, "Line "), 11);
    assert_eq!(count_with_prefix(&wheel, "Dozen "), 3);
    assert_eq!(count_with_prefix(&wheel, "Column "), 3);

    for name in ["Low", "High", "Even", "Odd", "Red", "Black"] {
        assert_eq!(
            wheel.get_outcome(name).map(Outcome::odds),
            Some(EVEN_MONEY_ODDS)
        );
    }
}

#[test]
fn bins_share_the_registered_odds() {
    let wheel = BinBuilder::build_wheel(WheelOptions::default(), 1).unwrap();

    for bin in wheel.bins() {
        for outcome in bin {
            let registered = wheel.get_outcome(outcome.name()).unwrap();
            assert_eq!(registered.odds(), outcome.odds());
        }
    }
}

#[test]
fn building_is_deterministic() {
    let first = BinBuilder::build_wheel(WheelOptions::default(), 1).unwrap();
    let second = BinBuilder::build_wheel(WheelOptions::default(), 2).unwrap();

    assert_eq!(first.bins(), second.bins());
}

#[test]
fn building_twice_adds_nothing() {
    let builder = BinBuilder::new();
    let mut wheel = empty_wheel();
    builder.build_bins(&mut wheel).unwrap();
    let sizes: Vec<usize> = wheel.bins().iter().map(|bin| bin.len()).collect();
    let count = wheel.outcome_count();

    builder.build_bins(&mut wheel).unwrap();

    let again: Vec<usize> = wheel.bins().iter().map(|bin| bin.len()).collect();
    assert_eq!(sizes, again);
    assert_eq!(count, wheel.outcome_count());
}

#[test]
fn conflicting_preexisting_outcome_stops_a_strict_build() {
    let mut wheel = empty_wheel();
    wheel.add_outcome(0, Outcome::new("Five Bet", 8)).unwrap();

    assert_eq!(
        BinBuilder::new().build_bins(&mut wheel),
        Err(WheelError::OddsMismatch {
            name: "Five Bet".to_string(),
            registered: 8,
            attempted: FIVE_BET_ODDS,
        })
    );
}

#[test]
fn lenient_build_keeps_preexisting_odds() {
    let options = WheelOptions::default().with_odds_policy(OddsPolicy::Lenient);
    let mut wheel = Wheel::new(options, 1);
    wheel.add_outcome(0, Outcome::new("Five Bet", 8)).unwrap();

    BinBuilder::new().build_bins(&mut wheel).unwrap();

    for n in [0, 1, 2, 3, DOUBLE_ZERO] {
        let bin = wheel.get(n).unwrap();
        assert_eq!(bin.get("Five Bet").map(Outcome::odds), Some(8));
    }
}
