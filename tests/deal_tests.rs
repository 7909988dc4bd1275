use tacpuzzle::deal::check_deal;
use tacpuzzle::{load_catalogue_from_json, rng_for_deal, Card, Catalogue, DealGenerator, DealRules, Solver};

#[test]
fn thousand_deals_keep_their_promise() {
    let catalogue = Catalogue::standard();
    let generator = DealGenerator::new(&catalogue).unwrap();
    let mut solver = Solver::new();
    let mut forced = 0;
    for id in 0..1000u64 {
        let deal = generator.generate(&mut rng_for_deal(0x00C0_FFEE, id));
        assert!(!deal.board.is_player_home(), "deal {id} starts home");
        assert_eq!(deal.board.enemies_present(), 2, "deal {id} is missing an enemy");
        if let Err(e) = check_deal(&deal, &mut solver) {
            panic!("deal {id}: {e}");
        }
        if let Some(fs) = deal.forced_swap {
            assert!(fs.slot < 5);
            assert!(catalogue.cards.contains(&fs.card));
            forced += 1;
        }
    }
    // Roughly half of the deals owe a swap.
    assert!((150..850).contains(&forced), "forced swaps: {forced}");
}

#[test]
fn same_seed_same_deal() {
    let catalogue = Catalogue::standard();
    let generator = DealGenerator::new(&catalogue).unwrap();
    let a = generator.generate(&mut rng_for_deal(42, 7));
    let b = generator.generate(&mut rng_for_deal(42, 7));
    assert_eq!(a, b);
}

#[test]
fn plain_rules_never_force_a_swap() {
    let catalogue = Catalogue::standard();
    let generator = DealGenerator::new(&catalogue).unwrap().with_rules(DealRules::plain()).unwrap();
    let mut solver = Solver::new();
    for id in 0..100u64 {
        let deal = generator.generate(&mut rng_for_deal(3, id));
        assert!(deal.forced_swap.is_none());
        assert!(solver.exists(&deal.board, &deal.hand()));
    }
}

#[test]
fn trickster_variant_always_deals_a_trickster() {
    let catalogue = load_catalogue_from_json("data/trickster_variant.json").expect("catalogue load");
    let generator = DealGenerator::new(&catalogue).unwrap();
    assert!(generator.rules().require_trickster);
    let mut solver = Solver::new();
    for id in 0..100u64 {
        let deal = generator.generate(&mut rng_for_deal(9, id));
        assert!(deal.has_trickster(), "deal {id} has no Trickster");
        check_deal(&deal, &mut solver).unwrap();
    }
}

#[test]
fn empty_catalogue_is_rejected() {
    let empty = Catalogue {
        cards: Vec::new(),
        rules: DealRules::default(),
    };
    assert!(DealGenerator::new(&empty).is_err());
}

#[test]
fn trickster_requirement_needs_a_trickster_in_the_catalogue() {
    let numbers = Catalogue {
        cards: vec![Card::number(1), Card::number(2)],
        rules: DealRules::new(false, true),
    };
    let err = DealGenerator::new(&numbers).err().expect("no Trickster to deal");
    assert!(err.contains("Trickster"), "{err}");

    let plain = Catalogue {
        rules: DealRules::plain(),
        ..numbers.clone()
    };
    let generator = DealGenerator::new(&plain).unwrap();
    assert!(generator.with_rules(DealRules::new(true, true)).is_err());

    let standard = Catalogue::standard();
    let generator = DealGenerator::new(&standard).unwrap();
    assert!(generator.with_rules(DealRules::new(false, true)).is_ok());
}
