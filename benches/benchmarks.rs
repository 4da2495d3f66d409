criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_strength,
        simulating_flop_equity,
        scanning_flop_outs,
}

fn flop() -> Spot {
    let request = Request {
        player_cards: vec!["Ah".to_string(), "Kh".to_string()],
        board_cards: vec!["2h".to_string(), "7h".to_string(), "9s".to_string()],
        num_opponents: 2,
    };
    Spot::try_from(&request).expect("valid spot")
}

fn evaluating_river_strength(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card hand", |b| {
        let ref mut rng = rand::rng();
        let deck = Deck::new().shuffled(rng);
        let hand = deck.cards()[..7]
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add);
        b.iter(|| Strength::from(hand))
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    let spot = flop();
    c.bench_function("estimate flop equity over 10k trials", |b| {
        b.iter(|| Simulator::new(spot, 10_000, 42).run())
    });
}

fn scanning_flop_outs(c: &mut criterion::Criterion) {
    let spot = flop();
    c.bench_function("exhaust flop outs", |b| b.iter(|| Outs::from(&spot)));
}

use oddsmith::cards::deck::Deck;
use oddsmith::cards::hand::Hand;
use oddsmith::cards::strength::Strength;
use oddsmith::equity::outs::Outs;
use oddsmith::equity::simulation::Simulator;
use oddsmith::equity::spot::Request;
use oddsmith::equity::spot::Spot;
