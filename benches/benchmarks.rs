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
        enumerating_combinations,
        predicting_initial_split,
        replaying_five_turns,
}

const START: [Creature; 8] = [
    Creature::Titan,
    Creature::Angel,
    Creature::Gargoyle,
    Creature::Gargoyle,
    Creature::Centaur,
    Creature::Centaur,
    Creature::Ogre,
    Creature::Ogre,
];

fn enumerating_combinations(c: &mut criterion::Criterion) {
    c.bench_function("enumerate distinct 4-of-8 selections", |b| {
        b.iter(|| combos::combinations(&START, 4))
    });
}

fn predicting_initial_split(c: &mut criterion::Criterion) {
    let ref legion = Legion::root("Rd01", &START);
    c.bench_function("predict a starting legion's 4-4 split", |b| {
        b.iter(|| Prediction::compute(legion, 4, &[], &[]))
    });
}

fn replaying_five_turns(c: &mut criterion::Criterion) {
    let events = include_str!("../demos/five_turns.jsonl")
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()
        .expect("demo script parses");
    c.bench_function("replay five turns of one player", |b| {
        b.iter(|| {
            let mut forest = Forest::default();
            events
                .iter()
                .try_for_each(|event| forest.apply(event))
                .expect("demo script replays");
            forest
        })
    });
}

use predict_splits::combos;
use predict_splits::creature::Creature;
use predict_splits::forest::Event;
use predict_splits::forest::Forest;
use predict_splits::legion::Legion;
use predict_splits::split::Prediction;
