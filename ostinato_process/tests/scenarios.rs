// End-to-end scenarios over a twelve-note phrase.
//
// The phrase is C D E F G A B c d e f g (one diatonic octave and a fifth,
// in tinyNotation-style spelling). Expected outputs are written out as
// space-separated phrases so each scenario reads like the score it produces.

use ostinato_process::{
    Direction, Generator, ProcessConfig, ProcessError, RepetitionSpec, StepMode, StepSpec,
    additive_process, additive_process_with, subtractive_process,
};
use ostinato_seq::{Kolakoski, Primes};

const PHRASE: &str = "C D E F G A B c d e f g";

fn phrase() -> Vec<&'static str> {
    PHRASE.split_whitespace().collect()
}

/// Parse a block of expected phrases, one per non-blank line.
fn expect(block: &str) -> Vec<Vec<&str>> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect()
}

fn additive(config: ProcessConfig) -> Vec<Vec<&'static str>> {
    additive_process(&phrase(), &config).unwrap()
}

fn subtractive(config: ProcessConfig) -> Vec<Vec<&'static str>> {
    subtractive_process(&phrase(), &config).unwrap()
}

fn directed(direction: Direction) -> ProcessConfig {
    ProcessConfig::default().with_direction(direction)
}

// ---------------------------------------------------------------------------
// Additive
// ---------------------------------------------------------------------------

#[test]
fn additive_default() {
    let expected = expect(
        "
        C
        C D
        C D E
        C D E F
        C D E F G
        C D E F G A
        C D E F G A B
        C D E F G A B c
        C D E F G A B c d
        C D E F G A B c d e
        C D E F G A B c d e f
        C D E F G A B c d e f g
        ",
    );
    assert_eq!(additive(ProcessConfig::default()), expected);
}

#[test]
fn additive_backward() {
    let expected = expect(
        "
        g
        f g
        e f g
        d e f g
        c d e f g
        B c d e f g
        A B c d e f g
        G A B c d e f g
        F G A B c d e f g
        E F G A B c d e f g
        D E F G A B c d e f g
        C D E F G A B c d e f g
        ",
    );
    assert_eq!(additive(directed(Direction::Backward)), expected);
}

#[test]
fn additive_inward() {
    let expected = expect(
        "
        C g
        C D f g
        C D E e f g
        C D E F d e f g
        C D E F G c d e f g
        C D E F G A B c d e f g
        ",
    );
    assert_eq!(additive(directed(Direction::Inward)), expected);
}

#[test]
fn additive_outward() {
    let expected = expect(
        "
        A B
        G A B c
        F G A B c d
        E F G A B c d e
        D E F G A B c d e f
        C D E F G A B c d e f g
        ",
    );
    assert_eq!(additive(directed(Direction::Outward)), expected);
}

#[test]
fn additive_step_int() {
    let phrases = additive(ProcessConfig::default().with_step(StepSpec::Constant(2)));
    let lengths: Vec<usize> = phrases.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![2, 4, 6, 8, 10, 12]);
    assert_eq!(phrases.last().unwrap(), &phrase());
}

#[test]
fn additive_step_sequence() {
    let expected = expect(
        "
        C
        C D E
        C D E F G A
        C D E F G A B
        C D E F G A B c d
        C D E F G A B c d e f g
        ",
    );
    let config = ProcessConfig::default().with_step(StepSpec::Sequence(vec![1, 2, 3]));
    assert_eq!(additive(config), expected);
}

#[test]
fn additive_primes_absolute() {
    let expected = expect(
        "
        C D
        C D E
        C D E F G
        C D E F G A B
        C D E F G A B c d e f
        C D E F G A B c d e f g
        ",
    );
    let config = ProcessConfig::default()
        .with_step(StepSpec::Generator(Generator::Primes))
        .with_step_mode(StepMode::Absolute);
    assert_eq!(additive(config), expected);
}

#[test]
fn additive_cycle_absolute_stops_on_repeat() {
    let expected = expect(
        "
        C
        C D
        C D E
        ",
    );
    let config = ProcessConfig::default()
        .with_step(StepSpec::Sequence(vec![1, 2, 3]))
        .with_step_mode(StepMode::Absolute);
    assert_eq!(additive(config), expected);
}

#[test]
fn additive_repetitions_int() {
    let phrases = additive(ProcessConfig::default().with_repetitions(RepetitionSpec::Constant(2)));
    assert_eq!(phrases.len(), 24);
    for pair in phrases.chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
    assert_eq!(phrases[0], vec!["C"]);
    assert_eq!(phrases[23], phrase());
}

#[test]
fn additive_repetitions_sequence() {
    let config =
        ProcessConfig::default().with_repetitions(RepetitionSpec::Sequence(vec![1, 2, 3]));
    let lengths: Vec<usize> = additive(config).iter().map(Vec::len).collect();
    assert_eq!(
        lengths,
        vec![
            1, 2, 2, 3, 3, 3, 4, 5, 5, 6, 6, 6, 7, 8, 8, 9, 9, 9, 10, 11, 11, 12, 12, 12
        ]
    );
}

#[test]
fn additive_iterations() {
    let phrases = additive(ProcessConfig::default().with_iterations(8));
    assert_eq!(phrases.len(), 8);
    assert_eq!(phrases[7], expect("C D E F G A B c")[0]);
}

#[test]
fn additive_iterations_beyond_natural_end() {
    let phrases = additive(ProcessConfig::default().with_iterations(50));
    assert_eq!(phrases.len(), 12);
}

#[test]
fn additive_kolakoski_absolute() {
    let expected = expect(
        "
        C
        C D
        C D
        C
        C
        C D
        C
        C D
        ",
    );
    let config = ProcessConfig::default()
        .with_step(StepSpec::Generator(Generator::Kolakoski))
        .with_step_mode(StepMode::Absolute)
        .with_iterations(8);
    assert_eq!(additive(config), expected);

    // A caller-owned source gives the same result.
    let config = ProcessConfig::default()
        .with_step_mode(StepMode::Absolute)
        .with_iterations(8);
    assert_eq!(
        additive_process_with(&phrase(), &config, Kolakoski::new()).unwrap(),
        expected
    );
}

// ---------------------------------------------------------------------------
// Subtractive
// ---------------------------------------------------------------------------

#[test]
fn subtractive_default() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        D E F G A B c d e f g
        E F G A B c d e f g
        F G A B c d e f g
        G A B c d e f g
        A B c d e f g
        B c d e f g
        c d e f g
        d e f g
        e f g
        f g
        g
        ",
    );
    assert_eq!(subtractive(ProcessConfig::default()), expected);
}

#[test]
fn subtractive_backward() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        C D E F G A B c d e f
        C D E F G A B c d e
        C D E F G A B c d
        C D E F G A B c
        C D E F G A B
        C D E F G A
        C D E F G
        C D E F
        C D E
        C D
        C
        ",
    );
    assert_eq!(subtractive(directed(Direction::Backward)), expected);
}

#[test]
fn subtractive_inward() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        D E F G A B c d e f
        E F G A B c d e
        F G A B c d
        G A B c
        A B
        ",
    );
    assert_eq!(subtractive(directed(Direction::Inward)), expected);
}

#[test]
fn subtractive_outward() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        C D E F G c d e f g
        C D E F d e f g
        C D E e f g
        C D f g
        C g
        ",
    );
    assert_eq!(subtractive(directed(Direction::Outward)), expected);
}

#[test]
fn subtractive_step_int() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        E F G A B c d e f g
        G A B c d e f g
        B c d e f g
        d e f g
        f g
        ",
    );
    assert_eq!(subtractive(ProcessConfig::default().with_step(StepSpec::Constant(2))), expected);
}

#[test]
fn subtractive_step_sequence() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        D E F G A B c d e f g
        F G A B c d e f g
        B c d e f g
        c d e f g
        e f g
        ",
    );
    let config = ProcessConfig::default().with_step(StepSpec::Sequence(vec![1, 2, 3]));
    assert_eq!(subtractive(config), expected);
}

#[test]
fn subtractive_primes_absolute() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        E F G A B c d e f g
        F G A B c d e f g
        A B c d e f g
        c d e f g
        g
        ",
    );
    let config = ProcessConfig::default()
        .with_step(StepSpec::Generator(Generator::Primes))
        .with_step_mode(StepMode::Absolute);
    assert_eq!(subtractive(config), expected);
}

#[test]
fn subtractive_cycle_absolute_stops_on_repeat() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        D E F G A B c d e f g
        E F G A B c d e f g
        F G A B c d e f g
        ",
    );
    let config = ProcessConfig::default()
        .with_step(StepSpec::Sequence(vec![1, 2, 3]))
        .with_step_mode(StepMode::Absolute);
    assert_eq!(subtractive(config), expected);
}

#[test]
fn subtractive_repetitions_int() {
    let phrases =
        subtractive(ProcessConfig::default().with_repetitions(RepetitionSpec::Constant(2)));
    assert_eq!(phrases.len(), 24);
    for pair in phrases.chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
    assert_eq!(phrases[0], phrase());
    assert_eq!(phrases[23], vec!["g"]);
}

#[test]
fn subtractive_repetitions_sequence() {
    let config =
        ProcessConfig::default().with_repetitions(RepetitionSpec::Sequence(vec![1, 2, 3]));
    let lengths: Vec<usize> = subtractive(config).iter().map(Vec::len).collect();
    assert_eq!(
        lengths,
        vec![
            12, 11, 11, 10, 10, 10, 9, 8, 8, 7, 7, 7, 6, 5, 5, 4, 4, 4, 3, 2, 2, 1, 1, 1
        ]
    );
}

#[test]
fn subtractive_iterations() {
    // The untouched phrase is the starting state; the cap counts the steps after it.
    let phrases = subtractive(ProcessConfig::default().with_iterations(8));
    assert_eq!(phrases.len(), 9);
    assert_eq!(phrases[8], expect("d e f g")[0]);
}

#[test]
fn subtractive_kolakoski_absolute() {
    let expected = expect(
        "
        C D E F G A B c d e f g
        D E F G A B c d e f g
        E F G A B c d e f g
        E F G A B c d e f g
        D E F G A B c d e f g
        D E F G A B c d e f g
        E F G A B c d e f g
        D E F G A B c d e f g
        E F G A B c d e f g
        ",
    );
    let config = ProcessConfig::default()
        .with_step(StepSpec::Generator(Generator::Kolakoski))
        .with_step_mode(StepMode::Absolute)
        .with_iterations(8);
    assert_eq!(subtractive(config), expected);
}

#[test]
fn kolakoski_absolute_without_cap_stops_on_repeat() {
    let config = ProcessConfig::default()
        .with_step(StepSpec::Generator(Generator::Kolakoski))
        .with_step_mode(StepMode::Absolute);
    assert!(config.validate().is_ok());
    assert_eq!(
        additive(config.clone()),
        expect(
            "
            C
            C D
            "
        )
    );
    assert_eq!(
        subtractive(config),
        expect(
            "
            C D E F G A B c d e f g
            D E F G A B c d e f g
            E F G A B c d e f g
            "
        )
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn default_runs_produce_one_phrase_per_element() {
    for n in 1..=9 {
        let stream: Vec<usize> = (0..n).collect();
        for direction in [Direction::Forward, Direction::Backward] {
            let config = directed(direction);
            let add = additive_process(&stream, &config).unwrap();
            assert_eq!(add.len(), n);
            assert_eq!(add.last().unwrap(), &stream);

            let sub = subtractive_process(&stream, &config).unwrap();
            assert_eq!(sub.len(), n);
            assert_eq!(sub[0], stream);
            for pair in sub.windows(2) {
                assert_eq!(pair[0].len(), pair[1].len() + 1);
            }
        }
    }
}

#[test]
fn two_sided_directions_shrink_by_two() {
    let stream: Vec<usize> = (0..10).collect();
    for direction in [Direction::Inward, Direction::Outward] {
        let sub = subtractive_process(&stream, &directed(direction)).unwrap();
        assert_eq!(sub.len(), 5);
        for pair in sub.windows(2) {
            assert_eq!(pair[0].len(), pair[1].len() + 2);
        }
    }
}

#[test]
fn forward_complement_law() {
    let stream: Vec<usize> = (0..12).collect();
    for step in [1, 2, 5] {
        let config = ProcessConfig::default().with_step(StepSpec::Constant(step));
        let add = additive_process(&stream, &config).unwrap();
        let sub = subtractive_process(&stream, &config).unwrap();
        // Subtractive phrase i+1 and additive phrase i share claim i+1.
        for (claimed, rest) in add.iter().zip(sub.iter().skip(1)) {
            let mut joined = claimed.clone();
            joined.extend(rest);
            assert_eq!(joined, stream, "step {step}");
        }
    }
}

#[test]
fn two_sided_additive_phrases_are_mirror_symmetric() {
    let stream: Vec<usize> = (0..12).collect();
    for direction in [Direction::Inward, Direction::Outward] {
        for p in additive_process(&stream, &directed(direction)).unwrap() {
            for &pos in &p {
                assert!(p.contains(&(11 - pos)), "{direction}: {p:?}");
            }
        }
    }
}

#[test]
fn iteration_cap_bounds_additive_runs() {
    for k in 1..=14 {
        let phrases = additive(ProcessConfig::default().with_iterations(k));
        assert_eq!(phrases.len(), k.min(12));
    }
}

#[test]
fn primes_source_can_be_caller_owned() {
    let config = ProcessConfig::default().with_step_mode(StepMode::Absolute);
    let phrases = additive_process_with(&phrase(), &config, Primes::new()).unwrap();
    assert_eq!(phrases.len(), 6);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn configuration_errors_from_json() {
    let err = ProcessConfig::from_json(r#"{"step": 0}"#).unwrap_err();
    assert!(matches!(err, ProcessError::InvalidStep { value: 0 }));

    let err = ProcessConfig::from_json(r#"{"repetitions": []}"#).unwrap_err();
    assert!(matches!(err, ProcessError::EmptyRepetitionSequence));

    let err = ProcessConfig::from_json(r#"{"direction": "diagonal"}"#).unwrap_err();
    assert!(matches!(err, ProcessError::Config(_)));
}

#[test]
fn json_config_drives_a_run() {
    let config = ProcessConfig::from_json(
        r#"{"direction": "inward", "step": 2, "repetitions": [1, 2]}"#,
    )
    .unwrap();
    let lengths: Vec<usize> = additive(config).iter().map(Vec::len).collect();
    // Two per side per step: 4, 8, then the full 12.
    assert_eq!(lengths, vec![4, 8, 8, 12]);
}
