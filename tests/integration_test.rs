// Integration tests for Guesstalt
use guesstalt::{
    GuessOutcome, GuessRejection, RadiusScale, RankingBuild, RankingTable, Session,
    TargetSelection, VariantMap, Vector, Vocabulary, WordPayload,
};
use std::io::Write;
use std::sync::Arc;

fn tiny_vocabulary() -> Arc<Vocabulary> {
    Arc::new(
        Vocabulary::new(
            vec!["cat".to_string(), "dog".to_string(), "car".to_string()],
            vec![
                Vector::new(vec![1.0, 0.0]),
                Vector::new(vec![0.9, 0.1]),
                Vector::new(vec![0.0, 1.0]),
            ],
        )
        .unwrap(),
    )
}

#[test]
fn test_ranking_against_cat() {
    let vocabulary = tiny_vocabulary();
    let table = RankingTable::build(&vocabulary, 0).unwrap();

    let cat = table.lookup("cat").unwrap();
    assert_eq!(cat.rank, 1);
    assert!((cat.similarity - 1.0).abs() < 1e-6);

    // cosine(cat, dog) ≈ 0.994 beats cosine(cat, car) = 0
    let dog = table.lookup("dog").unwrap();
    let car = table.lookup("car").unwrap();
    assert!((dog.similarity - 0.994).abs() < 0.01);
    assert!(car.similarity.abs() < 1e-6);
    assert!(dog.rank < car.rank);
}

#[test]
fn test_guess_normalization_end_to_end() {
    let mut session = Session::new(
        tiny_vocabulary(),
        None,
        &TargetSelection::Word("cat".to_string()),
    )
    .unwrap();

    // mixed case with trailing whitespace normalizes to "dog"
    let record = match session.submit("DOG ") {
        GuessOutcome::Accepted(record) => record,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(record.word, "dog");
    assert_eq!(record.sequence, 1);

    // re-guessing is rejected and does not grow the history
    assert_eq!(
        session.submit("dog"),
        GuessOutcome::Rejected(GuessRejection::DuplicateGuess("dog".to_string()))
    );
    assert_eq!(session.guess_count(), 1);

    assert_eq!(
        session.submit("zeppelin"),
        GuessOutcome::Rejected(GuessRejection::OutOfVocabulary("zeppelin".to_string()))
    );

    let record = match session.submit("cat") {
        GuessOutcome::Accepted(record) => record,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert!(record.is_correct);
    assert_eq!(record.sequence, 2);
    assert!(session.is_solved());
}

#[test]
fn test_variants_score_as_their_canonical_form() {
    let variants: VariantMap = [("kitties".to_string(), "cat".to_string())]
        .into_iter()
        .collect();
    let mut session = Session::new(
        tiny_vocabulary(),
        Some(variants),
        &TargetSelection::Word("cat".to_string()),
    )
    .unwrap();

    let record = match session.submit("Kitties") {
        GuessOutcome::Accepted(record) => record,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(record.word, "cat");
    assert!(record.is_correct);
}

#[test]
fn test_daily_target_is_stable_across_sessions() {
    let vocabulary = tiny_vocabulary();
    let selection = TargetSelection::Daily("2026-08-07".to_string());
    let a = Session::new(vocabulary.clone(), None, &selection).unwrap();
    let b = Session::new(vocabulary, None, &selection).unwrap();
    assert_eq!(a.target_word(), b.target_word());
}

#[test]
fn test_background_build_agrees_with_foreground() {
    let vocabulary = tiny_vocabulary();
    let foreground = RankingTable::build(&vocabulary, 1).unwrap();

    let build = RankingBuild::spawn(vocabulary.clone(), 1).unwrap();
    let background = build.join().expect("not cancelled").unwrap();

    for word in vocabulary.words() {
        assert_eq!(background.lookup(word), foreground.lookup(word));
    }
}

#[test]
fn test_visualization_pipeline() {
    let vocabulary = Arc::new(
        Vocabulary::new(
            vec![
                "sun".to_string(),
                "moon".to_string(),
                "star".to_string(),
                "rock".to_string(),
            ],
            vec![
                Vector::new(vec![1.0, 0.0, 0.0]),
                Vector::new(vec![0.8, 0.6, 0.0]),
                Vector::new(vec![0.7, 0.0, 0.7]),
                Vector::new(vec![0.0, 0.0, 1.0]),
            ],
        )
        .unwrap(),
    );
    let mut session = Session::new(
        vocabulary,
        None,
        &TargetSelection::Word("sun".to_string()),
    )
    .unwrap();

    session.submit("moon");
    session.submit("rock");
    session.submit("star");

    let points = session.plot(&RadiusScale::default()).unwrap();
    assert_eq!(points.len(), 3);

    // every non-target point sits exactly on its rank radius
    let scale = RadiusScale::default();
    for point in &points {
        let expected = scale.radius(point.rank, 4).unwrap();
        let len = (point.position[0].powi(2)
            + point.position[1].powi(2)
            + point.position[2].powi(2))
        .sqrt();
        assert!((len - expected).abs() < 1e-4);
    }

    // the basis itself is orthonormal
    let basis = session.projection_basis().unwrap();
    let axes = basis.axes();
    for i in 0..3 {
        assert!((axes[i].norm() - 1.0).abs() < 1e-4);
        for j in (i + 1)..3 {
            assert!(axes[i].dot(&axes[j]).unwrap().abs() < 1e-4);
        }
    }
}

#[test]
fn test_hot_pair_surfaces_between_guesses() {
    // target on the diagonal between the two guessed axes
    let vocabulary = Arc::new(
        Vocabulary::new(
            vec!["mid".to_string(), "left".to_string(), "right".to_string()],
            vec![
                Vector::new(vec![1.0, 1.0, 0.0]).normalized(),
                Vector::new(vec![1.0, 0.0, 0.0]),
                Vector::new(vec![0.0, 1.0, 0.0]),
            ],
        )
        .unwrap(),
    );
    let mut session = Session::new(
        vocabulary,
        None,
        &TargetSelection::Word("mid".to_string()),
    )
    .unwrap();

    session.submit("left");
    session.submit("right");

    let pairs = session.hot_pairs(0.01).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].word_a, "left");
    assert_eq!(pairs[0].word_b, "right");
    assert!(pairs[0].improvement > 0.0);
}

#[test]
fn test_payload_roundtrip_through_disk() {
    let payload = WordPayload {
        words: vec!["cat".to_string(), "dog".to_string(), "car".to_string()],
        vectors: vec![vec![1.0, 0.0], vec![0.9, 0.1], vec![0.0, 1.0]],
        model: Some("test-embeddings".to_string()),
        dimensions: Some(2),
    };

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&payload).unwrap().as_bytes())
        .unwrap();

    let loaded = WordPayload::load(file.path()).unwrap();
    let vocabulary = Arc::new(loaded.into_vocabulary().unwrap());
    assert_eq!(vocabulary.len(), 3);

    let mut session = Session::new(
        vocabulary,
        None,
        &TargetSelection::Word("cat".to_string()),
    )
    .unwrap();
    assert!(session.submit("dog").is_accepted());
}
