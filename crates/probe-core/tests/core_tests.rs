use std::sync::Arc;

use probe_core::{Error, ModelConfig, ModelKind, TrainableOptions, WordRepresentation};

/// Implements the capability without supplying `forward`.
struct AbstractModel;

impl WordRepresentation<Vec<Vec<f32>>> for AbstractModel {
    type Output = Vec<Vec<f32>>;
}

#[test]
fn abstract_model_always_fails_with_not_implemented() {
    let model = AbstractModel;
    for batch in [vec![], vec![vec![0.5f32; 4]], vec![vec![1.0, 2.0], vec![3.0]]] {
        let err = model.forward(batch).expect_err("abstract forward must fail");
        assert!(err.is_not_implemented(), "unexpected error: {err}");
    }
}

#[test]
fn not_implemented_names_the_model() {
    let err = AbstractModel.forward(vec![]).expect_err("abstract forward must fail");
    match err {
        Error::NotImplemented { model } => assert!(model.ends_with("AbstractModel"), "model={model}"),
        other => panic!("expected NotImplemented, got {other:?}"),
    }
}

#[test]
fn abstract_model_is_shareable_across_threads() {
    let model = Arc::new(AbstractModel);
    std::thread::scope(|s| {
        for _ in 0..4 {
            let model = Arc::clone(&model);
            s.spawn(move || assert!(model.forward(vec![vec![0.0]]).is_err()));
        }
    });
}

#[test]
fn model_kind_parses_current_and_legacy_names() {
    assert_eq!("disk".parse::<ModelKind>().expect("disk"), ModelKind::Disk);
    assert_eq!("Trainable".parse::<ModelKind>().expect("trainable"), ModelKind::Trainable);
    for legacy in ["ELMo-disk", "BERT-disk", "BERT-base-disk", "BERT-large-disk"] {
        assert_eq!(legacy.parse::<ModelKind>().expect(legacy), ModelKind::Disk);
    }
}

#[test]
fn model_kind_rejects_unknown_names() {
    let err = "gpt-live".parse::<ModelKind>().expect_err("unknown kind");
    assert!(matches!(err, Error::InvalidConfig(_)), "unexpected error: {err}");
}

#[test]
fn model_kind_serializes_lowercase() {
    let json = serde_json::to_string(&ModelKind::Trainable).expect("serialize");
    assert_eq!(json, "\"trainable\"");
    let back: ModelKind = serde_json::from_str("\"ELMo-disk\"").expect("deserialize");
    assert_eq!(back, ModelKind::Disk);
}

#[test]
fn trainable_options_accept_arbitrary_keys() {
    let opts: TrainableOptions =
        serde_json::from_str(r#"{"layers": 12, "dropout": 0.1, "encoder": {"name": "x"}}"#).expect("options");
    assert_eq!(opts, TrainableOptions::default());
}

#[test]
fn model_config_tolerates_missing_and_extra_fields() {
    let empty: ModelConfig = serde_json::from_str("{}").expect("empty section");
    assert_eq!(empty, ModelConfig::default());

    let extra: ModelConfig =
        serde_json::from_str(r#"{"kind": "trainable", "use_disk": true, "model_layer": 2}"#).expect("extra keys");
    assert_eq!(extra.kind, ModelKind::Trainable);
    assert_eq!(extra.hidden_dim, 1024);
}
