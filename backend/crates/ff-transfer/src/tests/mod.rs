
use ff_core::{
    FeatureEnvironmentSchema, FeatureSchema, FeatureTag, ImportPayload, StrategySchema, TagType,
    TransferData,
};

pub(crate) fn payload_with_features(names: &[&str]) -> ImportPayload {
    let data = TransferData {
        features: names.iter().map(|n| FeatureSchema::new(n)).collect(),
        feature_strategies: names
            .iter()
            .map(|n| {
                let mut strategy = StrategySchema::new("default", n);
                strategy.segments = vec![1, 2];
                strategy
            })
            .collect(),
        feature_environments: names
            .iter()
            .map(|n| FeatureEnvironmentSchema {
                feature_name: n.to_string(),
                enabled: true,
                variants: Vec::new(),
            })
            .collect(),
        feature_tags: names
            .iter()
            .map(|n| FeatureTag::new(n, &format!("type-{}", n), "value"))
            .collect(),
        tag_types: names
            .iter()
            .map(|n| TagType::new(&format!("type-{}", n)))
            .collect(),
        ..TransferData::default()
    };
    ImportPayload::new("default", "production", data)
}
