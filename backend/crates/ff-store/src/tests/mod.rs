
use ff_core::{FeatureToggle, NewFeature};

pub(crate) fn feature(name: &str, project: &str) -> FeatureToggle {
    FeatureToggle::new(
        project,
        NewFeature {
            name: name.to_string(),
            feature_type: "release".to_string(),
            description: None,
            impression_data: false,
        },
    )
}
