use crate::{ExportQuery, ExportSelection};

use googletest::prelude::*;

#[test]
fn given_tag_and_features_when_selecting_then_tag_wins() {
    // Given
    let query = ExportQuery {
        environment: "production".to_string(),
        features: Some(vec!["checkout".to_string()]),
        tag: Some("team-payments".to_string()),
        download_file: false,
    };

    // When
    let selection = query.selection();

    // Then
    assert_that!(
        selection,
        some(eq(&ExportSelection::Tag("team-payments".to_string())))
    );
}

#[test]
fn given_only_features_when_selecting_then_features_are_used() {
    let query = ExportQuery::for_features("production", &["checkout", "search"]);

    assert_that!(
        query.selection(),
        some(eq(&ExportSelection::Features(vec![
            "checkout".to_string(),
            "search".to_string()
        ])))
    );
}

#[test]
fn given_empty_feature_list_when_selecting_then_nothing_is_selected() {
    let query = ExportQuery::for_features("production", &[]);

    assert_that!(query.selection(), none());
}

#[test]
fn given_camel_case_json_when_deserialized_then_download_flag_is_read() {
    let query: ExportQuery = serde_json::from_str(
        r#"{"environment":"production","tag":"beta","downloadFile":true}"#,
    )
    .unwrap();

    assert_that!(query.download_file, eq(true));
    assert_that!(query.features, none());
}
