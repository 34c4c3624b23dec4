pub mod constraint;
pub mod context_field;
pub mod dependency;
pub mod event_type;
pub mod feature;
pub mod feature_environment;
pub mod link;
pub mod permission;
pub mod segment;
pub mod strategy;
pub mod tag;
pub mod transfer_event;
pub mod user;
pub mod variant;
