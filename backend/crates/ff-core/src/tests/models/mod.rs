mod context_field;
mod dependency;
mod event_type;
mod feature;
mod link;
mod permission;
mod strategy;
mod variant;
