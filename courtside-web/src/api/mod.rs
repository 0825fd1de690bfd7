//! HTTP API handlers

pub mod health;
pub mod posts;
pub mod scores;
pub mod votes;

pub use health::health_routes;
pub use posts::{list_posts, submit_post};
pub use scores::lookup_scores;
pub use votes::{list_votes, submit_vote};
