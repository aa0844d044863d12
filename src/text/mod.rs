pub mod normalize;
pub mod prefix_scan;

pub use normalize::normalize;
pub use prefix_scan::{find_matches, find_matches_chars, MatchSpan};
