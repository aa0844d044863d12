pub mod place;
pub mod query;
pub mod suggestion;

pub use place::{PlaceName, PlaceRecord};
pub use query::Query;
pub use suggestion::{Suggestion, SuggestionResponse};
