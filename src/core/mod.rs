pub mod allocator;
pub mod catalog;
pub mod itinerary;
pub mod planner;

pub use allocator::{allocate, Allocated};
pub use catalog::{ActivityCatalog, CatalogEntry};
pub use itinerary::{generate, ItineraryGenerator, TierThresholds, ITEMS_PER_DAY};
pub use planner::TripPlanner;
