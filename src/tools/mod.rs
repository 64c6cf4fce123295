// Response cache and its clock
pub mod cache;

// HTTP transport, identity and headers
pub mod fetch;

// Randomized inter-request delays
pub mod pacing;
