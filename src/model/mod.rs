pub mod month_day;
pub mod entry;

// Re-exports for convenience
pub use month_day::MonthDay;
pub use entry::Entry;
