mod export;
mod tracker;

pub use export::{write_intake_csv, write_plan_csv};
pub use tracker::{IntakeEntry, Session, check_grams};
