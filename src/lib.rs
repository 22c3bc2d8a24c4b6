pub mod clock;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod review_service;
pub mod sm2_scheduler;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::Config;
pub use errors::*;
pub use models::*;
pub use review_service::ReviewService;
pub use sm2_scheduler::{ReviewLog, ReviewState, Sm2Scheduler};
