pub mod digest;
pub mod error;
pub mod fortune;
pub mod normalize;
pub mod request;
pub mod sample;
pub mod score;
pub mod seed;
pub mod validation;

pub use error::FortuneError;
pub use fortune::{calculate_fortune, get_daily_fortune, share_text, CategoryScore, FortuneResult};
pub use request::{BaseAttributes, Category, FortuneRequest, Gender, Locale, ThemeAttributes};
pub use seed::{DayKey, SeedChain};
