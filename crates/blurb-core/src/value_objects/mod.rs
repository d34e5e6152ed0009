//! Value objects - immutable types that represent domain concepts

mod reaction;
mod snowflake;
mod upload_name;
mod window;

pub use reaction::{ArticleStatus, ReactionKind};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use upload_name::{UploadNamer, UPLOAD_BLOCK_SIZE};
pub use window::TimeWindow;
