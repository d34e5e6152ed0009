//! User service
//!
//! Maps a session id to its reader. Readers are created lazily: a session
//! seen for the first time gets a blank, not-yet-persisted user.

use blurb_core::entities::User;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find the reader for a session, or a fresh transient one
    #[instrument(skip(self))]
    pub async fn resolve(&self, session_id: &str) -> ServiceResult<User> {
        match self.ctx.user_repo().find_by_session(session_id).await? {
            Some(user) => Ok(user),
            None => {
                debug!("First request for session, starting a blank user");
                Ok(User::new(session_id))
            }
        }
    }
}
