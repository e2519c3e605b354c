use std::sync::Arc;
use std::time::Instant;

use tonic::{Request, Response, Status};

use crate::domain::user::{AuthUseCases, SignUp, UserContextUseCases};
use crate::metrics::Metrics;
use super::convert::save_context_command;
use super::messages as pb;
use super::observe;

// ============================================================================
// User Handler - user.v1.UserService
// ============================================================================

pub struct UserHandler {
    auth: Arc<AuthUseCases>,
    contexts: Arc<UserContextUseCases>,
    metrics: Arc<Metrics>,
}

impl UserHandler {
    pub fn new(
        auth: Arc<AuthUseCases>,
        contexts: Arc<UserContextUseCases>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self { auth, contexts, metrics }
    }

    pub async fn sign_up(
        &self,
        request: Request<pb::SignUpRequest>,
    ) -> Result<Response<pb::User>, Status> {
        let start = Instant::now();

        let result = match SignUp::try_from(request.into_inner()) {
            Ok(command) => self
                .auth
                .sign_up(command)
                .await
                .map(pb::User::from)
                .map_err(Status::from),
            Err(e) => Err(Status::from(e)),
        };

        observe(&self.metrics, "SignUp", start, result)
    }

    /// Email-only lookup; no credential is checked.
    pub async fn login(
        &self,
        request: Request<pb::LoginRequest>,
    ) -> Result<Response<pb::User>, Status> {
        let start = Instant::now();
        let email = request.into_inner().email;

        let result = self
            .auth
            .login(&email)
            .await
            .map(pb::User::from)
            .map_err(Status::from);

        observe(&self.metrics, "Login", start, result)
    }

    pub async fn get_user_context(
        &self,
        request: Request<pb::GetUserContextRequest>,
    ) -> Result<Response<pb::UserContext>, Status> {
        let start = Instant::now();
        let user_id = request.into_inner().user_id;

        let result = self
            .contexts
            .get_user_context(&user_id)
            .await
            .map(pb::UserContext::from)
            .map_err(Status::from);

        observe(&self.metrics, "GetUserContext", start, result)
    }

    pub async fn save_user_context(
        &self,
        request: Request<pb::SaveUserContextRequest>,
    ) -> Result<Response<pb::UserContext>, Status> {
        let start = Instant::now();

        let result = match save_context_command(request.into_inner()) {
            Ok((user_id, command)) => self
                .contexts
                .save_user_context(&user_id, command)
                .await
                .map(pb::UserContext::from)
                .map_err(Status::from),
            Err(e) => Err(Status::from(e)),
        };

        observe(&self.metrics, "SaveUserContext", start, result)
    }
}
