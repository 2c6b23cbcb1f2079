//! Service context - dependency container for services
//!
//! Holds all repositories and shared dependencies needed by services.

use std::sync::Arc;

use citadel_common::JwtService;
use citadel_core::traits::{
    DivisionRepository, InviteRepository, LeagueRepository, MatchRepository,
    NotificationRepository, RosterRepository, TeamRepository, TransferRequestRepository,
    UserRepository,
};
use citadel_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    league_repo: Arc<dyn LeagueRepository>,
    division_repo: Arc<dyn DivisionRepository>,
    team_repo: Arc<dyn TeamRepository>,
    invite_repo: Arc<dyn InviteRepository>,
    roster_repo: Arc<dyn RosterRepository>,
    match_repo: Arc<dyn MatchRepository>,
    transfer_request_repo: Arc<dyn TransferRequestRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a builder for assembling the context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the league repository
    pub fn league_repo(&self) -> &dyn LeagueRepository {
        self.league_repo.as_ref()
    }

    /// Get the division repository
    pub fn division_repo(&self) -> &dyn DivisionRepository {
        self.division_repo.as_ref()
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the invite repository
    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    /// Get the roster repository
    pub fn roster_repo(&self) -> &dyn RosterRepository {
        self.roster_repo.as_ref()
    }

    /// Get the match repository
    pub fn match_repo(&self) -> &dyn MatchRepository {
        self.match_repo.as_ref()
    }

    /// Get the transfer request repository
    pub fn transfer_request_repo(&self) -> &dyn TransferRequestRepository {
        self.transfer_request_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    league_repo: Option<Arc<dyn LeagueRepository>>,
    division_repo: Option<Arc<dyn DivisionRepository>>,
    team_repo: Option<Arc<dyn TeamRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    roster_repo: Option<Arc<dyn RosterRepository>>,
    match_repo: Option<Arc<dyn MatchRepository>>,
    transfer_request_repo: Option<Arc<dyn TransferRequestRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn league_repo(mut self, repo: Arc<dyn LeagueRepository>) -> Self {
        self.league_repo = Some(repo);
        self
    }

    pub fn division_repo(mut self, repo: Arc<dyn DivisionRepository>) -> Self {
        self.division_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn roster_repo(mut self, repo: Arc<dyn RosterRepository>) -> Self {
        self.roster_repo = Some(repo);
        self
    }

    pub fn match_repo(mut self, repo: Arc<dyn MatchRepository>) -> Self {
        self.match_repo = Some(repo);
        self
    }

    pub fn transfer_request_repo(mut self, repo: Arc<dyn TransferRequestRepository>) -> Self {
        self.transfer_request_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the context; panics if a dependency is missing, which is a
    /// wiring bug caught at startup
    pub fn build(self) -> ServiceContext {
        ServiceContext {
            pool: self.pool.expect("pool is required"),
            user_repo: self.user_repo.expect("user_repo is required"),
            league_repo: self.league_repo.expect("league_repo is required"),
            division_repo: self.division_repo.expect("division_repo is required"),
            team_repo: self.team_repo.expect("team_repo is required"),
            invite_repo: self.invite_repo.expect("invite_repo is required"),
            roster_repo: self.roster_repo.expect("roster_repo is required"),
            match_repo: self.match_repo.expect("match_repo is required"),
            transfer_request_repo: self
                .transfer_request_repo
                .expect("transfer_request_repo is required"),
            notification_repo: self
                .notification_repo
                .expect("notification_repo is required"),
            jwt_service: self.jwt_service.expect("jwt_service is required"),
        }
    }
}
