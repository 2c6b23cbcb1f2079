//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use citadel_core::entities::{
    Division, League, Match, Notification, Roster, RosterTransfer, Team, TeamInvite,
    TeamTransfer, TransferRequest, User,
};

use super::responses::{
    DivisionResponse, LeagueResponse, MatchResponse, NotificationResponse, RosterResponse,
    RosterTransferResponse, TeamInviteResponse, TeamResponse, TeamTransferResponse,
    TransferRequestResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.to_string(),
            name: team.name.clone(),
            description: team.description.clone(),
            notice: team.notice.clone(),
            captain_id: team.captain_id.to_string(),
            created_at: team.created_at,
        }
    }
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self::from(&team)
    }
}

impl From<&TeamTransfer> for TeamTransferResponse {
    fn from(transfer: &TeamTransfer) -> Self {
        Self {
            id: transfer.id.to_string(),
            team_id: transfer.team_id.to_string(),
            user_id: transfer.user_id.to_string(),
            is_joining: transfer.is_joining,
            created_at: transfer.created_at,
        }
    }
}

impl From<TeamTransfer> for TeamTransferResponse {
    fn from(transfer: TeamTransfer) -> Self {
        Self::from(&transfer)
    }
}

impl From<&TeamInvite> for TeamInviteResponse {
    fn from(invite: &TeamInvite) -> Self {
        let status = if invite.accepted_at.is_some() {
            "accepted"
        } else if invite.declined_at.is_some() {
            "declined"
        } else {
            "pending"
        };
        Self {
            id: invite.id.to_string(),
            team_id: invite.team_id.to_string(),
            user_id: invite.user_id.to_string(),
            status,
            created_at: invite.created_at,
        }
    }
}

impl From<TeamInvite> for TeamInviteResponse {
    fn from(invite: TeamInvite) -> Self {
        Self::from(&invite)
    }
}

impl From<&League> for LeagueResponse {
    fn from(league: &League) -> Self {
        Self {
            id: league.id.to_string(),
            name: league.name.clone(),
            description: league.description.clone(),
            signuppable: league.signuppable,
            roster_locked: league.roster_locked,
            matches_submittable: league.matches_submittable,
            transfers_require_approval: league.transfers_require_approval,
            forfeit_all_matches_when_roster_disbands: league
                .forfeit_all_matches_when_roster_disbands,
            min_players: league.min_players,
            max_players: league.max_players,
            status: league.status.as_str(),
            created_at: league.created_at,
        }
    }
}

impl From<League> for LeagueResponse {
    fn from(league: League) -> Self {
        Self::from(&league)
    }
}

impl From<&Division> for DivisionResponse {
    fn from(division: &Division) -> Self {
        Self {
            id: division.id.to_string(),
            league_id: division.league_id.to_string(),
            name: division.name.clone(),
            created_at: division.created_at,
        }
    }
}

impl From<Division> for DivisionResponse {
    fn from(division: Division) -> Self {
        Self::from(&division)
    }
}

impl From<&Roster> for RosterResponse {
    fn from(roster: &Roster) -> Self {
        Self {
            id: roster.id.to_string(),
            team_id: roster.team_id.to_string(),
            division_id: roster.division_id.to_string(),
            name: roster.name.clone(),
            description: roster.description.clone(),
            notice: roster.notice.clone(),
            ranking: roster.ranking,
            seeding: roster.seeding,
            approved: roster.approved,
            disbanded: roster.disbanded,
            player_count: roster.player_count,
            created_at: roster.created_at,
        }
    }
}

impl From<Roster> for RosterResponse {
    fn from(roster: Roster) -> Self {
        Self::from(&roster)
    }
}

impl From<&RosterTransfer> for RosterTransferResponse {
    fn from(transfer: &RosterTransfer) -> Self {
        Self {
            id: transfer.id.to_string(),
            roster_id: transfer.roster_id.to_string(),
            user_id: transfer.user_id.to_string(),
            is_joining: transfer.is_joining,
            created_at: transfer.created_at,
        }
    }
}

impl From<RosterTransfer> for RosterTransferResponse {
    fn from(transfer: RosterTransfer) -> Self {
        Self::from(&transfer)
    }
}

impl From<&TransferRequest> for TransferRequestResponse {
    fn from(request: &TransferRequest) -> Self {
        Self {
            id: request.id.to_string(),
            roster_id: request.roster_id.to_string(),
            user_id: request.user_id.to_string(),
            is_joining: request.is_joining,
            propagate: request.propagate,
            approved_by: request.approved_by.map(|id| id.to_string()),
            created_at: request.created_at,
        }
    }
}

impl From<TransferRequest> for TransferRequestResponse {
    fn from(request: TransferRequest) -> Self {
        Self::from(&request)
    }
}

impl From<&Match> for MatchResponse {
    fn from(game: &Match) -> Self {
        Self {
            id: game.id.to_string(),
            division_id: game.division_id.to_string(),
            home_roster_id: game.home_roster_id.to_string(),
            away_roster_id: game.away_roster_id.map(|id| id.to_string()),
            round: game.round,
            status: game.status.as_str(),
            forfeit_by: game.forfeit_by.as_str(),
            created_at: game.created_at,
        }
    }
}

impl From<Match> for MatchResponse {
    fn from(game: Match) -> Self {
        Self::from(&game)
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message.clone(),
            link: notification.link.clone(),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}
