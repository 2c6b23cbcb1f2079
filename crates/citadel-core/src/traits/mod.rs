//! Domain traits (ports)

mod repositories;

pub use repositories::{
    DivisionRepository, InviteRepository, LeagueRepository, MatchRepository, NewDivision,
    NewInvite, NewLeague, NewMatch, NewNotification, NewRoster, NewTeam, NewTransferRequest,
    NewUser, NotificationRepository, RepoResult, RosterRepository, TeamRepository,
    TransferRequestRepository, UserRepository,
};
