pub mod common;
pub mod ftcscout;
pub mod statbotics;
pub mod tba;

pub use common::{EventSummary, MatchRecord, TeamProfile, TeamReport, TeamStats};
pub use ftcscout::{
    FtcEvent, FtcLocation, FtcQuickStats, FtcSearchData, FtcSearchResults, FtcStat, FtcTeam,
    GraphQlError, GraphQlRequest, GraphQlResponse, SearchVariables,
};
pub use statbotics::{
    StatboticsAlliance, StatboticsAlliances, StatboticsEpa, StatboticsMatch, StatboticsMean,
    StatboticsRecord, StatboticsScores, StatboticsTeamYear,
};
pub use tba::{TbaAward, TbaEventSimple, TbaTeam, TbaTeamEventStatus};
