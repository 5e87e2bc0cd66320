pub mod ideal_team_json;

pub use ideal_team_json::{
    generate_ideal_team_json, handle_ideal_team_json, ideal_team_request_schema, ApiError,
    ApiResponse, FormationRequest, IdealTeamRequest, IdealTeamResponse,
};
