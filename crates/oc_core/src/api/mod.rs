pub mod json_api;

pub use json_api::{
    dispatch_action_json, get_match_state_json, load_state_json, match_summary_json,
    new_match_json, score_action_json, ActionRequest, DispatchRequest, LoadStateRequest,
    NewMatchRequest, StateResponse, SummaryRequest, SummaryResponse,
};
