// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Decision, DecisionKind, Liker, LikerPage, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use requests::{CountLikedYouRequest, ListLikedYouRequest, PutDecisionRequest};
pub use responses::{
    CountLikedYouResponse, ErrorResponse, HealthResponse, LikerResponse, ListLikedYouResponse,
    PutDecisionResponse,
};
