use warp::{Rejection, Reply, reject};
use warp::http::StatusCode;
use log::warn;
use serde::{Serialize};


#[derive(Serialize)]
pub struct RejectionReport {
    msg: String,
    detail: String,
}

pub async fn error_handler(err: Rejection) -> Result<impl Reply, Rejection> {
    if err.is_not_found() {
        Ok(StatusCode::NOT_FOUND)
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        Ok(StatusCode::METHOD_NOT_ALLOWED)
    } else {
        warn!("{}", serde_json::to_string(&RejectionReport {
            msg: String::from("unhandled rejection"),
            detail: format!("{:?}", err),
        }).unwrap());

        Ok(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
