use std::{convert::Infallible, future};

use tracing::warn;
use warp::{
    Filter, Rejection, Reply,
    http::StatusCode,
    path::FullPath,
    reply::{self, Response},
};

use crate::{COEFFICIENTS_PARAM, RequestError, ServerConfig, handle_solve};

/// Builds the route table for a config.
///
/// `GET /<route>?coef=...` runs the solver; every other request is answered
/// with [`RequestError::UnknownRoute`]. The path must match exactly, so a
/// trailing slash is an unknown route.
///
/// The route is assumed to be valid; see [`ServerConfig::validate`].
pub fn routes(
    config: &ServerConfig,
) -> impl Filter<Extract = (Response,), Error = Infallible> + Clone + Send + Sync + 'static + use<>
{
    let solve_path = format!("/{}", config.route);

    let solve = warp::get()
        .and(warp::path::full())
        .and_then(move |full: FullPath| {
            future::ready(if full.as_str() == solve_path {
                Ok(())
            } else {
                Err::<(), Rejection>(warp::reject::not_found())
            })
        })
        .untuple_one()
        .and(warp::query::<Vec<(String, String)>>())
        .map(|query: Vec<(String, String)>| {
            respond(handle_solve(first_coefficients(&query)))
        });

    let unknown = warp::any().map(|| respond(Err(RequestError::UnknownRoute)));

    solve.or(unknown).unify()
}

/// Returns the first `coef` value; later duplicates are ignored.
fn first_coefficients(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == COEFFICIENTS_PARAM)
        .map(|(_, value)| value.as_str())
}

fn respond(result: Result<String, RequestError>) -> Response {
    match result {
        Ok(body) => reply::with_status(body, StatusCode::OK).into_response(),
        Err(err) => {
            warn!(error = ?err, "rejected request");
            reply::with_status(err.to_string(), StatusCode::BAD_REQUEST).into_response()
        }
    }
}
