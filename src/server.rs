use std::net::SocketAddr;

use warp::{Filter, Rejection, Reply};
use log::error;

use crate::error_handling;
use crate::util::get_port;

pub fn routes(status_line: &'static str) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let root = warp::path::end()
        .and(warp::get())
        .map(move || status_line);

    root.recover(error_handling::error_handler)
}

// Binds before announcing, so the startup line always names a live socket.
// A bind failure is fatal; nothing here retries.
pub async fn run(name: &str, status_line: &'static str) {
    let port = get_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    match warp::serve(routes(status_line)).try_bind_ephemeral(addr) {
        Ok((bound, serving)) => {
            println!("{} listening on port {}", name, bound.port());
            serving.await;
        }
        Err(e) => {
            error!("failed to bind port {}: {}", port, e);
            std::process::exit(1);
        }
    }
}
