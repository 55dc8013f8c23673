use crate::conf::Settings;
use crate::domain::JobDataset;
use crate::router::{handle, Directory};
use astra::{ConnectionInfo, Request, Response, Server};

mod conf;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read settings from JOBBOARD_* env vars
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            log::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let addr = match settings.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load and validate the job dataset
    let loaded = match &settings.data_path {
        Some(path) => JobDataset::from_path(path),
        None => JobDataset::bundled(),
    };
    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("❌ Dataset failed validation: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "✅ Loaded {} jobs from {}",
        dataset.len(),
        settings.data_path.as_deref().unwrap_or("bundled dataset")
    );

    // 3️⃣ Start the server
    let directory = Directory::new(dataset);
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(settings.max_workers);

    // 4️⃣ Serve requests, passing the directory into the closure
    let result = server.serve(move |req: Request, _info: ConnectionInfo| respond(req, &directory));

    match result {
        Ok(()) => log::info!("Server shut down cleanly."),
        Err(e) => log::error!("Server ended with error: {e}"),
    }
}

/// Runs one request through the router, rendering failures as error pages.
fn respond(req: Request, directory: &Directory) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    match handle(req, directory) {
        Ok(resp) => {
            log::debug!("{method} {path} -> {}", resp.status());
            resp
        }
        Err(err) => {
            log::warn!("{method} {path} -> {err}");
            templates::html_error_response(err)
        }
    }
}
