use crate::bridge::model::StatusModel;
use crate::workflow::config::JobConfig;
use crate::workflow::runner::Runner;
use log::{error, info};
use soundcore::processing::CSV_MIME_TYPE;
use soundcore::RunResult;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use tokio::sync::Mutex;
use warp::{http::StatusCode, Filter};

type SharedStatus = Arc<RwLock<StatusModel>>;

pub fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// HTTP endpoint that exposes the status of the latest run, serves the file
/// it wrote and accepts new jobs. Jobs are run one at a time.
pub struct StatusBridge {
    state: SharedStatus,
}

impl StatusBridge {
    pub fn new(address: SocketAddr) -> Self {
        let state: SharedStatus = Arc::new(RwLock::new(StatusModel::default()));
        let filter = routes(state.clone(), Arc::new(Mutex::new(())));

        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                info!("status bridge listening on {}", address);
                warp::serve(filter).run(address).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, result: &RunResult) {
        let model = StatusModel::from_result(result);
        println!(
            "[bridge] records: {}, saved to: {}",
            model.records,
            model
                .saved_to
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "-".into())
        );
        store(&self.state, model);
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> StatusModel {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

fn store(state: &SharedStatus, model: StatusModel) {
    if let Ok(mut guard) = state.write() {
        *guard = model;
    }
}

fn routes(
    state: SharedStatus,
    gate: Arc<Mutex<()>>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let output_state = state.clone();
    let state_filter = warp::any().map(move || state.clone());
    let state_filter_for_output = warp::any().map(move || output_state.clone());
    let gate_filter = warp::any().map(move || gate.clone());

    let status_route = warp::path("status")
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: SharedStatus| {
            let model = state.read().map(|guard| guard.clone()).unwrap_or_default();
            warp::reply::json(&model)
        });

    let run_route = warp::path("run")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter)
        .and(gate_filter)
        .and_then(
            |job: JobConfig, state: SharedStatus, gate: Arc<Mutex<()>>| async move {
                let _running = gate.lock().await;
                store(&state, StatusModel::running());
                match Runner::new(job).execute().await {
                    Ok(result) => {
                        let model = StatusModel::from_result(&result);
                        store(&state, model.clone());
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&model),
                            StatusCode::OK,
                        ))
                    }
                    Err(err) => {
                        error!("run error: {:#}", err);
                        let model = StatusModel::failed(format!("{:#}", err));
                        store(&state, model.clone());
                        Ok(warp::reply::with_status(
                            warp::reply::json(&model),
                            StatusCode::INTERNAL_SERVER_ERROR,
                        ))
                    }
                }
            },
        );

    let output_route = warp::path("output")
        .and(warp::get())
        .and(state_filter_for_output)
        .and_then(|state: SharedStatus| async move {
            let saved_to = state
                .read()
                .ok()
                .and_then(|guard| guard.saved_to.clone());
            let content = match saved_to {
                Some(path) => tokio::fs::read_to_string(&path).await.ok(),
                None => None,
            };
            let reply = match content {
                Some(content) => warp::reply::with_status(
                    warp::reply::with_header(content, "content-type", CSV_MIME_TYPE),
                    StatusCode::OK,
                ),
                None => warp::reply::with_status(
                    warp::reply::with_header(String::new(), "content-type", CSV_MIME_TYPE),
                    StatusCode::NOT_FOUND,
                ),
            };
            Ok::<_, warp::Rejection>(reply)
        });

    status_route.or(run_route).or(output_route)
}
