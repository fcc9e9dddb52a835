//! Main MPCC executable entry point.
//!
//! # Architecture
//!
//! The executable runs a single linearisation pass over a horizon:
//!
//!     - Initialise the session and logging
//!     - Load the cost and executable parameters
//!     - Build the reference track from the waypoints
//!     - Generate an initial guess trajectory along the track
//!     - Build the quadratic cost of every stage of the horizon
//!     - Archive the per-stage errors and save the first and terminal costs
//!

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use mpcc_lib::{
    cost::{slip_angle, Cost},
    model::State,
    track::{ArcLengthPath, ArcLengthSpline},
};

mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info};
use serde::Serialize;

// Internal
use params::MpccExecParams;
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    session::{self, Session},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One row of the stage archive.
#[derive(Debug, Serialize)]
struct StageRecord {
    stage: usize,
    time_s: f64,
    s_m: f64,
    contouring_error_m: f64,
    lag_error_m: f64,
    slip_angle_rad: f64,
    q_trace: f64,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    // ---- EARLY INITIALISATION ----

    color_eyre::install()?;

    // Initialise session
    let session = Session::new(
        "mpcc_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("MPCC Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let exec_params: MpccExecParams = util::params::load(
        "mpcc_exec.toml"
    ).wrap_err("Could not load exec params")?;

    info!("Parameters loaded");
    debug!("{:#?}", exec_params);

    // ---- INITIALISE MODULES ----

    let track = ArcLengthSpline::new(&exec_params.track_x_m, &exec_params.track_y_m)
        .wrap_err("Failed to build the track")?;
    info!(
        "Track built from {} waypoints, length {:.03} m",
        exec_params.track_x_m.len(),
        track.length()
    );

    let cost = Cost::init("cost.toml", exec_params.horizon_len)
        .wrap_err("Failed to initialise the cost")?;
    info!("Cost init complete, horizon of {} stages", cost.horizon_len());
    debug!("{:#?}", cost.params());

    info!("Module initialisation complete\n");

    // ---- INITIAL GUESS ----

    let states = initial_guess(&track, &exec_params);

    // ---- COST ----

    let start_s = session::get_elapsed_seconds();
    let horizon = cost.get_horizon_cost(&track, &states);
    info!(
        "Built the cost of {} stages in {:.06} s",
        horizon.len(),
        session::get_elapsed_seconds() - start_s
    );

    // ---- ARCHIVE ----

    let mut archiver = Archiver::from_path(&session, "stages.csv")
        .wrap_err("Failed to create the stage archive")?;

    for (k, (x, stage_cost)) in states.iter().zip(horizon.iter()).enumerate() {
        let error_info = cost.get_error_info(&track, x);
        let slip_angle_rad = slip_angle(x);

        debug!(
            "Stage {:>3}: e_c = {:+.04} m, e_l = {:+.04} m, beta = {:+.04} rad",
            k, error_info.error[0], error_info.error[1], slip_angle_rad
        );

        let record = StageRecord {
            stage: k,
            time_s: k as f64 * exec_params.ts_s,
            s_m: x.s_m,
            contouring_error_m: error_info.error[0],
            lag_error_m: error_info.error[1],
            slip_angle_rad,
            q_trace: stage_cost.q_mat.trace(),
        };

        archiver.serialise(record)
            .wrap_err_with(|| format!("Failed to archive stage {}", k))?;
    }

    if let (Some(first), Some(terminal)) = (horizon.first(), horizon.last()) {
        session.save("cost/stage_first.json", first)
            .wrap_err("Failed to save the first stage cost")?;
        session.save("cost/stage_terminal.json", terminal)
            .wrap_err("Failed to save the terminal stage cost")?;
    }

    info!("End of execution");

    Ok(())
}

/// Generate the states of every stage (`0..=horizon_len`) driving along the
/// track at the progress speed, offset laterally from the path.
fn initial_guess<P: ArcLengthPath>(track: &P, params: &MpccExecParams) -> Vec<State> {
    (0..=params.horizon_len)
        .map(|k| {
            let s_m = k as f64 * params.ts_s * params.vs_ms;

            let pos = track.position(s_m);
            let tangent = track.first_derivative(s_m);

            let mut x = State {
                x_m: pos[0] - params.lateral_offset_m * tangent[1],
                y_m: pos[1] + params.lateral_offset_m * tangent[0],
                phi_rad: tangent[1].atan2(tangent[0]),
                vx_ms: params.vs_ms,
                s_m,
                vs_ms: params.vs_ms,
                ..Default::default()
            };
            x.unwrap(track.length());
            x
        })
        .collect()
}
