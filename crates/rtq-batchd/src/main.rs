use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use rtq_core::prelude::*;
use rtq_host::{CommandConfig, CommandExecutor, FsHost};
use rtq_model::{BatchSpec, RotationEuler};
use rtq_observe::{LoggerConfig, LoggerLevel, init_logger};
use rtq_prometheus::PrometheusMetrics;

/// Directory of character environments, one file per character rig.
const CHARACTERS_DIR: &str = "/data/retarget/characters";
/// Directory of source action captures to retarget onto every character.
const ACTIONS_DIR: &str = "/data/retarget/actions";
/// Where finished environments land; also holds the queue record.
const OUTPUT_DIR: &str = "/data/retarget/output";

const ENVIRONMENT_SUFFIX: &str = "blend";
const ACTION_SUFFIX: &str = "fbx";

/// Retarget preset applied to every job.
const PRESET: &str = "remap_preset_to_smal";
/// Source armatures arrive Y-forward; spin them upright before retargeting.
const ROTATION_DEG: (f64, f64, f64) = (0.0, 0.0, 270.0);

/// Content application invocation, one subprocess per job.
const COMMAND_PROGRAM: &str = "blender";
const COMMAND_ARGS: &[&str] = &[
    "--background",
    "--python",
    "retarget_job.py",
    "--",
    "--action",
    "{action}",
    "--preset",
    "{preset}",
    "--rotation",
    "{rot_x},{rot_y},{rot_z}",
];

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig {
        level: LoggerLevel::new("info")?,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) run configuration
    let (rx, ry, rz) = ROTATION_DEG;
    let spec = BatchSpec {
        characters_dir: CHARACTERS_DIR.into(),
        actions_dir: ACTIONS_DIR.into(),
        output_dir: OUTPUT_DIR.into(),
        environment_suffix: ENVIRONMENT_SUFFIX.into(),
        action_suffix: ACTION_SUFFIX.into(),
        preset: PRESET.into(),
        rotation: RotationEuler::new(rx, ry, rz),
    };
    let store = QueueStore::in_dir(&spec.output_dir);

    // 3) host + executor + metrics
    let (host, pump) = FsHost::new();
    let host: Arc<dyn Host> = Arc::new(host);

    let executor = CommandExecutor::new(CommandConfig {
        program: COMMAND_PROGRAM.into(),
        args: COMMAND_ARGS.iter().map(|s| s.to_string()).collect(),
    })?;

    let metrics = Arc::new(PrometheusMetrics::new()?);

    // 4) resume driver
    let driver = Arc::new(
        ResumeDriver::new(
            store.clone(),
            Arc::clone(&host),
            Arc::new(executor),
            &spec,
        )
        .with_metrics(metrics),
    );
    let done = driver.done();

    // 5) event pump
    let pump_cancel = CancellationToken::new();
    let pump_task = tokio::spawn(pump.run(pump_cancel.clone()));

    // 6) enumerate, persist, enter the cycle
    start_batch(&spec, &store, &host, driver)?;

    // 7) wait for the terminal transition
    done.cancelled().await;
    pump_cancel.cancel();
    pump_task.await?;

    if store.path().exists() {
        anyhow::bail!(
            "run halted with jobs remaining; inspect {}",
            store.path().display()
        );
    }
    info!("batch complete");
    Ok(())
}
