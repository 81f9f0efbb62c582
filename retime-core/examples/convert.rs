// retime-core/examples/convert.rs
//
// Converts one file with the real ffmpeg/ffprobe binaries.
//
//   cargo run -p retime-core --example convert -- input.mp4 30 [--interpolate]

use retime_core::external::{CrateFfprobeExecutor, SidecarSpawner};
use retime_core::{CoreConfig, JobRequest, OutputNaming, transcode};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(input) = args.first() else {
        eprintln!("usage: convert <input> [fps] [--interpolate]");
        std::process::exit(2);
    };
    let fps = args.get(1).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(24.0);
    let interpolate = args.iter().any(|a| a == "--interpolate");

    let mut config = CoreConfig::default();
    config.output_naming = OutputNaming::Unique;

    let request = JobRequest::new(input, fps, interpolate)?;
    let result = transcode(&SidecarSpawner, &CrateFfprobeExecutor::new(), &config, &request)?;

    println!("{}", result.output_path.display());
    Ok(())
}
