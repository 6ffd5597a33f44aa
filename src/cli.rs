use crate::config::load_config;
use crate::interpolate::interpolate;
use crate::ir::Scene;
use crate::layout::compute_scene_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "halo", version, about = "Concentric ring layout for focal-node graph views")]
pub struct Args {
    /// Scene JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout dump. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Partial config JSON overriding layout constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Second scene file: emit a frame interpolated toward its layout
    #[arg(long = "toward")]
    pub toward: Option<PathBuf>,

    /// Progress of the interpolated frame, usually in [0, 1]
    #[arg(long = "progress", default_value_t = 1.0)]
    pub progress: f32,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let scene = read_scene(args.input.as_deref())?;
    let mut map = compute_scene_layout(&scene, &config)?;

    if let Some(toward) = args.toward.as_deref() {
        let target_scene = read_scene(Some(toward))?;
        let target = compute_scene_layout(&target_scene, &config)?;
        map = interpolate(&map, &target, args.progress);
    }

    let dump = LayoutDump::new(&scene, &map);
    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &dump)?,
        None => println!("{}", serde_json::to_string_pretty(&dump)?),
    }
    Ok(())
}

fn read_scene(path: Option<&Path>) -> Result<Scene> {
    let contents = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let scene = match serde_json::from_str(&contents) {
        Ok(scene) => scene,
        Err(_) => json5::from_str(&contents)?,
    };
    Ok(scene)
}
