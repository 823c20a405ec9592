extern crate rust_raytracer as root;

use log::LevelFilter;
use root::config::{get_settings, parse_camera_from, Config, RendererType, TOMLConfig};
#[cfg(feature = "preview")]
use root::renderer::PreviewRenderer;
use root::renderer::{NaiveRenderer, Renderer};
use root::world::World;

#[macro_use]
extern crate log;
extern crate simplelog;

use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};

use std::fs::File;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn construct_renderer(config: &Config) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        #[cfg(feature = "preview")]
        RendererType::Preview => Box::new(PreviewRenderer::new()),
        #[cfg(not(feature = "preview"))]
        RendererType::Preview => {
            warn!("built without the preview feature, falling back to the naive renderer");
            Box::new(NaiveRenderer::new())
        }
    }
}

fn parse_log_level(level: String, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "error" => LevelFilter::Error,
        "debug" => LevelFilter::Debug,
        _ => default,
    }
}

fn main() {
    let opts = Opt::from_args();
    let term_log_level = parse_log_level(opts.print_log_level, LevelFilter::Warn);
    let write_log_level = parse_log_level(opts.write_log_level, LevelFilter::Info);

    CombinedLogger::init(vec![
        TermLogger::new(
            term_log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            File::create("main.log").unwrap(),
        ),
    ])
    .unwrap();

    let config: TOMLConfig = match get_settings(&opts.config_file) {
        Ok(expr) => expr,
        Err(v) => {
            error!("couldn't read {}, {:?}", opts.config_file, v);
            return;
        }
    };
    let mut config = Config::from(config);

    // override output filename based on provided command line argument
    if let Some(output) = opts.output {
        config.render_settings.filename = Some(output);
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.render_settings.threads as usize)
        .build_global()
        .unwrap();

    let (width, height) = (
        config.render_settings.resolution.width,
        config.render_settings.resolution.height,
    );
    let camera = parse_camera_from(&config.camera, width as f32 / height as f32);
    let world = World::room();

    let renderer: Box<dyn Renderer> = construct_renderer(&config);

    if !opts.dry_run {
        renderer.render(world, camera, &config);
    }
}
