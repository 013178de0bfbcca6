use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sfc_preview::{
    build_info_json, cdn_config_json, custom_import_map, extract_template_content,
    generate_head_html, load_component_source, read_component_source, try_extract_template,
    CdnConfig, RuntimeMode,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Runtime {
    Dev,
    Prod,
}

impl From<Runtime> for RuntimeMode {
    fn from(runtime: Runtime) -> Self {
        match runtime {
            Runtime::Dev => RuntimeMode::Development,
            Runtime::Prod => RuntimeMode::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Extract component templates and print CDN wiring for previews.")]
struct Args {
    #[arg(long, help = "Component source to extract the <template> block from ('-' for stdin)")]
    component: Option<PathBuf>,

    #[arg(
        long,
        requires = "component",
        help = "Fail instead of printing nothing when no template is found"
    )]
    strict: bool,

    #[arg(long, help = "Print the preview <head> HTML snippet and exit")]
    head: bool,

    #[arg(long, help = "Print the import map JSON and exit")]
    import_map: bool,

    #[arg(long, value_enum, help = "Print the framework runtime URL for this mode and exit")]
    runtime: Option<Runtime>,

    #[arg(long, help = "Print the embedded CDN configuration JSON and exit")]
    cdn: bool,

    #[arg(long, help = "Print build metadata and exit")]
    info: bool,

    #[arg(long, help = "Write the output to this path as well as stdout")]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "warn", help = "Minimum log level on stderr")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let payload = if args.info {
        build_info_json().to_string()
    } else if args.cdn {
        cdn_config_json().trim_end().to_string()
    } else if args.head {
        generate_head_html()
    } else if args.import_map {
        serde_json::to_string_pretty(&custom_import_map())?
    } else if let Some(runtime) = args.runtime {
        CdnConfig::embedded().runtime_url(runtime.into()).to_string()
    } else {
        let path = args.component.as_deref().context(
            "--component is required unless --info, --cdn, --head, --import-map or --runtime is specified",
        )?;
        let source = read_source(path)?;
        log::debug!("read {} bytes of component source", source.len());
        if args.strict {
            try_extract_template(&source)
                .with_context(|| format!("no template extracted from {}", path.display()))?
                .to_string()
        } else {
            extract_template_content(&source)
        }
    };

    emit(&payload, args.output.as_deref())
}

fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return read_component_source(std::io::stdin().lock())
            .context("failed to read component source from stdin");
    }
    load_component_source(path)
        .with_context(|| format!("failed to load component source from {}", path.display()))
}

fn emit(payload: &str, output: Option<&Path>) -> Result<()> {
    let line = if payload.is_empty() {
        String::new()
    } else {
        format!("{payload}\n")
    };
    if let Some(path) = output {
        std::fs::write(path, &line)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    print!("{line}");
    Ok(())
}
