mod config;
mod outbound;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use config::AppConfig;
use internal::{port::source::SourceDriverPort, service::source_service::SourceService};
use log::error;
use outbound::filesystem::FileRepository;

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let conf = AppConfig::load("config.toml")?;
    let service = SourceService::new(FileRepository, conf.input.extension);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = service.select(&args).inspect_err(|e| error!("{e}"))?;
    println!("File name found");

    let source = service
        .load(Path::new(path))
        .inspect_err(|e| error!("{e}"))?;
    println!("Content of this file is");
    std::io::stdout().write_all(&source.bytes)?;
    Ok(())
}
