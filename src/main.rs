//! Doc Vault - Entry Point
//!
//! Persists files named on the command line into the upload vault, the
//! same way an upstream transport layer would hand them over.

use std::env;
use std::fs::File;
use std::path::Path;
use std::process;

use log::{error, info};

use doc_vault::config::VaultConfig;
use doc_vault::{RawUpload, persist_uploads};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match VaultConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    info!(
        "Persisting {} upload(s) into {}",
        args.len(),
        config.upload_dir
    );

    let mut uploads = Vec::new();
    for arg in &args {
        match File::open(arg) {
            Ok(file) => {
                let upload = match file_name_of(arg) {
                    Some(name) => RawUpload::named(name),
                    None => RawUpload::new(),
                };
                uploads.push(upload.with_stream(file));
            }
            Err(e) => {
                error!("Cannot open {}: {}", arg, e);
                process::exit(1);
            }
        }
    }

    match persist_uploads(uploads, &config.upload_dir_path()) {
        Ok(saved) => {
            for path in &saved {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn file_name_of(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}
