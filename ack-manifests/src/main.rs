// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

mod cli;

use std::fs;
use std::io::Read;
use std::process;
use clap::Parser;
use clap::CommandFactory;
use serde::Deserialize;

use ack_manifests_common::config::AppConfigBuilder;
use ack_manifests_common::telemetry::{error, info, setup_logging};
use ack_manifests_core::manifest::utils as manifest_utils;
use ack_manifests_core::projector::registry::{Registry, RenderOptions};

use crate::cli::{CliArgs, Commands};

fn main() {
    let args = CliArgs::parse();

    setup_logging();

    match &args.cmd {
        Some(Commands::Crds) => manifest_utils::generate_crds(),
        Some(Commands::Kinds) => {
            let registry = Registry::new();

            for descriptor in registry.descriptors() {
                println!(
                    "{}\t{}\t{}\t{}",
                    descriptor.kind,
                    descriptor.api_version,
                    descriptor.display_name,
                    descriptor.id_order.map(|order| order.format()).unwrap_or("-"),
                );
            }
        },
        Some(Commands::Render { files, config, namespace, output }) => {
            info!(
                event = "Starting",
                version = env!("CARGO_PKG_VERSION"),
            );

            // Load configuration
            let mut builder = AppConfigBuilder::default();
            if let Some(path) = config {
                builder.with_file(path);
            }
            let config = builder
                .with_env()
                .with_override_option("render.default_namespace", namespace.as_deref())
                .build()
                .unwrap_or_else(|e| {
                    error!(
                        event = "Error",
                        error = %e,
                    );
                    process::exit(1);
                });

            // Create necessary resources
            let registry = Registry::new();
            let options = RenderOptions {
                default_namespace: match config.render.default_namespace.is_empty() {
                    true => None,
                    false => Some(config.render.default_namespace.clone()),
                },
            };

            let mut rendered = Vec::new();
            for file in files {
                let content = read_input(file).unwrap_or_else(|e| {
                    error!(
                        event = "Error",
                        file = file.as_str(),
                        error = %e,
                    );
                    process::exit(1);
                });

                for doc in serde_yaml::Deserializer::from_str(&content) {
                    let value = serde_json::Value::deserialize(doc).unwrap_or_else(|e| {
                        error!(
                            event = "Error",
                            file = file.as_str(),
                            error = %e,
                        );
                        process::exit(1);
                    });

                    // Empty documents in a stream are skipped, not errors
                    if value.is_null() {
                        continue;
                    }

                    match registry.render(value, &options) {
                        Ok(projected) => {
                            info!(
                                event = "Rendered",
                                file = file.as_str(),
                                id = projected.id.as_deref().unwrap_or_default(),
                            );
                            rendered.push(projected.yaml);
                        },
                        Err(e) => {
                            error!(
                                event = "Error",
                                file = file.as_str(),
                                error = %e,
                            );
                            process::exit(1);
                        },
                    }
                }
            }

            let stream = rendered
                .iter()
                .map(|yaml| format!("---\n{}", yaml))
                .collect::<String>();

            match output {
                Some(path) => {
                    fs::write(path, &stream).unwrap_or_else(|e| {
                        error!(
                            event = "Error",
                            file = path.as_str(),
                            error = %e,
                        );
                        process::exit(1);
                    });
                    info!(event = "Written", file = path.as_str());
                },
                None => print!("{}", stream),
            }
        },
        None => {
            let mut cmd = CliArgs::command();
            cmd.print_help().unwrap();
            process::exit(1);
        },
    }
}

/// Read a configuration document stream from a file or stdin
fn read_input(path: &str) -> Result<String, std::io::Error> {
    match path {
        "-" => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        },
        _ => fs::read_to_string(path),
    }
}
