// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[
    clap(
        name = "ack-manifests",
        version,
        author,
        about = "Render Kubernetes manifests for ACK-managed AWS RDS resources"
    )
]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[
        clap(
            name = "render",
            about = "Render configuration documents into a manifest stream"
        )
    ]
    Render {
        /// Configuration documents to render, `-` for stdin
        #[clap(required = true)]
        files: Vec<String>,
        /// Path to a configuration file (JSON or YAML)
        #[clap(long, env = "ACK_MANIFESTS_CONFIG")]
        config: Option<String>,
        /// Namespace applied to documents that omit metadata.namespace
        #[clap(long, short = 'n')]
        namespace: Option<String>,
        /// Write the manifest stream to a file instead of stdout
        #[clap(long, short = 'o')]
        output: Option<String>,
    },
    #[
        clap(
            name = "kinds",
            about = "List the supported resource kinds"
        )
    ]
    Kinds,
    #[
        clap(
            name = "crds",
            about = "Generate Custom Resource Definitions (CRDs) for the supported kinds",
        )
    ]
    Crds,
}
