//! Helix Pod Gate CLI
//!
//! Entry point for the `helix-pods` command-line tool, invoked by the
//! build tool's dependency-resolution phase.

use clap::{Parser, Subcommand};
use helix_pod_gate::config::DEFAULT_CONFIG_PATH;
use helix_pod_gate::{
    EnvironmentContext, ModuleSpec, PodsConfig, Resolver, StderrConsole, Version, VersionGate,
};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "helix-pods")]
#[command(about = "New-architecture build-configuration gate for Helix module pods", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one resolution pass over a module spec snapshot
    Resolve {
        /// Path to the module manifest (default: from config, then package.json)
        #[arg(long, short = 'm')]
        manifest: Option<PathBuf>,

        /// Path to the module spec snapshot JSON (default: empty spec)
        #[arg(long, short = 's')]
        spec: Option<PathBuf>,

        /// Path to repo config file (default: .helix/pods.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Write the resolution outcome to a file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Explain the version-gate decision for a version string
    Gate {
        /// The version string to gate on
        version: String,

        /// Explicit new-architecture override, as the environment would
        /// supply it
        #[arg(long = "new-arch")]
        new_arch: Option<bool>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            manifest,
            spec,
            config,
            out,
        } => {
            run_resolve(manifest, spec, config, out);
        }
        Commands::Gate {
            version,
            new_arch,
            json,
        } => {
            run_gate(&version, new_arch, json);
        }
    }
}

fn run_resolve(
    manifest: Option<PathBuf>,
    spec_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    out: Option<PathBuf>,
) {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match PodsConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let manifest_path = manifest
        .or_else(|| config.manifest.clone())
        .unwrap_or_else(|| PathBuf::from("package.json"));

    let mut spec = match &spec_path {
        Some(path) => {
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Error: failed to read spec snapshot {}: {}", path.display(), e);
                    process::exit(1);
                }
            };
            match ModuleSpec::from_json(&contents) {
                Ok(spec) => spec,
                Err(e) => {
                    eprintln!("Error: failed to parse spec snapshot: {}", e);
                    process::exit(1);
                }
            }
        }
        None => ModuleSpec::default(),
    };

    let env = EnvironmentContext::from_env(&config);
    let mut resolver = Resolver::new();
    let mut console = StderrConsole;

    let outcome = match resolver.resolve(&manifest_path, &mut spec, &env, &mut console) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match out {
        Some(path) => {
            if let Err(e) = outcome.write_to_file(&path) {
                eprintln!("Error: failed to write outcome: {}", e);
                process::exit(1);
            }
            eprintln!("Wrote: {}", path.display());
        }
        None => match outcome.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    }
}

fn run_gate(version: &str, new_arch: Option<bool>, json: bool) {
    let mut gate = VersionGate::new();
    let mut console = StderrConsole;
    let state = gate.decide(version, new_arch, &mut console);
    let parsed = Version::parse(version);

    if json {
        let report = serde_json::json!({
            "version": version,
            "recognized": parsed.is_some(),
            "prerelease": parsed.as_ref().and_then(|v| v.prerelease.clone()),
            "override": new_arch,
            "feature_state": state,
        });
        println!("{}", report);
    } else {
        println!("Version:       {}", version);
        println!("Recognized:    {}", if parsed.is_some() { "yes" } else { "no" });
        println!(
            "Prerelease:    {}",
            parsed
                .as_ref()
                .and_then(|v| v.prerelease.as_deref())
                .unwrap_or("(none)")
        );
        println!("Feature state: {}", state);
    }
}
