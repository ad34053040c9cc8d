// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::ConfigError;
use harvester::config::settings::{LoggingSettings, Settings};
use harvester::utils::telemetry;
use harvester::{extract_html, extract_image, CaptureRequest, HarvesterClient, ProxyRegion};
use std::path::PathBuf;
use tracing::{debug, info};

/// Harvester捕获任务命令行工具
#[derive(Debug, Parser)]
#[command(name = "harvester")]
#[command(about = "Dispatch, inspect and unpack Harvester capture tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: HarvesterCommand,
}

#[derive(Debug, Subcommand)]
enum HarvesterCommand {
    /// Create a capture task for a URL and print its task ID.
    Create {
        /// Page to capture.
        url: String,
        /// Egress region code, e.g. US, USA, DE, SGP.
        #[arg(long, default_value = "US")]
        region: ProxyRegion,
        /// Do not request a screenshot.
        #[arg(long)]
        no_image: bool,
        /// Do not request an MHTML archive.
        #[arg(long)]
        no_html: bool,
    },

    /// List capture tasks as JSON.
    Tasks {
        /// Only finished (true) or unfinished (false) tasks.
        #[arg(long)]
        finished: Option<bool>,
    },

    /// Delete a capture task by ID.
    DeleteTask {
        /// Task identifier.
        task_id: String,
    },

    /// Download a stored file by ID.
    Download {
        /// File identifier in permanent storage.
        file_id: String,
        /// Destination path.
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Delete a stored file by ID.
    DeleteFile {
        /// File identifier in permanent storage.
        file_id: String,
    },

    /// Extract the screenshot from a capture archive.
    ExtractImage {
        /// Capture archive (ZIP).
        archive: PathBuf,
        /// Destination path for the PNG.
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Extract the captured page HTML from a capture archive.
    ExtractHtml {
        /// Capture archive (ZIP).
        archive: PathBuf,
        /// Destination path; prints to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration; archive commands run without it
    let settings = Settings::new();

    // 2. Initialize logging
    telemetry::init_telemetry(logging_settings(&settings).json);
    if let Err(e) = &settings {
        debug!("Configuration unavailable, using default logging: {}", e);
    }

    match cli.command {
        HarvesterCommand::ExtractImage { archive, output } => {
            let bytes = tokio::fs::read(&archive)
                .await
                .with_context(|| format!("failed to read {}", archive.display()))?;
            match extract_image(&bytes)? {
                Some(image) => {
                    tokio::fs::write(&output, image).await?;
                    info!("Screenshot written to {}", output.display());
                }
                None => anyhow::bail!("no screenshot in {}", archive.display()),
            }
        }
        HarvesterCommand::ExtractHtml { archive, output } => {
            let bytes = tokio::fs::read(&archive)
                .await
                .with_context(|| format!("failed to read {}", archive.display()))?;
            let html = extract_html(&bytes)
                .with_context(|| format!("no matching HTML document in {}", archive.display()))?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, html).await?;
                    info!("HTML written to {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        HarvesterCommand::Create {
            url,
            region,
            no_image,
            no_html,
        } => {
            let request = CaptureRequest::new(url, region)
                .with_image(!no_image)
                .with_html(!no_html);
            println!("{}", client(&settings)?.create_capture_task(&request).await?);
        }
        HarvesterCommand::Tasks { finished } => {
            let tasks = client(&settings)?.list_tasks(finished).await?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        HarvesterCommand::DeleteTask { task_id } => {
            println!("{}", client(&settings)?.delete_task(&task_id).await?);
        }
        HarvesterCommand::Download { file_id, output } => {
            let content = client(&settings)?.download_file(&file_id).await?;
            tokio::fs::write(&output, &content).await?;
            info!("File {} written to {}", file_id, output.display());
        }
        HarvesterCommand::DeleteFile { file_id } => {
            println!("{}", client(&settings)?.delete_file(&file_id).await?);
        }
    }

    Ok(())
}

/// 日志配置，配置加载失败时使用默认值
fn logging_settings(settings: &Result<Settings, ConfigError>) -> LoggingSettings {
    settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default()
}

/// 根据配置创建客户端，只有访问远端服务的命令需要
fn client(settings: &Result<Settings, ConfigError>) -> anyhow::Result<HarvesterClient> {
    let settings = settings
        .as_ref()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;
    HarvesterClient::from_settings(&settings.harvester).context("invalid harvester settings")
}
