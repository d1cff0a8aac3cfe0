/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::PathBuf;
use std::process::ExitCode;

use aws_s3_bucket_tour::tour::{self, TourSettings};
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "tour")]
#[command(
    about = "Creates two buckets, moves a few small files through them and deletes everything again."
)]
pub struct Args {
    /// Named profile from the shared config/credentials files
    #[arg(long)]
    profile: Option<String>,

    /// Region to create the buckets in, overrides the profile/environment
    #[arg(long)]
    region: Option<String>,

    /// Custom endpoint, e.g. a local S3 compatible server
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    force_path_style: bool,

    /// Name prefix of the first bucket
    #[arg(long, default_value = "first-tour-bucket-")]
    first_bucket_prefix: String,

    /// Name prefix of the second bucket
    #[arg(long, default_value = "second-tour-bucket-")]
    second_bucket_prefix: String,

    /// Directory to write the local files to
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,

    /// Directory to download objects to [default: system temp dir]
    #[arg(long)]
    download_dir: Option<PathBuf>,
}

async fn do_tour(args: Args) -> Result<(), aws_s3_bucket_tour::error::Error> {
    let mut loader = aws_s3_bucket_tour::from_env().force_path_style(args.force_path_style);
    if let Some(profile) = args.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = args.region {
        loader = loader.region(aws_types::region::Region::new(region));
    }
    if let Some(endpoint_url) = args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let config = loader.load().await?;
    let client = aws_s3_bucket_tour::Client::new(config);

    let mut settings = TourSettings {
        first_bucket_prefix: args.first_bucket_prefix,
        second_bucket_prefix: args.second_bucket_prefix,
        work_dir: args.work_dir,
        ..Default::default()
    };
    if let Some(download_dir) = args.download_dir {
        settings.download_dir = download_dir;
    }

    let report = tour::run(&client, &settings).await?;
    tracing::info!(
        "tour complete: {} and {} removed, {} local files written",
        report.first_bucket(),
        report.second_bucket(),
        report.files().len()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match do_tour(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("tour failed: {}", DisplayErrorContext(&err));
            ExitCode::FAILURE
        }
    }
}
