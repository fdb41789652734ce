use anyhow::Context;
use clap::Parser;
use intervals_icu_csv::{Config, ReqwestTransport};
use intervals_icu_fetch::{Args, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // A missing .env is fine; the environment may already carry the settings.
    dotenvy::dotenv().ok();
    intervals_icu_fetch::init_tracing();

    let config = Config::from_env();
    let transport = ReqwestTransport::new().context("building HTTP client")?;
    let summary = run(&args, config, transport).await?;

    for (report, path) in &summary.files {
        tracing::debug!("{report}: {}", path.display());
    }
    println!("Done: reports written to {}", args.out_dir.display());
    Ok(())
}
