
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use test_utils::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("e2e_tests=debug,info")
        .init();

    let server_url =
        std::env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    // Daily log inspection assumes the server runs on this machine with its
    // default log directory; override with LOG_DIR when it does not.
    let log_dir = PathBuf::from(std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()));

    println!("Server URL: {}", server_url);

    let client = reqwest::Client::new();
    wait_for_server(&client, &server_url).await?;

    println!("\n📤 Testing upload...");
    upload_file(&client, &server_url, "e2e-track.mp3", b"ID3 e2e payload").await?;
    let files = fetch_files(&client, &server_url).await?;
    if !files.iter().any(|f| f.name == "e2e-track.mp3") {
        anyhow::bail!("Uploaded file missing from listing: {:?}", files);
    }
    println!("✅ Upload visible in listing");

    println!("\n📂 Testing listing order...");
    upload_file(&client, &server_url, "e2e-b.mp3", b"b").await?;
    upload_file(&client, &server_url, "e2e-a.mp3", b"a").await?;
    let files = fetch_files(&client, &server_url).await?;
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    if names != sorted {
        anyhow::bail!("Listing not sorted by name: {:?}", names);
    }
    let pos_a = names
        .iter()
        .position(|n| *n == "e2e-a.mp3")
        .context("e2e-a.mp3 missing from listing")?;
    let pos_b = names
        .iter()
        .position(|n| *n == "e2e-b.mp3")
        .context("e2e-b.mp3 missing from listing")?;
    if pos_a >= pos_b {
        anyhow::bail!("e2e-a.mp3 should list before e2e-b.mp3: {:?}", names);
    }
    println!("✅ Listing sorted by name");

    println!("\n🚫 Testing rejected uploads...");
    upload_expecting_rejection(&client, &server_url, missing_file_form(), "No file provided")
        .await?;
    upload_expecting_rejection(
        &client,
        &server_url,
        rejected_file_form("e2e-notes.txt", b"plain text"),
        "File type not allowed: e2e-notes.txt",
    )
    .await?;
    let files = fetch_files(&client, &server_url).await?;
    if files.iter().any(|f| f.name == "e2e-notes.txt") {
        anyhow::bail!("Rejected file appeared in listing");
    }
    println!("✅ Rejections leave no file behind");

    println!("\n♻️  Testing overwrite...");
    upload_file(&client, &server_url, "e2e-track.mp3", b"second version").await?;
    let files = fetch_files(&client, &server_url).await?;
    let count = files.iter().filter(|f| f.name == "e2e-track.mp3").count();
    if count != 1 {
        anyhow::bail!("Expected one listing entry after re-upload, got {}", count);
    }
    println!("✅ Re-upload keeps a single listing entry");

    println!("\n🪵 Validating daily log...");
    validate_daily_log(&log_dir)?;

    println!("\n✅ All E2E tests passed!");

    Ok(())
}

fn validate_daily_log(log_dir: &Path) -> Result<()> {
    let log_path = log_dir.join(format!("{}.log", Local::now().format("%d%m%Y")));
    if !log_path.exists() {
        println!(
            "⚠️  Daily log not found at {:?} (server on another machine?), skipping",
            log_path
        );
        return Ok(());
    }

    let content = std::fs::read_to_string(&log_path)
        .with_context(|| format!("Failed to read daily log: {:?}", log_path))?;

    if !content
        .lines()
        .any(|line| line.contains("Request POST /upload from"))
    {
        anyhow::bail!("Daily log has no request line for POST /upload");
    }
    if !content
        .lines()
        .any(|line| line.ends_with("\"e2e-track.mp3\" uploaded!"))
    {
        anyhow::bail!("Daily log has no upload line for e2e-track.mp3");
    }
    if content
        .lines()
        .any(|line| line.contains("\"e2e-notes.txt\" uploaded!"))
    {
        anyhow::bail!("Daily log has an upload line for a rejected file");
    }

    println!("✅ Daily log contains the documented lines");
    Ok(())
}
