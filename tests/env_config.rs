// Kept in its own test binary: it sets process-wide environment variables
// that the CLI reads.
use anyhow::Result;
use video_link_embedder::cli::Cli;
use video_link_embedder::config::{Config, PlayerDimensions, HEIGHT_ENV, WIDTH_ENV};

#[tokio::test]
async fn test_env_between_file_and_flags() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("embedder.toml");
    std::fs::write(&config, "[player]\nwidth = 800\nheight = 450\n")?;

    std::env::set_var(WIDTH_ENV, "700");
    std::env::set_var(HEIGHT_ENV, "400");

    // Environment beats the file
    let dims = Config::load(Some(&config))?.with_env().dimensions();
    assert_eq!(dims, PlayerDimensions::new(700, 400));

    // Flags beat the environment
    let input = dir.path().join("page.html");
    let output = dir.path().join("out.html");
    std::fs::write(&input, "vimeo.com/42")?;
    let cli = Cli {
        input: Some(input),
        output: Some(output.clone()),
        config: Some(config),
        width: Some("1024".to_string()),
        action: "show".to_string(),
        ..Default::default()
    };
    cli.run().await?;

    std::env::remove_var(WIDTH_ENV);
    std::env::remove_var(HEIGHT_ENV);

    let result = std::fs::read_to_string(&output)?;
    assert!(result.contains(r#"<object width="1024" height="400">"#));
    Ok(())
}
