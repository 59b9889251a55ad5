use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use youtube_watchtime_rs::{Locale, WatchTimeClient};

/// A basic example showing how to total the watch time of a playlist
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Step 1: Enable logging so the per-page scan progress is visible
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Step 2: Take the playlist reference from the command line
    // Any pasted YouTube URL with a list parameter works, as does a bare ID
    let input = std::env::args()
        .nth(1)
        .expect("Please provide a playlist URL or ID");

    // Step 3: Create the client from the YOUTUBE_API_KEY environment
    // variable (a .env file next to the binary works too)
    let client = WatchTimeClient::from_env()?;

    // Step 4: Scan the playlist and total the durations
    let result = client.aggregate_playlist_url(&input).await?;

    println!("Videos counted: {}", result.video_count());
    if result.unavailable_count > 0 {
        println!("Unavailable entries skipped: {}", result.unavailable_count);
    }
    println!("Total watch time: {}", result.total_clock());

    // Step 5: Show the first few videos that went into the total
    for video in result.videos.iter().take(5) {
        println!(
            "  {}  {}  ({})",
            video.duration_formatted, video.title, video.channel_title
        );
    }
    if result.video_count() > 5 {
        println!("  ... and {} more", result.video_count() - 5);
    }

    // Step 6: Project the total onto the common playback speeds
    println!("\nAt higher speeds:");
    for row in result.speed_projections(Locale::En) {
        println!("  {:>5}  {}", row.label, row.formatted);
    }

    // Step 7: Print the shareable three-line report for a chosen speed
    println!("\n{}", result.summary(Locale::En, 1.5));

    Ok(())
}
