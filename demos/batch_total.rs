use std::error::Error;
use std::io::Read;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use youtube_watchtime_rs::{Locale, WatchTimeClient};

/// A basic example showing how to total a pasted batch of video and
/// playlist links, one per line, read from standard input
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Step 1: Enable logging
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Step 2: Read the batch from stdin
    // Try: printf 'dQw4w9WgXcQ\nhttps://youtu.be/9bZkp7q19f0\n' | cargo run --example batch_total
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    // Step 3: Create the client and run the batch
    // Lines can mix watch URLs, short links, bare IDs, and playlist links;
    // playlist members are merged in after the explicit videos
    let client = WatchTimeClient::from_env()?;
    let batch = client.aggregate_batch(&input).await?;

    // Step 4: Surface the lines that matched nothing
    for line in &batch.invalid_lines {
        println!("Ignored: {}", line);
    }

    // Step 5: Print the totals
    let result = &batch.result;
    println!("Videos counted: {}", result.video_count());
    println!("Total watch time: {}", result.total_clock());
    println!("At 2x: {}", youtube_watchtime_rs::format_clock(result.seconds_at(2.0)));

    // Step 6: The same report, localized
    println!("\n{}", result.summary(Locale::Ko, 2.0));

    Ok(())
}
