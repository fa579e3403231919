use vistagen::{
    ApiConfig, AspectRatio, BatchRequest, GenerationClient, GenerationMode, VisualStyle,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    vistagen::logger::init()?;

    let config = ApiConfig::from_env();
    let client = GenerationClient::new(config)?;

    let enhanced = vistagen::optimize(
        "a lighthouse on a stormy coast",
        VisualStyle::Realistic,
        GenerationMode::Quality,
    );
    log::info!("Enhanced prompt: {}", enhanced);

    let request = BatchRequest::new(
        enhanced,
        "a lighthouse on a stormy coast",
        VisualStyle::Realistic,
        2,
        AspectRatio::Horizontal,
    )
    .with_negative_prompt("text, watermark");

    let result = client.generate_batch(&request).await?;
    log::info!(
        "Generated {} of {} variant(s)",
        result.succeeded,
        result.requested
    );
    for image in &result.images {
        println!("{}: {} chars", image.id, image.url.len());
    }

    Ok(())
}
