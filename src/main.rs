use std::env;
use vistagen::{
    Config, FlowState, GenerationClient, GenerationFlow, PromptChoice, StoreManager, VisualStyle,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    vistagen::logger::init_with_config(
        vistagen::logger::LoggerConfig::development()
            .with_level(vistagen::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking environment...");

    match env::var("VISTAGEN_API_URL") {
        Ok(url) => log::info!("✅ Image API endpoint: {}", url),
        Err(_) => {
            log::error!("❌ VISTAGEN_API_URL is not set, nothing to talk to");
            return Err("VISTAGEN_API_URL is required".into());
        }
    }
    if env::var("VISTAGEN_API_KEY").is_ok() {
        log::info!("✅ API key found in environment");
    } else {
        log::warn!("⚠️  No API key set, requests go out unauthenticated");
    }

    let config = Config::from_env();

    log::info!("🔄 Creating generation client...");
    let client = match GenerationClient::new(config.api.clone().unwrap_or_default()) {
        Ok(client) => {
            log::info!("✅ Generation client initialized");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize client: {}", e);
            return Err(e.into());
        }
    };

    let store = StoreManager::new(&config)?;
    let mut flow = GenerationFlow::new(client, store);

    log::info!("🎨 Available visual styles:");
    for style in VisualStyle::ALL {
        log::info!("  {}", style);
    }

    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "a robot tending a rooftop garden at sunset".to_string());

    flow.form_mut().style = VisualStyle::Anime;
    flow.form_mut().set_variant_count(2);
    flow.form_mut().set_scene(0, prompt.as_str())?;

    flow.submit()?;
    if let FlowState::AwaitingApproval {
        original,
        optimized,
    } = flow.state()
    {
        log::info!("📝 Original prompt:  {}", original);
        log::info!("✨ Optimized prompt: {}", optimized);
    }

    log::info!("🔄 Generating with the optimized prompt...");
    match flow.approve(PromptChoice::Optimized).await {
        Ok(Some(result)) => {
            log::info!(
                "✅ Generated {} of {} variant(s)",
                result.succeeded,
                result.requested
            );
            if result.is_partial() {
                log::warn!("⚠️  Some variants failed, showing what succeeded");
            }
            for image in &result.images {
                log::info!("🖼️  {} ({} chars)", image.id, image.url.len());
            }
        }
        Ok(None) => log::warn!("⚠️  Nothing was pending approval"),
        Err(e) => log::error!("❌ Generation failed: {}", e),
    }

    let history = flow.store().history().await?;
    log::info!("📚 History now holds {} record(s)", history.len());

    Ok(())
}
